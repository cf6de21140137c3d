//! Sign In View
//!
//! A single-password form: email plus one secret field with a visibility
//! toggle. Submission is available once both fields are non-empty; Enter in
//! the email field moves focus to the password, Enter in the password field
//! submits when the form is complete.

use iced::widget::{button, column, container, row, scrollable, text, text_input, Space};
use iced::{Alignment, Command, Element, Length};
use tracing::{debug, info};

use passform_shared::FormConfig;

use crate::ui::components::{SecretField, SecretFieldMessage};
use crate::ui::theme::{self, button_styles, utils};

const EMAIL_INPUT_ID: &str = "sign_in_email";

/// Messages for the sign in view
#[derive(Debug, Clone)]
pub enum SignInMessage {
    /// Email input changed
    EmailChanged(String),
    /// Enter pressed in the email field
    EmailSubmitted,
    /// Password field event
    Password(SecretFieldMessage),
    /// Attempt to submit the form
    Submit,
    /// Cancel and return to the previous view
    Cancel,
}

/// State of the sign in form
#[derive(Debug, Clone, PartialEq)]
enum SignInState {
    /// Entering email and password
    Editing,
    /// Form accepted
    Complete,
    /// User backed out
    Cancelled,
}

/// Sign in view component
#[derive(Debug)]
pub struct SignInView {
    state: SignInState,
    config: FormConfig,
    email: String,
    password: SecretField,
    can_submit: bool,
}

impl SignInView {
    /// Create a new sign in view using the given form configuration
    pub fn new(config: FormConfig) -> Self {
        Self {
            state: SignInState::Editing,
            config,
            email: String::new(),
            password: SecretField::new("sign_in_password", "Enter your password"),
            can_submit: false,
        }
    }

    /// Command that focuses the email field when the view is shown
    pub fn focus_first_field() -> Command<SignInMessage> {
        text_input::focus(text_input::Id::new(EMAIL_INPUT_ID))
    }

    /// Update the view with a message
    pub fn update(&mut self, message: SignInMessage) -> Command<SignInMessage> {
        match message {
            SignInMessage::EmailChanged(email) => {
                self.email = email;
                self.update_can_submit();
                Command::none()
            }

            SignInMessage::EmailSubmitted => text_input::focus(self.password.id()),

            // Enter in the password field doubles as the submit action
            SignInMessage::Password(SecretFieldMessage::Submitted) => self.try_submit(),

            SignInMessage::Password(field_message) => {
                self.password.update(field_message);
                self.update_can_submit();
                Command::none()
            }

            SignInMessage::Submit => self.try_submit(),

            SignInMessage::Cancel => {
                debug!("Sign in cancelled");
                self.password.reset();
                self.state = SignInState::Cancelled;
                Command::none()
            }
        }
    }

    /// Render the view
    pub fn view(&self) -> Element<SignInMessage> {
        match self.state {
            SignInState::Complete => self.view_complete(),
            _ => self.view_form(),
        }
    }

    /// Render the input form
    fn view_form(&self) -> Element<SignInMessage> {
        let header = column![
            iced::widget::svg(theme::app_logo())
                .width(Length::Fixed(64.0))
                .height(Length::Fixed(64.0)),
            Space::with_height(Length::Fixed(20.0)),
            text("Sign In")
                .size(28)
                .horizontal_alignment(iced::alignment::Horizontal::Center),
            Space::with_height(Length::Fixed(10.0)),
            text("Enter your email and password to continue.")
                .size(14)
                .horizontal_alignment(iced::alignment::Horizontal::Center),
        ]
        .align_items(Alignment::Center);

        let email_section = column![
            text("Email").size(16),
            Space::with_height(Length::Fixed(8.0)),
            text_input("Enter your email", &self.email)
                .on_input(SignInMessage::EmailChanged)
                .on_submit(SignInMessage::EmailSubmitted)
                .padding(utils::text_input_padding())
                .style(theme::text_input_styles::standard())
                .id(text_input::Id::new(EMAIL_INPUT_ID))
                .width(Length::Fill),
        ]
        .width(Length::Fill);

        let password_section = column![
            text("Password").size(16),
            Space::with_height(Length::Fixed(8.0)),
            self.password
                .view(&self.config.toggle)
                .map(SignInMessage::Password),
        ]
        .width(Length::Fill);

        let submit_button = if self.can_submit {
            button("Sign In")
                .on_press(SignInMessage::Submit)
                .style(button_styles::primary())
                .padding(utils::button_padding())
        } else {
            button("Sign In")
                .style(button_styles::primary())
                .padding(utils::button_padding())
        };

        let cancel_button = button("Back")
            .on_press(SignInMessage::Cancel)
            .style(button_styles::secondary())
            .padding(utils::button_padding());

        let navigation = row![
            cancel_button,
            Space::with_width(Length::Fixed(20.0)),
            submit_button,
        ]
        .align_items(Alignment::Center);

        scrollable(column![
            Space::with_height(Length::Fixed(40.0)),
            container(
                column![
                    header,
                    Space::with_height(Length::Fixed(30.0)),
                    email_section,
                    Space::with_height(Length::Fixed(20.0)),
                    password_section,
                    Space::with_height(Length::Fixed(40.0)),
                    navigation,
                ]
                .align_items(Alignment::Center)
                .max_width(utils::form_width()),
            )
            .width(Length::Fill)
            .center_x(),
            Space::with_height(Length::Fixed(40.0)),
        ])
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    /// Render the completion view
    fn view_complete(&self) -> Element<SignInMessage> {
        container(
            column![
                text("✅").size(48),
                Space::with_height(Length::Fixed(20.0)),
                text("Signed In")
                    .size(24)
                    .horizontal_alignment(iced::alignment::Horizontal::Center),
                Space::with_height(Length::Fixed(10.0)),
                text(format!(
                    "The form for {} was accepted. This demo validates locally and never contacts a server.",
                    self.email
                ))
                .size(14)
                .horizontal_alignment(iced::alignment::Horizontal::Center),
                Space::with_height(Length::Fixed(30.0)),
                button("Back to Start")
                    .on_press(SignInMessage::Cancel)
                    .style(button_styles::primary())
                    .padding(utils::button_padding()),
            ]
            .align_items(Alignment::Center)
            .max_width(utils::form_width()),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .into()
    }

    fn try_submit(&mut self) -> Command<SignInMessage> {
        if !self.can_submit {
            debug!("Sign in submission ignored, form incomplete");
            return Command::none();
        }

        info!("Sign in form accepted for {}", self.email);
        // The password value stays inside the component until the host reads
        // it; this demo only records that the form was accepted.
        self.state = SignInState::Complete;
        Command::none()
    }

    /// Update whether the form can be submitted
    fn update_can_submit(&mut self) {
        self.can_submit = !self.email.is_empty() && !self.password.is_empty();
    }

    /// Check if the form was accepted
    pub fn is_complete(&self) -> bool {
        matches!(self.state, SignInState::Complete)
    }

    /// Check if the user backed out
    pub fn is_cancelled(&self) -> bool {
        matches!(self.state, SignInState::Cancelled)
    }
}
