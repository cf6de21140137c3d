//! Registration View
//!
//! Account creation form: email, a password field, and a confirmation field.
//! The password field reports strength against the configured rule preset and
//! the confirmation field restyles itself as the pair drifts in and out of
//! agreement. Submission follows the configured match policy.

use iced::widget::{
    button, column, container, progress_bar, row, scrollable, text, text_input, Space,
};
use iced::{Alignment, Command, Element, Length};
use tracing::{debug, info};

use passform_shared::{ConfirmMatch, FormConfig, PasswordValidator};

use crate::ui::components::{SecretField, SecretFieldMessage};
use crate::ui::theme::{self, button_styles, progress_bar_styles, utils};

const EMAIL_INPUT_ID: &str = "register_email";

/// Messages for the registration view
#[derive(Debug, Clone)]
pub enum RegisterMessage {
    /// Email input changed
    EmailChanged(String),
    /// Enter pressed in the email field
    EmailSubmitted,
    /// Password field event
    Password(SecretFieldMessage),
    /// Confirmation field event
    Confirm(SecretFieldMessage),
    /// Attempt to submit the form
    Submit,
    /// Cancel and return to the previous view
    Cancel,
}

/// State of the registration form
#[derive(Debug, Clone, PartialEq)]
enum RegisterState {
    /// Entering account details
    Editing,
    /// Form accepted
    Complete,
    /// User backed out
    Cancelled,
}

/// Registration view component
#[derive(Debug)]
pub struct RegisterView {
    state: RegisterState,
    config: FormConfig,
    show_strength_meter: bool,
    email: String,
    password: SecretField,
    confirm: SecretField,
    confirm_match: ConfirmMatch,
    validator: PasswordValidator,
    can_submit: bool,
}

impl RegisterView {
    /// Create a new registration view using the given form configuration
    pub fn new(config: FormConfig, show_strength_meter: bool) -> Self {
        let validator = PasswordValidator::new(config.rules.rules());
        Self {
            state: RegisterState::Editing,
            config,
            show_strength_meter,
            email: String::new(),
            password: SecretField::new("register_password", "Choose a password"),
            confirm: SecretField::new("register_confirm", "Repeat your password"),
            confirm_match: ConfirmMatch::new(),
            validator,
            can_submit: false,
        }
    }

    /// Command that focuses the email field when the view is shown
    pub fn focus_first_field() -> Command<RegisterMessage> {
        text_input::focus(text_input::Id::new(EMAIL_INPUT_ID))
    }

    /// Update the view with a message
    pub fn update(&mut self, message: RegisterMessage) -> Command<RegisterMessage> {
        match message {
            RegisterMessage::EmailChanged(email) => {
                self.email = email;
                self.update_can_submit();
                Command::none()
            }

            RegisterMessage::EmailSubmitted => text_input::focus(self.password.id()),

            // Enter walks from the password into the confirmation field
            RegisterMessage::Password(SecretFieldMessage::Submitted) => {
                text_input::focus(self.confirm.id())
            }

            RegisterMessage::Password(field_message) => {
                self.password.update(field_message);
                self.confirm_match
                    .set_primary(self.password.value().to_string());
                self.update_can_submit();
                Command::none()
            }

            // Enter in the confirmation field doubles as the submit action
            RegisterMessage::Confirm(SecretFieldMessage::Submitted) => self.try_submit(),

            RegisterMessage::Confirm(field_message) => {
                self.confirm.update(field_message);
                self.confirm_match
                    .set_confirmation(self.confirm.value().to_string());
                self.update_can_submit();
                Command::none()
            }

            RegisterMessage::Submit => self.try_submit(),

            RegisterMessage::Cancel => {
                debug!("Registration cancelled");
                self.password.reset();
                self.confirm.reset();
                self.confirm_match.reset();
                self.state = RegisterState::Cancelled;
                Command::none()
            }
        }
    }

    /// Render the view
    pub fn view(&self) -> Element<RegisterMessage> {
        match self.state {
            RegisterState::Complete => self.view_complete(),
            _ => self.view_form(),
        }
    }

    /// Render the input form
    fn view_form(&self) -> Element<RegisterMessage> {
        let strength = self.validator.validate(self.password.value());

        let header = column![
            iced::widget::svg(theme::app_logo())
                .width(Length::Fixed(64.0))
                .height(Length::Fixed(64.0)),
            Space::with_height(Length::Fixed(20.0)),
            text("Create Account")
                .size(28)
                .horizontal_alignment(iced::alignment::Horizontal::Center),
            Space::with_height(Length::Fixed(10.0)),
            text("Pick a password and confirm it to register.")
                .size(14)
                .horizontal_alignment(iced::alignment::Horizontal::Center),
        ]
        .align_items(Alignment::Center);

        let email_section = column![
            text("Email").size(16),
            Space::with_height(Length::Fixed(8.0)),
            text_input("Enter your email", &self.email)
                .on_input(RegisterMessage::EmailChanged)
                .on_submit(RegisterMessage::EmailSubmitted)
                .padding(utils::text_input_padding())
                .style(theme::text_input_styles::standard())
                .id(text_input::Id::new(EMAIL_INPUT_ID))
                .width(Length::Fill),
        ]
        .width(Length::Fill);

        let strength_meter: Element<RegisterMessage> = if self.show_strength_meter {
            column![
                Space::with_height(Length::Fixed(8.0)),
                progress_bar(0.0..=100.0, f32::from(strength.score))
                    .height(Length::Fixed(8.0))
                    .style(progress_bar_styles::strength(strength.level)),
                Space::with_height(Length::Fixed(5.0)),
                text(format!("Strength: {}", strength.level.as_str()))
                    .size(12)
                    .style(iced::theme::Text::Color(theme::strength_color(
                        strength.level,
                    ))),
            ]
            .width(Length::Fill)
            .into()
        } else {
            column![].into()
        };

        let requirements: Element<RegisterMessage> = if self.password.is_empty() {
            // Preview the outstanding requirements before typing starts
            column(
                strength
                    .violations
                    .iter()
                    .map(|requirement| {
                        row![
                            text("•").style(iced::theme::Text::Color(theme::LIGHT_GRAY_TEXT)),
                            Space::with_width(Length::Fixed(5.0)),
                            text(requirement)
                                .size(11)
                                .style(iced::theme::Text::Color(theme::LIGHT_GRAY_TEXT)),
                        ]
                        .into()
                    })
                    .collect::<Vec<Element<RegisterMessage>>>(),
            )
            .spacing(3)
            .into()
        } else {
            column![
                if !strength.violations.is_empty() {
                    column(
                        strength
                            .violations
                            .iter()
                            .map(|violation| {
                                row![
                                    text("✗")
                                        .style(iced::theme::Text::Color(theme::MISMATCH_RED)),
                                    Space::with_width(Length::Fixed(5.0)),
                                    text(violation)
                                        .size(11)
                                        .style(iced::theme::Text::Color(theme::MISMATCH_RED)),
                                ]
                                .into()
                            })
                            .collect::<Vec<Element<RegisterMessage>>>(),
                    )
                    .spacing(3)
                } else {
                    column![]
                },
                if !strength.satisfied.is_empty() {
                    column(
                        strength
                            .satisfied
                            .iter()
                            .map(|satisfied| {
                                row![
                                    text("✓").style(iced::theme::Text::Color(theme::MATCH_GREEN)),
                                    Space::with_width(Length::Fixed(5.0)),
                                    text(satisfied)
                                        .size(11)
                                        .style(iced::theme::Text::Color(theme::MATCH_GREEN)),
                                ]
                                .into()
                            })
                            .collect::<Vec<Element<RegisterMessage>>>(),
                    )
                    .spacing(3)
                } else {
                    column![]
                },
            ]
            .spacing(8)
            .into()
        };

        let password_section = column![
            text("Password").size(16),
            Space::with_height(Length::Fixed(8.0)),
            self.password
                .view(&self.config.toggle)
                .map(RegisterMessage::Password),
            strength_meter,
            Space::with_height(Length::Fixed(10.0)),
            text("Password must include:")
                .size(12)
                .style(iced::theme::Text::Color(theme::MEDIUM_GRAY)),
            Space::with_height(Length::Fixed(5.0)),
            requirements,
        ]
        .width(Length::Fill);

        let confirm_section = column![
            text("Confirm Password").size(16),
            Space::with_height(Length::Fixed(8.0)),
            self.confirm
                .view_styled(
                    &self.config.toggle,
                    theme::text_input_styles::for_match_state(self.confirm_match.state()),
                )
                .map(RegisterMessage::Confirm),
            Space::with_height(Length::Fixed(5.0)),
            if let Some(help) = self.confirm_match.help_line(&self.config.confirm) {
                text(help)
                    .size(12)
                    .style(iced::theme::Text::Color(theme::MISMATCH_RED))
            } else {
                text("")
            },
        ]
        .width(Length::Fill);

        let submit_button = if self.can_submit {
            button("Create Account")
                .on_press(RegisterMessage::Submit)
                .style(button_styles::primary())
                .padding(utils::button_padding())
        } else {
            button("Create Account")
                .style(button_styles::primary())
                .padding(utils::button_padding())
        };

        let cancel_button = button("Back")
            .on_press(RegisterMessage::Cancel)
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
                    Space::with_height(Length::Fixed(20.0)),
                    confirm_section,
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
    fn view_complete(&self) -> Element<RegisterMessage> {
        container(
            column![
                text("✅").size(48),
                Space::with_height(Length::Fixed(20.0)),
                text("Account Created")
                    .size(24)
                    .horizontal_alignment(iced::alignment::Horizontal::Center),
                Space::with_height(Length::Fixed(10.0)),
                text(format!(
                    "The registration form for {} was accepted. Nothing was stored or transmitted.",
                    self.email
                ))
                .size(14)
                .horizontal_alignment(iced::alignment::Horizontal::Center),
                Space::with_height(Length::Fixed(30.0)),
                button("Back to Start")
                    .on_press(RegisterMessage::Cancel)
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

    fn try_submit(&mut self) -> Command<RegisterMessage> {
        if !self.can_submit {
            debug!("Registration submission ignored, match policy not satisfied");
            return Command::none();
        }

        info!("Registration form accepted for {}", self.email);
        self.state = RegisterState::Complete;
        Command::none()
    }

    /// Update whether the form can be submitted under the configured policy
    fn update_can_submit(&mut self) {
        let form_valid =
            !self.email.is_empty() && self.validator.meets_rules(self.password.value());
        self.can_submit = self
            .confirm_match
            .submit_enabled(&self.config.confirm, form_valid);
    }

    /// Check if the form was accepted
    pub fn is_complete(&self) -> bool {
        matches!(self.state, RegisterState::Complete)
    }

    /// Check if the user backed out
    pub fn is_cancelled(&self) -> bool {
        matches!(self.state, RegisterState::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use passform_shared::MatchState;

    fn fill(view: &mut RegisterView, email: &str, password: &str, confirmation: &str) {
        let _ = view.update(RegisterMessage::EmailChanged(email.to_string()));
        let _ = view.update(RegisterMessage::Password(SecretFieldMessage::ValueChanged(
            password.to_string(),
        )));
        let _ = view.update(RegisterMessage::Confirm(SecretFieldMessage::ValueChanged(
            confirmation.to_string(),
        )));
    }

    #[test]
    fn test_matching_pair_submits_under_default_policy() {
        // The default policy only requires the confirmation to match, so a
        // password that fails the strength rules still goes through.
        let mut view = RegisterView::new(FormConfig::default(), true);
        fill(&mut view, "user@example.com", "weakmatch", "weakmatch");

        let _ = view.update(RegisterMessage::Submit);
        assert!(view.is_complete());
    }

    #[test]
    fn test_strict_policy_blocks_weak_passwords() {
        let mut config = FormConfig::default();
        config.confirm.requires_form_validity = true;

        let mut view = RegisterView::new(config, true);
        fill(&mut view, "user@example.com", "weakmatch", "weakmatch");

        let _ = view.update(RegisterMessage::Submit);
        assert!(!view.is_complete());

        fill(
            &mut view,
            "user@example.com",
            "Str0ng!Passw0rd",
            "Str0ng!Passw0rd",
        );
        let _ = view.update(RegisterMessage::Submit);
        assert!(view.is_complete());
    }

    #[test]
    fn test_mismatch_blocks_submission_under_any_policy() {
        let mut view = RegisterView::new(FormConfig::default(), true);
        fill(
            &mut view,
            "user@example.com",
            "Str0ng!Passw0rd",
            "Str0ng!Passw0rd!",
        );

        let _ = view.update(RegisterMessage::Submit);
        assert!(!view.is_complete());
        assert_eq!(view.confirm_match.state(), MatchState::Mismatch);
    }

    #[test]
    fn test_editing_the_password_reopens_the_match() {
        let mut view = RegisterView::new(FormConfig::default(), true);
        fill(&mut view, "user@example.com", "abcabcabc", "abcabcabc");
        assert_eq!(view.confirm_match.state(), MatchState::Valid);

        let _ = view.update(RegisterMessage::Password(SecretFieldMessage::ValueChanged(
            "abcabcabcd".to_string(),
        )));
        assert_eq!(view.confirm_match.state(), MatchState::Mismatch);

        let _ = view.update(RegisterMessage::Submit);
        assert!(!view.is_complete());
    }

    #[test]
    fn test_enter_in_confirmation_submits_when_allowed() {
        let mut view = RegisterView::new(FormConfig::default(), true);
        fill(&mut view, "user@example.com", "abcabcabc", "abcabcabc");

        let _ = view.update(RegisterMessage::Confirm(SecretFieldMessage::Submitted));
        assert!(view.is_complete());
    }

    #[test]
    fn test_cancel_clears_both_secrets() {
        let mut view = RegisterView::new(FormConfig::default(), true);
        fill(&mut view, "user@example.com", "abcabcabc", "abcabcabc");

        let _ = view.update(RegisterMessage::Cancel);
        assert!(view.is_cancelled());
        assert!(view.password.is_empty());
        assert!(view.confirm.is_empty());
        assert_eq!(view.confirm_match.state(), MatchState::Neutral);
    }
}
