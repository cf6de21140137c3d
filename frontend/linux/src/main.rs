//! Passform Linux Frontend
//!
//! This is the Linux desktop demo for the Passform form components, built
//! with the Iced GUI framework. It hosts a sign in form, a registration form
//! with confirmation matching and strength feedback, and a preferences screen
//! that drives the component configuration.

use anyhow::Context;
use clap::Parser;
use iced::{widget::svg, Application, Command, Element, Settings, Theme};
use std::path::PathBuf;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod ui;

use passform_shared::config::paths::expand_home_path;
use passform_shared::PrefsManager;

use ui::theme::alerts::AlertMessage;
use ui::{theme, utils};

use ui::views::{
    RegisterMessage, RegisterView, SettingsMessage, SettingsView, SignInMessage, SignInView,
};

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "passform", version, about = "Password form components demo")]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to an alternate preferences file
    #[arg(long, value_name = "PATH")]
    config: Option<String>,
}

/// Main application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    ShowSignIn,
    ShowRegister,
    ShowSettings,
    ReturnToWelcome,

    // View messages
    SignIn(SignInMessage),
    Register(RegisterMessage),
    Settings(SettingsMessage),

    // Alert management
    DismissAlert,
}

/// Application state
#[derive(Debug)]
pub enum AppState {
    Welcome,
    SignInActive(SignInView),
    RegisterActive(RegisterView),
    SettingsActive(SettingsView),
}

/// State assembled in `main` before iced takes over
#[derive(Debug)]
pub struct AppFlags {
    prefs_manager: PrefsManager,
    startup_alert: Option<AlertMessage>,
}

/// Main application structure
pub struct PassformApp {
    state: AppState,
    prefs_manager: PrefsManager,
    theme: Theme,
    current_alert: Option<AlertMessage>,
}

impl Application for PassformApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = AppFlags;

    fn new(flags: AppFlags) -> (Self, Command<Message>) {
        info!("Initializing Passform Linux frontend");

        let app = Self {
            state: AppState::Welcome,
            prefs_manager: flags.prefs_manager,
            theme: theme::app_theme(),
            current_alert: flags.startup_alert,
        };

        (app, Command::none())
    }

    fn title(&self) -> String {
        match &self.state {
            AppState::Welcome => "Passform".to_string(),
            AppState::SignInActive(_) => "Passform - Sign In".to_string(),
            AppState::RegisterActive(_) => "Passform - Create Account".to_string(),
            AppState::SettingsActive(_) => "Passform - Preferences".to_string(),
        }
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::ShowSignIn => {
                debug!("Opening the sign in form");
                let view = SignInView::new(self.prefs_manager.prefs().form.clone());
                self.state = AppState::SignInActive(view);
                SignInView::focus_first_field().map(Message::SignIn)
            }

            Message::ShowRegister => {
                debug!("Opening the registration form");
                let prefs = self.prefs_manager.prefs();
                let view = RegisterView::new(prefs.form.clone(), prefs.ui.show_strength_meter);
                self.state = AppState::RegisterActive(view);
                RegisterView::focus_first_field().map(Message::Register)
            }

            Message::ShowSettings => {
                debug!("Opening preferences");
                let view = SettingsView::new(self.prefs_manager.prefs());
                self.state = AppState::SettingsActive(view);
                Command::none()
            }

            Message::ReturnToWelcome => {
                self.state = AppState::Welcome;
                Command::none()
            }

            Message::SignIn(sign_in_msg) => {
                if let AppState::SignInActive(view) = &mut self.state {
                    let command = view.update(sign_in_msg).map(Message::SignIn);

                    if view.is_cancelled() {
                        return Command::perform(async {}, |_| Message::ReturnToWelcome);
                    }

                    return command;
                }
                Command::none()
            }

            Message::Register(register_msg) => {
                if let AppState::RegisterActive(view) = &mut self.state {
                    let command = view.update(register_msg).map(Message::Register);

                    if view.is_cancelled() {
                        return Command::perform(async {}, |_| Message::ReturnToWelcome);
                    }

                    return command;
                }
                Command::none()
            }

            Message::Settings(SettingsMessage::Save) => {
                if let AppState::SettingsActive(view) = &self.state {
                    view.apply_to(self.prefs_manager.prefs_mut());
                    match self
                        .prefs_manager
                        .save()
                        .context("Failed to save preferences")
                    {
                        Ok(()) => {
                            self.current_alert = Some(AlertMessage::success("Preferences saved."));
                        }
                        Err(e) => {
                            error!("{e:#}");
                            self.current_alert = Some(AlertMessage::error(format!("{e:#}")));
                        }
                    }
                }
                Command::none()
            }

            Message::Settings(SettingsMessage::Back) => {
                debug!("Leaving preferences without saving");
                self.state = AppState::Welcome;
                Command::none()
            }

            Message::Settings(settings_msg) => {
                if let AppState::SettingsActive(view) = &mut self.state {
                    return view.update(settings_msg).map(Message::Settings);
                }
                Command::none()
            }

            Message::DismissAlert => {
                self.current_alert = None;
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<Message> {
        let main_content = match &self.state {
            AppState::Welcome => self.view_welcome(),
            AppState::SignInActive(view) => view.view().map(Message::SignIn),
            AppState::RegisterActive(view) => view.view().map(Message::Register),
            AppState::SettingsActive(view) => view.view().map(Message::Settings),
        };

        self.wrap_with_alert(main_content)
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }
}

impl PassformApp {
    /// Wraps any view content with alert display if an alert is present
    fn wrap_with_alert<'a>(&'a self, content: Element<'a, Message>) -> Element<'a, Message> {
        use iced::widget::{column, Space};
        use iced::Length;
        use ui::theme::alerts;

        if let Some(alert) = &self.current_alert {
            column![
                alerts::render_alert(alert, Message::DismissAlert),
                Space::with_height(Length::Fixed(10.0)),
                content,
            ]
            .into()
        } else {
            content
        }
    }

    /// View welcome screen
    fn view_welcome(&self) -> Element<Message> {
        use iced::widget::{button, column, container, text, Space};
        use iced::{Alignment, Length};

        container(
            column![
                Space::with_height(Length::Fill),
                svg(theme::app_logo())
                    .width(iced::Length::Fixed(80.0))
                    .height(iced::Length::Fixed(80.0)),
                Space::with_height(Length::Fixed(20.0)),
                text("Welcome to Passform")
                    .size(32)
                    .horizontal_alignment(iced::alignment::Horizontal::Center),
                Space::with_height(Length::Fixed(10.0)),
                text("Password fields with visibility toggling, confirmation matching, and strength feedback.")
                    .size(16)
                    .horizontal_alignment(iced::alignment::Horizontal::Center),
                Space::with_height(Length::Fixed(40.0)),
                column![
                    button("Sign In")
                        .on_press(Message::ShowSignIn)
                        .style(ui::button_styles::primary())
                        .padding([15, 30]),
                    button("Create Account")
                        .on_press(Message::ShowRegister)
                        .style(ui::button_styles::primary())
                        .padding([15, 30]),
                    button("Preferences")
                        .on_press(Message::ShowSettings)
                        .style(ui::button_styles::secondary())
                        .padding([10, 20]),
                ]
                .spacing(utils::standard_spacing())
                .align_items(Alignment::Center),
                Space::with_height(Length::Fill),
            ]
            .align_items(Alignment::Center)
            .max_width(500),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .into()
    }
}

/// Build the preferences manager from the command line, falling back to the
/// platform default location
fn resolve_prefs_manager(config_override: Option<&str>) -> anyhow::Result<PrefsManager> {
    match config_override {
        Some(raw) => {
            let path = expand_home_path(raw).context("Invalid --config path")?;
            Ok(PrefsManager::with_path(path))
        }
        None => PrefsManager::new().context("Could not determine the preferences location"),
    }
}

fn main() -> iced::Result {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        tracing_subscriber::filter::LevelFilter::DEBUG
    } else {
        tracing_subscriber::filter::LevelFilter::INFO
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_level(true),
        )
        .with(log_level)
        .init();

    info!("Starting Passform Linux frontend");

    let mut startup_alert = None;

    let mut prefs_manager = match resolve_prefs_manager(args.config.as_deref()) {
        Ok(manager) => manager,
        Err(e) => {
            warn!("{e:#}");
            startup_alert = Some(AlertMessage::warning(format!("{e:#}.")));
            PrefsManager::with_path(PathBuf::from("passform-preferences.toml"))
        }
    };

    if let Err(e) = prefs_manager.load() {
        warn!("Failed to load preferences: {}", e);
        startup_alert = Some(AlertMessage::warning(format!(
            "Could not load preferences ({e}). Defaults are in use."
        )));
        prefs_manager.reset_to_defaults();
    }

    // Window size follows the saved display preferences when present
    let window_size = {
        let ui_prefs = &prefs_manager.prefs().ui;
        iced::Size::new(
            ui_prefs.window_width.unwrap_or(1000.0),
            ui_prefs.window_height.unwrap_or(700.0),
        )
    };

    let mut settings = Settings::with_flags(AppFlags {
        prefs_manager,
        startup_alert,
    });
    settings.window = iced::window::Settings {
        size: window_size,
        min_size: Some(iced::Size::new(800.0, 600.0)),
        position: iced::window::Position::Centered,
        ..Default::default()
    };
    settings.antialiasing = true;

    PassformApp::run(settings)
}
