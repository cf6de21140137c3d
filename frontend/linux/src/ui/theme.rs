//! Passform visual theme
//!
//! Central definition of colors, widget styles, and small layout helpers so
//! every view renders the same way. Style families are grouped in modules
//! (`button_styles`, `text_input_styles`, `progress_bar_styles`, `alerts`)
//! and return the theme wrappers iced expects.

use iced::widget::svg;
use iced::widget::{button, progress_bar, text_input};
use iced::{Background, Border, Color, Padding};

use passform_shared::{MatchState, StrengthLevel};

// Brand colors
pub const ACCENT_TEAL: Color = Color::from_rgb(0.039, 0.576, 0.588); // #0a9396
pub const ACCENT_TEAL_DARK: Color = Color::from_rgb(0.0, 0.373, 0.451); // #005f73
pub const MATCH_GREEN: Color = Color::from_rgb(0.165, 0.616, 0.561); // #2a9d8f
pub const DEEP_GREEN: Color = Color::from_rgb(0.067, 0.467, 0.412); // #117769
pub const MISMATCH_RED: Color = Color::from_rgb(0.902, 0.224, 0.275); // #e63946
pub const WARNING_AMBER: Color = Color::from_rgb(0.914, 0.769, 0.416); // #e9c46a
pub const SALMON_ORANGE: Color = Color::from_rgb(0.933, 0.424, 0.302); // #ee6c4d

// Neutral colors
pub const LIGHT_BACKGROUND: Color = Color::from_rgb(0.957, 0.965, 0.969); // #f4f6f7
pub const DARK_TEXT: Color = Color::from_rgb(0.133, 0.2, 0.231); // #22333b
pub const MEDIUM_GRAY: Color = Color::from_rgb(0.42, 0.459, 0.49); // #6b757d
pub const LIGHT_GRAY_TEXT: Color = Color::from_rgb(0.627, 0.659, 0.675); // #a0a8ac
pub const BORDER_GRAY: Color = Color::from_rgb(0.808, 0.831, 0.855); // #ced4da
pub const DISABLED_GRAY: Color = Color::from_rgb(0.878, 0.894, 0.906); // #e0e4e7

/// Embedded application logo
pub const APP_LOGO_SVG: &[u8] = include_bytes!("../../resources/icons/passform.svg");

/// Handle for rendering the application logo
pub fn app_logo() -> svg::Handle {
    svg::Handle::from_memory(APP_LOGO_SVG)
}

/// Application-wide iced theme
pub fn app_theme() -> iced::Theme {
    iced::Theme::custom(
        "Passform".to_string(),
        iced::theme::Palette {
            background: LIGHT_BACKGROUND,
            text: DARK_TEXT,
            primary: ACCENT_TEAL,
            success: MATCH_GREEN,
            danger: MISMATCH_RED,
        },
    )
}

/// Button style variants
pub mod button_styles {
    use super::*;

    /// Filled accent button for the main action of a view
    pub fn primary() -> iced::theme::Button {
        iced::theme::Button::Custom(Box::new(PrimaryButton))
    }

    /// Outlined button for secondary actions
    pub fn secondary() -> iced::theme::Button {
        iced::theme::Button::Custom(Box::new(SecondaryButton))
    }

    /// Visibility toggle control.
    ///
    /// The pressed variant is filled with the accent color so the control
    /// itself reads as "currently revealing"; the unpressed variant stays
    /// outlined. Views pass the field's plain-mode flag here.
    pub fn toggle(pressed: bool) -> iced::theme::Button {
        iced::theme::Button::Custom(Box::new(ToggleButton { pressed }))
    }

    struct PrimaryButton;

    impl button::StyleSheet for PrimaryButton {
        type Style = iced::Theme;

        fn active(&self, _style: &Self::Style) -> button::Appearance {
            button::Appearance {
                background: Some(Background::Color(ACCENT_TEAL)),
                text_color: Color::WHITE,
                border: Border::with_radius(utils::border_radius()),
                ..button::Appearance::default()
            }
        }

        fn hovered(&self, style: &Self::Style) -> button::Appearance {
            button::Appearance {
                background: Some(Background::Color(ACCENT_TEAL_DARK)),
                ..self.active(style)
            }
        }

        fn disabled(&self, style: &Self::Style) -> button::Appearance {
            button::Appearance {
                background: Some(Background::Color(DISABLED_GRAY)),
                text_color: MEDIUM_GRAY,
                ..self.active(style)
            }
        }
    }

    struct SecondaryButton;

    impl button::StyleSheet for SecondaryButton {
        type Style = iced::Theme;

        fn active(&self, _style: &Self::Style) -> button::Appearance {
            button::Appearance {
                background: Some(Background::Color(Color::WHITE)),
                text_color: ACCENT_TEAL_DARK,
                border: Border {
                    color: ACCENT_TEAL,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                ..button::Appearance::default()
            }
        }

        fn hovered(&self, style: &Self::Style) -> button::Appearance {
            button::Appearance {
                background: Some(Background::Color(LIGHT_BACKGROUND)),
                ..self.active(style)
            }
        }
    }

    struct ToggleButton {
        pressed: bool,
    }

    impl button::StyleSheet for ToggleButton {
        type Style = iced::Theme;

        fn active(&self, _style: &Self::Style) -> button::Appearance {
            if self.pressed {
                button::Appearance {
                    background: Some(Background::Color(ACCENT_TEAL)),
                    text_color: Color::WHITE,
                    border: Border {
                        color: ACCENT_TEAL_DARK,
                        width: 1.0,
                        radius: utils::border_radius().into(),
                    },
                    ..button::Appearance::default()
                }
            } else {
                button::Appearance {
                    background: Some(Background::Color(Color::WHITE)),
                    text_color: DARK_TEXT,
                    border: Border {
                        color: BORDER_GRAY,
                        width: 1.0,
                        radius: utils::border_radius().into(),
                    },
                    ..button::Appearance::default()
                }
            }
        }

        fn hovered(&self, style: &Self::Style) -> button::Appearance {
            let active = self.active(style);
            if self.pressed {
                button::Appearance {
                    background: Some(Background::Color(ACCENT_TEAL_DARK)),
                    ..active
                }
            } else {
                button::Appearance {
                    border: Border {
                        color: ACCENT_TEAL,
                        ..active.border
                    },
                    ..active
                }
            }
        }
    }
}

/// Text input style variants
pub mod text_input_styles {
    use super::*;

    /// Regular form input
    pub fn standard() -> iced::theme::TextInput {
        iced::theme::TextInput::Custom(Box::new(FormTextInput {
            accent: InputAccent::Standard,
        }))
    }

    /// Input carrying a satisfied validation state (green border)
    pub fn valid() -> iced::theme::TextInput {
        iced::theme::TextInput::Custom(Box::new(FormTextInput {
            accent: InputAccent::Valid,
        }))
    }

    /// Input carrying a failed validation state (red border)
    pub fn invalid() -> iced::theme::TextInput {
        iced::theme::TextInput::Custom(Box::new(FormTextInput {
            accent: InputAccent::Invalid,
        }))
    }

    /// Style for a confirmation field in the given match state
    pub fn for_match_state(state: MatchState) -> iced::theme::TextInput {
        match state {
            MatchState::Neutral => standard(),
            MatchState::Mismatch => invalid(),
            MatchState::Valid => valid(),
        }
    }

    #[derive(Debug, Clone, Copy)]
    enum InputAccent {
        Standard,
        Valid,
        Invalid,
    }

    impl InputAccent {
        fn border_color(self) -> Color {
            match self {
                InputAccent::Standard => BORDER_GRAY,
                InputAccent::Valid => MATCH_GREEN,
                InputAccent::Invalid => MISMATCH_RED,
            }
        }

        fn border_width(self) -> f32 {
            match self {
                InputAccent::Standard => 1.0,
                InputAccent::Valid | InputAccent::Invalid => 2.0,
            }
        }

        fn focus_color(self) -> Color {
            match self {
                InputAccent::Standard => ACCENT_TEAL,
                other => other.border_color(),
            }
        }
    }

    struct FormTextInput {
        accent: InputAccent,
    }

    impl text_input::StyleSheet for FormTextInput {
        type Style = iced::Theme;

        fn active(&self, _style: &Self::Style) -> text_input::Appearance {
            text_input::Appearance {
                background: Background::Color(Color::WHITE),
                border: Border {
                    color: self.accent.border_color(),
                    width: self.accent.border_width(),
                    radius: utils::border_radius().into(),
                },
                icon_color: MEDIUM_GRAY,
            }
        }

        fn focused(&self, style: &Self::Style) -> text_input::Appearance {
            let active = self.active(style);
            text_input::Appearance {
                border: Border {
                    color: self.accent.focus_color(),
                    width: self.accent.border_width() + 1.0,
                    ..active.border
                },
                ..active
            }
        }

        fn hovered(&self, style: &Self::Style) -> text_input::Appearance {
            self.focused(style)
        }

        fn placeholder_color(&self, _style: &Self::Style) -> Color {
            LIGHT_GRAY_TEXT
        }

        fn value_color(&self, _style: &Self::Style) -> Color {
            DARK_TEXT
        }

        fn disabled_color(&self, _style: &Self::Style) -> Color {
            MEDIUM_GRAY
        }

        fn selection_color(&self, _style: &Self::Style) -> Color {
            Color {
                a: 0.3,
                ..ACCENT_TEAL
            }
        }

        fn disabled(&self, style: &Self::Style) -> text_input::Appearance {
            text_input::Appearance {
                background: Background::Color(DISABLED_GRAY),
                ..self.active(style)
            }
        }
    }
}

/// Progress bar style variants
pub mod progress_bar_styles {
    use super::*;

    /// Strength meter tinted by the reported level
    pub fn strength(level: StrengthLevel) -> iced::theme::ProgressBar {
        iced::theme::ProgressBar::Custom(Box::new(StrengthBar {
            color: strength_color(level),
        }))
    }

    struct StrengthBar {
        color: Color,
    }

    impl progress_bar::StyleSheet for StrengthBar {
        type Style = iced::Theme;

        fn appearance(&self, _style: &Self::Style) -> progress_bar::Appearance {
            progress_bar::Appearance {
                background: Background::Color(DISABLED_GRAY),
                bar: Background::Color(self.color),
                border_radius: (utils::border_radius() / 2.0).into(),
            }
        }
    }
}

/// Display color for a strength level, shared by the meter and its caption
pub fn strength_color(level: StrengthLevel) -> Color {
    match level {
        StrengthLevel::VeryWeak => MISMATCH_RED,
        StrengthLevel::Weak => SALMON_ORANGE,
        StrengthLevel::Fair => WARNING_AMBER,
        StrengthLevel::Strong => MATCH_GREEN,
        StrengthLevel::VeryStrong => DEEP_GREEN,
    }
}

/// Alert banners for user-visible notices
pub mod alerts {
    use super::*;
    use iced::widget::{button, container, row, text, Space};
    use iced::{Alignment, Element, Length};

    /// Severity of an alert banner
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum AlertLevel {
        Error,
        Warning,
        Success,
    }

    /// A dismissable notice shown at the top of the window
    #[derive(Debug, Clone)]
    pub struct AlertMessage {
        pub level: AlertLevel,
        pub text: String,
    }

    impl AlertMessage {
        pub fn error(text: impl Into<String>) -> Self {
            Self {
                level: AlertLevel::Error,
                text: text.into(),
            }
        }

        pub fn warning(text: impl Into<String>) -> Self {
            Self {
                level: AlertLevel::Warning,
                text: text.into(),
            }
        }

        pub fn success(text: impl Into<String>) -> Self {
            Self {
                level: AlertLevel::Success,
                text: text.into(),
            }
        }
    }

    fn accent(level: AlertLevel) -> Color {
        match level {
            AlertLevel::Error => MISMATCH_RED,
            AlertLevel::Warning => SALMON_ORANGE,
            AlertLevel::Success => MATCH_GREEN,
        }
    }

    struct AlertContainer {
        level: AlertLevel,
    }

    impl container::StyleSheet for AlertContainer {
        type Style = iced::Theme;

        fn appearance(&self, _style: &Self::Style) -> container::Appearance {
            let color = accent(self.level);
            container::Appearance {
                text_color: Some(DARK_TEXT),
                background: Some(Background::Color(Color { a: 0.12, ..color })),
                border: Border {
                    color,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                ..container::Appearance::default()
            }
        }
    }

    /// Render an alert as a dismissable banner
    pub fn render_alert<'a, Message: Clone + 'a>(
        alert: &AlertMessage,
        on_dismiss: Message,
    ) -> Element<'a, Message> {
        let banner = row![
            text(&alert.text).size(14).style(iced::theme::Text::Color(DARK_TEXT)),
            Space::with_width(Length::Fill),
            button(text("✕").size(14))
                .on_press(on_dismiss)
                .style(button_styles::secondary())
                .padding([4, 8]),
        ]
        .align_items(Alignment::Center)
        .spacing(utils::element_spacing());

        container(banner)
            .style(iced::theme::Container::Custom(Box::new(AlertContainer {
                level: alert.level,
            })))
            .padding(12)
            .width(Length::Fill)
            .into()
    }
}

/// Layout helpers shared by the views
pub mod utils {
    use super::Padding;

    /// Vertical spacing between form sections
    pub fn standard_spacing() -> u16 {
        20
    }

    /// Spacing between elements within a row or section
    pub fn element_spacing() -> u16 {
        10
    }

    /// Padding for primary and secondary buttons
    pub fn button_padding() -> Padding {
        Padding::from([10, 20])
    }

    /// Padding for the compact visibility toggle control
    pub fn toggle_padding() -> Padding {
        Padding::from([8, 12])
    }

    /// Padding inside text inputs
    pub fn text_input_padding() -> Padding {
        Padding::from(12)
    }

    /// Corner radius used across widgets
    pub fn border_radius() -> f32 {
        10.0
    }

    /// Width of the form column in every view
    pub fn form_width() -> f32 {
        420.0
    }
}
