//! Secret field component with a visibility toggle
//!
//! A secure text input paired with the control that flips it between
//! obscured and plain rendering. The control is a pure projection of the
//! field's mode: glyph, hover label, and pressed styling all follow it, and
//! message routing delivers each activation to exactly one handler, so one
//! click can never flip the field more than once.

use iced::widget::{button, row, text, text_input, tooltip, Space};
use iced::{Alignment, Element, Length};
use tracing::debug;

use passform_shared::{SecretValue, ToggleConfig, VisibilityMode};

use crate::ui::theme::{button_styles, text_input_styles, utils};

/// Messages for the secret field component
#[derive(Debug, Clone, PartialEq)]
pub enum SecretFieldMessage {
    /// The text changed
    ValueChanged(String),
    /// The visibility toggle was activated
    ToggleVisibility,
    /// Enter was pressed inside the field; hosts decide what that means
    Submitted,
}

/// Secret field component state
#[derive(Debug, Clone)]
pub struct SecretField {
    secret: SecretValue,
    placeholder: String,
    input_id: text_input::Id,
}

impl SecretField {
    /// Create an empty, obscured field.
    ///
    /// `id` must be unique within the window; focus commands address the
    /// field through it.
    pub fn new(id: &'static str, placeholder: impl Into<String>) -> Self {
        Self {
            secret: SecretValue::new(),
            placeholder: placeholder.into(),
            input_id: text_input::Id::new(id),
        }
    }

    /// Current text
    pub fn value(&self) -> &str {
        self.secret.value()
    }

    pub fn is_empty(&self) -> bool {
        self.secret.is_empty()
    }

    /// Current rendering mode
    pub fn mode(&self) -> VisibilityMode {
        self.secret.mode()
    }

    pub fn is_obscured(&self) -> bool {
        self.secret.is_obscured()
    }

    /// Id for focus commands
    pub fn id(&self) -> text_input::Id {
        self.input_id.clone()
    }

    /// Clear the text and return the field to obscured rendering
    pub fn reset(&mut self) {
        self.secret.reset();
    }

    /// Update the component
    pub fn update(&mut self, message: SecretFieldMessage) {
        match message {
            SecretFieldMessage::ValueChanged(value) => self.secret.set_value(value),
            SecretFieldMessage::ToggleVisibility => {
                self.secret.toggle();
                debug!("secret field visibility now {:?}", self.secret.mode());
            }
            // Submission is a form-level concern; hosts intercept it
            SecretFieldMessage::Submitted => {}
        }
    }

    /// Render the field with its toggle control
    pub fn view<'a>(&'a self, config: &'a ToggleConfig) -> Element<'a, SecretFieldMessage> {
        self.view_styled(config, text_input_styles::standard())
    }

    /// Render with a caller-chosen input style, for validation feedback
    pub fn view_styled<'a>(
        &'a self,
        config: &'a ToggleConfig,
        style: iced::theme::TextInput,
    ) -> Element<'a, SecretFieldMessage> {
        let glyph = config.glyphs.for_mode(self.secret.mode());
        let toggle_label = config.labels.for_mode(self.secret.mode());

        let input = text_input(&self.placeholder, self.secret.value())
            .on_input(SecretFieldMessage::ValueChanged)
            .on_submit(SecretFieldMessage::Submitted)
            .secure(self.secret.is_obscured())
            .padding(utils::text_input_padding())
            .style(style)
            .id(self.input_id.clone())
            .width(Length::Fill);

        let toggle = button(text(glyph).size(16))
            .on_press(SecretFieldMessage::ToggleVisibility)
            .style(button_styles::toggle(self.secret.toggle_pressed()))
            .padding(utils::toggle_padding());

        let toggle = tooltip(toggle, text(toggle_label).size(12), tooltip::Position::Top)
            .style(iced::theme::Container::Box)
            .gap(4);

        row![input, Space::with_width(Length::Fixed(10.0)), toggle]
            .align_items(Alignment::Center)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_starts_empty_and_obscured() {
        let field = SecretField::new("pw", "Enter password...");
        assert!(field.is_empty());
        assert!(field.is_obscured());
        assert_matches!(field.mode(), VisibilityMode::Obscured);
    }

    #[test]
    fn test_value_changes_do_not_touch_mode() {
        let mut field = SecretField::new("pw", "Enter password...");
        field.update(SecretFieldMessage::ValueChanged("hunter2".into()));
        assert_eq!(field.value(), "hunter2");
        assert!(field.is_obscured());
    }

    #[test]
    fn test_toggle_messages_flip_exactly_once_each() {
        let mut field = SecretField::new("pw", "Enter password...");

        field.update(SecretFieldMessage::ToggleVisibility);
        assert_matches!(field.mode(), VisibilityMode::Plain);

        field.update(SecretFieldMessage::ToggleVisibility);
        assert_matches!(field.mode(), VisibilityMode::Obscured);
    }

    #[test]
    fn test_glyph_and_label_follow_mode() {
        let config = ToggleConfig::default();
        let mut field = SecretField::new("pw", "Enter password...");

        assert_eq!(config.glyphs.for_mode(field.mode()), "🙈");
        assert_eq!(config.labels.for_mode(field.mode()), "Show password");

        field.update(SecretFieldMessage::ToggleVisibility);
        assert_eq!(config.glyphs.for_mode(field.mode()), "🐵");
        assert_eq!(config.labels.for_mode(field.mode()), "Hide password");
    }

    #[test]
    fn test_submitted_is_a_no_op_for_the_component() {
        let mut field = SecretField::new("pw", "Enter password...");
        field.update(SecretFieldMessage::ValueChanged("abc".into()));
        field.update(SecretFieldMessage::Submitted);
        assert_eq!(field.value(), "abc");
        assert!(field.is_obscured());
    }

    #[test]
    fn test_reset_clears_value_and_reobscures() {
        let mut field = SecretField::new("pw", "Enter password...");
        field.update(SecretFieldMessage::ValueChanged("abc".into()));
        field.update(SecretFieldMessage::ToggleVisibility);

        field.reset();
        assert!(field.is_empty());
        assert!(field.is_obscured());
    }
}
