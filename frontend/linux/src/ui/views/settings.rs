//! Settings View
//!
//! Preference editing for the form components: toggle glyph convention,
//! confirmation hint and match policy, password rule preset, and display
//! options. Edits are buffered in the view; the host applies them to the
//! preferences file when Save is pressed.

use iced::widget::{
    button, checkbox, column, container, radio, row, scrollable, text, text_input, Space,
};
use iced::{Alignment, Command, Element, Length};

use passform_shared::{AppPrefs, GlyphPair, MatchConfig, RulePreset, ToggleConfig};

use crate::ui::components::{SecretField, SecretFieldMessage};
use crate::ui::theme::{self, button_styles, utils};

/// Messages for the settings view
#[derive(Debug, Clone)]
pub enum SettingsMessage {
    /// Glyph convention selected
    GlyphPresetSelected(GlyphChoice),
    /// Mismatch hint enabled or disabled
    HelpEnabledToggled(bool),
    /// Mismatch hint text changed
    HelpTextChanged(String),
    /// Match policy changed
    RequireFormValidityToggled(bool),
    /// Strength meter visibility changed
    ShowStrengthToggled(bool),
    /// Password rule preset selected
    RulePresetSelected(RulePreset),
    /// Preview field event
    Preview(SecretFieldMessage),
    /// Persist the buffered edits
    Save,
    /// Leave without saving
    Back,
}

/// Built-in glyph conventions offered in the settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphChoice {
    Monkeys,
    Padlocks,
}

/// Settings view component
#[derive(Debug)]
pub struct SettingsView {
    glyph_choice: Option<GlyphChoice>,
    /// Non-preset glyphs found in the preferences file, kept as-is until a
    /// preset is explicitly chosen
    custom_glyphs: Option<GlyphPair>,
    help_enabled: bool,
    help_text: String,
    requires_form_validity: bool,
    rule_preset: RulePreset,
    show_strength_meter: bool,
    preview: SecretField,
    preview_config: ToggleConfig,
}

impl SettingsView {
    /// Create a settings view seeded from the current preferences
    pub fn new(prefs: &AppPrefs) -> Self {
        let glyphs = &prefs.form.toggle.glyphs;
        let (glyph_choice, custom_glyphs) = if *glyphs == GlyphPair::monkeys() {
            (Some(GlyphChoice::Monkeys), None)
        } else if *glyphs == GlyphPair::padlocks() {
            (Some(GlyphChoice::Padlocks), None)
        } else {
            (None, Some(glyphs.clone()))
        };

        let help_text = prefs
            .form
            .confirm
            .help_text
            .clone()
            .or_else(|| MatchConfig::default().help_text)
            .unwrap_or_default();

        Self {
            glyph_choice,
            custom_glyphs,
            help_enabled: prefs.form.confirm.help_text.is_some(),
            help_text,
            requires_form_validity: prefs.form.confirm.requires_form_validity,
            rule_preset: prefs.form.rules,
            show_strength_meter: prefs.ui.show_strength_meter,
            preview: SecretField::new("settings_preview", "Type to try the toggle"),
            preview_config: prefs.form.toggle.clone(),
        }
    }

    /// Update the view with a message
    pub fn update(&mut self, message: SettingsMessage) -> Command<SettingsMessage> {
        match message {
            SettingsMessage::GlyphPresetSelected(choice) => {
                self.glyph_choice = Some(choice);
                self.preview_config.glyphs = self.selected_glyphs();
            }
            SettingsMessage::HelpEnabledToggled(enabled) => self.help_enabled = enabled,
            SettingsMessage::HelpTextChanged(text) => self.help_text = text,
            SettingsMessage::RequireFormValidityToggled(required) => {
                self.requires_form_validity = required;
            }
            SettingsMessage::ShowStrengthToggled(shown) => self.show_strength_meter = shown,
            SettingsMessage::RulePresetSelected(preset) => self.rule_preset = preset,
            SettingsMessage::Preview(field_message) => self.preview.update(field_message),
            // Save and Back are handled by the host
            SettingsMessage::Save | SettingsMessage::Back => {}
        }
        Command::none()
    }

    /// Write the buffered edits back into the preferences
    pub fn apply_to(&self, prefs: &mut AppPrefs) {
        prefs.form.toggle.glyphs = self.selected_glyphs();
        // A blank hint is the same as no hint
        prefs.form.confirm.help_text = if self.help_enabled && !self.help_text.trim().is_empty() {
            Some(self.help_text.clone())
        } else {
            None
        };
        prefs.form.confirm.requires_form_validity = self.requires_form_validity;
        prefs.form.rules = self.rule_preset;
        prefs.ui.show_strength_meter = self.show_strength_meter;
    }

    fn selected_glyphs(&self) -> GlyphPair {
        match self.glyph_choice {
            Some(GlyphChoice::Monkeys) => GlyphPair::monkeys(),
            Some(GlyphChoice::Padlocks) => GlyphPair::padlocks(),
            None => self.custom_glyphs.clone().unwrap_or_default(),
        }
    }

    /// Render the view
    pub fn view(&self) -> Element<SettingsMessage> {
        let header = column![
            text("Preferences")
                .size(28)
                .horizontal_alignment(iced::alignment::Horizontal::Center),
            Space::with_height(Length::Fixed(10.0)),
            text("Changes apply after saving.")
                .size(14)
                .horizontal_alignment(iced::alignment::Horizontal::Center),
        ]
        .align_items(Alignment::Center);

        let toggle_section = self.view_toggle_section();
        let confirmation_section = self.view_confirmation_section();
        let rules_section = self.view_rules_section();
        let display_section = self.view_display_section();

        let save_button = button("Save")
            .on_press(SettingsMessage::Save)
            .style(button_styles::primary())
            .padding(utils::button_padding());

        let back_button = button("Back")
            .on_press(SettingsMessage::Back)
            .style(button_styles::secondary())
            .padding(utils::button_padding());

        let navigation = row![
            back_button,
            Space::with_width(Length::Fixed(20.0)),
            save_button,
        ]
        .align_items(Alignment::Center);

        scrollable(column![
            Space::with_height(Length::Fixed(40.0)),
            container(
                column![
                    header,
                    Space::with_height(Length::Fixed(30.0)),
                    toggle_section,
                    Space::with_height(Length::Fixed(30.0)),
                    confirmation_section,
                    Space::with_height(Length::Fixed(30.0)),
                    rules_section,
                    Space::with_height(Length::Fixed(30.0)),
                    display_section,
                    Space::with_height(Length::Fixed(40.0)),
                    navigation,
                ]
                .align_items(Alignment::Start)
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

    fn view_toggle_section(&self) -> Element<SettingsMessage> {
        let custom_note: Element<SettingsMessage> = if self.glyph_choice.is_none() {
            text("Custom glyphs from your preferences file are in use.")
                .size(12)
                .style(iced::theme::Text::Color(theme::MEDIUM_GRAY))
                .into()
        } else {
            column![].into()
        };

        column![
            text("Visibility Toggle").size(16),
            Space::with_height(Length::Fixed(10.0)),
            radio(
                "See-no-evil monkeys  🙈 / 🐵",
                GlyphChoice::Monkeys,
                self.glyph_choice,
                SettingsMessage::GlyphPresetSelected,
            ),
            radio(
                "Padlocks  🔒 / 🔓",
                GlyphChoice::Padlocks,
                self.glyph_choice,
                SettingsMessage::GlyphPresetSelected,
            ),
            custom_note,
            Space::with_height(Length::Fixed(10.0)),
            text("Preview")
                .size(12)
                .style(iced::theme::Text::Color(theme::MEDIUM_GRAY)),
            Space::with_height(Length::Fixed(5.0)),
            self.preview
                .view(&self.preview_config)
                .map(SettingsMessage::Preview),
        ]
        .spacing(10)
        .width(Length::Fill)
        .into()
    }

    fn view_confirmation_section(&self) -> Element<SettingsMessage> {
        let help_input: Element<SettingsMessage> = if self.help_enabled {
            text_input("Hint text", &self.help_text)
                .on_input(SettingsMessage::HelpTextChanged)
                .padding(utils::text_input_padding())
                .style(theme::text_input_styles::standard())
                .width(Length::Fill)
                .into()
        } else {
            column![].into()
        };

        column![
            text("Confirmation").size(16),
            Space::with_height(Length::Fixed(10.0)),
            checkbox(
                "Show a hint while the passwords differ",
                self.help_enabled,
            )
            .on_toggle(SettingsMessage::HelpEnabledToggled),
            help_input,
            checkbox(
                "Only allow submission while the whole form is valid",
                self.requires_form_validity,
            )
            .on_toggle(SettingsMessage::RequireFormValidityToggled),
        ]
        .spacing(10)
        .width(Length::Fill)
        .into()
    }

    fn view_rules_section(&self) -> Element<SettingsMessage> {
        column![
            text("Password Rules").size(16),
            Space::with_height(Length::Fixed(10.0)),
            column(
                RulePreset::ALL
                    .iter()
                    .map(|preset| {
                        radio(
                            preset.label(),
                            *preset,
                            Some(self.rule_preset),
                            SettingsMessage::RulePresetSelected,
                        )
                        .into()
                    })
                    .collect::<Vec<Element<SettingsMessage>>>(),
            )
            .spacing(10),
        ]
        .spacing(10)
        .width(Length::Fill)
        .into()
    }

    fn view_display_section(&self) -> Element<SettingsMessage> {
        column![
            text("Display").size(16),
            Space::with_height(Length::Fixed(10.0)),
            checkbox(
                "Show password strength meter",
                self.show_strength_meter,
            )
            .on_toggle(SettingsMessage::ShowStrengthToggled),
        ]
        .spacing(10)
        .width(Length::Fill)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use passform_shared::PrefsManager;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_select_the_monkey_preset() {
        let view = SettingsView::new(&AppPrefs::default());
        assert_matches!(view.glyph_choice, Some(GlyphChoice::Monkeys));
        assert!(view.help_enabled);
        assert_eq!(view.rule_preset, RulePreset::Registration);
        assert!(view.show_strength_meter);
    }

    #[test]
    fn test_choosing_padlocks_updates_the_preview() {
        let mut view = SettingsView::new(&AppPrefs::default());
        let _ = view.update(SettingsMessage::GlyphPresetSelected(GlyphChoice::Padlocks));
        assert_eq!(view.preview_config.glyphs, GlyphPair::padlocks());
    }

    #[test]
    fn test_apply_writes_choices_back() {
        let mut prefs = AppPrefs::default();
        let mut view = SettingsView::new(&prefs);

        let _ = view.update(SettingsMessage::GlyphPresetSelected(GlyphChoice::Padlocks));
        let _ = view.update(SettingsMessage::HelpEnabledToggled(false));
        let _ = view.update(SettingsMessage::RequireFormValidityToggled(true));
        let _ = view.update(SettingsMessage::RulePresetSelected(RulePreset::Relaxed));
        let _ = view.update(SettingsMessage::ShowStrengthToggled(false));
        view.apply_to(&mut prefs);

        assert_eq!(prefs.form.toggle.glyphs, GlyphPair::padlocks());
        assert_eq!(prefs.form.confirm.help_text, None);
        assert!(prefs.form.confirm.requires_form_validity);
        assert_eq!(prefs.form.rules, RulePreset::Relaxed);
        assert!(!prefs.ui.show_strength_meter);
    }

    #[test]
    fn test_blank_hint_disables_help() {
        let mut prefs = AppPrefs::default();
        let mut view = SettingsView::new(&prefs);

        let _ = view.update(SettingsMessage::HelpTextChanged("   ".to_string()));
        view.apply_to(&mut prefs);

        assert_eq!(prefs.form.confirm.help_text, None);
    }

    #[test]
    fn test_custom_glyphs_survive_an_unrelated_save() {
        let mut prefs = AppPrefs::default();
        prefs.form.toggle.glyphs = GlyphPair {
            obscured: "●".to_string(),
            revealed: "○".to_string(),
        };

        let mut view = SettingsView::new(&prefs);
        assert_matches!(view.glyph_choice, None);

        let _ = view.update(SettingsMessage::ShowStrengthToggled(false));
        view.apply_to(&mut prefs);

        assert_eq!(prefs.form.toggle.glyphs.obscured, "●");
        assert_eq!(prefs.form.toggle.glyphs.revealed, "○");
    }

    #[test]
    fn test_edits_round_trip_through_the_prefs_file() {
        let temp_dir = TempDir::new().unwrap();
        let prefs_path = temp_dir.path().join("preferences.toml");

        let mut manager = PrefsManager::with_path(prefs_path.clone());
        manager.load().unwrap();

        let mut view = SettingsView::new(manager.prefs());
        let _ = view.update(SettingsMessage::GlyphPresetSelected(GlyphChoice::Padlocks));
        let _ = view.update(SettingsMessage::RequireFormValidityToggled(true));
        view.apply_to(manager.prefs_mut());
        manager.save().unwrap();

        let mut reloaded = PrefsManager::with_path(prefs_path);
        reloaded.load().unwrap();
        assert_eq!(reloaded.prefs().form.toggle.glyphs, GlyphPair::padlocks());
        assert!(reloaded.prefs().form.confirm.requires_form_validity);
    }
}
