//! Application preference structures for Passform
//!
//! Everything persisted to the preferences file lives here: the form
//! behavior configuration (glyphs, labels, match policy, rule preset) and
//! display options. Only presentation settings are stored; secret values
//! never touch disk.

use serde::{Deserialize, Serialize};

use crate::error::{PassformError, PassformResult};
use crate::form::VisibilityMode;
use crate::validation::PasswordRules;

/// Top-level contents of the preferences file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppPrefs {
    /// Form component configuration
    pub form: FormConfig,

    /// Display options
    pub ui: UiPrefs,
}

/// Display options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiPrefs {
    /// Whether registration forms show the strength meter
    pub show_strength_meter: bool,

    /// Window width override
    pub window_width: Option<f32>,

    /// Window height override
    pub window_height: Option<f32>,
}

impl Default for UiPrefs {
    fn default() -> Self {
        Self {
            show_strength_meter: true,
            window_width: None,
            window_height: None,
        }
    }
}

/// Configuration for the form components
///
/// One parameterized component pair covers every recognized variant of the
/// toggle and confirmation behavior; hosts select between them here instead
/// of forking the components.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Which rule set registration passwords are validated against
    pub rules: RulePreset,

    /// Visibility toggle appearance
    pub toggle: ToggleConfig,

    /// Confirmation match behavior
    pub confirm: MatchConfig,
}

impl FormConfig {
    /// Check the configuration for unusable values.
    ///
    /// Empty glyphs or labels would leave the toggle control blank, which
    /// makes the mode unreadable; both glyphs sharing one symbol is legal
    /// but suspicious, so it only warns.
    pub fn validate(&self) -> PassformResult<()> {
        let required = [
            ("toggle glyph (obscured)", &self.toggle.glyphs.obscured),
            ("toggle glyph (revealed)", &self.toggle.glyphs.revealed),
            ("toggle label (show)", &self.toggle.labels.show),
            ("toggle label (hide)", &self.toggle.labels.hide),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(PassformError::Config {
                    message: format!("{name} must not be empty"),
                });
            }
        }

        if self.toggle.glyphs.obscured == self.toggle.glyphs.revealed {
            tracing::warn!(
                "both visibility modes use the glyph {:?}; the toggle state will not be readable",
                self.toggle.glyphs.obscured
            );
        }

        Ok(())
    }
}

/// Appearance of the visibility toggle control
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToggleConfig {
    /// Glyph shown for each rendering mode
    pub glyphs: GlyphPair,

    /// Accessible label for each rendering mode
    pub labels: ToggleLabels,
}

/// Glyphs displayed on the toggle control, one per rendering mode.
///
/// The control always shows the glyph for the field's current mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlyphPair {
    /// Shown while the field masks its characters
    pub obscured: String,

    /// Shown while the field displays characters as entered
    pub revealed: String,
}

impl Default for GlyphPair {
    fn default() -> Self {
        Self::monkeys()
    }
}

impl GlyphPair {
    /// The see-no-evil convention: 🙈 while obscured, 🐵 while revealed
    pub fn monkeys() -> Self {
        Self {
            obscured: "🙈".to_string(),
            revealed: "🐵".to_string(),
        }
    }

    /// The padlock convention: 🔒 while obscured, 🔓 while revealed
    pub fn padlocks() -> Self {
        Self {
            obscured: "🔒".to_string(),
            revealed: "🔓".to_string(),
        }
    }

    /// Glyph for the given rendering mode
    pub fn for_mode(&self, mode: VisibilityMode) -> &str {
        if mode.is_plain() {
            &self.revealed
        } else {
            &self.obscured
        }
    }
}

/// Accessible labels for the toggle control.
///
/// While the field is obscured the control offers to show it, and vice
/// versa, so the label for a mode names the action the control performs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToggleLabels {
    /// Offered while the field is obscured
    pub show: String,

    /// Offered while the field is revealed
    pub hide: String,
}

impl Default for ToggleLabels {
    fn default() -> Self {
        Self {
            show: "Show password".to_string(),
            hide: "Hide password".to_string(),
        }
    }
}

impl ToggleLabels {
    /// Label for the given rendering mode
    pub fn for_mode(&self, mode: VisibilityMode) -> &str {
        if mode.is_plain() {
            &self.hide
        } else {
            &self.show
        }
    }
}

/// Confirmation match behavior
///
/// A saved `None` help text is an absent key (TOML has no null). Defaults
/// stay field-level so reload maps that absent key to `None` rather than
/// back to the stock hint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Help line shown under a mismatched confirmation; `None` drops the
    /// help line entirely and leaves field styling as the only feedback
    pub help_text: Option<String>,

    /// Whether submit additionally requires the overall form to be valid
    #[serde(default)]
    pub requires_form_validity: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            help_text: Some("Passwords do not match.".to_string()),
            requires_form_validity: false,
        }
    }
}

/// Built-in rule sets selectable from preferences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RulePreset {
    /// 12-64 characters, all character classes
    #[default]
    Registration,
    /// 8-64 characters, all character classes
    Reset,
    /// 8+ characters, no class requirements
    Relaxed,
}

impl RulePreset {
    pub const ALL: [RulePreset; 3] = [
        RulePreset::Registration,
        RulePreset::Reset,
        RulePreset::Relaxed,
    ];

    /// The rule set this preset selects
    pub fn rules(&self) -> PasswordRules {
        match self {
            RulePreset::Registration => PasswordRules::registration(),
            RulePreset::Reset => PasswordRules::reset(),
            RulePreset::Relaxed => PasswordRules::relaxed(),
        }
    }

    /// Display label for settings controls
    pub fn label(&self) -> &'static str {
        match self {
            RulePreset::Registration => "Registration (12+ chars, all classes)",
            RulePreset::Reset => "Reset (8+ chars, all classes)",
            RulePreset::Relaxed => "Relaxed (8+ chars)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_monkey_convention() {
        let prefs = AppPrefs::default();
        assert_eq!(prefs.form.toggle.glyphs.obscured, "🙈");
        assert_eq!(prefs.form.toggle.glyphs.revealed, "🐵");
        assert_eq!(prefs.form.toggle.labels.show, "Show password");
        assert_eq!(prefs.form.rules, RulePreset::Registration);
        assert!(prefs.form.confirm.help_text.is_some());
        assert!(!prefs.form.confirm.requires_form_validity);
        assert!(prefs.ui.show_strength_meter);
    }

    #[test]
    fn test_glyphs_and_labels_follow_mode() {
        let glyphs = GlyphPair::padlocks();
        assert_eq!(glyphs.for_mode(VisibilityMode::Obscured), "🔒");
        assert_eq!(glyphs.for_mode(VisibilityMode::Plain), "🔓");

        let labels = ToggleLabels::default();
        assert_eq!(labels.for_mode(VisibilityMode::Obscured), "Show password");
        assert_eq!(labels.for_mode(VisibilityMode::Plain), "Hide password");
    }

    #[test]
    fn test_prefs_round_trip_through_toml() {
        let mut prefs = AppPrefs::default();
        prefs.form.toggle.glyphs = GlyphPair::padlocks();
        prefs.form.confirm.requires_form_validity = true;
        prefs.form.rules = RulePreset::Reset;
        prefs.ui.show_strength_meter = false;

        let rendered = toml::to_string(&prefs).unwrap();
        let parsed: AppPrefs = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, prefs);
    }

    #[test]
    fn test_disabled_help_text_survives_round_trip() {
        let mut prefs = AppPrefs::default();
        prefs.form.confirm.help_text = None;

        let rendered = toml::to_string(&prefs).unwrap();
        let parsed: AppPrefs = toml::from_str(&rendered).unwrap();
        assert!(parsed.form.confirm.help_text.is_none());
        assert_eq!(parsed, prefs);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let parsed: AppPrefs = toml::from_str(
            r#"
            [form.toggle.glyphs]
            obscured = "🔒"
            revealed = "🔓"
            "#,
        )
        .unwrap();

        assert_eq!(parsed.form.toggle.glyphs, GlyphPair::padlocks());
        // Everything unspecified keeps its default, the stock hint included
        assert_eq!(parsed.form.toggle.labels, ToggleLabels::default());
        assert_eq!(parsed.form.rules, RulePreset::Registration);
        assert!(parsed.form.confirm.help_text.is_some());
        assert!(parsed.ui.show_strength_meter);
    }

    #[test]
    fn test_help_text_can_be_disabled_in_file() {
        let parsed: AppPrefs = toml::from_str(
            r#"
            [form.confirm]
            requires_form_validity = true
            "#,
        )
        .unwrap();

        // An explicit confirm table without help_text disables the hint
        assert!(parsed.form.confirm.help_text.is_none());
        assert!(parsed.form.confirm.requires_form_validity);
    }

    #[test]
    fn test_rule_presets_map_to_rule_sets() {
        assert_eq!(RulePreset::Registration.rules().min_length, 12);
        assert_eq!(RulePreset::Reset.rules().min_length, 8);
        assert!(!RulePreset::Relaxed.rules().require_symbol);
        assert_eq!(RulePreset::Relaxed.rules().max_length, 0);
    }

    #[test]
    fn test_validate_rejects_blank_glyphs() {
        let mut config = FormConfig::default();
        assert!(config.validate().is_ok());

        config.toggle.glyphs.obscured = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_identical_glyphs() {
        let mut config = FormConfig::default();
        config.toggle.glyphs.revealed = config.toggle.glyphs.obscured.clone();
        // Suspicious but legal
        assert!(config.validate().is_ok());
    }
}
