//! Core form components: secret visibility and confirmation matching
//!
//! This module contains the toolkit-independent state behind Passform's two
//! form behaviors. [`SecretValue`] tracks a secret input's text together with
//! its obscured/plain rendering mode, and [`ConfirmMatch`] keeps a primary and
//! confirmation value paired with the derived feedback state. Both are plain
//! values handed explicit references by the hosting view; neither reaches into
//! ambient state, so they can be driven directly from tests.

use serde::{Deserialize, Serialize};

use crate::config::MatchConfig;

/// Rendering mode of a secret input field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityMode {
    /// Typed characters are masked
    #[default]
    Obscured,
    /// Typed characters are shown as entered
    Plain,
}

impl VisibilityMode {
    /// The opposite mode
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            VisibilityMode::Obscured => VisibilityMode::Plain,
            VisibilityMode::Plain => VisibilityMode::Obscured,
        }
    }

    /// Whether this mode shows characters as entered
    pub fn is_plain(self) -> bool {
        matches!(self, VisibilityMode::Plain)
    }
}

/// A secret input's current text and rendering mode
///
/// The toggle control rendered next to the field is a pure projection of this
/// state: its glyph, accessible label, and pressed styling all follow
/// [`SecretValue::mode`], so they can never disagree with the field.
#[derive(Debug, Clone, Default)]
pub struct SecretValue {
    value: String,
    mode: VisibilityMode,
}

impl SecretValue {
    /// Create an empty, obscured value
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an obscured value with pre-filled text
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            mode: VisibilityMode::Obscured,
        }
    }

    /// Current text
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the text, leaving the mode untouched
    pub fn set_value(&mut self, value: String) {
        self.value = value;
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Current rendering mode
    pub fn mode(&self) -> VisibilityMode {
        self.mode
    }

    /// Whether the field currently masks its characters
    pub fn is_obscured(&self) -> bool {
        !self.mode.is_plain()
    }

    /// Flip between obscured and plain rendering.
    ///
    /// Each call flips exactly once; two calls restore the original mode
    /// along with the glyph, label, and pressed state projected from it.
    pub fn toggle(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// Pressed state of the associated toggle control
    pub fn toggle_pressed(&self) -> bool {
        self.mode.is_plain()
    }

    /// Clear the text and return the field to obscured rendering
    pub fn reset(&mut self) {
        self.value.clear();
        self.mode = VisibilityMode::Obscured;
    }
}

/// Visual state of a confirmation field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchState {
    /// Confirmation is empty; no feedback either way
    #[default]
    Neutral,
    /// Confirmation is non-empty and differs from the primary
    Mismatch,
    /// Confirmation is non-empty and equals the primary
    Valid,
}

/// Derived state produced by a confirmation recompute
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchReport {
    /// Visual state for the confirmation field
    pub state: MatchState,
    /// True iff the confirmation is non-empty and equals the primary
    pub is_valid: bool,
    /// True iff mismatch help should be visible
    pub show_help: bool,
}

impl MatchReport {
    fn compute(primary: &str, confirmation: &str) -> Self {
        let is_valid = !confirmation.is_empty() && confirmation == primary;
        let state = if confirmation.is_empty() {
            MatchState::Neutral
        } else if is_valid {
            MatchState::Valid
        } else {
            MatchState::Mismatch
        };

        Self {
            state,
            is_valid,
            show_help: state == MatchState::Mismatch,
        }
    }
}

/// Live validator for a primary value and its confirmation
///
/// The report is recomputed from the two current values at construction and
/// after every edit; nothing else feeds into it. Hosts route each field's
/// edit events to [`ConfirmMatch::set_primary`] or
/// [`ConfirmMatch::set_confirmation`] and repaint from the returned report.
#[derive(Debug, Clone)]
pub struct ConfirmMatch {
    primary: String,
    confirmation: String,
    report: MatchReport,
}

impl ConfirmMatch {
    /// Create a validator with both values empty
    pub fn new() -> Self {
        Self::with_values(String::new(), String::new())
    }

    /// Create a validator over pre-filled values.
    ///
    /// The report reflects the values immediately, so an autofilled form
    /// renders the right feedback before the first keystroke.
    pub fn with_values(primary: String, confirmation: String) -> Self {
        let report = MatchReport::compute(&primary, &confirmation);
        Self {
            primary,
            confirmation,
            report,
        }
    }

    /// Current primary value
    pub fn primary(&self) -> &str {
        &self.primary
    }

    /// Current confirmation value
    pub fn confirmation(&self) -> &str {
        &self.confirmation
    }

    /// Replace the primary value and recompute.
    ///
    /// A previously valid confirmation can fall back to mismatch here
    /// without the confirmation itself changing.
    pub fn set_primary(&mut self, value: String) -> MatchReport {
        self.primary = value;
        self.recompute()
    }

    /// Replace the confirmation value and recompute
    pub fn set_confirmation(&mut self, value: String) -> MatchReport {
        self.confirmation = value;
        self.recompute()
    }

    /// Latest derived state
    pub fn report(&self) -> MatchReport {
        self.report
    }

    /// Visual state for the confirmation field
    pub fn state(&self) -> MatchState {
        self.report.state
    }

    /// Whether the match invariant holds
    pub fn is_valid(&self) -> bool {
        self.report.is_valid
    }

    /// Clear both values and recompute
    pub fn reset(&mut self) -> MatchReport {
        self.primary.clear();
        self.confirmation.clear();
        self.recompute()
    }

    /// Help line to show under the confirmation field, if any.
    ///
    /// Yields the configured text only while the report calls for it; a
    /// config without help text never yields one.
    pub fn help_line<'a>(&self, config: &'a MatchConfig) -> Option<&'a str> {
        if self.report.show_help {
            config.help_text.as_deref()
        } else {
            None
        }
    }

    /// Whether the submit control should be enabled.
    ///
    /// `form_valid` is the host's overall form-validity signal; it only
    /// participates when the config requires it.
    pub fn submit_enabled(&self, config: &MatchConfig, form_valid: bool) -> bool {
        self.report.is_valid && (!config.requires_form_validity || form_valid)
    }

    fn recompute(&mut self) -> MatchReport {
        self.report = MatchReport::compute(&self.primary, &self.confirmation);
        self.report
    }
}

impl Default for ConfirmMatch {
    fn default() -> Self {
        Self::new()
    }
}
