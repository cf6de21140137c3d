//! Password strength validation
//!
//! Live counterpart of the server-side rules a registration form is checked
//! against: length bounds plus required character classes, with an advisory
//! 0-100 score and strength level for meter display. Rule satisfaction
//! (`meets_rules`) is what gates submission; the score only drives feedback.

use serde::{Deserialize, Serialize};

use crate::constants::MAX_PASSWORD_LENGTH;

/// Requirements a password must satisfy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordRules {
    /// Minimum length in characters
    pub min_length: usize,
    /// Maximum length in characters (0 = unlimited)
    pub max_length: usize,
    /// Require at least one uppercase letter
    pub require_uppercase: bool,
    /// Require at least one lowercase letter
    pub require_lowercase: bool,
    /// Require at least one digit
    pub require_digit: bool,
    /// Require at least one symbol (non-alphanumeric, non-whitespace)
    pub require_symbol: bool,
}

impl Default for PasswordRules {
    fn default() -> Self {
        Self::registration()
    }
}

impl PasswordRules {
    /// Rules applied to new-account passwords: 12-64 characters with all
    /// four character classes present.
    pub fn registration() -> Self {
        Self {
            min_length: 12,
            max_length: MAX_PASSWORD_LENGTH,
            require_uppercase: true,
            require_lowercase: true,
            require_digit: true,
            require_symbol: true,
        }
    }

    /// Rules applied when resetting an existing password: 8-64 characters
    /// with all four character classes present.
    pub fn reset() -> Self {
        Self {
            min_length: 8,
            ..Self::registration()
        }
    }

    /// Length-only rules for demos and low-stakes forms
    pub fn relaxed() -> Self {
        Self {
            min_length: 8,
            max_length: 0,
            require_uppercase: false,
            require_lowercase: false,
            require_digit: false,
            require_symbol: false,
        }
    }
}

/// Coarse strength buckets for meter display
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthLevel {
    VeryWeak,
    Weak,
    Fair,
    Strong,
    VeryStrong,
}

impl StrengthLevel {
    /// Human-readable label
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLevel::VeryWeak => "Very Weak",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Fair => "Fair",
            StrengthLevel::Strong => "Strong",
            StrengthLevel::VeryStrong => "Very Strong",
        }
    }
}

/// Result of validating a password against a rule set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    /// Strength bucket derived from the score
    pub level: StrengthLevel,
    /// Advisory score, 0-100
    pub score: u8,
    /// Rules the password fails, as display-ready phrases
    pub violations: Vec<String>,
    /// Rules the password satisfies, as display-ready phrases
    pub satisfied: Vec<String>,
    /// True iff every active rule is satisfied
    pub meets_rules: bool,
}

/// Validates passwords against a fixed rule set
#[derive(Debug, Clone, Default)]
pub struct PasswordValidator {
    rules: PasswordRules,
}

impl PasswordValidator {
    pub fn new(rules: PasswordRules) -> Self {
        Self { rules }
    }

    /// The rule set this validator applies
    pub fn rules(&self) -> &PasswordRules {
        &self.rules
    }

    /// Validate a password, producing the full report
    pub fn validate(&self, password: &str) -> StrengthReport {
        let mut violations = Vec::new();
        let mut satisfied = Vec::new();

        let length = password.chars().count();
        let has_uppercase = password.chars().any(|c| c.is_uppercase());
        let has_lowercase = password.chars().any(|c| c.is_lowercase());
        let has_digit = password.chars().any(|c| c.is_ascii_digit());
        let has_symbol = password.chars().any(is_symbol);

        let min_phrase = format!("at least {} characters", self.rules.min_length);
        if length >= self.rules.min_length {
            satisfied.push(min_phrase);
        } else {
            violations.push(min_phrase);
        }

        // Max length is only surfaced when violated
        if self.rules.max_length > 0 && length > self.rules.max_length {
            violations.push(format!("at most {} characters", self.rules.max_length));
        }

        let class_rules = [
            (
                self.rules.require_uppercase,
                has_uppercase,
                "an uppercase letter",
            ),
            (
                self.rules.require_lowercase,
                has_lowercase,
                "a lowercase letter",
            ),
            (self.rules.require_digit, has_digit, "a digit"),
            (self.rules.require_symbol, has_symbol, "a symbol"),
        ];
        for (required, present, phrase) in class_rules {
            if !required {
                continue;
            }
            if present {
                satisfied.push(phrase.to_string());
            } else {
                violations.push(phrase.to_string());
            }
        }

        let score = score_password(password);

        StrengthReport {
            level: level_for(score),
            score,
            meets_rules: violations.is_empty(),
            violations,
            satisfied,
        }
    }

    /// Whether every active rule is satisfied
    pub fn meets_rules(&self, password: &str) -> bool {
        self.validate(password).meets_rules
    }
}

fn is_symbol(c: char) -> bool {
    !c.is_alphanumeric() && !c.is_whitespace()
}

/// Score a password 0-100: up to 40 points for length, up to 40 for
/// character variety, up to 20 for distinct characters.
fn score_password(password: &str) -> u8 {
    if password.is_empty() {
        return 0;
    }

    let length = password.chars().count();
    let length_points = (length * 2).min(40);

    let classes = [
        password.chars().any(|c| c.is_uppercase()),
        password.chars().any(|c| c.is_lowercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(is_symbol),
    ];
    let variety_points = classes.iter().filter(|present| **present).count() * 10;

    let mut unique: Vec<char> = password.chars().collect();
    unique.sort_unstable();
    unique.dedup();
    let uniqueness_points = (unique.len() * 2).min(20);

    (length_points + variety_points + uniqueness_points) as u8
}

fn level_for(score: u8) -> StrengthLevel {
    match score {
        0..=24 => StrengthLevel::VeryWeak,
        25..=44 => StrengthLevel::Weak,
        45..=64 => StrengthLevel::Fair,
        65..=84 => StrengthLevel::Strong,
        _ => StrengthLevel::VeryStrong,
    }
}
