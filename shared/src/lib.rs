//! Passform Shared Library
//!
//! This crate contains the toolkit-independent logic behind Passform's
//! password form components. It pairs a secret input's visibility state with
//! the glyph and label projected onto its toggle control, keeps a primary and
//! confirmation value in sync with the derived submit state, and validates
//! passwords against configurable rule sets.
//!
//! # Features
//!
//! - **Visibility state**: obscured/plain mode with the toggle control's
//!   glyph, accessible label, and pressed state derived from it
//! - **Confirmation matching**: pure recompute over the current values with
//!   a neutral/mismatch/valid state machine and submit gating
//! - **Strength validation**: rule presets with display-ready violation and
//!   satisfaction phrases plus an advisory score
//! - **Preferences**: TOML-backed form configuration under the platform
//!   config directory
//!
//! # Usage
//!
//! ```rust
//! use passform_shared::{ConfirmMatch, MatchState, SecretValue};
//!
//! // A password field starts obscured; activating the toggle reveals it
//! let mut password = SecretValue::with_value("hunter2secret");
//! password.toggle();
//! assert!(!password.is_obscured());
//!
//! // The confirmation validator recomputes on every edit
//! let mut confirm = ConfirmMatch::new();
//! confirm.set_primary(password.value().to_string());
//! let report = confirm.set_confirmation("hunter2secret".to_string());
//!
//! assert_eq!(report.state, MatchState::Valid);
//! assert!(report.is_valid);
//! ```

pub mod config;
pub mod form;
pub mod validation;

// Re-export commonly used types for convenience
pub use form::{ConfirmMatch, MatchReport, MatchState, SecretValue, VisibilityMode};

// Re-export config functionality
pub use config::{
    AppPrefs, FormConfig, GlyphPair, MatchConfig, PrefsManager, RulePreset, ToggleConfig,
    ToggleLabels, UiPrefs,
};

// Re-export validation functionality
pub use validation::{PasswordRules, PasswordValidator, StrengthLevel, StrengthReport};

/// Current library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error types used throughout the library
pub mod error {
    use thiserror::Error;

    /// Common error type for shared library operations
    #[derive(Error, Debug)]
    pub enum PassformError {
        #[error("Validation error: {message}")]
        Validation { message: String },

        #[error("Configuration error: {message}")]
        Config { message: String },

        #[error("Could not parse preferences: {0}")]
        PrefsParse(#[from] toml::de::Error),

        #[error("Could not serialize preferences: {0}")]
        PrefsRender(#[from] toml::ser::Error),

        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),

        #[error("Internal error: {message}")]
        Internal { message: String },
    }

    impl From<anyhow::Error> for PassformError {
        fn from(error: anyhow::Error) -> Self {
            PassformError::Internal {
                message: error.to_string(),
            }
        }
    }

    /// Result type alias for shared library operations
    pub type PassformResult<T> = Result<T, PassformError>;
}

pub use error::{PassformError, PassformResult};

/// Library configuration and constants
pub mod constants {
    /// Directory name under the platform config root
    pub const APP_DIR_NAME: &str = "passform";

    /// Preferences file name inside the app config directory
    pub const PREFS_FILE_NAME: &str = "preferences.toml";

    /// Longest password any built-in rule set accepts
    pub const MAX_PASSWORD_LENGTH: usize = 64;
}
