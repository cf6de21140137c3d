//! Preference management for Passform
//!
//! Desktop hosts persist their form configuration and display options as a
//! TOML file under the platform config directory. [`PrefsManager`] owns the
//! file: loading falls back to defaults when the file is missing, and saving
//! creates the directory on first use. Secret values are never written here.

pub mod paths;
pub mod prefs;

pub use prefs::{
    AppPrefs, FormConfig, GlyphPair, MatchConfig, RulePreset, ToggleConfig, ToggleLabels, UiPrefs,
};

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::constants::PREFS_FILE_NAME;
use crate::error::{PassformError, PassformResult};

/// Loads and saves the preferences file
#[derive(Debug)]
pub struct PrefsManager {
    prefs_path: PathBuf,
    prefs: AppPrefs,
    loaded: bool,
}

impl PrefsManager {
    /// Create a manager over the default platform location
    pub fn new() -> PassformResult<Self> {
        let config_dir = paths::get_config_directory()?;
        Ok(Self::with_path(config_dir.join(PREFS_FILE_NAME)))
    }

    /// Create a manager over an explicit preferences file path
    pub fn with_path(prefs_path: PathBuf) -> Self {
        Self {
            prefs_path,
            prefs: AppPrefs::default(),
            loaded: false,
        }
    }

    /// Path of the preferences file
    pub fn prefs_file_path(&self) -> &Path {
        &self.prefs_path
    }

    /// Load preferences from disk.
    ///
    /// A missing file is not an error: defaults stay in place and the first
    /// save will create it. An unreadable or invalid file is an error; the
    /// caller decides whether to surface it and continue on defaults via
    /// [`PrefsManager::reset_to_defaults`].
    pub fn load(&mut self) -> PassformResult<()> {
        if !self.prefs_path.exists() {
            debug!(
                "no preferences file at {}, using defaults",
                self.prefs_path.display()
            );
            self.prefs = AppPrefs::default();
            self.loaded = true;
            return Ok(());
        }

        let contents = fs::read_to_string(&self.prefs_path)?;
        let prefs: AppPrefs = toml::from_str(&contents)?;
        prefs.form.validate()?;

        debug!("loaded preferences from {}", self.prefs_path.display());
        self.prefs = prefs;
        self.loaded = true;
        Ok(())
    }

    /// Replace current preferences with defaults and mark them live
    pub fn reset_to_defaults(&mut self) {
        self.prefs = AppPrefs::default();
        self.loaded = true;
    }

    /// Save current preferences, creating the parent directory if needed
    pub fn save(&self) -> PassformResult<()> {
        if !self.loaded {
            return Err(PassformError::Config {
                message: "preferences were never loaded".to_string(),
            });
        }

        if let Some(parent) = self.prefs_path.parent() {
            paths::ensure_directory_exists(parent)?;
        }

        let rendered = toml::to_string_pretty(&self.prefs)?;
        fs::write(&self.prefs_path, rendered)?;
        info!("saved preferences to {}", self.prefs_path.display());
        Ok(())
    }

    /// Get immutable reference to current preferences
    pub fn prefs(&self) -> &AppPrefs {
        &self.prefs
    }

    /// Get mutable reference to current preferences
    pub fn prefs_mut(&mut self) -> &mut AppPrefs {
        &mut self.prefs
    }

    /// Check if preferences have been loaded
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}
