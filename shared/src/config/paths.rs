//! Cross-platform path helpers for Passform preferences
//!
//! Consistent resolution of the preferences location across platforms, plus
//! the small path conveniences the frontend needs for display and CLI input.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::constants::APP_DIR_NAME;

/// Get the user's configuration directory for Passform
///
/// This follows platform conventions:
/// - Linux: ~/.config/passform
/// - Windows: %APPDATA%/passform
/// - macOS: ~/Library/Application Support/passform
pub fn get_config_directory() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|p| p.join(".config")))
        .context("Could not determine config directory")?
        .join(APP_DIR_NAME);

    Ok(config_dir)
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {path:?}"))?;
    }
    Ok(())
}

/// Get a relative path from the user's home directory if possible
pub fn get_relative_to_home(path: &Path) -> Option<PathBuf> {
    if let Some(home_dir) = dirs::home_dir() {
        path.strip_prefix(&home_dir).ok().map(|p| p.to_path_buf())
    } else {
        None
    }
}

/// Expand a path that starts with ~ to the full home directory path
pub fn expand_home_path(path: &str) -> Result<PathBuf> {
    if let Some(relative_path) = path.strip_prefix('~') {
        let home_dir = dirs::home_dir().context("Could not determine home directory")?;
        if relative_path.starts_with('/') || relative_path.starts_with('\\') {
            Ok(home_dir.join(&relative_path[1..]))
        } else if relative_path.is_empty() {
            Ok(home_dir)
        } else {
            Ok(home_dir.join(relative_path))
        }
    } else {
        Ok(PathBuf::from(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_directory() {
        let config_dir = get_config_directory().unwrap();
        assert!(config_dir.to_string_lossy().contains("passform"));
    }

    #[test]
    fn test_expand_home_path() {
        let expanded = expand_home_path("~/prefs/passform.toml").unwrap();
        assert!(expanded.is_absolute());
        assert!(expanded.to_string_lossy().contains("prefs"));
        assert!(expanded.to_string_lossy().contains("passform.toml"));

        let expanded_root = expand_home_path("~").unwrap();
        assert!(expanded_root.is_absolute());

        let non_home = expand_home_path("/absolute/path").unwrap();
        assert_eq!(non_home, PathBuf::from("/absolute/path"));
    }

    #[test]
    fn test_relative_to_home() {
        if let Some(home_dir) = dirs::home_dir() {
            let user_path = home_dir.join("prefs").join("passform.toml");
            let relative = get_relative_to_home(&user_path).unwrap();
            assert_eq!(relative, PathBuf::from("prefs/passform.toml"));

            let non_user_path = PathBuf::from("/etc/passwd");
            assert!(get_relative_to_home(&non_user_path).is_none());
        }
    }

    #[test]
    fn test_ensure_directory_exists() {
        let temp = tempfile::tempdir().unwrap();
        let nested = temp.path().join("a").join("b");
        ensure_directory_exists(&nested).unwrap();
        assert!(nested.is_dir());

        // Idempotent on an existing directory
        ensure_directory_exists(&nested).unwrap();
    }
}
