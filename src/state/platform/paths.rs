//! Platform-specific path helpers for configuration and data directories.
//!
//! | Platform | Config Dir | Data Dir |
//! |----------|------------|----------|
//! | Linux | `~/.config/wcm-modal` | `~/.local/share/wcm-modal` |
//! | macOS | `~/Library/Application Support/wcm-modal` | Same as config |
//! | Windows | `%APPDATA%/wcm-modal` | `%LOCALAPPDATA%/wcm-modal` |

use std::fs;
use std::path::PathBuf;

use crate::domain::{ModalError, Result};

// ============================================================================
// Constants
// ============================================================================

/// Application name used for directory naming.
pub const APP_NAME: &str = "wcm-modal";

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Persistent key-value storage file name.
pub const STORAGE_FILE_NAME: &str = "storage.json";

/// Log file name.
pub const LOG_FILE_NAME: &str = "wcm-modal.log";

// ============================================================================
// AppPaths
// ============================================================================

/// Resolves application directories and files for the current platform.
#[derive(Debug, Clone)]
pub struct AppPaths {
    app_name: String,
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}

impl AppPaths {
    /// Creates paths for the default application name.
    #[must_use]
    pub fn new() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
        }
    }

    /// Creates paths for a custom application name.
    #[must_use]
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }

    /// Returns the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Returns the configuration directory, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be determined or created.
    pub fn config_dir(&self) -> Result<PathBuf> {
        let mut path = dirs::config_dir()
            .ok_or_else(|| ModalError::invalid_input("Could not find config directory"))?;
        path.push(&self.app_name);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// Returns the data directory, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be determined or created.
    pub fn data_dir(&self) -> Result<PathBuf> {
        let mut path = dirs::data_dir()
            .ok_or_else(|| ModalError::invalid_input("Could not find data directory"))?;
        path.push(&self.app_name);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// Path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory is unavailable.
    pub fn config_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Path to the key-value storage file.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory is unavailable.
    pub fn storage_file(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join(STORAGE_FILE_NAME))
    }

    /// Path to the log file.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory is unavailable.
    pub fn log_file(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join(LOG_FILE_NAME))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_paths_names() {
        assert_eq!(AppPaths::new().app_name(), APP_NAME);
        assert_eq!(AppPaths::default().app_name(), APP_NAME);
        assert_eq!(AppPaths::with_app_name("custom").app_name(), "custom");
    }

    #[test]
    fn test_config_file_location() {
        if let Ok(path) = AppPaths::new().config_file() {
            assert_eq!(path.file_name().and_then(|n| n.to_str()), Some(CONFIG_FILE_NAME));
            let parent = path
                .parent()
                .and_then(|p| p.file_name())
                .and_then(|n| n.to_str());
            assert_eq!(parent, Some(APP_NAME));
        }
        // Skip if config dir unavailable (CI environments)
    }

    #[test]
    fn test_storage_and_log_files() {
        let paths = AppPaths::new();
        if let Ok(path) = paths.storage_file() {
            assert_eq!(path.extension().and_then(|e| e.to_str()), Some("json"));
        }
        if let Ok(path) = paths.log_file() {
            assert_eq!(path.extension().and_then(|e| e.to_str()), Some("log"));
        }
    }
}
