//! Unified path management for hearth configuration files.
//!
//! All hearth configuration and credential data live under one config
//! directory so every storage mechanism resolves paths the same way.
//!
//! This ensures consistency across all platforms (Linux, macOS, Windows).

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for hearth.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/hearth/            # Config directory
/// ├── config.toml              # API configuration (base URL, timeout)
/// └── credentials.json         # Persisted bearer credential
/// ```
pub struct HearthPaths;

impl HearthPaths {
    /// Returns the hearth configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/hearth/`)
    /// - `Err(PathError::ConfigDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("hearth"))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the credentials file.
    ///
    /// # Security Note
    ///
    /// Ensure this file has appropriate permissions (e.g., 600) to prevent
    /// unauthorized access. [`crate::FileKeyValueStorage`] sets them when
    /// it creates the file.
    pub fn credentials_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("credentials.json"))
    }
}
