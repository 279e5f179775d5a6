//! Configuration service implementation.
//!
//! This module provides a ConfigService that loads the API configuration
//! from the configuration file (~/.config/hearth/config.toml).

use crate::paths::HearthPaths;
use hearth_core::config::ApiConfig;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use tracing::warn;

/// Configuration service that loads and caches the API configuration.
///
/// This implementation reads the configuration from config.toml and
/// caches it to avoid repeated file I/O operations. A missing or
/// unparsable file falls back to [`ApiConfig::default`].
#[derive(Debug, Clone)]
pub struct ConfigService {
    /// Cached configuration loaded from file.
    /// Uses RwLock for thread-safe lazy loading.
    config: Arc<RwLock<Option<ApiConfig>>>,
    /// Path to config.toml, overridable for tests.
    path: Option<PathBuf>,
}

impl ConfigService {
    /// Creates a new ConfigService using the default config path.
    ///
    /// The configuration is loaded lazily on first access to avoid
    /// blocking during initialization.
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(None)),
            path: None,
        }
    }

    /// Creates a ConfigService reading from a custom path (for testing).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config: Arc::new(RwLock::new(None)),
            path: Some(path.into()),
        }
    }

    /// Gets the API configuration, loading from file if not cached.
    pub fn get_config(&self) -> ApiConfig {
        // Check if already cached
        {
            let read_lock = self.config.read().unwrap();
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = self.load_config().unwrap_or_else(|e| {
            warn!("falling back to default API config: {e}");
            ApiConfig::default()
        });

        // Cache it
        {
            let mut write_lock = self.config.write().unwrap();
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap();
        *write_lock = None;
    }

    fn load_config(&self) -> anyhow::Result<ApiConfig> {
        let path = match &self.path {
            Some(path) => path.clone(),
            None => HearthPaths::config_file()
                .map_err(|e| anyhow::anyhow!("Failed to resolve config path: {e}"))?,
        };

        if !path.exists() {
            return Ok(ApiConfig::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));

        assert_eq!(service.get_config(), ApiConfig::default());
    }

    #[test]
    fn test_loads_and_caches_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "base_url = \"http://localhost:3000/api\"").unwrap();

        let service = ConfigService::with_path(&path);
        assert_eq!(service.get_config().base_url, "http://localhost:3000/api");

        // Cached value survives file deletion until invalidated
        std::fs::remove_file(&path).unwrap();
        assert_eq!(service.get_config().base_url, "http://localhost:3000/api");

        service.invalidate_cache();
        assert_eq!(service.get_config(), ApiConfig::default());
    }
}
