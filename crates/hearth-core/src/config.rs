use serde::{Deserialize, Serialize};

/// Production backend base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.hearthcrm.com/api";

/// Fixed request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Path prefix under which endpoints accept anonymous requests.
pub const DEFAULT_AUTH_PREFIX: &str = "/auth";

/// Backend API configuration.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL all endpoints are resolved against.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Prefix identifying unauthenticated endpoints (sign-in, sign-up).
    #[serde(default = "default_auth_prefix")]
    pub auth_prefix: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_auth_prefix() -> String {
    DEFAULT_AUTH_PREFIX.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            auth_prefix: default_auth_prefix(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.auth_prefix, "/auth");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: ApiConfig = toml::from_str("base_url = \"http://localhost:3000\"").unwrap();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.auth_prefix, "/auth");
    }
}
