//! Error types for the Hearth client core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message used when a request never received a server response.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error - please check your connection";

/// Message used when a request requires a token and none is available.
pub const AUTH_REQUIRED_MESSAGE: &str = "Authentication required";

/// Message used when the refresh-and-retry cycle could not recover a 401.
pub const AUTH_FAILED_MESSAGE: &str = "Authentication failed. Please log in again.";

/// A shared error type for the Hearth client core.
///
/// Gateway failures always surface as the `Api` variant carrying the
/// backend's status code and message (`status: 0` means no server
/// response reached the client at all). The remaining variants cover
/// the storage and configuration layers.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum HearthError {
    /// A request failed with a normalized `{status, message}` pair.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HearthError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an Api error with an explicit status and message.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Creates the transport-failure error (`status: 0`).
    pub fn network() -> Self {
        Self::api(0, NETWORK_ERROR_MESSAGE)
    }

    /// Creates the pre-flight 401 raised when no token is available.
    pub fn auth_required() -> Self {
        Self::api(401, AUTH_REQUIRED_MESSAGE)
    }

    /// Creates the terminal 401 raised when refresh could not recover.
    pub fn auth_failed() -> Self {
        Self::api(401, AUTH_FAILED_MESSAGE)
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is an Api error
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// Check if this is an Api error with status 401
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status: 401, .. })
    }

    /// Returns the HTTP status of an Api error, `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for HearthError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for HearthError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for HearthError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, HearthError>`.
pub type Result<T> = std::result::Result<T, HearthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_shape() {
        let err = HearthError::network();
        assert_eq!(err.status(), Some(0));
        assert!(err.is_api());
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_auth_errors_are_unauthorized() {
        assert!(HearthError::auth_required().is_unauthorized());
        assert!(HearthError::auth_failed().is_unauthorized());
    }

    #[test]
    fn test_server_error_carries_message() {
        let err = HearthError::api(500, "boom");
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.to_string(), "API error (500): boom");
    }
}
