//! Durable key-value storage trait.
//!
//! Defines the interface the credential manager persists through. The
//! backing store only needs single-key atomicity; the manager never
//! performs multi-key transactions.

use crate::error::Result;

/// Fixed storage key under which the bearer token is persisted.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Durable string key-value storage.
///
/// # Security Note
///
/// Implementations should ensure that:
/// - Credential files have appropriate permissions (e.g., 600 on Unix)
/// - Stored values are never logged or exposed in error messages
#[async_trait::async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))`: a value is stored under `key`
    /// - `Ok(None)`: no value is stored under `key`
    /// - `Err(HearthError)`: the storage layer failed
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any existing value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Deletes the value under `key`. Deleting a missing key is a no-op.
    async fn remove(&self, key: &str) -> Result<()>;
}
