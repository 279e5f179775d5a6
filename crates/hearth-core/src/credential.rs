//! Credential lifecycle management.
//!
//! [`CredentialManager`] owns the single bearer credential shared by the
//! whole client. It keeps the in-memory copy and the persisted copy
//! consistent: every memory write is followed by a storage write before
//! the setter returns, and reads hydrate from storage at most once per
//! process lifetime.

use crate::error::Result;
use crate::identity::IdentityProvider;
use crate::storage::{AUTH_TOKEN_KEY, KeyValueStorage};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Maintains exactly one current bearer credential.
///
/// The manager is an explicitly constructed, dependency-injected object:
/// the storage and identity provider are fields, not ambient state. Wire
/// one instance at the composition root and share it via `Arc`.
///
/// Conceptually the credential moves between two states:
/// UNAUTHENTICATED (no token) and AUTHENTICATED (token present).
/// `set_token` and a successful `refresh_if_possible` move it into
/// AUTHENTICATED; `clear_token` moves it back. There is no intermediate
/// "refreshing" state visible to callers.
pub struct CredentialManager {
    storage: Arc<dyn KeyValueStorage>,
    identity: Arc<dyn IdentityProvider>,
    /// Outer `None` means storage has not been consulted yet; inner
    /// `Option` is the cached token (a cached "absent" is valid and
    /// prevents repeated storage reads).
    cache: RwLock<Option<Option<String>>>,
}

impl CredentialManager {
    /// Creates a manager over the given storage and identity provider.
    pub fn new(storage: Arc<dyn KeyValueStorage>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self {
            storage,
            identity,
            cache: RwLock::new(None),
        }
    }

    /// Stores `token` in memory and durable storage.
    ///
    /// The memory copy is updated first so that concurrent readers see
    /// the new token immediately; the storage write completes before the
    /// call returns. A storage failure propagates without retry.
    pub async fn set_token(&self, token: &str) -> Result<()> {
        {
            let mut cache = self.cache.write().await;
            *cache = Some(Some(token.to_string()));
        }
        self.storage.set(AUTH_TOKEN_KEY, token).await?;
        debug!("stored bearer token");
        Ok(())
    }

    /// Returns the current token, if any.
    ///
    /// Prefers the in-memory copy; otherwise performs one read from
    /// durable storage and caches the result (even when absent).
    pub async fn token(&self) -> Result<Option<String>> {
        // Check if already hydrated
        {
            let cache = self.cache.read().await;
            if let Some(ref cached) = *cache {
                return Ok(cached.clone());
            }
        }

        let loaded = self.storage.get(AUTH_TOKEN_KEY).await?;

        // Cache it, including a cached "absent"
        {
            let mut cache = self.cache.write().await;
            *cache = Some(loaded.clone());
        }

        Ok(loaded)
    }

    /// Removes the token from memory and deletes the durable entry.
    ///
    /// Idempotent: clearing when no token exists is a no-op.
    pub async fn clear_token(&self) -> Result<()> {
        {
            let mut cache = self.cache.write().await;
            *cache = Some(None);
        }
        self.storage.remove(AUTH_TOKEN_KEY).await?;
        debug!("cleared bearer token");
        Ok(())
    }

    /// Refreshes the credential if an identity session is active.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(token))`: a fresh token was minted and stored
    /// - `Ok(None)`: no active session, refresh unavailable (not an error)
    /// - `Err(HearthError)`: the provider call or the storage write failed
    pub async fn refresh_if_possible(&self) -> Result<Option<String>> {
        if !self.identity.active_session().await {
            debug!("no active identity session, refresh unavailable");
            return Ok(None);
        }

        let token = self.identity.mint_token().await.inspect_err(|e| {
            warn!("token refresh failed: {e}");
        })?;
        self.set_token(&token).await?;
        debug!("refreshed bearer token");
        Ok(Some(token))
    }
}
