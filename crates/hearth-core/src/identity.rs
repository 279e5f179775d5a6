//! Identity provider trait.
//!
//! The identity provider is the external authentication service that
//! issues bearer tokens. The core never inspects token contents; it only
//! asks the provider whether a session is active and, if so, for a fresh
//! credential.

use crate::error::Result;

/// External identity provider session.
#[async_trait::async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Returns `true` when a user is currently signed in with the provider.
    async fn active_session(&self) -> bool;

    /// Mints a fresh bearer token for the current session, bypassing any
    /// cache the provider itself might keep.
    ///
    /// # Returns
    ///
    /// - `Ok(token)`: a freshly minted credential
    /// - `Err(HearthError)`: the provider call failed (network, revoked
    ///   session); callers decide whether to clear the stored token
    async fn mint_token(&self) -> Result<String>;
}
