//! Auth endpoint wrappers.
//!
//! Thin service over the gateway for the sign-in/sign-up/sign-out flows.
//! These endpoints live under the unauthenticated prefix, so the gateway
//! sends them with or without a credential; on success the returned
//! token is fed into the credential manager.

use crate::client::ApiClient;
use hearth_core::credential::CredentialManager;
use hearth_core::error::{HearthError, Result};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::warn;

const SIGN_IN_ENDPOINT: &str = "/auth/login";
const SIGN_UP_ENDPOINT: &str = "/auth/register";
const SIGN_OUT_ENDPOINT: &str = "/auth/logout";

/// Sign-in/sign-up/sign-out flows over the gateway.
pub struct AuthService {
    client: Arc<ApiClient>,
    credentials: Arc<CredentialManager>,
}

impl AuthService {
    /// Creates the service over a shared gateway and credential manager.
    pub fn new(client: Arc<ApiClient>, credentials: Arc<CredentialManager>) -> Self {
        Self {
            client,
            credentials,
        }
    }

    /// Signs in and stores the returned bearer token.
    ///
    /// Returns the full response body (user profile, subscription state)
    /// so screens can use it without a second round trip.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Value> {
        let body = json!({ "email": email, "password": password });
        let response = self.client.post(SIGN_IN_ENDPOINT, body).await?;
        self.store_token_from(&response).await?;
        Ok(response)
    }

    /// Registers a new account and stores the returned bearer token.
    pub async fn sign_up(&self, email: &str, password: &str, name: &str) -> Result<Value> {
        let body = json!({ "email": email, "password": password, "name": name });
        let response = self.client.post(SIGN_UP_ENDPOINT, body).await?;
        self.store_token_from(&response).await?;
        Ok(response)
    }

    /// Signs out: notifies the backend (best-effort) and clears the
    /// stored credential.
    ///
    /// The logout call failing must never leave the user stuck signed
    /// in, so its result is logged and dropped.
    pub async fn sign_out(&self) -> Result<()> {
        if let Err(e) = self.client.post(SIGN_OUT_ENDPOINT, json!({})).await {
            warn!("logout request failed, clearing credential anyway: {e}");
        }
        self.credentials.clear_token().await
    }

    async fn store_token_from(&self, response: &Value) -> Result<()> {
        let token = response
            .get("token")
            .and_then(Value::as_str)
            .ok_or_else(|| HearthError::internal("Auth response did not include a token"))?;
        self.credentials.set_token(token).await
    }
}
