//! HTTP request gateway.
//!
//! [`ApiClient`] executes one request descriptor against the backend,
//! attaches the bearer credential, and applies exactly one
//! refresh-and-retry cycle on an authorization failure. Every other
//! failure is normalized and surfaced immediately; the screens decide
//! how to present it.

use crate::http_transport::ReqwestTransport;
use hearth_core::config::ApiConfig;
use hearth_core::credential::CredentialManager;
use hearth_core::error::{HearthError, Result};
use hearth_core::request::ApiRequest;
use hearth_core::transport::{HttpTransport, TransportError, TransportResponse};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Gateway for all backend calls.
///
/// Construct one at the composition root and share it via `Arc`; the
/// credential manager and transport are injected dependencies, not
/// ambient state.
pub struct ApiClient {
    credentials: Arc<CredentialManager>,
    transport: Arc<dyn HttpTransport>,
    auth_prefix: String,
}

impl ApiClient {
    /// Creates a gateway over the given transport.
    pub fn new(
        credentials: Arc<CredentialManager>,
        transport: Arc<dyn HttpTransport>,
        config: &ApiConfig,
    ) -> Self {
        Self {
            credentials,
            transport,
            auth_prefix: config.auth_prefix.clone(),
        }
    }

    /// Creates a gateway with the production reqwest transport.
    pub fn from_config(credentials: Arc<CredentialManager>, config: &ApiConfig) -> Result<Self> {
        let transport = Arc::new(ReqwestTransport::new(config)?);
        Ok(Self::new(credentials, transport, config))
    }

    /// Executes a request descriptor and returns the decoded body.
    ///
    /// # Errors
    ///
    /// Always a normalized [`HearthError::Api`]:
    /// - `status: 0` — no server response (never retried)
    /// - `status: 401` — no credential available, or the single
    ///   refresh-and-retry cycle did not recover
    /// - any other status — passed through with the server's message
    ///
    /// Storage-layer failures while resolving the credential surface as
    /// their own variants.
    pub async fn request(&self, request: ApiRequest) -> Result<Value> {
        let token = self.credentials.token().await?;
        let anonymous_ok = self.is_auth_endpoint(&request.endpoint);

        // Fast-fail guard: authenticated endpoint, nothing to send.
        if token.is_none() && !anonymous_ok {
            debug!(endpoint = %request.endpoint, "no credential for authenticated endpoint");
            return Err(HearthError::auth_required());
        }

        debug!(method = request.method.as_str(), endpoint = %request.endpoint, "dispatching request");
        let response = match self.send_once(&request, token.as_deref()).await {
            Ok(response) => response,
            Err(e) => return Err(Self::network_failure(&request, &e)),
        };

        if response.is_success() {
            return Ok(response.body);
        }

        if response.status == 401 && !anonymous_ok {
            return self.recover_unauthorized(&request, token.as_deref()).await;
        }

        Err(Self::normalize(&response))
    }

    /// GET convenience wrapper.
    pub async fn get(&self, endpoint: impl Into<String>) -> Result<Value> {
        self.request(ApiRequest::get(endpoint)).await
    }

    /// POST convenience wrapper.
    pub async fn post(&self, endpoint: impl Into<String>, body: Value) -> Result<Value> {
        self.request(ApiRequest::post(endpoint).with_body(body)).await
    }

    /// PUT convenience wrapper.
    pub async fn put(&self, endpoint: impl Into<String>, body: Value) -> Result<Value> {
        self.request(ApiRequest::put(endpoint).with_body(body)).await
    }

    /// DELETE convenience wrapper.
    pub async fn delete(&self, endpoint: impl Into<String>) -> Result<Value> {
        self.request(ApiRequest::delete(endpoint)).await
    }

    /// One refresh-and-retry cycle after a 401.
    ///
    /// A second 401 (or any other failure) from the retry is final;
    /// there is never a third transport call.
    async fn recover_unauthorized(
        &self,
        request: &ApiRequest,
        used_token: Option<&str>,
    ) -> Result<Value> {
        let fresh = match self.credentials.refresh_if_possible().await {
            Ok(Some(token)) if Some(token.as_str()) != used_token => token,
            Ok(_) | Err(_) => {
                // No session, refresh failed, or the provider handed back
                // the credential the server just rejected.
                if let Err(e) = self.credentials.clear_token().await {
                    warn!("failed to clear rejected credential: {e}");
                }
                return Err(HearthError::auth_failed());
            }
        };

        info!(endpoint = %request.endpoint, "retrying with refreshed credential");
        match self.send_once(request, Some(&fresh)).await {
            Ok(response) if response.is_success() => Ok(response.body),
            Ok(response) => Err(Self::normalize(&response)),
            Err(e) => Err(Self::network_failure(request, &e)),
        }
    }

    /// Builds the final header set and issues exactly one transport call.
    async fn send_once(
        &self,
        request: &ApiRequest,
        token: Option<&str>,
    ) -> std::result::Result<TransportResponse, TransportError> {
        let mut headers: HashMap<String, String> = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        for (name, value) in &request.headers {
            headers.insert(name.clone(), value.clone());
        }
        // Injected last: a caller-supplied Authorization never survives.
        if let Some(token) = token {
            headers.insert("Authorization".to_string(), format!("Bearer {token}"));
        }

        let prepared = ApiRequest {
            headers,
            ..request.clone()
        };
        self.transport.send(&prepared).await
    }

    fn is_auth_endpoint(&self, endpoint: &str) -> bool {
        endpoint.starts_with(&self.auth_prefix)
    }

    fn network_failure(request: &ApiRequest, error: &TransportError) -> HearthError {
        warn!(endpoint = %request.endpoint, "no response from backend: {error}");
        HearthError::network()
    }

    /// Normalizes a non-2xx response to `{status, message}`.
    fn normalize(response: &TransportResponse) -> HearthError {
        let message = response
            .body
            .get("message")
            .or_else(|| response.body.get("error"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Request failed with status {}", response.status));

        HearthError::api(response.status, message)
    }
}
