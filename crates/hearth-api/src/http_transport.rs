//! Reqwest-backed transport.
//!
//! Turns an [`ApiRequest`] into a real HTTP call against the configured
//! base URL. Whether an unhappy status code came back and what to do
//! about it is the gateway's business; this layer only distinguishes
//! "got a response" from "got nothing".

use hearth_core::config::ApiConfig;
use hearth_core::error::{HearthError, Result};
use hearth_core::request::{ApiRequest, HttpMethod};
use hearth_core::transport::{HttpTransport, TransportError, TransportResponse};
use reqwest::{Client, Method};
use serde_json::Value;
use std::time::Duration;

/// Production transport over a shared `reqwest::Client`.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl ReqwestTransport {
    /// Creates a transport for the given API configuration.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| HearthError::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.timeout_secs),
        })
    }

    fn method_for(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

#[async_trait::async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: &ApiRequest) -> std::result::Result<TransportResponse, TransportError> {
        let url = format!("{}{}", self.base_url, request.endpoint);

        let mut builder = self
            .client
            .request(Self::method_for(request.method), &url)
            .timeout(self.timeout);

        if !request.params.is_empty() {
            builder = builder.query(&request.params);
        }

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::timeout(e.to_string())
            } else {
                TransportError::new(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| TransportError::new(format!("Failed to read response body: {e}")))?;

        // Backend responses are JSON; anything else is wrapped as a string
        // so error normalization still has something to work with.
        let body = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };

        Ok(TransportResponse::new(status, body))
    }
}
