//! HTTP transport seam.
//!
//! The gateway never talks to the network directly; it goes through the
//! [`HttpTransport`] trait. The trait's contract deliberately separates
//! "the server answered with some status" (`Ok(TransportResponse)`, any
//! status code) from "no response reached the client at all"
//! (`Err(TransportError)`). The gateway's error-normalization policy
//! depends on that distinction.

use crate::request::ApiRequest;
use serde_json::Value;
use thiserror::Error;

/// A server response, successful or not.
///
/// The body is decoded JSON when the server sent JSON, or a JSON string
/// wrapping the raw text otherwise. The gateway returns success bodies
/// verbatim and only inspects error bodies for a `message`/`error` field.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code of the response.
    pub status: u16,
    /// Decoded response body.
    pub body: Value,
}

impl TransportResponse {
    /// Creates a response from a status code and decoded body.
    pub fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// Returns `true` for 2xx status codes.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A request that never received any server response.
///
/// Covers connection failures, DNS errors, and timeouts. Anything that
/// produced a status code, however unhappy, is a [`TransportResponse`].
#[derive(Debug, Clone, Error)]
#[error("transport failure: {message}")]
pub struct TransportError {
    /// The underlying transport library's message.
    pub message: String,
    /// Whether the failure was a timeout (the fixed 30-second budget).
    pub is_timeout: bool,
}

impl TransportError {
    /// Creates a non-timeout transport error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_timeout: false,
        }
    }

    /// Creates a timeout transport error.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_timeout: true,
        }
    }
}

/// Executes one prepared request against the backend.
///
/// Implementations own the base URL and the fixed timeout. The request's
/// headers are final at this point — the gateway has already merged in
/// `Content-Type` and `Authorization`.
#[async_trait::async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends the request and returns the server's response.
    ///
    /// # Returns
    ///
    /// - `Ok(TransportResponse)`: the server answered (any status code)
    /// - `Err(TransportError)`: no response reached the client
    async fn send(&self, request: &ApiRequest) -> Result<TransportResponse, TransportError>;
}
