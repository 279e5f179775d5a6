//! Outbound request descriptor.
//!
//! Screens describe a backend call with [`ApiRequest`] and hand it to the
//! gateway. The descriptor is purely declarative: the gateway injects
//! authentication headers and the transport turns it into a real HTTP call.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// HTTP methods supported by the backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Returns the method as an uppercase HTTP verb.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// Describes a single outbound API call.
///
/// The `endpoint` is a logical path relative to the configured base URL
/// (e.g. `/properties`). Body and query parameters are passed through to
/// the transport untouched; the gateway only ever inspects and merges
/// headers.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// Logical path under the backend base URL.
    pub endpoint: String,
    /// HTTP method (defaults to GET).
    pub method: HttpMethod,
    /// Caller-supplied headers. The injected `Authorization` header
    /// always wins over a caller-supplied one.
    pub headers: HashMap<String, String>,
    /// Optional JSON payload.
    pub body: Option<Value>,
    /// Query parameters, applied in order.
    pub params: Vec<(String, String)>,
}

impl ApiRequest {
    /// Creates a request with the given endpoint and default method (GET).
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            method: HttpMethod::default(),
            headers: HashMap::new(),
            body: None,
            params: Vec::new(),
        }
    }

    /// Creates a GET request.
    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(endpoint)
    }

    /// Creates a POST request.
    pub fn post(endpoint: impl Into<String>) -> Self {
        Self::new(endpoint).with_method(HttpMethod::Post)
    }

    /// Creates a PUT request.
    pub fn put(endpoint: impl Into<String>) -> Self {
        Self::new(endpoint).with_method(HttpMethod::Put)
    }

    /// Creates a DELETE request.
    pub fn delete(endpoint: impl Into<String>) -> Self {
        Self::new(endpoint).with_method(HttpMethod::Delete)
    }

    /// Overrides the HTTP method.
    pub fn with_method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    /// Adds a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets the JSON body.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Adds a query parameter.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }
}
