//! The raw request/response seam every resource client talks through.
//!
//! [`Connection`] knows nothing about JSON typing or pagination; it sends one
//! [`ApiRequest`] and hands back one [`ApiResponse`], whatever its status.
//! [`crate::ApiConnection`] builds the typed operations on top.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;

use crate::error::Error;

/// Query parameters, kept sorted so requests are reproducible.
pub type Parameters = BTreeMap<String, String>;

/// Conversion of filter records into query parameters.
pub trait ToParameters {
    /// Build the query parameter map for this request.
    fn to_parameters(&self) -> Parameters;
}

/// A single request against the API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Path relative to the API root (`repos/octo/cat/forks`) or an absolute
    /// URL taken from a pagination link.
    pub path: String,
    /// Query parameters
    pub parameters: Parameters,
    /// JSON body
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Create a request with no parameters and no body.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            parameters: Parameters::new(),
            body: None,
        }
    }

    /// Shorthand for a GET request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    #[must_use]
    pub fn with_parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = parameters;
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Whether `path` is a full URL rather than an API-relative path.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.path.starts_with("http://") || self.path.starts_with("https://")
    }
}

/// A response as received from the API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers, names lowercased
    pub headers: HashMap<String, String>,
    /// Decoded JSON body (`Value::Null` when empty)
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: u16, body: Value) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body,
        }
    }

    /// Add a header; the name is stored lowercased.
    #[must_use]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers
            .insert(name.to_ascii_lowercase(), value.to_string());
        self
    }

    /// Look up a header by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs HTTP requests on behalf of the resource clients.
///
/// Transport failures are returned as `Err`; HTTP error statuses come back as
/// an `Ok(ApiResponse)` so the caller decides how to surface them.
#[async_trait]
pub trait Connection: Send + Sync {
    /// Send a request and return the raw response.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, Error>;
}
