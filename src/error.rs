//! Error types for the octohub client.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::connection::ApiResponse;

/// Main error type for the octohub client.
#[derive(Error, Debug)]
pub enum Error {
    /// A required argument was empty or otherwise unusable.
    ///
    /// Raised before any request is sent.
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: String,
    },

    /// HTTP transport error (connection refused, timeout, TLS, ...)
    #[error("HTTP error: {0}")]
    Http(String),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// GitHub API error
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl Error {
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// The API error, if this error came back from GitHub.
    #[must_use]
    pub fn api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

/// A single entry of the `errors` array GitHub returns with 422 responses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ValidationDetail {
    #[serde(default)]
    pub resource: Option<String>,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Typed errors for non-success GitHub API responses.
///
/// Each variant corresponds to a status code family.
#[derive(Error, Debug, Clone)]
pub enum ApiError {
    /// Bad or missing credentials (401).
    #[error("{message}")]
    Authentication {
        message: String,
        documentation_url: Option<String>,
        request_id: Option<String>,
    },

    /// Authenticated but not allowed (403).
    #[error("{message}")]
    Forbidden {
        message: String,
        documentation_url: Option<String>,
        request_id: Option<String>,
    },

    /// Resource not found, or hidden from the caller (404).
    #[error("{message}")]
    NotFound {
        message: String,
        documentation_url: Option<String>,
        request_id: Option<String>,
    },

    /// Conflicting state, e.g. an empty repository (409).
    #[error("{message}")]
    Conflict {
        message: String,
        documentation_url: Option<String>,
        request_id: Option<String>,
    },

    /// Request body or parameters were rejected (400, 422).
    #[error("{message}")]
    Validation {
        status: u16,
        message: String,
        errors: Vec<ValidationDetail>,
        documentation_url: Option<String>,
        request_id: Option<String>,
    },

    /// Primary or secondary rate limit hit (429, or 403 with no remaining quota).
    #[error("{message} (retry after {retry_after}s)")]
    RateLimited {
        status: u16,
        message: String,
        retry_after: u64,
        documentation_url: Option<String>,
        request_id: Option<String>,
    },

    /// Server-side failure (5xx).
    #[error("[{status}] {message}")]
    Server {
        status: u16,
        message: String,
        request_id: Option<String>,
    },

    /// Any other non-success status.
    #[error("[{status}] {message}")]
    Unexpected {
        status: u16,
        message: String,
        request_id: Option<String>,
    },
}

/// Fallback wait when GitHub reports a rate limit without a usable header.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

#[derive(Deserialize, Default)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    documentation_url: Option<String>,
    #[serde(default)]
    errors: Vec<ValidationDetail>,
}

impl ApiError {
    /// Build a typed error from a non-success response.
    #[must_use]
    pub fn from_response(response: &ApiResponse) -> Self {
        let status = response.status;
        let body: ErrorBody = match &response.body {
            Value::Object(_) => serde_json::from_value(response.body.clone()).unwrap_or_default(),
            _ => ErrorBody::default(),
        };
        let message = body
            .message
            .unwrap_or_else(|| format!("HTTP {status}"));
        let documentation_url = body.documentation_url;
        let request_id = response.header("x-github-request-id").map(String::from);

        let quota_exhausted = response.header("x-ratelimit-remaining") == Some("0");
        if status == 429 || (status == 403 && quota_exhausted) {
            return Self::RateLimited {
                status,
                message,
                retry_after: retry_after_secs(response),
                documentation_url,
                request_id,
            };
        }

        match status {
            401 => Self::Authentication {
                message,
                documentation_url,
                request_id,
            },
            403 => Self::Forbidden {
                message,
                documentation_url,
                request_id,
            },
            404 => Self::NotFound {
                message,
                documentation_url,
                request_id,
            },
            409 => Self::Conflict {
                message,
                documentation_url,
                request_id,
            },
            400 | 422 => Self::Validation {
                status,
                message,
                errors: body.errors,
                documentation_url,
                request_id,
            },
            s if (500..600).contains(&s) => Self::Server {
                status,
                message,
                request_id,
            },
            _ => Self::Unexpected {
                status,
                message,
                request_id,
            },
        }
    }

    /// HTTP status code that produced this error.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            Self::Authentication { .. } => 401,
            Self::Forbidden { .. } => 403,
            Self::NotFound { .. } => 404,
            Self::Conflict { .. } => 409,
            Self::Validation { status, .. }
            | Self::RateLimited { status, .. }
            | Self::Server { status, .. }
            | Self::Unexpected { status, .. } => *status,
        }
    }

    /// Get the error message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Authentication { message, .. }
            | Self::Forbidden { message, .. }
            | Self::NotFound { message, .. }
            | Self::Conflict { message, .. }
            | Self::Validation { message, .. }
            | Self::RateLimited { message, .. }
            | Self::Server { message, .. }
            | Self::Unexpected { message, .. } => message,
        }
    }

    /// Get the `X-GitHub-Request-Id` if the response carried one.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Authentication { request_id, .. }
            | Self::Forbidden { request_id, .. }
            | Self::NotFound { request_id, .. }
            | Self::Conflict { request_id, .. }
            | Self::Validation { request_id, .. }
            | Self::RateLimited { request_id, .. }
            | Self::Server { request_id, .. }
            | Self::Unexpected { request_id, .. } => request_id.as_deref(),
        }
    }

    /// Get the retry-after value for rate limited errors.
    #[must_use]
    pub fn retry_after(&self) -> Option<u64> {
        match self {
            Self::RateLimited { retry_after, .. } => Some(*retry_after),
            _ => None,
        }
    }

    /// Check if this error is retryable.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::RateLimited { .. } | Self::Server { .. })
    }
}

/// Seconds to wait before retrying, from `Retry-After` or `X-RateLimit-Reset`.
fn retry_after_secs(response: &ApiResponse) -> u64 {
    if let Some(secs) = response
        .header("retry-after")
        .and_then(|v| v.trim().parse::<u64>().ok())
    {
        return secs;
    }

    response
        .header("x-ratelimit-reset")
        .and_then(|v| v.trim().parse::<i64>().ok())
        .map(|reset| {
            let now = chrono::Utc::now().timestamp();
            u64::try_from(reset - now).unwrap_or(0)
        })
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}
