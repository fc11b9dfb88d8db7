//! Client configuration.

use std::env;
use std::time::Duration;

use crate::error::Error;
use crate::transport::RetryConfig;

/// Default base URL for the GitHub REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Default `User-Agent`; GitHub rejects requests without one.
pub const DEFAULT_USER_AGENT: &str = concat!("octohub/", env!("CARGO_PKG_VERSION"));

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for [`crate::HttpConnection`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root, e.g. `https://github.example.com/api/v3` for Enterprise Server
    pub base_url: String,
    /// Pre-issued token sent as `Authorization: Bearer`
    pub token: Option<String>,
    /// `User-Agent` header value
    pub user_agent: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Retry behaviour for transient failures
    pub retry: RetryConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            retry: RetryConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// * `GITHUB_TOKEN` - API token (optional; anonymous when unset)
    /// * `GITHUB_API_URL` - API root (optional, default: <https://api.github.com>)
    /// * `GITHUB_USER_AGENT` - User-Agent header (optional)
    /// * `GITHUB_TIMEOUT_SECS` - Request timeout in seconds (optional, default: 30)
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` if a variable holds an invalid value.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from `lookup`, which maps variable names to
    /// values the way the process environment does.
    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let defaults = Self::default();

        let token = lookup("GITHUB_TOKEN").filter(|t| !t.trim().is_empty());

        let base_url = lookup("GITHUB_API_URL").unwrap_or(defaults.base_url);
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(Error::Configuration(format!(
                "Invalid GITHUB_API_URL: {base_url}. Must start with http:// or https://"
            )));
        }

        let user_agent = lookup("GITHUB_USER_AGENT").unwrap_or(defaults.user_agent);

        let timeout = match lookup("GITHUB_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    Error::Configuration(format!("Invalid GITHUB_TIMEOUT_SECS: {raw}"))
                })?;
                Duration::from_secs(secs)
            }
            None => defaults.timeout,
        };

        Ok(Self {
            base_url,
            token,
            user_agent,
            timeout,
            retry: defaults.retry,
        })
    }

    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }
}
