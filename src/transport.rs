//! HTTP transport for octohub.
//!
//! Handles HTTP communication with GitHub, with automatic retry of transient
//! failures.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Method, Response};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::connection::{ApiRequest, ApiResponse, Connection};
use crate::error::Error;

/// Media type GitHub recommends for REST requests.
pub const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// REST API version pinned via `X-GitHub-Api-Version`.
pub const GITHUB_API_VERSION: &str = "2022-11-28";

/// Configuration for automatic retry behavior.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts
    pub max_retries: u32,
    /// Base backoff factor for exponential backoff
    pub backoff_factor: f64,
    /// Status codes that trigger retry of idempotent requests
    pub retry_on: Vec<u16>,
    /// Whether to respect Retry-After header
    pub respect_retry_after: bool,
    /// Maximum backoff time in seconds
    pub max_backoff: f64,
    /// Jitter factor (0.1 = ±10%)
    pub jitter: f64,
}

impl Default for RetryConfig {
    /// Retries gateway failures only. Rate limits are surfaced to the caller,
    /// since GitHub resets can be up to an hour away.
    fn default() -> Self {
        Self {
            max_retries: 2,
            backoff_factor: 2.0,
            retry_on: vec![502, 503, 504],
            respect_retry_after: true,
            max_backoff: 30.0,
            jitter: 0.1,
        }
    }
}

impl RetryConfig {
    /// Never retry.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            max_retries: 0,
            retry_on: Vec::new(),
            ..Self::default()
        }
    }
}

/// [`Connection`] backed by `reqwest`.
pub struct HttpConnection {
    base_url: String,
    client: Client,
    retry_config: RetryConfig,
}

impl HttpConnection {
    /// Create a new HTTP connection.
    ///
    /// # Errors
    ///
    /// Returns an error if a header value is invalid or the HTTP client
    /// cannot be created.
    pub fn new(config: &ClientConfig) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|e| Error::Configuration(format!("Invalid user agent: {e}")))?,
        );
        if let Some(token) = &config.token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| Error::Configuration(format!("Invalid token: {e}")))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Configuration(format!("Cannot build HTTP client: {e}")))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            retry_config: config.retry.clone(),
        })
    }

    /// Get the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a request path against the base URL.
    fn url_for(&self, request: &ApiRequest) -> String {
        if request.is_absolute() {
            request.path.clone()
        } else {
            format!("{}/{}", self.base_url, request.path.trim_start_matches('/'))
        }
    }

    async fn send_once(&self, request: &ApiRequest) -> Result<Response, Error> {
        let url = self.url_for(request);
        let mut builder = self.client.request(request.method.clone(), &url);

        if !request.parameters.is_empty() {
            builder = builder.query(&request.parameters);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        builder.send().await.map_err(|e| Error::Http(e.to_string()))
    }

    /// Whether another attempt may follow attempt number `attempt`.
    ///
    /// Only idempotent methods are repeated: a POST or PATCH that timed out
    /// or hit a gateway error may already have been applied by GitHub.
    fn may_retry(&self, method: &Method, attempt: u32) -> bool {
        method.is_idempotent() && attempt < self.retry_config.max_retries
    }

    /// Wait before the next attempt: `Retry-After` when present and
    /// respected, otherwise `backoff_factor ^ attempt` with jitter. Always
    /// within `0..=max_backoff`, whatever the configuration holds.
    fn backoff(&self, attempt: u32, retry_after: Option<u64>) -> Duration {
        let config = &self.retry_config;
        let wait = match retry_after {
            Some(secs) if config.respect_retry_after => secs as f64,
            _ => {
                let base = config.backoff_factor.powi(i32::try_from(attempt).unwrap_or(i32::MAX));
                let spread = base * config.jitter;
                if spread.is_finite() && spread > 0.0 {
                    base + rand::thread_rng().gen_range(-spread..spread)
                } else {
                    base
                }
            }
        };

        if wait.is_nan() {
            return Duration::ZERO;
        }
        let cap = config.max_backoff.max(0.0);
        Duration::try_from_secs_f64(wait.clamp(0.0, cap)).unwrap_or_default()
    }

    /// Read status, headers and JSON body out of a reqwest response.
    async fn read_response(response: Response) -> Result<ApiResponse, Error> {
        let status = response.status().as_u16();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_ascii_lowercase(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Http(format!("Failed to read response: {e}")))?;

        let body = if bytes.is_empty() {
            Value::Null
        } else if (200..300).contains(&status) {
            serde_json::from_slice(&bytes)?
        } else {
            // Error pages are not always JSON (proxies, 502s)
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }
}

#[async_trait]
impl Connection for HttpConnection {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, Error> {
        let mut attempt = 0;

        loop {
            debug!(
                method = %request.method,
                path = %request.path,
                attempt,
                "Sending GitHub API request"
            );

            match self.send_once(&request).await {
                Ok(response) => {
                    let status = response.status().as_u16();
                    let retryable_status = self.retry_config.retry_on.contains(&status);
                    if !retryable_status || !self.may_retry(&request.method, attempt) {
                        debug!(status, path = %request.path, "Received GitHub API response");
                        return Self::read_response(response).await;
                    }

                    let retry_after = response
                        .headers()
                        .get("retry-after")
                        .and_then(|v| v.to_str().ok())
                        .and_then(|s| s.trim().parse::<u64>().ok());
                    let wait = self.backoff(attempt, retry_after);
                    warn!(
                        status,
                        path = %request.path,
                        attempt,
                        wait_secs = wait.as_secs_f64(),
                        "Retrying GitHub API request"
                    );
                    tokio::time::sleep(wait).await;
                }
                Err(e) => {
                    if !self.may_retry(&request.method, attempt) {
                        return Err(e);
                    }

                    let wait = self.backoff(attempt, None);
                    warn!(
                        error = %e,
                        path = %request.path,
                        attempt,
                        wait_secs = wait.as_secs_f64(),
                        "Retrying GitHub API request after transport error"
                    );
                    tokio::time::sleep(wait).await;
                }
            }

            attempt += 1;
        }
    }
}
