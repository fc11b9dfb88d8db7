//! Root of the async client.

use std::sync::Arc;

use crate::api_connection::ApiConnection;
use crate::clients::{IssuesClient, RepositoriesClient};
use crate::config::ClientConfig;
use crate::connection::Connection;
use crate::error::Error;
use crate::transport::HttpConnection;

/// Main client for interacting with the GitHub REST API.
///
/// Aggregates the resource clients, which all share one connection.
///
/// # Example
///
/// ```rust,no_run
/// use octohub::{ApiOptions, ClientConfig, GitHubClient};
///
/// # async fn example() -> Result<(), octohub::Error> {
/// let github = GitHubClient::new(ClientConfig::default().with_token("ghp_..."))?;
///
/// let repo = github.repository().get(("octocat", "Hello-World")).await?;
/// let forks = github
///     .repository()
///     .forks()
///     .get_all(repo.id, &ApiOptions::none().with_page_size(50))
///     .await?;
/// println!("{} has {} forks", repo.full_name, forks.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct GitHubClient {
    connection: ApiConnection,
    repository: RepositoriesClient,
    issue: IssuesClient,
}

impl GitHubClient {
    /// Create a client talking to GitHub over HTTP.
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` if the HTTP client cannot be built
    /// (e.g. a token that is not a valid header value).
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let connection = HttpConnection::new(&config)?;
        Ok(Self::with_connection(Arc::new(connection)))
    }

    /// Create a client from environment variables.
    ///
    /// See [`ClientConfig::from_env`] for the variables read.
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` if a variable holds an invalid value.
    pub fn from_env() -> Result<Self, Error> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Create a client over an arbitrary connection, such as
    /// [`crate::testing::RecordingConnection`].
    pub fn with_connection(connection: Arc<dyn Connection>) -> Self {
        let connection = ApiConnection::new(connection);
        Self {
            repository: RepositoriesClient::new(connection.clone()),
            issue: IssuesClient::new(connection.clone()),
            connection,
        }
    }

    /// Get the underlying connection (for advanced use cases).
    #[must_use]
    pub fn connection(&self) -> &Arc<dyn Connection> {
        self.connection.connection()
    }

    /// Get the typed connection shared by the resource clients.
    #[must_use]
    pub fn api_connection(&self) -> &ApiConnection {
        &self.connection
    }

    /// Get the repositories client.
    #[must_use]
    pub fn repository(&self) -> &RepositoriesClient {
        &self.repository
    }

    /// Get the issues client.
    #[must_use]
    pub fn issue(&self) -> &IssuesClient {
        &self.issue
    }
}
