//! Stream façade over the async clients.
//!
//! Every method checks its arguments before returning, so a blank owner or a
//! zero page size is reported as `Err` right away rather than as the first
//! item of the stream. Single-value endpoints yield exactly one item; list
//! endpoints yield one item per element and fetch the next page only when the
//! stream is polled past the end of the current one.

use std::future::Future;
use std::sync::Arc;

use futures::stream::{self, BoxStream, StreamExt};

use crate::api_connection::ApiConnection;
use crate::client::GitHubClient;
use crate::config::ClientConfig;
use crate::connection::Connection;
use crate::error::Error;

pub mod forks;
pub mod issues;
pub mod pages;
pub mod releases;
pub mod repos;

pub use forks::ObservableRepositoryForksClient;
pub use issues::ObservableIssuesClient;
pub use pages::ObservableRepositoryPagesClient;
pub use releases::ObservableReleasesClient;
pub use repos::ObservableRepositoriesClient;

/// Stream returned by the observable clients.
pub type ApiStream<T> = BoxStream<'static, Result<T, Error>>;

/// Wrap a single async call as a one-item stream.
pub(crate) fn single<T, F>(future: F) -> ApiStream<T>
where
    T: Send + 'static,
    F: Future<Output = Result<T, Error>> + Send + 'static,
{
    stream::once(future).boxed()
}

/// Entry point of the stream façade.
///
/// # Example
///
/// ```rust,no_run
/// use futures::TryStreamExt;
/// use octohub::{ApiOptions, ClientConfig, ObservableGitHubClient};
///
/// # async fn example() -> Result<(), octohub::Error> {
/// let github = ObservableGitHubClient::new(ClientConfig::default())?;
/// let mut forks = github
///     .repository()
///     .forks()
///     .get_all(("octocat", "Hello-World"), &ApiOptions::none())?;
///
/// while let Some(fork) = forks.try_next().await? {
///     println!("{}", fork.full_name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ObservableGitHubClient {
    connection: ApiConnection,
    repository: ObservableRepositoriesClient,
    issue: ObservableIssuesClient,
}

impl ObservableGitHubClient {
    /// Create a client talking to GitHub over HTTP.
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        Ok(Self::from_client(&GitHubClient::new(config)?))
    }

    /// Create a client from `GITHUB_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns `Error::Configuration` on invalid values.
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self::from_client(&GitHubClient::from_env()?))
    }

    /// Create a client over an arbitrary connection.
    pub fn with_connection(connection: Arc<dyn Connection>) -> Self {
        Self::from_api_connection(ApiConnection::new(connection))
    }

    /// Share the connection of an existing async client.
    pub fn from_client(client: &GitHubClient) -> Self {
        Self::from_api_connection(client.api_connection().clone())
    }

    fn from_api_connection(connection: ApiConnection) -> Self {
        Self {
            repository: ObservableRepositoriesClient::new(connection.clone()),
            issue: ObservableIssuesClient::new(connection.clone()),
            connection,
        }
    }

    #[must_use]
    pub fn repository(&self) -> &ObservableRepositoriesClient {
        &self.repository
    }

    #[must_use]
    pub fn issue(&self) -> &ObservableIssuesClient {
        &self.issue
    }

    #[must_use]
    pub fn connection(&self) -> &Arc<dyn Connection> {
        self.connection.connection()
    }
}
