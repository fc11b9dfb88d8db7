//! Async client for the GitHub REST API.
//!
//! Two façades share one connection: [`GitHubClient`] returns futures,
//! [`ObservableGitHubClient`] returns streams. Both validate arguments before
//! any request goes out and page through list endpoints by following the
//! `Link` response header.
//!
//! # Quick Start
//!
//! ```rust
//! use octohub::{ApiOptions, RepositoryRef};
//!
//! let repo = RepositoryRef::from(("octocat", "Hello-World"));
//! assert_eq!(repo.path("forks").unwrap(), "repos/octocat/Hello-World/forks");
//!
//! let options = ApiOptions::none().with_page_size(100).with_page_count(2);
//! assert!(options.validate().is_ok());
//! ```

pub mod api_connection;
pub mod client;
pub mod clients;
pub mod config;
pub mod connection;
mod ensure;
pub mod error;
pub mod observable;
pub mod pagination;
pub mod repo_ref;
pub mod testing;
pub mod transport;
pub mod types;
mod urls;

// Re-exports
pub use api_connection::ApiConnection;
pub use client::GitHubClient;
pub use clients::{
    IssuesClient, ReleasesClient, RepositoriesClient, RepositoryForksClient, RepositoryPagesClient,
};
pub use config::ClientConfig;
pub use connection::{ApiRequest, ApiResponse, Connection, Parameters, ToParameters};
pub use error::{ApiError, Error, ValidationDetail};
pub use observable::{ApiStream, ObservableGitHubClient};
pub use pagination::{parse_link_header, ApiOptions, PageLinks};
pub use repo_ref::RepositoryRef;
pub use transport::{HttpConnection, RetryConfig};
pub use types::{
    Issue, IssueUpdate, NewIssue, NewRelease, NewRepository, NewRepositoryFork, Page, PagesBuild,
    PagesBuildRequest, Release, ReleaseUpdate, Repository, RepositoryForksListRequest,
    RepositoryIssueRequest, RepositoryRequest, RepositoryUpdate, User,
};
