//! Async resource clients.
//!
//! Each client is a thin, clonable handle over a shared [`ApiConnection`]
//! (see [`crate::api_connection`]).

pub mod forks;
pub mod issues;
pub mod pages;
pub mod releases;
pub mod repos;

pub use forks::RepositoryForksClient;
pub use issues::IssuesClient;
pub use pages::RepositoryPagesClient;
pub use releases::ReleasesClient;
pub use repos::RepositoriesClient;
