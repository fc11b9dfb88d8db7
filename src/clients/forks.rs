//! Repository forks resource client.

use crate::api_connection::ApiConnection;
use crate::connection::ToParameters;
use crate::error::Error;
use crate::pagination::ApiOptions;
use crate::repo_ref::RepositoryRef;
use crate::types::{NewRepositoryFork, Repository, RepositoryForksListRequest};
use crate::urls;

/// Client for listing and creating forks.
#[derive(Clone)]
pub struct RepositoryForksClient {
    connection: ApiConnection,
}

impl RepositoryForksClient {
    /// Create a new forks client.
    pub fn new(connection: ApiConnection) -> Self {
        Self { connection }
    }

    /// List the forks of a repository in GitHub's default order.
    ///
    /// # Arguments
    ///
    /// * `repository` - `(owner, name)` or numeric repository id
    /// * `options` - Page size, start page and page count
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for blank names or zero-valued
    /// options, otherwise the first error hit while paging.
    pub async fn get_all(
        &self,
        repository: impl Into<RepositoryRef>,
        options: &ApiOptions,
    ) -> Result<Vec<Repository>, Error> {
        let path = urls::forks(&repository.into())?;
        self.connection.get_all(&path, None, options).await
    }

    /// List the forks of a repository in the order given by `request`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::get_all`].
    pub async fn get_all_with_request(
        &self,
        repository: impl Into<RepositoryRef>,
        request: &RepositoryForksListRequest,
        options: &ApiOptions,
    ) -> Result<Vec<Repository>, Error> {
        let path = urls::forks(&repository.into())?;
        self.connection
            .get_all(&path, Some(request.to_parameters()), options)
            .await
    }

    /// Fork a repository.
    ///
    /// Forking happens asynchronously on GitHub's side; the returned
    /// repository may not be cloneable for a few seconds.
    ///
    /// # Arguments
    ///
    /// * `repository` - Repository to fork
    /// * `fork` - Target organization, name and branch options
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a blank owner or name.
    pub async fn create(
        &self,
        repository: impl Into<RepositoryRef>,
        fork: &NewRepositoryFork,
    ) -> Result<Repository, Error> {
        let path = urls::forks(&repository.into())?;
        self.connection.post(&path, fork).await
    }
}
