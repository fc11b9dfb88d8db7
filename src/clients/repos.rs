//! Repositories resource client.

use crate::api_connection::ApiConnection;
use crate::clients::{ReleasesClient, RepositoryForksClient, RepositoryPagesClient};
use crate::connection::ToParameters;
use crate::error::Error;
use crate::pagination::ApiOptions;
use crate::repo_ref::RepositoryRef;
use crate::types::{NewRepository, Repository, RepositoryRequest, RepositoryUpdate};
use crate::urls;

/// Client for repository-related operations.
///
/// Forks, Pages and releases hang off this client as sub-clients sharing the
/// same connection.
#[derive(Clone)]
pub struct RepositoriesClient {
    connection: ApiConnection,
    forks: RepositoryForksClient,
    pages: RepositoryPagesClient,
    releases: ReleasesClient,
}

impl RepositoriesClient {
    /// Create a new repositories client.
    pub fn new(connection: ApiConnection) -> Self {
        Self {
            forks: RepositoryForksClient::new(connection.clone()),
            pages: RepositoryPagesClient::new(connection.clone()),
            releases: ReleasesClient::new(connection.clone()),
            connection,
        }
    }

    /// Forks of a repository.
    #[must_use]
    pub fn forks(&self) -> &RepositoryForksClient {
        &self.forks
    }

    /// GitHub Pages site of a repository.
    #[must_use]
    pub fn pages(&self) -> &RepositoryPagesClient {
        &self.pages
    }

    /// Releases of a repository.
    #[must_use]
    pub fn releases(&self) -> &ReleasesClient {
        &self.releases
    }

    /// Get repository information.
    ///
    /// # Arguments
    ///
    /// * `repository` - `(owner, name)` or numeric repository id
    ///
    /// # Returns
    ///
    /// Repository record, including `parent` and `source` for forks
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a blank owner or name, and
    /// `ApiError::NotFound` if the repository does not exist or is hidden.
    pub async fn get(&self, repository: impl Into<RepositoryRef>) -> Result<Repository, Error> {
        let path = urls::repository(&repository.into())?;
        self.connection.get(&path, None).await
    }

    /// List repositories the authenticated user can access.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for zero-valued options, otherwise
    /// the first error hit while paging.
    pub async fn get_all_for_current(
        &self,
        request: &RepositoryRequest,
        options: &ApiOptions,
    ) -> Result<Vec<Repository>, Error> {
        self.connection
            .get_all(
                &urls::current_user_repositories(),
                Some(request.to_parameters()),
                options,
            )
            .await
    }

    /// List public repositories of a user.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a blank login or zero-valued
    /// options.
    pub async fn get_all_for_user(
        &self,
        login: &str,
        options: &ApiOptions,
    ) -> Result<Vec<Repository>, Error> {
        let path = urls::user_repositories(login)?;
        self.connection.get_all(&path, None, options).await
    }

    /// List repositories of an organization.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a blank organization or
    /// zero-valued options.
    pub async fn get_all_for_org(
        &self,
        organization: &str,
        options: &ApiOptions,
    ) -> Result<Vec<Repository>, Error> {
        let path = urls::organization_repositories(organization)?;
        self.connection.get_all(&path, None, options).await
    }

    /// Create a repository owned by the authenticated user.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a blank name and
    /// `ApiError::Validation` if the name is already taken.
    pub async fn create(&self, repository: &NewRepository) -> Result<Repository, Error> {
        repository.validate()?;
        self.connection
            .post(&urls::current_user_repositories(), repository)
            .await
    }

    /// Create a repository inside an organization.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a blank organization or name.
    pub async fn create_for_org(
        &self,
        organization: &str,
        repository: &NewRepository,
    ) -> Result<Repository, Error> {
        let path = urls::organization_repositories(organization)?;
        repository.validate()?;
        self.connection.post(&path, repository).await
    }

    /// Edit repository settings. Only fields set on `update` change.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a blank owner or name.
    pub async fn edit(
        &self,
        repository: impl Into<RepositoryRef>,
        update: &RepositoryUpdate,
    ) -> Result<Repository, Error> {
        let path = urls::repository(&repository.into())?;
        self.connection.patch(&path, update).await
    }

    /// Delete a repository. Requires the `delete_repo` scope.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a blank owner or name, and
    /// `ApiError::Forbidden` without admin rights.
    pub async fn delete(&self, repository: impl Into<RepositoryRef>) -> Result<(), Error> {
        let path = urls::repository(&repository.into())?;
        self.connection.delete(&path).await
    }
}
