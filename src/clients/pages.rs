//! GitHub Pages resource client.

use crate::api_connection::ApiConnection;
use crate::error::Error;
use crate::pagination::ApiOptions;
use crate::repo_ref::RepositoryRef;
use crate::types::{Page, PagesBuild, PagesBuildRequest};
use crate::urls;

/// Client for a repository's Pages site and its builds.
#[derive(Clone)]
pub struct RepositoryPagesClient {
    connection: ApiConnection,
}

impl RepositoryPagesClient {
    /// Create a new pages client.
    pub fn new(connection: ApiConnection) -> Self {
        Self { connection }
    }

    /// Get the Pages site descriptor of a repository.
    ///
    /// # Arguments
    ///
    /// * `repository` - `(owner, name)` or numeric repository id
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a blank owner or name, and
    /// `ApiError::NotFound` when the repository has no Pages site.
    pub async fn get(&self, repository: impl Into<RepositoryRef>) -> Result<Page, Error> {
        let path = urls::pages(&repository.into())?;
        self.connection.get(&path, None).await
    }

    /// List every build of the Pages site.
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
    ) -> Result<Vec<PagesBuild>, Error> {
        let path = urls::pages_builds(&repository.into())?;
        self.connection.get_all(&path, None, options).await
    }

    /// Get the most recent Pages build.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a blank owner or name.
    pub async fn get_latest(
        &self,
        repository: impl Into<RepositoryRef>,
    ) -> Result<PagesBuild, Error> {
        let path = urls::pages_build_latest(&repository.into())?;
        self.connection.get(&path, None).await
    }

    /// Ask GitHub to build the site from the latest revision of its source
    /// branch. The build is queued; poll [`Self::get_latest`] for progress.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a blank owner or name.
    pub async fn request_build(
        &self,
        repository: impl Into<RepositoryRef>,
    ) -> Result<PagesBuildRequest, Error> {
        let path = urls::pages_builds(&repository.into())?;
        self.connection.post_empty(&path).await
    }
}
