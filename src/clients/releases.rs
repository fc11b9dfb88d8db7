//! Releases resource client.

use crate::api_connection::ApiConnection;
use crate::error::Error;
use crate::pagination::ApiOptions;
use crate::repo_ref::RepositoryRef;
use crate::types::{NewRelease, Release, ReleaseUpdate};
use crate::urls;

/// Client for repository releases.
#[derive(Clone)]
pub struct ReleasesClient {
    connection: ApiConnection,
}

impl ReleasesClient {
    /// Create a new releases client.
    pub fn new(connection: ApiConnection) -> Self {
        Self { connection }
    }

    /// List releases, newest first. Drafts are only visible to users with
    /// push access.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for blank names or zero-valued
    /// options, otherwise the first error hit while paging.
    pub async fn get_all(
        &self,
        repository: impl Into<RepositoryRef>,
        options: &ApiOptions,
    ) -> Result<Vec<Release>, Error> {
        let path = urls::releases(&repository.into())?;
        self.connection.get_all(&path, None, options).await
    }

    /// Get a release by id.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a blank owner or name.
    pub async fn get(&self, repository: impl Into<RepositoryRef>, id: i64) -> Result<Release, Error> {
        let path = urls::release(&repository.into(), id)?;
        self.connection.get(&path, None).await
    }

    /// Get the latest published, non-prerelease release.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a blank owner or name, and
    /// `ApiError::NotFound` when nothing has been published.
    pub async fn get_latest(&self, repository: impl Into<RepositoryRef>) -> Result<Release, Error> {
        let path = urls::latest_release(&repository.into())?;
        self.connection.get(&path, None).await
    }

    /// Create a release, tagging `target_commitish` if the tag is new.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a blank owner, name or tag.
    pub async fn create(
        &self,
        repository: impl Into<RepositoryRef>,
        release: &NewRelease,
    ) -> Result<Release, Error> {
        let path = urls::releases(&repository.into())?;
        release.validate()?;
        self.connection.post(&path, release).await
    }

    /// Edit a release. Only fields set on `update` change.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a blank owner or name.
    pub async fn edit(
        &self,
        repository: impl Into<RepositoryRef>,
        id: i64,
        update: &ReleaseUpdate,
    ) -> Result<Release, Error> {
        let path = urls::release(&repository.into(), id)?;
        self.connection.patch(&path, update).await
    }

    /// Delete a release. The tag itself is kept.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a blank owner or name.
    pub async fn delete(&self, repository: impl Into<RepositoryRef>, id: i64) -> Result<(), Error> {
        let path = urls::release(&repository.into(), id)?;
        self.connection.delete(&path).await
    }
}
