use crate::api_connection::ApiConnection;
use crate::clients::ReleasesClient;
use crate::error::Error;
use crate::observable::{single, ApiStream};
use crate::pagination::ApiOptions;
use crate::repo_ref::RepositoryRef;
use crate::types::{NewRelease, Release, ReleaseUpdate};
use crate::urls;

/// Stream variant of [`ReleasesClient`].
#[derive(Clone)]
pub struct ObservableReleasesClient {
    client: ReleasesClient,
    connection: ApiConnection,
}

impl ObservableReleasesClient {
    pub fn new(connection: ApiConnection) -> Self {
        Self {
            client: ReleasesClient::new(connection.clone()),
            connection,
        }
    }

    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a blank owner or name, or
    /// zero-valued options.
    pub fn get_all(
        &self,
        repository: impl Into<RepositoryRef>,
        options: &ApiOptions,
    ) -> Result<ApiStream<Release>, Error> {
        let path = urls::releases(&repository.into())?;
        self.connection.stream_all(&path, None, options)
    }

    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a blank owner or name.
    pub fn get(
        &self,
        repository: impl Into<RepositoryRef>,
        id: i64,
    ) -> Result<ApiStream<Release>, Error> {
        let repository = repository.into();
        repository.validate()?;
        let client = self.client.clone();
        Ok(single(async move { client.get(repository, id).await }))
    }

    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a blank owner or name.
    pub fn get_latest(
        &self,
        repository: impl Into<RepositoryRef>,
    ) -> Result<ApiStream<Release>, Error> {
        let repository = repository.into();
        repository.validate()?;
        let client = self.client.clone();
        Ok(single(async move { client.get_latest(repository).await }))
    }

    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a blank owner, name or tag.
    pub fn create(
        &self,
        repository: impl Into<RepositoryRef>,
        release: &NewRelease,
    ) -> Result<ApiStream<Release>, Error> {
        let repository = repository.into();
        repository.validate()?;
        release.validate()?;
        let client = self.client.clone();
        let release = release.clone();
        Ok(single(async move { client.create(repository, &release).await }))
    }

    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a blank owner or name.
    pub fn edit(
        &self,
        repository: impl Into<RepositoryRef>,
        id: i64,
        update: &ReleaseUpdate,
    ) -> Result<ApiStream<Release>, Error> {
        let repository = repository.into();
        repository.validate()?;
        let client = self.client.clone();
        let update = update.clone();
        Ok(single(async move { client.edit(repository, id, &update).await }))
    }

    /// Yields a single `()` once the release is gone.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a blank owner or name.
    pub fn delete(
        &self,
        repository: impl Into<RepositoryRef>,
        id: i64,
    ) -> Result<ApiStream<()>, Error> {
        let repository = repository.into();
        repository.validate()?;
        let client = self.client.clone();
        Ok(single(async move { client.delete(repository, id).await }))
    }
}
