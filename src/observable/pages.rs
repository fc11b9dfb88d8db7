use crate::api_connection::ApiConnection;
use crate::clients::RepositoryPagesClient;
use crate::error::Error;
use crate::observable::{single, ApiStream};
use crate::pagination::ApiOptions;
use crate::repo_ref::RepositoryRef;
use crate::types::{Page, PagesBuild, PagesBuildRequest};
use crate::urls;

/// Stream variant of [`RepositoryPagesClient`].
#[derive(Clone)]
pub struct ObservableRepositoryPagesClient {
    client: RepositoryPagesClient,
    connection: ApiConnection,
}

impl ObservableRepositoryPagesClient {
    pub fn new(connection: ApiConnection) -> Self {
        Self {
            client: RepositoryPagesClient::new(connection.clone()),
            connection,
        }
    }

    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a blank owner or name.
    pub fn get(&self, repository: impl Into<RepositoryRef>) -> Result<ApiStream<Page>, Error> {
        let repository = repository.into();
        repository.validate()?;
        let client = self.client.clone();
        Ok(single(async move { client.get(repository).await }))
    }

    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a blank owner or name, or
    /// zero-valued options.
    pub fn get_all(
        &self,
        repository: impl Into<RepositoryRef>,
        options: &ApiOptions,
    ) -> Result<ApiStream<PagesBuild>, Error> {
        let path = urls::pages_builds(&repository.into())?;
        self.connection.stream_all(&path, None, options)
    }

    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a blank owner or name.
    pub fn get_latest(
        &self,
        repository: impl Into<RepositoryRef>,
    ) -> Result<ApiStream<PagesBuild>, Error> {
        let repository = repository.into();
        repository.validate()?;
        let client = self.client.clone();
        Ok(single(async move { client.get_latest(repository).await }))
    }

    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a blank owner or name.
    pub fn request_build(
        &self,
        repository: impl Into<RepositoryRef>,
    ) -> Result<ApiStream<PagesBuildRequest>, Error> {
        let repository = repository.into();
        repository.validate()?;
        let client = self.client.clone();
        Ok(single(async move { client.request_build(repository).await }))
    }
}
