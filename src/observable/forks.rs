use crate::api_connection::ApiConnection;
use crate::clients::RepositoryForksClient;
use crate::connection::ToParameters;
use crate::error::Error;
use crate::observable::{single, ApiStream};
use crate::pagination::ApiOptions;
use crate::repo_ref::RepositoryRef;
use crate::types::{NewRepositoryFork, Repository, RepositoryForksListRequest};
use crate::urls;

/// Stream variant of [`RepositoryForksClient`].
#[derive(Clone)]
pub struct ObservableRepositoryForksClient {
    client: RepositoryForksClient,
    connection: ApiConnection,
}

impl ObservableRepositoryForksClient {
    pub fn new(connection: ApiConnection) -> Self {
        Self {
            client: RepositoryForksClient::new(connection.clone()),
            connection,
        }
    }

    /// Stream the forks of a repository.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a blank owner or name, or
    /// zero-valued options.
    pub fn get_all(
        &self,
        repository: impl Into<RepositoryRef>,
        options: &ApiOptions,
    ) -> Result<ApiStream<Repository>, Error> {
        let path = urls::forks(&repository.into())?;
        self.connection.stream_all(&path, None, options)
    }

    /// Stream the forks of a repository in the order given by `request`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::get_all`].
    pub fn get_all_with_request(
        &self,
        repository: impl Into<RepositoryRef>,
        request: &RepositoryForksListRequest,
        options: &ApiOptions,
    ) -> Result<ApiStream<Repository>, Error> {
        let path = urls::forks(&repository.into())?;
        self.connection
            .stream_all(&path, Some(request.to_parameters()), options)
    }

    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a blank owner or name.
    pub fn create(
        &self,
        repository: impl Into<RepositoryRef>,
        fork: &NewRepositoryFork,
    ) -> Result<ApiStream<Repository>, Error> {
        let repository = repository.into();
        repository.validate()?;
        let client = self.client.clone();
        let fork = fork.clone();
        Ok(single(async move { client.create(repository, &fork).await }))
    }
}
