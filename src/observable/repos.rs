use crate::api_connection::ApiConnection;
use crate::clients::RepositoriesClient;
use crate::connection::ToParameters;
use crate::error::Error;
use crate::observable::{
    single, ApiStream, ObservableReleasesClient, ObservableRepositoryForksClient,
    ObservableRepositoryPagesClient,
};
use crate::pagination::ApiOptions;
use crate::repo_ref::RepositoryRef;
use crate::types::{NewRepository, Repository, RepositoryRequest, RepositoryUpdate};
use crate::urls;

/// Stream variant of [`RepositoriesClient`].
#[derive(Clone)]
pub struct ObservableRepositoriesClient {
    client: RepositoriesClient,
    connection: ApiConnection,
    forks: ObservableRepositoryForksClient,
    pages: ObservableRepositoryPagesClient,
    releases: ObservableReleasesClient,
}

impl ObservableRepositoriesClient {
    pub fn new(connection: ApiConnection) -> Self {
        Self {
            client: RepositoriesClient::new(connection.clone()),
            forks: ObservableRepositoryForksClient::new(connection.clone()),
            pages: ObservableRepositoryPagesClient::new(connection.clone()),
            releases: ObservableReleasesClient::new(connection.clone()),
            connection,
        }
    }

    #[must_use]
    pub fn forks(&self) -> &ObservableRepositoryForksClient {
        &self.forks
    }

    #[must_use]
    pub fn pages(&self) -> &ObservableRepositoryPagesClient {
        &self.pages
    }

    #[must_use]
    pub fn releases(&self) -> &ObservableReleasesClient {
        &self.releases
    }

    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a blank owner or name.
    pub fn get(&self, repository: impl Into<RepositoryRef>) -> Result<ApiStream<Repository>, Error> {
        let repository = repository.into();
        repository.validate()?;
        let client = self.client.clone();
        Ok(single(async move { client.get(repository).await }))
    }

    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for zero-valued options.
    pub fn get_all_for_current(
        &self,
        request: &RepositoryRequest,
        options: &ApiOptions,
    ) -> Result<ApiStream<Repository>, Error> {
        self.connection.stream_all(
            &urls::current_user_repositories(),
            Some(request.to_parameters()),
            options,
        )
    }

    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a blank login or zero-valued
    /// options.
    pub fn get_all_for_user(
        &self,
        login: &str,
        options: &ApiOptions,
    ) -> Result<ApiStream<Repository>, Error> {
        let path = urls::user_repositories(login)?;
        self.connection.stream_all(&path, None, options)
    }

    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a blank organization or
    /// zero-valued options.
    pub fn get_all_for_org(
        &self,
        organization: &str,
        options: &ApiOptions,
    ) -> Result<ApiStream<Repository>, Error> {
        let path = urls::organization_repositories(organization)?;
        self.connection.stream_all(&path, None, options)
    }

    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a blank name.
    pub fn create(&self, repository: &NewRepository) -> Result<ApiStream<Repository>, Error> {
        repository.validate()?;
        let client = self.client.clone();
        let repository = repository.clone();
        Ok(single(async move { client.create(&repository).await }))
    }

    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a blank organization or name.
    pub fn create_for_org(
        &self,
        organization: &str,
        repository: &NewRepository,
    ) -> Result<ApiStream<Repository>, Error> {
        urls::organization_repositories(organization)?;
        repository.validate()?;
        let client = self.client.clone();
        let organization = organization.to_string();
        let repository = repository.clone();
        Ok(single(async move {
            client.create_for_org(&organization, &repository).await
        }))
    }

    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a blank owner or name.
    pub fn edit(
        &self,
        repository: impl Into<RepositoryRef>,
        update: &RepositoryUpdate,
    ) -> Result<ApiStream<Repository>, Error> {
        let repository = repository.into();
        repository.validate()?;
        let client = self.client.clone();
        let update = update.clone();
        Ok(single(async move { client.edit(repository, &update).await }))
    }

    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a blank owner or name.
    pub fn delete(&self, repository: impl Into<RepositoryRef>) -> Result<ApiStream<()>, Error> {
        let repository = repository.into();
        repository.validate()?;
        let client = self.client.clone();
        Ok(single(async move { client.delete(repository).await }))
    }
}
