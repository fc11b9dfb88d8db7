use crate::api_connection::ApiConnection;
use crate::clients::IssuesClient;
use crate::connection::ToParameters;
use crate::error::Error;
use crate::observable::{single, ApiStream};
use crate::pagination::ApiOptions;
use crate::repo_ref::RepositoryRef;
use crate::types::{Issue, IssueUpdate, NewIssue, RepositoryIssueRequest};
use crate::urls;

/// Stream variant of [`IssuesClient`].
#[derive(Clone)]
pub struct ObservableIssuesClient {
    client: IssuesClient,
    connection: ApiConnection,
}

impl ObservableIssuesClient {
    pub fn new(connection: ApiConnection) -> Self {
        Self {
            client: IssuesClient::new(connection.clone()),
            connection,
        }
    }

    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a blank owner or name.
    pub fn get(
        &self,
        repository: impl Into<RepositoryRef>,
        number: u64,
    ) -> Result<ApiStream<Issue>, Error> {
        let repository = repository.into();
        repository.validate()?;
        let client = self.client.clone();
        Ok(single(async move { client.get(repository, number).await }))
    }

    /// Stream open issues, newest first.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a blank owner or name, or
    /// zero-valued options.
    pub fn get_all_for_repository(
        &self,
        repository: impl Into<RepositoryRef>,
        options: &ApiOptions,
    ) -> Result<ApiStream<Issue>, Error> {
        self.get_all_for_repository_with_request(
            repository,
            &RepositoryIssueRequest::default(),
            options,
        )
    }

    /// # Errors
    ///
    /// Same as [`Self::get_all_for_repository`].
    pub fn get_all_for_repository_with_request(
        &self,
        repository: impl Into<RepositoryRef>,
        request: &RepositoryIssueRequest,
        options: &ApiOptions,
    ) -> Result<ApiStream<Issue>, Error> {
        let path = urls::issues(&repository.into())?;
        self.connection
            .stream_all(&path, Some(request.to_parameters()), options)
    }

    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a blank owner, name or title.
    pub fn create(
        &self,
        repository: impl Into<RepositoryRef>,
        issue: &NewIssue,
    ) -> Result<ApiStream<Issue>, Error> {
        let repository = repository.into();
        repository.validate()?;
        issue.validate()?;
        let client = self.client.clone();
        let issue = issue.clone();
        Ok(single(async move { client.create(repository, &issue).await }))
    }

    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a blank owner or name.
    pub fn update(
        &self,
        repository: impl Into<RepositoryRef>,
        number: u64,
        update: &IssueUpdate,
    ) -> Result<ApiStream<Issue>, Error> {
        let repository = repository.into();
        repository.validate()?;
        let client = self.client.clone();
        let update = update.clone();
        Ok(single(async move { client.update(repository, number, &update).await }))
    }
}
