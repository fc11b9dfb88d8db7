//! Issues resource client.

use crate::api_connection::ApiConnection;
use crate::connection::ToParameters;
use crate::error::Error;
use crate::pagination::ApiOptions;
use crate::repo_ref::RepositoryRef;
use crate::types::{Issue, IssueUpdate, NewIssue, RepositoryIssueRequest};
use crate::urls;

/// Client for repository issues.
#[derive(Clone)]
pub struct IssuesClient {
    connection: ApiConnection,
}

impl IssuesClient {
    /// Create a new issues client.
    pub fn new(connection: ApiConnection) -> Self {
        Self { connection }
    }

    /// Get a single issue by its per-repository number.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a blank owner or name.
    pub async fn get(
        &self,
        repository: impl Into<RepositoryRef>,
        number: u64,
    ) -> Result<Issue, Error> {
        let path = urls::issue(&repository.into(), number)?;
        self.connection.get(&path, None).await
    }

    /// List open issues of a repository, newest first.
    ///
    /// Pull requests are included; see [`Issue::is_pull_request`].
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for blank names or zero-valued
    /// options, otherwise the first error hit while paging.
    pub async fn get_all_for_repository(
        &self,
        repository: impl Into<RepositoryRef>,
        options: &ApiOptions,
    ) -> Result<Vec<Issue>, Error> {
        self.get_all_for_repository_with_request(
            repository,
            &RepositoryIssueRequest::default(),
            options,
        )
        .await
    }

    /// List issues of a repository matching `request`.
    ///
    /// # Arguments
    ///
    /// * `repository` - `(owner, name)` or numeric repository id
    /// * `request` - State, sort and filter parameters
    /// * `options` - Page size, start page and page count
    ///
    /// # Errors
    ///
    /// Same as [`Self::get_all_for_repository`].
    pub async fn get_all_for_repository_with_request(
        &self,
        repository: impl Into<RepositoryRef>,
        request: &RepositoryIssueRequest,
        options: &ApiOptions,
    ) -> Result<Vec<Issue>, Error> {
        let path = urls::issues(&repository.into())?;
        self.connection
            .get_all(&path, Some(request.to_parameters()), options)
            .await
    }

    /// Open an issue.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a blank owner, name or title.
    pub async fn create(
        &self,
        repository: impl Into<RepositoryRef>,
        issue: &NewIssue,
    ) -> Result<Issue, Error> {
        let path = urls::issues(&repository.into())?;
        issue.validate()?;
        self.connection.post(&path, issue).await
    }

    /// Edit an issue. Only fields set on `update` change.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a blank owner or name.
    pub async fn update(
        &self,
        repository: impl Into<RepositoryRef>,
        number: u64,
        update: &IssueUpdate,
    ) -> Result<Issue, Error> {
        let path = urls::issue(&repository.into(), number)?;
        self.connection.patch(&path, update).await
    }
}
