//! Issue-related data models.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::connection::{Parameters, ToParameters};
use crate::ensure;
use crate::error::Error;
use crate::types::users::User;

/// Open or closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    Open,
    Closed,
}

/// Issue label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Milestone an issue belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: i64,
    pub number: u64,
    pub title: String,
    pub state: IssueState,
    #[serde(default)]
    pub due_on: Option<DateTime<Utc>>,
}

/// Issue information. Pull requests are issues too and carry `pull_request`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub id: i64,
    /// Per-repository issue number
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    pub state: IssueState,
    #[serde(default)]
    pub state_reason: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub assignees: Vec<User>,
    #[serde(default)]
    pub milestone: Option<Milestone>,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub comments: u32,
    #[serde(default)]
    pub pull_request: Option<serde_json::Value>,
    pub html_url: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,
}

impl Issue {
    /// Whether this issue is the issue half of a pull request.
    #[must_use]
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

/// Body for opening an issue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewIssue {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub assignees: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    /// Milestone number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<u64>,
}

impl NewIssue {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        ensure::not_blank(&self.title, "title")
    }
}

/// Body for editing an issue. Only set fields are sent.
///
/// `Some(vec![])` for `labels` or `assignees` clears them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IssueUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<IssueState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignees: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone: Option<u64>,
}

/// `state` filter for issue listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ItemStateFilter {
    #[default]
    Open,
    Closed,
    All,
}

impl ItemStateFilter {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::All => "all",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IssueSort {
    #[default]
    Created,
    Updated,
    Comments,
}

impl IssueSort {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Comments => "comments",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

/// Filters for `GET repos/{owner}/{repo}/issues`.
///
/// `state`, `sort` and `direction` are always sent; the rest only when set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryIssueRequest {
    pub state: ItemStateFilter,
    pub sort: IssueSort,
    pub direction: SortDirection,
    pub labels: Vec<String>,
    pub since: Option<DateTime<Utc>>,
    /// Milestone number, `*` for any or `none`
    pub milestone: Option<String>,
    /// Login, `*` for any or `none`
    pub assignee: Option<String>,
    pub creator: Option<String>,
    pub mentioned: Option<String>,
}

impl ToParameters for RepositoryIssueRequest {
    fn to_parameters(&self) -> Parameters {
        let mut parameters = Parameters::new();
        parameters.insert("state".to_string(), self.state.as_str().to_string());
        parameters.insert("sort".to_string(), self.sort.as_str().to_string());
        parameters.insert("direction".to_string(), self.direction.as_str().to_string());

        if !self.labels.is_empty() {
            parameters.insert("labels".to_string(), self.labels.join(","));
        }
        if let Some(since) = self.since {
            parameters.insert(
                "since".to_string(),
                since.to_rfc3339_opts(SecondsFormat::Secs, true),
            );
        }
        let optional = [
            ("milestone", &self.milestone),
            ("assignee", &self.assignee),
            ("creator", &self.creator),
            ("mentioned", &self.mentioned),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                parameters.insert(key.to_string(), value.clone());
            }
        }
        parameters
    }
}
