//! Repository-related data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::connection::{Parameters, ToParameters};
use crate::ensure;
use crate::error::Error;
use crate::types::issues::SortDirection;
use crate::types::users::User;

/// Repository information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    /// Numeric repository id
    pub id: i64,
    #[serde(default)]
    pub node_id: Option<String>,
    /// Repository name
    pub name: String,
    /// `owner/name`
    pub full_name: String,
    /// Owning account
    pub owner: User,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub description: Option<String>,
    /// Whether this repository is itself a fork
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub visibility: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    pub html_url: String,
    pub url: String,
    #[serde(default)]
    pub clone_url: Option<String>,
    #[serde(default)]
    pub ssh_url: Option<String>,
    #[serde(default)]
    pub default_branch: Option<String>,
    #[serde(default)]
    pub has_issues: bool,
    #[serde(default)]
    pub has_pages: bool,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub watchers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    #[serde(default)]
    pub open_issues_count: u32,
    #[serde(default)]
    pub topics: Vec<String>,
    /// Repository this one was forked from (single-repository responses only)
    #[serde(default)]
    pub parent: Option<Box<Repository>>,
    /// Root of the fork network (single-repository responses only)
    #[serde(default)]
    pub source: Option<Box<Repository>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub pushed_at: Option<DateTime<Utc>>,
}

/// Body for creating a repository.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewRepository {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_issues: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_wiki: Option<bool>,
    /// Create an initial commit with an empty README
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_init: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gitignore_template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_template: Option<String>,
    /// Organization team granted access (organization repositories only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,
}

impl NewRepository {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        ensure::not_blank(&self.name, "name")
    }
}

/// Body for editing a repository. Only set fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RepositoryUpdate {
    /// New name; renames the repository
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_issues: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_wiki: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

/// `type` filter for listing the current user's repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    All,
    Owner,
    Public,
    Private,
    Member,
}

impl RepositoryType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Owner => "owner",
            Self::Public => "public",
            Self::Private => "private",
            Self::Member => "member",
        }
    }
}

/// Sort order for repository listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositorySort {
    Created,
    Updated,
    Pushed,
    FullName,
}

impl RepositorySort {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Pushed => "pushed",
            Self::FullName => "full_name",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryVisibility {
    All,
    Public,
    Private,
}

impl RepositoryVisibility {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Public => "public",
            Self::Private => "private",
        }
    }
}

/// How the current user is related to a listed repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryAffiliation {
    Owner,
    Collaborator,
    OrganizationMember,
}

impl RepositoryAffiliation {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Collaborator => "collaborator",
            Self::OrganizationMember => "organization_member",
        }
    }
}

/// Filters for `GET user/repos`. Unset fields use GitHub's defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryRequest {
    pub repository_type: Option<RepositoryType>,
    pub sort: Option<RepositorySort>,
    pub direction: Option<SortDirection>,
    pub visibility: Option<RepositoryVisibility>,
    pub affiliation: Vec<RepositoryAffiliation>,
}

impl ToParameters for RepositoryRequest {
    fn to_parameters(&self) -> Parameters {
        let mut parameters = Parameters::new();
        if let Some(kind) = self.repository_type {
            parameters.insert("type".to_string(), kind.as_str().to_string());
        }
        if let Some(sort) = self.sort {
            parameters.insert("sort".to_string(), sort.as_str().to_string());
        }
        if let Some(direction) = self.direction {
            parameters.insert("direction".to_string(), direction.as_str().to_string());
        }
        if let Some(visibility) = self.visibility {
            parameters.insert("visibility".to_string(), visibility.as_str().to_string());
        }
        if !self.affiliation.is_empty() {
            let joined = self
                .affiliation
                .iter()
                .map(|a| a.as_str())
                .collect::<Vec<_>>()
                .join(",");
            parameters.insert("affiliation".to_string(), joined);
        }
        parameters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_repository_deserialize() {
        let json = r#"{
            "id": 1296269,
            "node_id": "MDEwOlJlcG9zaXRvcnkxMjk2MjY5",
            "name": "Hello-World",
            "full_name": "octocat/Hello-World",
            "owner": {"login": "octocat", "id": 1, "type": "User"},
            "private": false,
            "html_url": "https://github.com/octocat/Hello-World",
            "description": "This your first repo!",
            "fork": true,
            "url": "https://api.github.com/repos/octocat/Hello-World",
            "clone_url": "https://github.com/octocat/Hello-World.git",
            "default_branch": "master",
            "stargazers_count": 80,
            "forks_count": 9,
            "topics": ["octocat", "api"],
            "created_at": "2011-01-26T19:01:12Z",
            "pushed_at": "2011-01-26T19:06:43Z",
            "permissions": {"admin": false, "push": false, "pull": true}
        }"#;

        let repo: Repository = serde_json::from_str(json).expect("Should deserialize");
        assert_eq!(repo.id, 1_296_269);
        assert_eq!(repo.full_name, "octocat/Hello-World");
        assert_eq!(repo.owner.login, "octocat");
        assert!(repo.fork);
        assert_eq!(repo.stargazers_count, 80);
        assert_eq!(repo.topics.len(), 2);
        assert!(repo.parent.is_none());
        assert!(repo.updated_at.is_none());
    }

    #[test]
    fn test_new_repository_omits_unset_fields() {
        let body = serde_json::to_value(NewRepository {
            private: Some(true),
            ..NewRepository::new("hello")
        })
        .unwrap();

        assert_eq!(body, json!({"name": "hello", "private": true}));
    }

    #[test]
    fn test_repository_update_empty() {
        let body = serde_json::to_value(RepositoryUpdate::default()).unwrap();
        assert_eq!(body, json!({}));
    }

    #[test]
    fn test_repository_request_parameters() {
        let request = RepositoryRequest {
            sort: Some(RepositorySort::FullName),
            direction: Some(SortDirection::Ascending),
            affiliation: vec![
                RepositoryAffiliation::Owner,
                RepositoryAffiliation::OrganizationMember,
            ],
            ..RepositoryRequest::default()
        };

        let parameters = request.to_parameters();
        assert_eq!(parameters["sort"], "full_name");
        assert_eq!(parameters["direction"], "asc");
        assert_eq!(parameters["affiliation"], "owner,organization_member");
        assert!(!parameters.contains_key("type"));
        assert!(RepositoryRequest::default().to_parameters().is_empty());
    }
}
