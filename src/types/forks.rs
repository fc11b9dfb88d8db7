//! Fork request bodies and filters.

use serde::Serialize;

use crate::connection::{Parameters, ToParameters};

/// Body for creating a fork.
///
/// All fields are optional: an empty body forks into the authenticated
/// user's account under the same name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewRepositoryFork {
    /// Organization to fork into
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    /// Name for the new fork
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Fork only the default branch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_branch_only: Option<bool>,
}

/// Sort order for fork listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ForkSort {
    #[default]
    Newest,
    Oldest,
    Stargazers,
    Watchers,
}

impl ForkSort {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Stargazers => "stargazers",
            Self::Watchers => "watchers",
        }
    }
}

/// Filters for `GET repos/{owner}/{repo}/forks`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepositoryForksListRequest {
    pub sort: ForkSort,
}

impl ToParameters for RepositoryForksListRequest {
    fn to_parameters(&self) -> Parameters {
        let mut parameters = Parameters::new();
        parameters.insert("sort".to_string(), self.sort.as_str().to_string());
        parameters
    }
}
