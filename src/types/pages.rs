//! GitHub Pages data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::users::User;

/// State of a Pages site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PagesStatus {
    Built,
    Building,
    Errored,
    #[serde(other)]
    Unknown,
}

/// Branch and directory a Pages site is published from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagesSource {
    pub branch: String,
    pub path: String,
}

/// Pages site descriptor for a repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// API URL of this site
    pub url: String,
    /// `None` until the first build has run
    #[serde(default)]
    pub status: Option<PagesStatus>,
    /// Custom domain, if configured
    #[serde(default)]
    pub cname: Option<String>,
    /// Whether the site has a custom 404 page
    #[serde(default)]
    pub custom_404: bool,
    #[serde(default)]
    pub html_url: Option<String>,
    /// `legacy` (branch builds) or `workflow` (Actions)
    #[serde(default)]
    pub build_type: Option<String>,
    #[serde(default)]
    pub source: Option<PagesSource>,
    #[serde(default)]
    pub public: Option<bool>,
    #[serde(default)]
    pub https_enforced: Option<bool>,
}

/// State of a single Pages build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PagesBuildStatus {
    Queued,
    Building,
    Built,
    Errored,
    #[serde(other)]
    Unknown,
}

/// Failure details of a build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagesBuildError {
    #[serde(default)]
    pub message: Option<String>,
}

/// Metadata for one Pages build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagesBuild {
    pub url: String,
    pub status: PagesBuildStatus,
    #[serde(default)]
    pub error: PagesBuildError,
    /// Account whose push triggered the build
    #[serde(default)]
    pub pusher: Option<User>,
    /// Commit SHA that was built
    pub commit: String,
    /// Build time in milliseconds
    #[serde(default)]
    pub duration: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Acknowledgement returned when a build is requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagesBuildRequest {
    pub url: String,
    pub status: String,
}
