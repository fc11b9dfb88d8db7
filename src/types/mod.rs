//! Data model types mirroring GitHub's JSON payloads.

pub mod forks;
pub mod issues;
pub mod pages;
pub mod releases;
pub mod repos;
pub mod users;

// Re-exports
pub use forks::{ForkSort, NewRepositoryFork, RepositoryForksListRequest};
pub use issues::{
    Issue, IssueSort, IssueState, IssueUpdate, ItemStateFilter, Label, Milestone, NewIssue,
    RepositoryIssueRequest, SortDirection,
};
pub use pages::{
    Page, PagesBuild, PagesBuildError, PagesBuildRequest, PagesBuildStatus, PagesSource,
    PagesStatus,
};
pub use releases::{NewRelease, Release, ReleaseAsset, ReleaseUpdate};
pub use repos::{
    NewRepository, Repository, RepositoryAffiliation, RepositoryRequest, RepositorySort,
    RepositoryType, RepositoryUpdate, RepositoryVisibility,
};
pub use users::{AccountType, User};
