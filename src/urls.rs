//! Relative endpoint paths, shared by the async and stream clients.
//!
//! Every builder validates its inputs, so a path that comes out of here is
//! safe to send.

use crate::ensure;
use crate::error::Error;
use crate::repo_ref::RepositoryRef;

pub(crate) fn repository(repository: &RepositoryRef) -> Result<String, Error> {
    repository.path("")
}

pub(crate) fn forks(repository: &RepositoryRef) -> Result<String, Error> {
    repository.path("forks")
}

pub(crate) fn pages(repository: &RepositoryRef) -> Result<String, Error> {
    repository.path("pages")
}

pub(crate) fn pages_builds(repository: &RepositoryRef) -> Result<String, Error> {
    repository.path("pages/builds")
}

pub(crate) fn pages_build_latest(repository: &RepositoryRef) -> Result<String, Error> {
    repository.path("pages/builds/latest")
}

pub(crate) fn issues(repository: &RepositoryRef) -> Result<String, Error> {
    repository.path("issues")
}

pub(crate) fn issue(repository: &RepositoryRef, number: u64) -> Result<String, Error> {
    repository.path(&format!("issues/{number}"))
}

pub(crate) fn releases(repository: &RepositoryRef) -> Result<String, Error> {
    repository.path("releases")
}

pub(crate) fn release(repository: &RepositoryRef, id: i64) -> Result<String, Error> {
    repository.path(&format!("releases/{id}"))
}

pub(crate) fn latest_release(repository: &RepositoryRef) -> Result<String, Error> {
    repository.path("releases/latest")
}

pub(crate) fn current_user_repositories() -> String {
    "user/repos".to_string()
}

pub(crate) fn user_repositories(login: &str) -> Result<String, Error> {
    ensure::not_blank(login, "login")?;
    Ok(format!("users/{login}/repos"))
}

pub(crate) fn organization_repositories(organization: &str) -> Result<String, Error> {
    ensure::not_blank(organization, "organization")?;
    Ok(format!("orgs/{organization}/repos"))
}
