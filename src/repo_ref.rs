//! Addressing a repository either by `owner/name` or by numeric id.

use std::fmt;

use crate::ensure;
use crate::error::Error;

/// Identifies the repository an endpoint operates on.
///
/// GitHub accepts both `repos/{owner}/{name}/...` and
/// `repositories/{id}/...`; the id form survives renames and transfers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RepositoryRef {
    /// Owner login and repository name
    Name { owner: String, name: String },
    /// Numeric repository id
    Id(i64),
}

impl RepositoryRef {
    pub fn name(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Name {
            owner: owner.into(),
            name: name.into(),
        }
    }

    pub fn id(repository_id: i64) -> Self {
        Self::Id(repository_id)
    }

    /// Check that owner and name are usable.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a blank owner or name.
    pub fn validate(&self) -> Result<(), Error> {
        if let Self::Name { owner, name } = self {
            ensure::not_blank(owner, "owner")?;
            ensure::not_blank(name, "name")?;
        }
        Ok(())
    }

    /// Build the relative API path for this repository plus `suffix`.
    ///
    /// An empty suffix yields the repository's own path.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` for a blank owner or name.
    pub fn path(&self, suffix: &str) -> Result<String, Error> {
        self.validate()?;
        let base = match self {
            Self::Name { owner, name } => format!("repos/{owner}/{name}"),
            Self::Id(id) => format!("repositories/{id}"),
        };
        if suffix.is_empty() {
            Ok(base)
        } else {
            Ok(format!("{base}/{suffix}"))
        }
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name { owner, name } => write!(f, "{owner}/{name}"),
            Self::Id(id) => write!(f, "#{id}"),
        }
    }
}

impl From<(&str, &str)> for RepositoryRef {
    fn from((owner, name): (&str, &str)) -> Self {
        Self::name(owner, name)
    }
}

impl From<(String, String)> for RepositoryRef {
    fn from((owner, name): (String, String)) -> Self {
        Self::Name { owner, name }
    }
}

impl From<i64> for RepositoryRef {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<&RepositoryRef> for RepositoryRef {
    fn from(value: &RepositoryRef) -> Self {
        value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_paths() {
        let repo = RepositoryRef::from(("fake", "repo"));
        assert_eq!(repo.path("").unwrap(), "repos/fake/repo");
        assert_eq!(repo.path("forks").unwrap(), "repos/fake/repo/forks");
        assert_eq!(repo.to_string(), "fake/repo");
    }

    #[test]
    fn test_id_paths() {
        let repo = RepositoryRef::from(1_i64);
        assert_eq!(repo.path("pages").unwrap(), "repositories/1/pages");
        assert_eq!(repo.path("").unwrap(), "repositories/1");
    }

    #[test]
    fn test_blank_parts_rejected() {
        let err = RepositoryRef::from(("", "repo")).path("forks").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { name: "owner", .. }));

        let err = RepositoryRef::from(("owner", " ")).path("forks").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { name: "name", .. }));
    }
}
