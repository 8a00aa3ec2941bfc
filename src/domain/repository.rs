use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RepositoryRefError {
    #[error("invalid repository reference: {0}")]
    InvalidReference(String),
}

/// A public GitHub repository, identified by owner and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    pub owner: String,
    pub name: String,
}

impl RepositoryRef {
    /// Parses an HTTPS URL, an SSH URL or the `owner/repo` shorthand.
    ///
    /// All three forms of the same repository yield the same value;
    /// a trailing `.git` and/or `/` is stripped.
    pub fn parse(reference: &str) -> Result<Self, RepositoryRefError> {
        let invalid = || RepositoryRefError::InvalidReference(reference.to_string());

        let path = if let Some(rest) = reference.strip_prefix("https://github.com/") {
            rest
        } else if let Some(rest) = reference.strip_prefix("git@github.com:") {
            rest
        } else {
            reference
        };

        let path = path.strip_suffix('/').unwrap_or(path);
        let path = path.strip_suffix(".git").unwrap_or(path);

        let (owner, name) = path.split_once('/').ok_or_else(invalid)?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(invalid());
        }
        // A shorthand segment must not smuggle in leftover URL syntax.
        if owner.contains(':') || owner.contains('@') {
            return Err(invalid());
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_three_reference_forms_parse_to_the_same_repository() {
        let references = vec![
            "https://github.com/a/b",
            "https://github.com/a/b.git",
            "https://github.com/a/b/",
            "git@github.com:a/b.git",
            "git@github.com:a/b",
            "a/b",
        ];

        for reference in references {
            let repo = RepositoryRef::parse(reference).unwrap();
            assert_eq!(
                repo,
                RepositoryRef {
                    owner: "a".to_string(),
                    name: "b".to_string(),
                },
                "unexpected result for {reference}",
            );
        }
    }

    #[test]
    fn malformed_references_are_rejected() {
        let references = vec![
            "",
            "not-a-url",
            "a/",
            "/b",
            "a//b",
            "a/b/c",
            "https://github.com/a",
            "https://github.com/.git",
            "git@github.com:a.git",
            "https://gitlab.com/a/b",
        ];

        for reference in references {
            let result = RepositoryRef::parse(reference);
            assert_eq!(
                result,
                Err(RepositoryRefError::InvalidReference(reference.to_string())),
                "expected rejection of {reference:?}",
            );
        }
    }

    #[test]
    fn full_name_joins_owner_and_name() {
        let repo = RepositoryRef::parse("rust-lang/cargo").unwrap();
        assert_eq!(repo.full_name(), "rust-lang/cargo");
    }
}
