//! GitHub repository references.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ContentError;

static GITHUB_REPO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"github\.com/([^/?#\s]+)/([^/?#\s]+)").expect("valid regex")
});

/// Owner and name of a GitHub repository.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    /// Parse a repository URL such as `https://github.com/owner/repo`.
    ///
    /// Scheme, `www.`, a trailing `.git`, extra path segments, query and
    /// fragment are tolerated.
    pub fn parse(url: &str) -> Result<Self, ContentError> {
        let invalid = || ContentError::InvalidRepoUrl(url.to_owned());
        let caps = GITHUB_REPO.captures(url).ok_or_else(invalid)?;
        let owner = caps[1].to_owned();
        let name = caps[2].trim_end_matches(".git").to_owned();
        if name.is_empty() {
            return Err(invalid());
        }
        Ok(Self { owner, name })
    }

    /// Canonical `https://github.com/owner/name` URL.
    #[must_use]
    pub fn url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.name)
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_url() {
        let repo = RepoRef::parse("https://github.com/facebook/react").unwrap();
        assert_eq!(repo.owner, "facebook");
        assert_eq!(repo.name, "react");
        assert_eq!(repo.to_string(), "facebook/react");
    }

    #[test]
    fn test_parse_tolerates_suffixes() {
        for url in [
            "https://github.com/tailwindlabs/tailwindcss.git",
            "https://www.github.com/tailwindlabs/tailwindcss/tree/main/src",
            "github.com/tailwindlabs/tailwindcss?tab=readme",
            "http://github.com/tailwindlabs/tailwindcss#readme",
        ] {
            let repo = RepoRef::parse(url).unwrap();
            assert_eq!(repo.url(), "https://github.com/tailwindlabs/tailwindcss");
        }
    }

    #[test]
    fn test_parse_rejects_non_repo_urls() {
        for url in [
            "",
            "https://gitlab.com/owner/repo",
            "https://github.com/owner",
            "https://github.com/owner/.git",
            "not a url",
        ] {
            let err = RepoRef::parse(url).unwrap_err();
            assert!(matches!(err, ContentError::InvalidRepoUrl(_)), "{url}");
        }
    }
}
