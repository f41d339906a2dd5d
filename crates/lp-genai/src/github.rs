//! GitHub repository context client.

use std::time::Duration;

use lp_config::GitHubConfig;
use lp_content::{RepoRef, RepoStats};
use serde::Deserialize;
use tracing::{debug, info};
use ureq::Agent;

use crate::error::GenAiError;
use crate::provider::RepoContextProvider;

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

const USER_AGENT: &str = concat!("launchpad/", env!("CARGO_PKG_VERSION"));

/// Subset of the repository API response.
#[derive(Debug, Deserialize)]
struct RepoResponse {
    stargazers_count: u64,
    forks_count: u64,
    open_issues_count: u64,
}

/// Fetches README text from raw content and counts from the REST API.
pub struct GitHubClient {
    agent: Agent,
    api_url: String,
    raw_url: String,
    branches: Vec<String>,
}

impl GitHubClient {
    /// Create client from config values.
    #[must_use]
    pub fn from_config(config: &GitHubConfig) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            api_url: config.api_url.trim_end_matches('/').to_owned(),
            raw_url: config.raw_url.trim_end_matches('/').to_owned(),
            branches: config.branches.clone(),
        }
    }

    fn readme_url(&self, repo: &RepoRef, branch: &str) -> String {
        format!(
            "{}/{}/{}/{branch}/README.md",
            self.raw_url, repo.owner, repo.name
        )
    }

    fn get_text(&self, url: &str) -> Result<String, GenAiError> {
        let response = self
            .agent
            .get(url)
            .header("User-Agent", USER_AGENT)
            .call()?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status >= 400 {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(GenAiError::HttpResponse {
                status,
                body: error_body,
            });
        }

        Ok(body_reader.read_to_string()?)
    }
}

impl RepoContextProvider for GitHubClient {
    fn readme(&self, repo: &RepoRef) -> Result<String, GenAiError> {
        let mut last_error = None;
        for branch in self.branches.iter().filter(|b| !b.trim().is_empty()) {
            let url = self.readme_url(repo, branch);
            debug!(%url, "Fetching README");
            match self.get_text(&url) {
                Ok(text) => {
                    info!(repo = %repo, branch = %branch, "Fetched README");
                    return Ok(text);
                }
                Err(e) => last_error = Some(e),
            }
        }
        Err(last_error.unwrap_or_else(|| GenAiError::HttpResponse {
            status: 404,
            body: "no branch to fetch README from".to_owned(),
        }))
    }

    fn stats(&self, repo: &RepoRef) -> Result<RepoStats, GenAiError> {
        let url = format!("{}/repos/{}/{}", self.api_url, repo.owner, repo.name);
        debug!(%url, "Fetching repository stats");

        let response = self
            .agent
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/vnd.github+json")
            .call()?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status >= 400 {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(GenAiError::HttpResponse {
                status,
                body: error_body,
            });
        }

        let data: RepoResponse = body_reader.read_json()?;
        Ok(RepoStats {
            stars: data.stargazers_count,
            forks: data.forks_count,
            issues: data.open_issues_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_readme_url_per_branch() {
        let client = GitHubClient::from_config(&GitHubConfig {
            raw_url: "https://raw.example.com/".to_owned(),
            ..GitHubConfig::default()
        });
        let repo = RepoRef::parse("https://github.com/acme/rocket").unwrap();

        assert_eq!(
            client.readme_url(&repo, "master"),
            "https://raw.example.com/acme/rocket/master/README.md"
        );
    }

    #[test]
    fn test_repo_response_fields() {
        let data: RepoResponse = serde_json::from_str(
            r#"{"name":"rocket","stargazers_count":1234,"forks_count":56,"open_issues_count":7}"#,
        )
        .unwrap();
        assert_eq!(data.stargazers_count, 1234);
        assert_eq!(data.forks_count, 56);
        assert_eq!(data.open_issues_count, 7);
    }
}
