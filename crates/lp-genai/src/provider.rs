//! Collaborator contracts.

use lp_content::{AnalysisResult, ContentDocument, RepoRef, RepoStats};
use rand::RngExt;
use tracing::warn;

use crate::error::GenAiError;

/// Source of README text and statistics for a repository.
pub trait RepoContextProvider: Send + Sync {
    /// Fetch the repository README as plain text.
    ///
    /// # Errors
    ///
    /// Returns [`GenAiError`] if no README could be retrieved.
    fn readme(&self, repo: &RepoRef) -> Result<String, GenAiError>;

    /// Fetch star, fork and open issue counts.
    ///
    /// # Errors
    ///
    /// Returns [`GenAiError`] if the statistics could not be retrieved.
    fn stats(&self, repo: &RepoRef) -> Result<RepoStats, GenAiError>;
}

/// Generator of brand analyses and landing page documents.
///
/// Every call is a schema-validated JSON exchange: an empty response or a
/// response that does not match the expected shape is an error.
pub trait ContentGenerator: Send + Sync {
    /// Infer a brand profile from README text.
    ///
    /// # Errors
    ///
    /// Returns [`GenAiError`] on transport failure or schema violation.
    fn analyze(&self, readme: &str, repo_url: &str) -> Result<AnalysisResult, GenAiError>;

    /// Write a full landing page for an analysis.
    ///
    /// The returned document carries `stats` as its `githubStats`.
    ///
    /// # Errors
    ///
    /// Returns [`GenAiError`] on transport failure or schema violation.
    fn generate(
        &self,
        analysis: &AnalysisResult,
        stats: RepoStats,
    ) -> Result<ContentDocument, GenAiError>;

    /// Produce a complete replacement of `current` that applies `instruction`.
    ///
    /// # Errors
    ///
    /// Returns [`GenAiError`] on transport failure or schema violation.
    fn refine(
        &self,
        current: &ContentDocument,
        instruction: &str,
    ) -> Result<ContentDocument, GenAiError>;
}

/// Repository context used to seed generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepoContext {
    pub readme: String,
    pub stats: RepoStats,
}

/// Gather README and statistics, degrading instead of failing.
///
/// A missing README becomes [`placeholder_readme`]; missing statistics
/// become [`random_stats`].
pub fn fetch_context(provider: &dyn RepoContextProvider, repo: &RepoRef) -> RepoContext {
    let readme = provider.readme(repo).unwrap_or_else(|e| {
        warn!(repo = %repo, error = %e, "README fetch failed, using placeholder");
        placeholder_readme(repo)
    });
    let stats = provider.stats(repo).unwrap_or_else(|e| {
        warn!(repo = %repo, error = %e, "Stats fetch failed, using random values");
        random_stats()
    });
    RepoContext { readme, stats }
}

/// Context text used when the README cannot be fetched.
#[must_use]
pub fn placeholder_readme(repo: &RepoRef) -> String {
    format!(
        "Could not fetch raw content for {repo}. Please infer context based on a {} project typically found on GitHub.",
        repo.name
    )
}

/// Plausible statistics for a repository whose real numbers are unknown.
#[must_use]
pub fn random_stats() -> RepoStats {
    let mut rng = rand::rng();
    RepoStats {
        stars: rng.random_range(0..5000),
        forks: rng.random_range(0..500),
        issues: rng.random_range(0..50),
    }
}
