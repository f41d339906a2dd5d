//! Instruction-driven document replacement.

use lp_content::ContentDocument;
use lp_genai::{ContentGenerator, GenAiError};
use tracing::debug;

/// Combine a refinement result with the document it was derived from.
///
/// The refined document replaces `current` wholesale except for
/// `githubStats`, which always keeps the value of `current`.
#[must_use]
pub fn merge_refinement(current: &ContentDocument, refined: ContentDocument) -> ContentDocument {
    ContentDocument {
        github_stats: current.github_stats,
        ..refined
    }
}

/// Ask `generator` to apply `instruction` to `current`.
///
/// On failure nothing is returned and `current` is untouched; callers keep
/// showing it.
pub fn apply_refinement(
    generator: &dyn ContentGenerator,
    current: &ContentDocument,
    instruction: &str,
) -> Result<ContentDocument, GenAiError> {
    debug!(instruction, "Applying refinement");
    let refined = generator.refine(current, instruction)?;
    Ok(merge_refinement(current, refined))
}

#[cfg(test)]
mod tests {
    use lp_content::RepoStats;
    use lp_genai::ScriptedGenerator;
    use pretty_assertions::assert_eq;

    use super::*;

    fn stats(stars: u64) -> RepoStats {
        RepoStats {
            stars,
            forks: 1,
            issues: 2,
        }
    }

    #[test]
    fn test_stats_forced_back() {
        let current = ContentDocument::default().with_stats(stats(10));
        let mut returned = ContentDocument::default().with_stats(stats(99_999));
        returned.hero.headline = "New".to_owned();
        let generator = ScriptedGenerator::new().with_refinement(returned);

        let merged = apply_refinement(&generator, &current, "new headline").unwrap();

        assert_eq!(merged.github_stats, Some(stats(10)));
        assert_eq!(merged.hero.headline, "New");
    }

    #[test]
    fn test_stats_restored_when_response_drops_them() {
        let current = ContentDocument::default().with_stats(stats(7));
        let merged = merge_refinement(&current, ContentDocument::default());
        assert_eq!(merged.github_stats, Some(stats(7)));
    }

    #[test]
    fn test_missing_stats_stay_missing() {
        let current = ContentDocument::default();
        let merged = merge_refinement(&current, ContentDocument::default().with_stats(stats(5)));
        assert_eq!(merged.github_stats, None);
    }

    #[test]
    fn test_failure_leaves_current_untouched() {
        let current = ContentDocument::default().with_stats(stats(3));
        let before = current.clone();
        let generator = ScriptedGenerator::new().with_refinement_error("boom");

        assert!(apply_refinement(&generator, &current, "anything").is_err());
        assert_eq!(current, before);
    }
}
