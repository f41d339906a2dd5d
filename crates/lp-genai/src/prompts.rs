//! Prompt text for the three generator calls.

use lp_content::AnalysisResult;

/// Maximum number of README characters included in the analysis prompt.
pub const README_CONTEXT_CHARS: usize = 10_000;

/// Prefix of `text` holding at most `max` characters.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

pub(crate) fn analysis_prompt(readme: &str, repo_url: &str) -> String {
    let context = truncate_chars(readme, README_CONTEXT_CHARS);
    format!(
        "Role: Expert Brand Strategist.
Task: Analyze this GitHub Repository to create a brand profile.

Repo URL: {repo_url}
README Context:
{context}

Constraints:
1. 'projectName': Must be the EXACT name (e.g., 'PUNCHCLOCK'). Do NOT add slogans.
2. 'suggestedColor': Look for brand colors in the README (hex codes). If none, pick a color that fits the industry.
"
    )
}

pub(crate) fn generation_prompt(analysis: &AnalysisResult) -> String {
    format!(
        "Role: Senior UI/UX Copywriter for a modern web design agency.
Task: Write ultra-modern, punchy copy for a {project_type} called \"{name}\".

Style: Minimalist, \"Apple-esque\" or \"Vercel-esque\".

Strict Rules:
1. Headlines must be short and impactful (under 8 words).
2. No \"fluff\" or generic filler text.
3. 'imagePrompt': Request a high-end 3D abstract render, isometric glass style, matching the brand color.
4. 'meta.brandName': Just the name.
5. 'features[].icon': One of the icon names allowed by the schema.

Context:
Benefits: {benefits}
",
        project_type = analysis.project_type.as_str(),
        name = analysis.project_name,
        benefits = analysis.key_benefits.join(", "),
    )
}

pub(crate) fn refinement_prompt(current_json: &str, instruction: &str) -> String {
    format!(
        "Role: Senior Web Developer & Designer.
Task: Update the JSON configuration based on user feedback.

Current JSON:
{current_json}

User Feedback: \"{instruction}\"

Instructions:
- Update ONLY the fields requested.
- Return the COMPLETE updated JSON.
"
    )
}

#[cfg(test)]
mod tests {
    use lp_content::{LayoutStyle, ProjectType, Tone};

    use super::*;

    #[test]
    fn test_truncate_is_char_safe() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("", 3), "");
    }

    #[test]
    fn test_analysis_prompt_truncates_readme() {
        let readme = format!("{}TAIL", "x".repeat(README_CONTEXT_CHARS));
        let prompt = analysis_prompt(&readme, "https://github.com/acme/rocket");

        assert!(prompt.contains("Repo URL: https://github.com/acme/rocket"));
        assert!(!prompt.contains("TAIL"));
    }

    #[test]
    fn test_generation_prompt_lists_benefits() {
        let analysis = AnalysisResult {
            project_name: "Rocket".to_owned(),
            project_type: ProjectType::Library,
            target_audience: "Rust developers".to_owned(),
            tone: Tone::Technical,
            key_benefits: vec!["Fast".to_owned(), "Safe".to_owned()],
            suggested_color: "#f43f5e".to_owned(),
            suggested_layout: LayoutStyle::DeveloperTool,
        };

        let prompt = generation_prompt(&analysis);

        assert!(prompt.contains("copy for a Library called \"Rocket\""));
        assert!(prompt.contains("Benefits: Fast, Safe"));
    }

    #[test]
    fn test_refinement_prompt_quotes_instruction() {
        let prompt = refinement_prompt("{\"meta\":{}}", "make it darker");
        assert!(prompt.contains("Current JSON:\n{\"meta\":{}}"));
        assert!(prompt.contains("User Feedback: \"make it darker\""));
    }
}
