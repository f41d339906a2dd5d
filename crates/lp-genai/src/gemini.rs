//! Gemini `generateContent` client.
//!
//! Each call sends one user prompt with `responseMimeType: application/json`
//! and a response schema, then parses the concatenated text parts of the
//! first candidate.

use std::time::Duration;

use lp_config::Config;
use lp_content::{AnalysisResult, ContentDocument, RepoStats};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};
use ureq::Agent;

use crate::error::GenAiError;
use crate::prompts::{analysis_prompt, generation_prompt, refinement_prompt};
use crate::provider::ContentGenerator;
use crate::schema::{analysis_schema, landing_page_schema};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: [RequestContent<'a>; 1],
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Text of the first candidate; empty when there is none.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Content generator backed by the Gemini REST API.
pub struct GeminiClient {
    agent: Agent,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// Create client with explicit settings.
    #[must_use]
    pub fn new(base_url: &str, model: &str, api_key: &str, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
            model: model.to_owned(),
            api_key: api_key.to_owned(),
        }
    }

    /// Create client from the `[genai]` section.
    ///
    /// # Errors
    ///
    /// Returns [`GenAiError::Config`] if no API key is configured.
    pub fn from_config(config: &Config) -> Result<Self, GenAiError> {
        let api_key = config.require_api_key()?;
        Ok(Self::new(
            &config.genai.base_url,
            &config.genai.model,
            api_key,
            Duration::from_secs(config.genai.timeout_secs),
        ))
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// Run one prompt and return the raw JSON text of the answer.
    fn generate_json(&self, prompt: &str, schema: Value) -> Result<String, GenAiError> {
        let request = GenerateRequest {
            contents: [RequestContent {
                role: "user",
                parts: [RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: schema,
            },
        };
        let body = serde_json::to_vec(&request)?;
        let url = self.endpoint();
        debug!(%url, prompt_chars = prompt.chars().count(), "Calling generator");

        let response = self
            .agent
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .send(&body[..])?;

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

        let response: GenerateResponse = body_reader.read_json()?;
        Ok(response.text())
    }
}

impl ContentGenerator for GeminiClient {
    fn analyze(&self, readme: &str, repo_url: &str) -> Result<AnalysisResult, GenAiError> {
        let text = self.generate_json(&analysis_prompt(readme, repo_url), analysis_schema())?;
        let analysis = AnalysisResult::from_json(&text)?;
        info!(project = %analysis.project_name, "Analysis complete");
        Ok(analysis)
    }

    fn generate(
        &self,
        analysis: &AnalysisResult,
        stats: RepoStats,
    ) -> Result<ContentDocument, GenAiError> {
        let text = self.generate_json(&generation_prompt(analysis), landing_page_schema())?;
        Ok(ContentDocument::from_json(&text)?.with_stats(stats))
    }

    fn refine(
        &self,
        current: &ContentDocument,
        instruction: &str,
    ) -> Result<ContentDocument, GenAiError> {
        let prompt = refinement_prompt(&current.to_json()?, instruction);
        let text = self.generate_json(&prompt, landing_page_schema())?;
        let mut refined = ContentDocument::from_json(&text)?;
        refined.github_stats = current.github_stats;
        Ok(refined)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_request_body_shape() {
        let request = GenerateRequest {
            contents: [RequestContent {
                role: "user",
                parts: [RequestPart { text: "hello" }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: serde_json::json!({ "type": "OBJECT" }),
            },
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "contents": [{ "role": "user", "parts": [{ "text": "hello" }] }],
                "generationConfig": {
                    "responseMimeType": "application/json",
                    "responseSchema": { "type": "OBJECT" }
                }
            })
        );
    }

    #[test]
    fn test_response_text_joins_parts() {
        let response: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"{\"a\":"},{"text":"1}"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(response.text(), r#"{"a":1}"#);
    }

    #[test]
    fn test_response_without_candidates_is_empty() {
        let response: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.text(), "");
        assert!(matches!(
            ContentDocument::from_json(&response.text()),
            Err(lp_content::ContentError::EmptyResponse)
        ));
    }

    #[test]
    fn test_endpoint() {
        let client = GeminiClient::new(
            "https://generativelanguage.googleapis.com/v1beta/",
            "gemini-2.5-flash",
            "key",
            Duration::from_secs(1),
        );
        assert_eq!(
            client.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_from_config_requires_key() {
        let mut config = Config::default();
        config.genai.api_key = String::new();
        assert!(matches!(
            GeminiClient::from_config(&config),
            Err(GenAiError::Config(_))
        ));
    }
}
