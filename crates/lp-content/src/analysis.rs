//! Brand analysis produced from repository context.

use serde::{Deserialize, Serialize};

use crate::document::LayoutStyle;
use crate::error::ContentError;

/// Brand profile inferred from a repository.
///
/// Unlike [`ContentDocument`](crate::ContentDocument), every field is
/// required and the enumerations are closed: an unknown project type or
/// tone is a schema violation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Exact project name, at most a couple of words.
    pub project_name: String,
    pub project_type: ProjectType,
    pub target_audience: String,
    pub tone: Tone,
    pub key_benefits: Vec<String>,
    /// Hex color suggested for the brand.
    pub suggested_color: String,
    pub suggested_layout: LayoutStyle,
}

impl AnalysisResult {
    /// Parse an analysis from a collaborator's JSON response.
    pub fn from_json(text: &str) -> Result<Self, ContentError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ContentError::EmptyResponse);
        }
        Ok(serde_json::from_str(text)?)
    }
}

/// Kind of project being marketed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectType {
    SaaS,
    Library,
    Tool,
    Framework,
}

impl ProjectType {
    pub const ALL: [Self; 4] = [Self::SaaS, Self::Library, Self::Tool, Self::Framework];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SaaS => "SaaS",
            Self::Library => "Library",
            Self::Tool => "Tool",
            Self::Framework => "Framework",
        }
    }
}

/// Voice of the generated copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    Professional,
    Playful,
    Technical,
    Minimalist,
}

impl Tone {
    pub const ALL: [Self; 4] = [
        Self::Professional,
        Self::Playful,
        Self::Technical,
        Self::Minimalist,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Professional => "Professional",
            Self::Playful => "Playful",
            Self::Technical => "Technical",
            Self::Minimalist => "Minimalist",
        }
    }
}
