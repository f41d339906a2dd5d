//! The content document and its sections.

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// Full structured description of a generated landing page.
///
/// `meta` and `hero` must be present as objects; every other section is
/// optional and may be absent, empty, or partially filled.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    /// Branding, SEO and theme selectors.
    pub meta: Meta,
    /// Hero copy.
    pub hero: Hero,
    /// Problem/solution pair (zig-zag section).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problem_solution: Option<ProblemSolution>,
    /// Feature cards in author order.
    #[serde(default)]
    pub features: Vec<Feature>,
    /// Testimonial block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_proof: Option<SocialProof>,
    /// Pricing plans in column order.
    #[serde(default)]
    pub pricing: Vec<PricingPlan>,
    /// Frequently asked questions in author order.
    #[serde(default)]
    pub faq: Vec<FaqItem>,
    /// Repository statistics captured at creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_stats: Option<RepoStats>,
}

impl ContentDocument {
    /// Parse a document from a collaborator's JSON response.
    ///
    /// A blank response is [`ContentError::EmptyResponse`]; anything that is
    /// not a JSON object with `meta` and `hero` objects is a schema violation.
    pub fn from_json(text: &str) -> Result<Self, ContentError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ContentError::EmptyResponse);
        }
        Ok(serde_json::from_str(text)?)
    }

    /// Serialize to compact JSON.
    ///
    /// This is the form handed to the generator as refinement context.
    pub fn to_json(&self) -> Result<String, ContentError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON for files on disk.
    pub fn to_json_pretty(&self) -> Result<String, ContentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Attach repository statistics, replacing any present value.
    #[must_use]
    pub fn with_stats(mut self, stats: RepoStats) -> Self {
        self.github_stats = Some(stats);
        self
    }
}

/// Page-level metadata.
///
/// The three selector fields are kept as the raw strings the generator
/// produced; see [`FontPairing::from_name`] and [`LayoutStyle::from_name`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Meta {
    /// Short UI name shown in the navbar and footer.
    pub brand_name: String,
    /// SEO title.
    pub title: String,
    /// SEO description.
    pub description: String,
    /// Accent color as a hex string.
    pub theme_color: String,
    /// One of `sans`, `serif`, `mono`.
    pub font_pairing: String,
    /// One of `modern-saas`, `developer-tool`.
    pub layout_style: String,
}

/// Hero section copy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Hero {
    pub headline: String,
    pub subheadline: String,
    pub cta_primary: String,
    pub cta_secondary: String,
    /// Free-text prompt for the illustrative image.
    pub image_prompt: String,
}

/// Problem and solution paragraphs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProblemSolution {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution_description: Option<String>,
}

/// One feature card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Feature {
    pub title: String,
    pub description: String,
    /// Symbolic icon name, e.g. `Zap` or `shield-check`.
    pub icon: String,
}

/// Testimonial and headline statistic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialProof {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stat_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testimonial: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testimonial_author: Option<String>,
}

/// One pricing plan.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PricingPlan {
    pub plan_name: String,
    pub price: String,
    pub features: Vec<String>,
    pub is_popular: bool,
}

/// Question and answer pair.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

/// Repository statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoStats {
    pub stars: u64,
    pub forks: u64,
    pub issues: u64,
}

/// Font family selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontPairing {
    #[default]
    Sans,
    Serif,
    Mono,
}

impl FontPairing {
    /// All pairings, in design-studio order.
    pub const ALL: [Self; 3] = [Self::Sans, Self::Serif, Self::Mono];

    /// Resolve a schema value, falling back to [`FontPairing::Sans`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "serif" => Self::Serif,
            "mono" => Self::Mono,
            _ => Self::Sans,
        }
    }

    /// Schema value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sans => "sans",
            Self::Serif => "serif",
            Self::Mono => "mono",
        }
    }
}

/// Structural layout selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutStyle {
    /// Light, product-marketing layout.
    #[default]
    ModernSaas,
    /// Dark, terminal-flavoured layout.
    DeveloperTool,
}

impl LayoutStyle {
    /// Both layouts, in design-studio order.
    pub const ALL: [Self; 2] = [Self::ModernSaas, Self::DeveloperTool];

    /// Resolve a schema value, falling back to [`LayoutStyle::ModernSaas`].
    ///
    /// Matching is exact: `"Developer-Tool"` is not a recognized value.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "developer-tool" => Self::DeveloperTool,
            _ => Self::ModernSaas,
        }
    }

    /// Schema value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ModernSaas => "modern-saas",
            Self::DeveloperTool => "developer-tool",
        }
    }

    /// Label shown in the design studio.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ModernSaas => "SaaS Startup",
            Self::DeveloperTool => "Dev Tool",
        }
    }
}
