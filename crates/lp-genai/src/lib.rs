//! Repository context and content generation for Launchpad.
//!
//! The studio depends on two collaborator traits:
//!
//! - [`RepoContextProvider`] supplies README text and repository statistics.
//!   [`GitHubClient`] implements it over raw content and the REST API;
//!   [`fetch_context`] wraps any provider so failures degrade to a
//!   placeholder README and random statistics.
//! - [`ContentGenerator`] turns context into an [`AnalysisResult`], an
//!   analysis into a [`ContentDocument`], and a document plus instruction
//!   into a replacement document. [`GeminiClient`] implements it with
//!   schema-constrained JSON responses.
//!
//! Scripted implementations for tests live behind the `mock` feature.
//!
//! [`AnalysisResult`]: lp_content::AnalysisResult
//! [`ContentDocument`]: lp_content::ContentDocument

mod error;
mod gemini;
mod github;
#[cfg(feature = "mock")]
mod mock;
mod prompts;
mod provider;
mod schema;

pub use error::GenAiError;
pub use gemini::GeminiClient;
pub use github::GitHubClient;
#[cfg(feature = "mock")]
pub use mock::{FailingContext, GeneratorCall, ScriptedGenerator, StaticContext};
pub use prompts::README_CONTEXT_CHARS;
pub use provider::{
    ContentGenerator, RepoContext, RepoContextProvider, fetch_context, placeholder_readme,
    random_stats,
};
