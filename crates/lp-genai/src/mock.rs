//! Scripted collaborators for testing.
//!
//! Provides [`ScriptedGenerator`], [`StaticContext`] and [`FailingContext`]
//! for exercising the generation pipeline without network access.

use std::collections::VecDeque;
use std::sync::RwLock;

use lp_content::{AnalysisResult, ContentDocument, ContentError, RepoRef, RepoStats};

use crate::error::GenAiError;
use crate::provider::{ContentGenerator, RepoContextProvider};

/// A call received by [`ScriptedGenerator`].
#[derive(Clone, Debug, PartialEq)]
pub enum GeneratorCall {
    Analyze { readme: String, repo_url: String },
    Generate { project_name: String, stats: RepoStats },
    Refine { instruction: String },
}

type Scripted<T> = RwLock<VecDeque<Result<T, String>>>;

/// Generator that replays queued responses in order.
///
/// A queued error comes back as an HTTP 500 carrying the message; an
/// exhausted queue answers with an empty response. Use the builder methods
/// to script the exchange.
///
/// # Example
///
/// ```ignore
/// use lp_genai::{ContentGenerator, ScriptedGenerator};
///
/// let generator = ScriptedGenerator::new()
///     .with_analysis(analysis)
///     .with_document(doc);
/// ```
#[derive(Debug)]
pub struct ScriptedGenerator {
    analyses: Scripted<AnalysisResult>,
    documents: Scripted<ContentDocument>,
    refinements: Scripted<ContentDocument>,
    calls: RwLock<Vec<GeneratorCall>>,
}

impl Default for ScriptedGenerator {
    fn default() -> Self {
        Self {
            analyses: RwLock::new(VecDeque::new()),
            documents: RwLock::new(VecDeque::new()),
            refinements: RwLock::new(VecDeque::new()),
            calls: RwLock::new(Vec::new()),
        }
    }
}

impl ScriptedGenerator {
    /// Create a generator with nothing scripted.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an analysis result.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_analysis(self, analysis: AnalysisResult) -> Self {
        self.analyses.write().unwrap().push_back(Ok(analysis));
        self
    }

    /// Queue a failing analysis.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_analysis_error(self, message: impl Into<String>) -> Self {
        self.analyses.write().unwrap().push_back(Err(message.into()));
        self
    }

    /// Queue a generated document.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_document(self, doc: ContentDocument) -> Self {
        self.documents.write().unwrap().push_back(Ok(doc));
        self
    }

    /// Queue a failing generation.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_document_error(self, message: impl Into<String>) -> Self {
        self.documents.write().unwrap().push_back(Err(message.into()));
        self
    }

    /// Queue a refined document, returned exactly as given.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_refinement(self, doc: ContentDocument) -> Self {
        self.refinements.write().unwrap().push_back(Ok(doc));
        self
    }

    /// Queue a failing refinement.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_refinement_error(self, message: impl Into<String>) -> Self {
        self.refinements
            .write()
            .unwrap()
            .push_back(Err(message.into()));
        self
    }

    /// Calls received so far, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn calls(&self) -> Vec<GeneratorCall> {
        self.calls.read().unwrap().clone()
    }

    fn record(&self, call: GeneratorCall) {
        if let Ok(mut calls) = self.calls.write() {
            calls.push(call);
        }
    }

    fn next<T>(queue: &Scripted<T>) -> Result<T, GenAiError> {
        let next = queue.write().ok().and_then(|mut q| q.pop_front());
        match next {
            Some(Ok(value)) => Ok(value),
            Some(Err(message)) => Err(GenAiError::HttpResponse {
                status: 500,
                body: message,
            }),
            None => Err(ContentError::EmptyResponse.into()),
        }
    }
}

impl ContentGenerator for ScriptedGenerator {
    fn analyze(&self, readme: &str, repo_url: &str) -> Result<AnalysisResult, GenAiError> {
        self.record(GeneratorCall::Analyze {
            readme: readme.to_owned(),
            repo_url: repo_url.to_owned(),
        });
        Self::next(&self.analyses)
    }

    fn generate(
        &self,
        analysis: &AnalysisResult,
        stats: RepoStats,
    ) -> Result<ContentDocument, GenAiError> {
        self.record(GeneratorCall::Generate {
            project_name: analysis.project_name.clone(),
            stats,
        });
        Ok(Self::next(&self.documents)?.with_stats(stats))
    }

    fn refine(
        &self,
        _current: &ContentDocument,
        instruction: &str,
    ) -> Result<ContentDocument, GenAiError> {
        self.record(GeneratorCall::Refine {
            instruction: instruction.to_owned(),
        });
        Self::next(&self.refinements)
    }
}

/// Context provider returning fixed values.
#[derive(Clone, Debug)]
pub struct StaticContext {
    readme: String,
    stats: RepoStats,
}

impl StaticContext {
    /// Create a provider that always succeeds.
    #[must_use]
    pub fn new(readme: impl Into<String>, stats: RepoStats) -> Self {
        Self {
            readme: readme.into(),
            stats,
        }
    }
}

impl RepoContextProvider for StaticContext {
    fn readme(&self, _repo: &RepoRef) -> Result<String, GenAiError> {
        Ok(self.readme.clone())
    }

    fn stats(&self, _repo: &RepoRef) -> Result<RepoStats, GenAiError> {
        Ok(self.stats)
    }
}

/// Context provider whose every call fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct FailingContext;

impl RepoContextProvider for FailingContext {
    fn readme(&self, _repo: &RepoRef) -> Result<String, GenAiError> {
        Err(GenAiError::HttpResponse {
            status: 404,
            body: "Not Found".to_owned(),
        })
    }

    fn stats(&self, _repo: &RepoRef) -> Result<RepoStats, GenAiError> {
        Err(GenAiError::HttpResponse {
            status: 503,
            body: "Service Unavailable".to_owned(),
        })
    }
}
