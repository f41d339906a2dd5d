//! The studio session: one current document and the steps that replace it.

use lp_content::{AnalysisResult, ContentDocument, RepoRef};
use lp_genai::{ContentGenerator, GenAiError, RepoContextProvider, fetch_context};
use lp_renderer::RenderOptions;
use serde::Serialize;
use tracing::{info, warn};

use crate::design::MetaPatch;
use crate::error::{OFFLINE_MESSAGE, REFINE_FAILED_MESSAGE, StudioError};
use crate::export::ExportArtifact;
use crate::mutation::merge_refinement;
use crate::transcript::Transcript;

/// Assistant reply after a successful refinement.
pub const REFINED_MESSAGE: &str = "Updated! I've adjusted the page based on your feedback.";

/// Assistant reply when a refinement is requested offline.
pub const REFINE_OFFLINE_MESSAGE: &str = "I need an internet connection to refine the page.";

/// Where the session is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Idle,
    Analyzing,
    Generating,
    Ready,
    Refining,
    Error,
}

impl Phase {
    /// A generation or refinement is running.
    #[must_use]
    pub fn is_busy(self) -> bool {
        matches!(self, Self::Analyzing | Self::Generating | Self::Refining)
    }

    /// Progress heading for the generation steps.
    #[must_use]
    pub fn progress_title(self) -> Option<&'static str> {
        match self {
            Self::Analyzing => Some("Analyzing Repository..."),
            Self::Generating => Some("Designing Layout..."),
            _ => None,
        }
    }

    /// Progress detail for the generation steps.
    #[must_use]
    pub fn progress_detail(self) -> Option<&'static str> {
        match self {
            Self::Analyzing => {
                Some("Reading README.md, checking stars, and understanding your tech stack.")
            }
            Self::Generating => {
                Some("Applying UX best practices, generating copy, and selecting assets.")
            }
            _ => None,
        }
    }
}

/// A refinement handed out by [`Studio::begin_refine`].
///
/// Carries a snapshot of the document the instruction applies to, so the
/// collaborator call can run without holding the session.
#[derive(Clone, Debug)]
pub struct PendingRefinement {
    pub instruction: String,
    pub current: ContentDocument,
}

/// Owner of the current document, its transcript and the session phase.
///
/// The document is only ever replaced as a whole; readers never observe a
/// partially applied update.
#[derive(Debug)]
pub struct Studio {
    phase: Phase,
    document: Option<ContentDocument>,
    analysis: Option<AnalysisResult>,
    transcript: Transcript,
    error: Option<String>,
    online: bool,
}

impl Default for Studio {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            document: None,
            analysis: None,
            transcript: Transcript::default(),
            error: None,
            online: true,
        }
    }
}

impl Studio {
    /// Create an idle session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ready session around an existing document.
    #[must_use]
    pub fn with_document(document: ContentDocument) -> Self {
        Self {
            phase: Phase::Ready,
            document: Some(document),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn document(&self) -> Option<&ContentDocument> {
        self.document.as_ref()
    }

    #[must_use]
    pub fn analysis(&self) -> Option<&AnalysisResult> {
        self.analysis.as_ref()
    }

    #[must_use]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Error text from the last failed generation attempt.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn is_online(&self) -> bool {
        self.online
    }

    pub fn set_online(&mut self, online: bool) {
        if self.online != online {
            info!(online, "Connectivity changed");
        }
        self.online = online;
    }

    fn set_phase(&mut self, phase: Phase, on_phase: &mut dyn FnMut(Phase)) {
        info!(phase = ?phase, "Studio phase");
        self.phase = phase;
        on_phase(phase);
    }

    /// Run the full pipeline: fetch context, analyze, generate.
    ///
    /// See [`Studio::generate_with_progress`].
    pub fn generate(
        &mut self,
        context: &dyn RepoContextProvider,
        generator: &dyn ContentGenerator,
        repo_url: &str,
    ) -> Result<&ContentDocument, StudioError> {
        self.generate_with_progress(context, generator, repo_url, &mut |_| {})
    }

    /// Run the full pipeline, reporting each phase change to `on_phase`.
    ///
    /// Offline use and malformed URLs are refused before anything changes
    /// except the error text. Otherwise the transcript and the document are
    /// cleared and the steps run strictly in order. Context failures degrade
    /// to placeholder data; analysis or generation failures leave the
    /// session in [`Phase::Error`], from which a new generation may start.
    ///
    /// # Errors
    ///
    /// Returns [`StudioError::Busy`], [`StudioError::Offline`],
    /// [`StudioError::Content`] for a bad URL, or [`StudioError::Generation`].
    pub fn generate_with_progress(
        &mut self,
        context: &dyn RepoContextProvider,
        generator: &dyn ContentGenerator,
        repo_url: &str,
        on_phase: &mut dyn FnMut(Phase),
    ) -> Result<&ContentDocument, StudioError> {
        if self.phase.is_busy() {
            return Err(StudioError::Busy);
        }
        if !self.online {
            self.error = Some(OFFLINE_MESSAGE.to_owned());
            return Err(StudioError::Offline);
        }
        let repo = match RepoRef::parse(repo_url) {
            Ok(repo) => repo,
            Err(e) => {
                self.error = Some(e.to_string());
                return Err(e.into());
            }
        };

        self.error = None;
        self.transcript.clear();
        self.document = None;
        self.analysis = None;
        self.set_phase(Phase::Analyzing, on_phase);

        let repo_context = fetch_context(context, &repo);
        let analysis = match generator.analyze(&repo_context.readme, repo_url) {
            Ok(analysis) => analysis,
            Err(e) => return Err(self.fail_generation(e, on_phase)),
        };

        self.set_phase(Phase::Generating, on_phase);
        let document = match generator.generate(&analysis, repo_context.stats) {
            Ok(doc) => doc.with_stats(repo_context.stats),
            Err(e) => return Err(self.fail_generation(e, on_phase)),
        };

        self.transcript.push_assistant(format!(
            "I've generated a {} landing page based on '{}'. Use the Design tab to customize colors and fonts.",
            analysis.suggested_layout.as_str(),
            analysis.project_name
        ));
        info!(repo = %repo, project = %analysis.project_name, "Generated landing page");
        self.analysis = Some(analysis);
        self.set_phase(Phase::Ready, on_phase);
        Ok(self.document.insert(document))
    }

    fn fail_generation(
        &mut self,
        error: GenAiError,
        on_phase: &mut dyn FnMut(Phase),
    ) -> StudioError {
        warn!(error = %error, "Generation failed");
        self.error = Some(error.to_string());
        self.set_phase(Phase::Error, on_phase);
        StudioError::Generation(error)
    }

    /// Apply an instruction through `generator`.
    ///
    /// Combines [`Studio::begin_refine`] and [`Studio::finish_refine`].
    /// Returns `Ok(false)` when the instruction was blank and ignored.
    pub fn refine(
        &mut self,
        generator: &dyn ContentGenerator,
        instruction: &str,
    ) -> Result<bool, StudioError> {
        let Some(pending) = self.begin_refine(instruction)? else {
            return Ok(false);
        };
        let result = generator.refine(&pending.current, &pending.instruction);
        self.finish_refine(&pending, result)?;
        Ok(true)
    }

    /// Start a refinement.
    ///
    /// A blank instruction is ignored (`Ok(None)`). Otherwise the user
    /// message is recorded, the phase becomes [`Phase::Refining`] and a
    /// snapshot of the current document is returned.
    ///
    /// # Errors
    ///
    /// Returns [`StudioError::NoDocument`] without a document,
    /// [`StudioError::Busy`] while another update runs, and
    /// [`StudioError::Offline`] (after telling the user in the transcript)
    /// when offline.
    pub fn begin_refine(
        &mut self,
        instruction: &str,
    ) -> Result<Option<PendingRefinement>, StudioError> {
        if instruction.trim().is_empty() {
            return Ok(None);
        }
        let Some(current) = self.document.clone() else {
            return Err(StudioError::NoDocument);
        };
        if self.phase.is_busy() {
            return Err(StudioError::Busy);
        }
        if !self.online {
            self.transcript.push_assistant(REFINE_OFFLINE_MESSAGE);
            return Err(StudioError::Offline);
        }

        self.transcript.push_user(instruction);
        self.set_phase(Phase::Refining, &mut |_| {});
        Ok(Some(PendingRefinement {
            instruction: instruction.to_owned(),
            current,
        }))
    }

    /// Complete a refinement with the collaborator's result.
    ///
    /// On success the document is replaced, keeping the snapshot's
    /// `githubStats`. On failure the document is left as it was. Either way
    /// an assistant message is appended and the phase returns to
    /// [`Phase::Ready`].
    ///
    /// # Errors
    ///
    /// Returns [`StudioError::Refinement`] when `result` is an error.
    pub fn finish_refine(
        &mut self,
        pending: &PendingRefinement,
        result: Result<ContentDocument, GenAiError>,
    ) -> Result<(), StudioError> {
        self.set_phase(Phase::Ready, &mut |_| {});
        match result {
            Ok(refined) => {
                self.document = Some(merge_refinement(&pending.current, refined));
                self.transcript.push_assistant(REFINED_MESSAGE);
                info!(instruction = %pending.instruction, "Refinement applied");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Refinement failed, keeping previous document");
                let err = StudioError::Refinement(e);
                self.transcript.push_assistant(err.to_string());
                Err(err)
            }
        }
    }

    /// Give up on a refinement whose collaborator call never returned.
    ///
    /// Behaves like a failed [`Studio::finish_refine`]: the document is kept,
    /// the user is told, and the phase returns to [`Phase::Ready`].
    pub fn abort_refine(&mut self, pending: &PendingRefinement) {
        warn!(instruction = %pending.instruction, "Refinement aborted");
        self.set_phase(Phase::Ready, &mut |_| {});
        self.transcript.push_assistant(REFINE_FAILED_MESSAGE);
    }

    /// Replace theme selectors in `meta` without calling the generator.
    ///
    /// # Errors
    ///
    /// Returns [`StudioError::NoDocument`], [`StudioError::Busy`] while a
    /// refinement would overwrite the edit, or [`StudioError::InvalidColor`].
    pub fn update_meta(&mut self, patch: &MetaPatch) -> Result<&ContentDocument, StudioError> {
        if self.phase.is_busy() {
            return Err(StudioError::Busy);
        }
        let current = self.document.as_ref().ok_or(StudioError::NoDocument)?;
        let meta = patch.apply(&current.meta)?;
        let next = ContentDocument {
            meta,
            ..current.clone()
        };
        Ok(self.document.insert(next))
    }

    /// Render the current document as a downloadable page.
    ///
    /// Works offline.
    ///
    /// # Errors
    ///
    /// Returns [`StudioError::NoDocument`] before the first generation.
    pub fn export(&self) -> Result<ExportArtifact, StudioError> {
        self.export_with_year(RenderOptions::default().copyright_year)
    }

    /// Like [`Studio::export`] with a fixed copyright year.
    ///
    /// # Errors
    ///
    /// Returns [`StudioError::NoDocument`] before the first generation.
    pub fn export_with_year(&self, copyright_year: i32) -> Result<ExportArtifact, StudioError> {
        let doc = self.document.as_ref().ok_or(StudioError::NoDocument)?;
        Ok(ExportArtifact::render(doc, copyright_year))
    }
}
