//! Studio error types.

use lp_content::ContentError;
use lp_genai::GenAiError;

/// Assistant reply appended when a refinement fails.
pub const REFINE_FAILED_MESSAGE: &str = "Sorry, I couldn't process that update. Try rephrasing.";

/// Error text shown when generation is attempted offline.
pub const OFFLINE_MESSAGE: &str = "You are offline. Please check your connection.";

/// Error from a studio operation.
///
/// `Display` is the text shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum StudioError {
    /// Input could not be parsed (repository URL, document JSON).
    #[error(transparent)]
    Content(#[from] ContentError),

    /// Network-dependent operation attempted while offline.
    #[error("You are offline. Please check your connection.")]
    Offline,

    /// Another generation or refinement is still running.
    #[error("Another update is still in progress")]
    Busy,

    /// Operation needs a generated document.
    #[error("No landing page has been generated yet")]
    NoDocument,

    /// Design edit carried an unusable theme color.
    #[error("Invalid theme color: {0}")]
    InvalidColor(String),

    /// Context, analysis or generation call failed.
    #[error("{0}")]
    Generation(#[source] GenAiError),

    /// Refinement call failed; the previous document was kept.
    #[error("Sorry, I couldn't process that update. Try rephrasing.")]
    Refinement(#[source] GenAiError),

    /// Export could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
