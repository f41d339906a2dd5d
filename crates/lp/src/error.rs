//! CLI error types.

use lp_config::ConfigError;
use lp_content::ContentError;
use lp_genai::GenAiError;
use lp_studio::StudioError;

/// CLI error type.
///
/// Wrapped library errors are transparent so their causes can be listed
/// one per line.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    GenAi(#[from] GenAiError),

    #[error(transparent)]
    Studio(#[from] StudioError),

    #[error("{0}")]
    Server(String),

    #[error("invalid document {path}")]
    Document {
        path: String,
        #[source]
        source: ContentError,
    },
}
