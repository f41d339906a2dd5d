//! Content error types.

/// Error raised while validating external content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// Repository reference is not a GitHub repository URL.
    #[error("Please enter a valid GitHub URL")]
    InvalidRepoUrl(String),

    /// Collaborator returned nothing.
    #[error("empty response")]
    EmptyResponse,

    /// Response is not valid JSON or does not match the expected shape.
    #[error("schema violation: {0}")]
    Schema(#[from] serde_json::Error),
}
