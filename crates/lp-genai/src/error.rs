//! Error types for collaborator calls.

use lp_config::ConfigError;
use lp_content::ContentError;

/// Error from a repository context or content generation call.
#[derive(Debug, thiserror::Error)]
pub enum GenAiError {
    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed")]
    HttpRequest(#[from] ureq::Error),

    /// HTTP response error (server returned error status).
    #[error("HTTP error: {status} - {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// Transport payload could not be serialized or parsed.
    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    /// Response was empty or did not match the expected document shape.
    #[error(transparent)]
    Content(#[from] ContentError),

    /// Client is not configured for use.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
