//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lp_studio::StudioError;
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Studio operation failed.
    #[error(transparent)]
    Studio(#[from] StudioError),

    /// Background collaborator task panicked or was cancelled.
    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ServerError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Studio(e) => match e {
                StudioError::NoDocument => StatusCode::NOT_FOUND,
                StudioError::Busy => StatusCode::CONFLICT,
                StudioError::Offline => StatusCode::SERVICE_UNAVAILABLE,
                StudioError::Content(_) | StudioError::InvalidColor(_) => StatusCode::BAD_REQUEST,
                StudioError::Generation(_) | StudioError::Refinement(_) => StatusCode::BAD_GATEWAY,
                StudioError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Task(_) | Self::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!(error = %self, "Request failed");
        }
        (status, axum::Json(json!({"error": self.to_string()}))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ServerError::from(StudioError::Busy).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ServerError::from(StudioError::NoDocument).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServerError::from(StudioError::InvalidColor("x".to_owned())).status(),
            StatusCode::BAD_REQUEST
        );
    }
}
