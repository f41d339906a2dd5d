//! Export download endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use crate::error::ServerError;
use crate::state::AppState;

/// Handle GET /export/index.html.
pub(crate) async fn get_export(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ServerError> {
    let artifact = state.studio().export()?;
    tracing::info!(bytes = artifact.contents.len(), "Serving export");
    Ok((
        [
            (header::CONTENT_TYPE, format!("{}; charset=utf-8", artifact.mime)),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", artifact.filename),
            ),
        ],
        artifact.contents,
    ))
}
