//! Refinement endpoint.
//!
//! The collaborator call runs on the blocking pool with the studio
//! unlocked; the session stays in the refining phase meanwhile, so a
//! second request is answered with 409.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use lp_content::ContentDocument;
use lp_studio::apply_refinement;
use serde::{Deserialize, Serialize};

use crate::error::ServerError;
use crate::handlers::document::SessionResponse;
use crate::state::AppState;

/// Request body for POST /api/refine.
#[derive(Deserialize)]
pub(crate) struct RefineRequest {
    instruction: String,
}

/// Response for POST /api/refine.
#[derive(Serialize)]
pub(crate) struct RefineResponse {
    /// Whether the document changed. Blank instructions and failed
    /// refinements leave it as it was.
    applied: bool,
    session: SessionResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    document: Option<ContentDocument>,
}

fn respond(state: &AppState, applied: bool) -> Json<RefineResponse> {
    let document = state.studio().document().cloned();
    Json(RefineResponse {
        applied,
        session: SessionResponse::capture(state),
        document,
    })
}

/// Handle POST /api/refine.
pub(crate) async fn post_refine(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RefineRequest>,
) -> Result<Json<RefineResponse>, ServerError> {
    let pending = state.studio().begin_refine(&request.instruction)?;
    let Some(pending) = pending else {
        return Ok(respond(&state, false));
    };

    let generator = Arc::clone(&state.generator);
    let snapshot = pending.clone();
    let joined = tokio::task::spawn_blocking(move || {
        apply_refinement(generator.as_ref(), &snapshot.current, &snapshot.instruction)
    })
    .await;

    let result = match joined {
        Ok(result) => result,
        Err(e) => {
            state.studio().abort_refine(&pending);
            return Err(e.into());
        }
    };

    // A failed refinement is reported in the transcript, not as an error.
    let applied = state.studio().finish_refine(&pending, result).is_ok();
    Ok(respond(&state, applied))
}
