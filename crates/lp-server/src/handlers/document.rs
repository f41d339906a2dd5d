//! Document and session endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use lp_content::ContentDocument;
use lp_studio::{MetaPatch, Phase, StudioError, Transcript};
use serde::{Deserialize, Serialize};

use crate::error::ServerError;
use crate::handlers::compute_etag;
use crate::state::AppState;

/// Response for GET /api/session.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SessionResponse {
    pub(crate) phase: Phase,
    pub(crate) online: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) error: Option<String>,
    pub(crate) has_document: bool,
    pub(crate) transcript: Transcript,
}

impl SessionResponse {
    pub(crate) fn capture(state: &AppState) -> Self {
        let studio = state.studio();
        Self {
            phase: studio.phase(),
            online: studio.is_online(),
            error: studio.error().map(str::to_owned),
            has_document: studio.document().is_some(),
            transcript: studio.transcript().clone(),
        }
    }
}

/// Handle GET /api/session.
pub(crate) async fn get_session(State(state): State<Arc<AppState>>) -> Json<SessionResponse> {
    Json(SessionResponse::capture(&state))
}

/// Request body for PUT /api/session/online.
#[derive(Deserialize)]
pub(crate) struct OnlineRequest {
    online: bool,
}

/// Handle PUT /api/session/online.
///
/// The preview page reports browser connectivity changes here.
pub(crate) async fn put_online(
    State(state): State<Arc<AppState>>,
    Json(request): Json<OnlineRequest>,
) -> Json<SessionResponse> {
    state.studio().set_online(request.online);
    Json(SessionResponse::capture(&state))
}

/// Handle GET /api/document.
pub(crate) async fn get_document(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    let doc = state
        .studio()
        .document()
        .cloned()
        .ok_or(StudioError::NoDocument)?;
    let body = serde_json::to_string(&doc)?;

    let etag = compute_etag(&state.version, &body);
    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }

    Ok((
        [
            (header::ETAG, etag),
            (header::CONTENT_TYPE, "application/json".to_owned()),
            (header::CACHE_CONTROL, "no-cache".to_owned()),
        ],
        body,
    )
        .into_response())
}

/// Handle PATCH /api/document/meta.
pub(crate) async fn patch_meta(
    State(state): State<Arc<AppState>>,
    Json(patch): Json<MetaPatch>,
) -> Result<Json<ContentDocument>, ServerError> {
    let mut studio = state.studio();
    let doc = studio.update_meta(&patch)?.clone();
    tracing::info!(
        theme_color = %doc.meta.theme_color,
        font = %doc.meta.font_pairing,
        layout = %doc.meta.layout_style,
        "Updated design settings"
    );
    Ok(Json(doc))
}
