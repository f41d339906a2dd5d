//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, patch, post, put};
use tower::ServiceBuilder;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/api/document", get(handlers::document::get_document))
        .route("/api/document/meta", patch(handlers::document::patch_meta))
        .route("/api/preview", get(handlers::preview::get_preview_tree))
        .route("/api/session", get(handlers::document::get_session))
        .route("/api/session/online", put(handlers::document::put_online))
        .route("/api/refine", post(handlers::refine::post_refine));

    Router::new()
        .route("/", get(handlers::preview::get_preview_page))
        .route("/export/index.html", get(handlers::export::get_export))
        .merge(api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(security::csp_layer())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use lp_content::{ContentDocument, RepoStats};
    use lp_genai::{ContentGenerator, ScriptedGenerator};
    use lp_studio::{Phase, Studio};
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;

    fn sample_doc() -> ContentDocument {
        let mut doc = ContentDocument::default();
        doc.meta.brand_name = "Rocket".to_owned();
        doc.meta.theme_color = "#ff0000".to_owned();
        doc.hero.headline = "Launch faster".to_owned();
        doc.with_stats(RepoStats {
            stars: 1234,
            forks: 56,
            issues: 7,
        })
    }

    fn state_with(studio: Studio, generator: ScriptedGenerator) -> Arc<AppState> {
        let generator: Arc<dyn ContentGenerator> = Arc::new(generator);
        Arc::new(AppState::new(studio, generator, "1.0.0".to_owned()))
    }

    fn ready_state() -> Arc<AppState> {
        state_with(Studio::with_document(sample_doc()), ScriptedGenerator::new())
    }

    async fn send(state: &Arc<AppState>, request: Request<Body>) -> Response {
        create_router(Arc::clone(state)).oneshot(request).await.unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_get_document_with_etag() {
        let state = ready_state();

        let response = send(&state, get_request("/api/document")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let etag = response.headers()[header::ETAG].clone();
        let body = body_json(response).await;
        assert_eq!(body["meta"]["brandName"], "Rocket");
        assert_eq!(body["githubStats"]["stars"], 1234);

        let request = Request::builder()
            .uri("/api/document")
            .header(header::IF_NONE_MATCH, etag)
            .body(Body::empty())
            .unwrap();
        let response = send(&state, request).await;
        assert_eq!(response.status(), StatusCode::NOT_MODIFIED);
    }

    #[tokio::test]
    async fn test_get_document_without_document() {
        let state = state_with(Studio::new(), ScriptedGenerator::new());

        let response = send(&state, get_request("/api/document")).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_get_session() {
        let state = ready_state();

        let response = send(&state, get_request("/api/session")).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["phase"], "ready");
        assert_eq!(body["online"], true);
        assert_eq!(body["hasDocument"], true);
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn test_offline_refine_is_refused() {
        let state = ready_state();

        let response = send(
            &state,
            json_request("PUT", "/api/session/online", &serde_json::json!({ "online": false })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["online"], false);

        let response = send(
            &state,
            json_request("POST", "/api/refine", &serde_json::json!({ "instruction": "darker" })),
        )
        .await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            state.studio().transcript().last().unwrap().content,
            lp_studio::REFINE_OFFLINE_MESSAGE
        );

        let response = send(&state, get_request("/export/index.html")).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_export_download() {
        let state = ready_state();

        let response = send(&state, get_request("/export/index.html")).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"index.html\""
        );
        let html = body_text(response).await;
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Launch faster"));
    }

    #[tokio::test]
    async fn test_refine_keeps_stats() {
        let mut refined = sample_doc();
        refined.hero.headline = "Launch even faster".to_owned();
        refined.github_stats = Some(RepoStats {
            stars: 1,
            forks: 1,
            issues: 1,
        });
        let state = state_with(
            Studio::with_document(sample_doc()),
            ScriptedGenerator::new().with_refinement(refined),
        );

        let response = send(
            &state,
            json_request(
                "POST",
                "/api/refine",
                &serde_json::json!({ "instruction": "punchier headline" }),
            ),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["applied"], true);
        assert_eq!(body["document"]["hero"]["headline"], "Launch even faster");
        assert_eq!(body["document"]["githubStats"]["stars"], 1234);
        assert_eq!(body["session"]["phase"], "ready");
        assert_eq!(
            body["session"]["transcript"][0]["content"],
            "punchier headline"
        );
    }

    #[tokio::test]
    async fn test_refine_blank_instruction_is_ignored() {
        let state = ready_state();

        let response = send(
            &state,
            json_request("POST", "/api/refine", &serde_json::json!({ "instruction": "   " })),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["applied"], false);
        assert_eq!(body["session"]["transcript"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_refine_failure_keeps_document() {
        let state = state_with(
            Studio::with_document(sample_doc()),
            ScriptedGenerator::new().with_refinement_error("quota exceeded"),
        );

        let response = send(
            &state,
            json_request("POST", "/api/refine", &serde_json::json!({ "instruction": "darker" })),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["applied"], false);
        assert_eq!(body["document"]["hero"]["headline"], "Launch faster");
        assert_eq!(body["session"]["phase"], "ready");
        assert_eq!(
            body["session"]["transcript"][1]["content"],
            lp_studio::REFINE_FAILED_MESSAGE
        );
    }

    #[tokio::test]
    async fn test_refine_while_busy_conflicts() {
        let state = ready_state();
        let pending = state.studio().begin_refine("first").unwrap();
        assert!(pending.is_some());
        assert_eq!(state.studio().phase(), Phase::Refining);

        let response = send(
            &state,
            json_request("POST", "/api/refine", &serde_json::json!({ "instruction": "second" })),
        )
        .await;

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_patch_meta() {
        let state = ready_state();

        let response = send(
            &state,
            json_request(
                "PATCH",
                "/api/document/meta",
                &serde_json::json!({ "fontPairing": "mono", "layoutStyle": "developer-tool" }),
            ),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["meta"]["fontPairing"], "mono");
        assert_eq!(body["meta"]["layoutStyle"], "developer-tool");
        assert_eq!(body["meta"]["themeColor"], "#ff0000");
    }

    #[tokio::test]
    async fn test_patch_meta_rejects_bad_color() {
        let state = ready_state();

        let response = send(
            &state,
            json_request(
                "PATCH",
                "/api/document/meta",
                &serde_json::json!({ "themeColor": "not a color" }),
            ),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            state.studio().document().unwrap().meta.theme_color,
            "#ff0000"
        );
    }

    #[tokio::test]
    async fn test_preview_page_and_tree() {
        let state = ready_state();

        let response = send(&state, get_request("/?view=mobile")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains(r#"data-viewport="mobile""#));

        let response = send(&state, get_request("/api/preview")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["viewport"], "desktop");
    }

    #[tokio::test]
    async fn test_security_headers() {
        let state = ready_state();

        let response = send(&state, get_request("/api/session")).await;

        let headers = response.headers();
        assert!(headers.contains_key(header::CONTENT_SECURITY_POLICY));
        assert_eq!(headers[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
        assert!(headers.contains_key(header::X_FRAME_OPTIONS));
    }
}
