//! Live preview endpoints.

use std::fmt::Write;
use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::response::Html;
use lp_content::ContentDocument;
use lp_preview::{PreviewTree, RevealController, Viewport, preview_script, render_markup, render_preview};
use lp_renderer::{FONTS_URL, FontFamily, LUCIDE_CDN, RenderOptions, TAILWIND_CDN, escape_html};
use lp_studio::StudioError;
use serde::Deserialize;

use crate::error::ServerError;
use crate::state::AppState;

/// Query string accepted by the preview endpoints.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ViewQuery {
    view: Option<String>,
}

impl ViewQuery {
    fn viewport(&self) -> Viewport {
        self.view.as_deref().map_or_else(Viewport::default, Viewport::from_name)
    }
}

fn current_tree(state: &AppState, query: &ViewQuery) -> Result<(ContentDocument, PreviewTree), ServerError> {
    let doc = state
        .studio()
        .document()
        .cloned()
        .ok_or(StudioError::NoDocument)?;
    let tree = render_preview(
        &doc,
        query.viewport(),
        RenderOptions::default().copyright_year,
    );
    Ok((doc, tree))
}

/// Handle GET /api/preview.
pub(crate) async fn get_preview_tree(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ViewQuery>,
) -> Result<Json<PreviewTree>, ServerError> {
    let (_, tree) = current_tree(&state, &query)?;
    Ok(Json(tree))
}

/// Handle GET /.
pub(crate) async fn get_preview_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ViewQuery>,
) -> Result<Html<String>, ServerError> {
    let (doc, tree) = current_tree(&state, &query)?;
    let controller = RevealController::observe(&tree);
    Ok(Html(preview_page(&doc, &tree, &controller)))
}

/// Reports browser connectivity to the session.
const CONNECTIVITY_SCRIPT: &str = r"(function () {
  function report(online) {
    fetch('/api/session/online', {
      method: 'PUT',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({ online: online })
    }).catch(function () {});
  }
  window.addEventListener('online', function () { report(true); });
  window.addEventListener('offline', function () { report(false); });
  report(navigator.onLine);
})();";

/// Full HTML page hosting the preview frame.
fn preview_page(doc: &ContentDocument, tree: &PreviewTree, controller: &RevealController) -> String {
    let mut fonts = String::new();
    for font in [
        FontFamily::Inter,
        FontFamily::PlayfairDisplay,
        FontFamily::JetBrainsMono,
    ] {
        let _ = write!(
            fonts,
            ".{} {{ font-family: {}; }} ",
            font.class(),
            font.css_stack()
        );
    }
    let title = if doc.meta.brand_name.is_empty() {
        "Preview".to_owned()
    } else {
        format!("{} - Preview", doc.meta.brand_name)
    };
    let toggle = match tree.viewport {
        Viewport::Desktop => r#"<a href="/?view=mobile" class="hover:text-white">Mobile view</a>"#,
        Viewport::Mobile => r#"<a href="/?view=desktop" class="hover:text-white">Desktop view</a>"#,
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<script src="{TAILWIND_CDN}"></script>
<script src="{LUCIDE_CDN}"></script>
<link href="{FONTS_URL}" rel="stylesheet">
<style>{fonts}</style>
</head>
<body class="bg-slate-900 text-slate-100 min-h-screen">
<nav class="flex items-center justify-end gap-4 px-6 py-3 text-sm text-slate-400">{toggle}<a href="/export/index.html" class="hover:text-white">Download index.html</a></nav>
<main class="flex justify-center px-6 pb-6">
{markup}
</main>
<script>lucide.createIcons();
{script}
{CONNECTIVITY_SCRIPT}</script>
</body>
</html>
"#,
        title = escape_html(&title),
        markup = render_markup(tree, controller),
        script = preview_script(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_query_defaults_to_desktop() {
        assert_eq!(ViewQuery::default().viewport(), Viewport::Desktop);
        let query = ViewQuery {
            view: Some("mobile".to_owned()),
        };
        assert_eq!(query.viewport(), Viewport::Mobile);
    }

    #[test]
    fn test_preview_page_shell() {
        let mut doc = ContentDocument::default();
        doc.meta.brand_name = "Rocket".to_owned();
        let tree = render_preview(&doc, Viewport::Mobile, 2025);
        let html = preview_page(&doc, &tree, &RevealController::observe(&tree));

        assert!(html.contains("<title>Rocket - Preview</title>"));
        assert!(html.contains(r#"data-viewport="mobile""#));
        assert!(html.contains(r#"href="/?view=desktop""#));
        assert!(html.contains("threshold: 0.1"));
        assert!(html.contains(".font-serif { font-family:"));
        assert!(html.contains("/api/session/online"));
    }
}
