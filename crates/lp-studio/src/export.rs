//! Downloadable static page.

use std::path::{Path, PathBuf};

use lp_content::ContentDocument;
use lp_renderer::render_static_html;
use tracing::info;

use crate::error::StudioError;

/// File name of the exported page.
pub const EXPORT_FILENAME: &str = "index.html";

/// MIME type of the exported page.
pub const EXPORT_MIME: &str = "text/html";

/// A rendered page ready to be saved or served.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportArtifact {
    pub filename: &'static str,
    pub mime: &'static str,
    pub contents: String,
}

impl ExportArtifact {
    /// Render `doc` as a self-contained HTML document.
    ///
    /// Needs no network access.
    #[must_use]
    pub fn render(doc: &ContentDocument, copyright_year: i32) -> Self {
        Self {
            filename: EXPORT_FILENAME,
            mime: EXPORT_MIME,
            contents: render_static_html(doc, copyright_year),
        }
    }

    /// Write the page into `dir`, creating the directory if needed.
    ///
    /// Returns the path of the written file.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, StudioError> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(self.filename);
        std::fs::write(&path, &self.contents)?;
        info!(path = %path.display(), bytes = self.contents.len(), "Exported page");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_write_creates_index_html() {
        let dir = tempfile::tempdir().unwrap();
        let mut doc = ContentDocument::default();
        doc.meta.brand_name = "Rocket".to_owned();
        let artifact = ExportArtifact::render(&doc, 2025);

        let path = artifact.write_to(&dir.path().join("site")).unwrap();

        assert_eq!(path, dir.path().join("site/index.html"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), artifact.contents);
        assert_eq!(artifact.mime, "text/html");
        assert!(artifact.contents.contains("&copy; 2025 Rocket"));
    }
}
