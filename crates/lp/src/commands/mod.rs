//! CLI command implementations.

pub(crate) mod export;
pub(crate) mod generate;
pub(crate) mod refine;
pub(crate) mod serve;

use std::path::{Path, PathBuf};

use clap::Args;
use lp_config::{CliSettings, Config};
use lp_content::ContentDocument;

use crate::error::CliError;

pub(crate) use export::ExportArgs;
pub(crate) use generate::GenerateArgs;
pub(crate) use refine::RefineArgs;
pub(crate) use serve::ServeArgs;

/// Options shared by every command.
#[derive(Args, Debug, Default)]
pub(crate) struct ConfigArgs {
    /// Path to configuration file (default: auto-discover launchpad.toml).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Generator API key (overrides config).
    #[arg(long, global = true, env = "LAUNCHPAD_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Generator model (overrides config).
    #[arg(long, global = true)]
    model: Option<String>,
}

impl ConfigArgs {
    /// Load configuration, layering `settings` and the shared overrides.
    pub(crate) fn load(&self, settings: CliSettings) -> Result<Config, CliError> {
        let settings = CliSettings {
            api_key: self.api_key.clone(),
            model: self.model.clone(),
            ..settings
        };
        Ok(Config::load(self.config.as_deref(), Some(&settings))?)
    }
}

/// Read a document saved by `lp generate`.
pub(crate) fn load_document(path: &Path) -> Result<ContentDocument, CliError> {
    let text = std::fs::read_to_string(path)?;
    ContentDocument::from_json(&text).map_err(|source| CliError::Document {
        path: path.display().to_string(),
        source,
    })
}

/// Write a document as indented JSON.
pub(crate) fn save_document(path: &Path, doc: &ContentDocument) -> Result<(), CliError> {
    let mut json = doc.to_json_pretty()?;
    json.push('\n');
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use lp_content::RepoStats;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_save_then_load_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pages/rocket.json");
        let mut doc = ContentDocument::default().with_stats(RepoStats {
            stars: 10,
            forks: 2,
            issues: 1,
        });
        doc.meta.brand_name = "Rocket".to_owned();

        save_document(&path, &doc).unwrap();

        assert_eq!(load_document(&path).unwrap(), doc);
    }

    #[test]
    fn test_load_document_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{\"meta\": 1}").unwrap();

        let err = load_document(&path).unwrap_err();

        assert!(matches!(err, CliError::Document { .. }));
        assert!(err.to_string().starts_with(&path.display().to_string()));
    }

    #[test]
    fn test_load_missing_document() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_document(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}
