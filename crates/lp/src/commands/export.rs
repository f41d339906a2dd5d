//! `lp export` command implementation.

use std::path::PathBuf;

use clap::Args;
use lp_config::CliSettings;
use lp_studio::Studio;

use crate::commands::{ConfigArgs, load_document};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the export command.
#[derive(Args)]
pub(crate) struct ExportArgs {
    /// Document written by `lp generate`.
    document: PathBuf,

    /// Output directory for index.html (overrides config).
    #[arg(short = 'd', long)]
    output_dir: Option<PathBuf>,
}

impl ExportArgs {
    /// Execute the export command.
    ///
    /// Works without network access or an API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read or the page cannot
    /// be written.
    pub(crate) fn execute(self, shared: &ConfigArgs) -> Result<(), CliError> {
        let output = Output::new();
        let config = shared.load(CliSettings {
            output_dir: self.output_dir,
            ..CliSettings::default()
        })?;

        let studio = Studio::with_document(load_document(&self.document)?);
        let path = studio
            .export()?
            .write_to(&config.export_resolved.output_dir)?;

        output.success(&format!("Page exported to {}", path.display()));
        Ok(())
    }
}
