//! `lp serve` command implementation.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use lp_config::CliSettings;
use lp_genai::{ContentGenerator, GeminiClient};
use lp_server::{run_server, server_config_from_config};
use lp_studio::Studio;

use crate::commands::{ConfigArgs, load_document};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Document written by `lp generate`.
    document: PathBuf,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the document cannot be read,
    /// or the server fails to start.
    pub(crate) async fn execute(self, shared: &ConfigArgs, version: &str) -> Result<(), CliError> {
        let output = Output::new();
        let config = shared.load(CliSettings {
            host: self.host,
            port: self.port,
            ..CliSettings::default()
        })?;

        let generator: Arc<dyn ContentGenerator> = Arc::new(GeminiClient::from_config(&config)?);
        let doc = load_document(&self.document)?;

        output.info(&format!(
            "Starting server on http://{}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!("Document: {}", self.document.display()));
        output.info("Refinements are kept in memory; use the export link to save the page");

        let server_config = server_config_from_config(&config, version.to_owned());
        run_server(server_config, Studio::with_document(doc), generator)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }
}
