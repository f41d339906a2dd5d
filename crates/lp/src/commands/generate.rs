//! `lp generate` command implementation.

use std::path::PathBuf;

use clap::Args;
use lp_config::CliSettings;
use lp_genai::{GeminiClient, GitHubClient};
use lp_studio::Studio;

use crate::commands::{ConfigArgs, save_document};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the generate command.
#[derive(Args)]
pub(crate) struct GenerateArgs {
    /// GitHub repository URL (https://github.com/<owner>/<repo>).
    repo_url: String,

    /// Where to write the generated document.
    #[arg(short, long, default_value = "landing.json")]
    out: PathBuf,

    /// Also write the static page to the export directory.
    #[arg(long)]
    export: bool,

    /// Export directory (overrides config, implies --export).
    #[arg(short = 'd', long)]
    output_dir: Option<PathBuf>,
}

impl GenerateArgs {
    /// Execute the generate command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the URL is not a GitHub
    /// repository, or the generator fails.
    pub(crate) fn execute(self, shared: &ConfigArgs) -> Result<(), CliError> {
        let output = Output::new();
        let export = self.export || self.output_dir.is_some();
        let config = shared.load(CliSettings {
            output_dir: self.output_dir,
            ..CliSettings::default()
        })?;

        let generator = GeminiClient::from_config(&config)?;
        let context = GitHubClient::from_config(&config.github);
        output.info(&format!("Repository: {}", self.repo_url));
        output.info(&format!("Model: {}", config.genai.model));

        let mut studio = Studio::new();
        let doc = studio
            .generate_with_progress(&context, &generator, &self.repo_url, &mut |phase| {
                if let (Some(title), Some(detail)) =
                    (phase.progress_title(), phase.progress_detail())
                {
                    output.progress(title, detail);
                }
            })?
            .clone();

        save_document(&self.out, &doc)?;
        if let Some(message) = studio.transcript().last() {
            output.assistant(&message.content);
        }
        output.success(&format!("Document written to {}", self.out.display()));

        if export {
            let path = studio
                .export()?
                .write_to(&config.export_resolved.output_dir)?;
            output.success(&format!("Page exported to {}", path.display()));
        }
        Ok(())
    }
}
