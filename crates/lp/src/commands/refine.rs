//! `lp refine` command implementation.

use std::path::PathBuf;

use clap::Args;
use lp_config::CliSettings;
use lp_genai::GeminiClient;
use lp_studio::Studio;

use crate::commands::{ConfigArgs, load_document, save_document};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the refine command.
#[derive(Args)]
pub(crate) struct RefineArgs {
    /// Document written by `lp generate`; updated in place.
    document: PathBuf,

    /// What to change, e.g. "make the headline punchier".
    #[arg(required = true, num_args = 1..)]
    instruction: Vec<String>,
}

impl RefineArgs {
    /// Execute the refine command.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read or written, or the
    /// generator cannot process the instruction. The document file is left
    /// untouched on failure.
    pub(crate) fn execute(self, shared: &ConfigArgs) -> Result<(), CliError> {
        let output = Output::new();
        let config = shared.load(CliSettings::default())?;
        let generator = GeminiClient::from_config(&config)?;

        let instruction = self.instruction.join(" ");
        let mut studio = Studio::with_document(load_document(&self.document)?);

        if !studio.refine(&generator, &instruction)? {
            output.warning("Instruction is empty, nothing to do");
            return Ok(());
        }

        if let Some(doc) = studio.document() {
            save_document(&self.document, doc)?;
        }
        if let Some(message) = studio.transcript().last() {
            output.assistant(&message.content);
        }
        output.success(&format!("Document updated: {}", self.document.display()));
        Ok(())
    }
}
