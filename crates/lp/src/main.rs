//! Launchpad CLI - landing pages from GitHub repositories.
//!
//! Provides commands for:
//! - `generate`: Analyze a repository and write a landing page document
//! - `refine`: Apply a plain-language instruction to a saved document
//! - `export`: Render a saved document to a standalone `index.html`
//! - `serve`: Live preview of a saved document with refinement and export

mod commands;
mod error;
mod output;

use std::error::Error as _;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ConfigArgs, ExportArgs, GenerateArgs, RefineArgs, ServeArgs};
use error::CliError;
use output::Output;

/// Application version from Cargo.toml.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Launchpad - landing pages from GitHub repositories.
#[derive(Parser)]
#[command(name = "lp", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    shared: ConfigArgs,

    /// Enable verbose output (pipeline progress and request logs).
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a landing page document from a GitHub repository.
    Generate(GenerateArgs),
    /// Refine a saved document with an instruction.
    Refine(RefineArgs),
    /// Export a saved document as a standalone HTML page.
    Export(ExportArgs),
    /// Start the live preview server.
    Serve(ServeArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Generate(args) => args.execute(&cli.shared),
        Commands::Refine(args) => args.execute(&cli.shared),
        Commands::Export(args) => args.execute(&cli.shared),
        Commands::Serve(args) => tokio::runtime::Runtime::new()
            .map_err(CliError::from)
            .and_then(|rt| rt.block_on(args.execute(&cli.shared, VERSION))),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&output, &err);
            ExitCode::FAILURE
        }
    }
}

/// Print an error followed by its distinct causes.
fn report(output: &Output, err: &CliError) {
    let mut last = err.to_string();
    output.error(&format!("Error: {last}"));
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if text != last {
            output.error(&format!("  Caused by: {text}"));
            last = text;
        }
        source = cause.source();
    }
}
