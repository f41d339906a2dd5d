//! Live preview server for Launchpad.
//!
//! Serves one studio session over HTTP:
//! - the preview page at `/` (`?view=mobile` for the phone frame)
//! - JSON endpoints for the document, session, preview tree and refinement
//! - the standalone export at `/export/index.html`
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use lp_server::{ServerConfig, run_server};
//! use lp_studio::Studio;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_owned(),
//!         port: 7878,
//!         version: "1.0.0".to_owned(),
//!     };
//!     let studio = Studio::with_document(doc);
//!     run_server(config, studio, Arc::new(generator)).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► axum router (lp-server)
//!                        │
//!                        ├─► Studio (behind a mutex, never held across await)
//!                        │
//!                        ├─► Preview backend (lp-preview) ──► page shell
//!                        │
//!                        └─► Refinement ──spawn_blocking──► ContentGenerator
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use lp_genai::ContentGenerator;
use lp_studio::Studio;
use state::AppState;

pub use error::ServerError;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Application version (for cache invalidation).
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7878,
            version: String::new(),
        }
    }
}

/// Run the server until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address is invalid or the server fails to start.
pub async fn run_server(
    config: ServerConfig,
    studio: Studio,
    generator: Arc<dyn ContentGenerator>,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState::new(studio, generator, config.version.clone()));
    let app = app::create_router(state);

    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from Launchpad config.
#[must_use]
pub fn server_config_from_config(config: &lp_config::Config, version: String) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        version,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_server_config_from_config() {
        let mut config = lp_config::Config::default();
        config.server.host = "0.0.0.0".to_owned();
        config.server.port = 9000;

        let server = server_config_from_config(&config, "1.2.3".to_owned());

        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 9000);
        assert_eq!(server.version, "1.2.3");
    }
}
