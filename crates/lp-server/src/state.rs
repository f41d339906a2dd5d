//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use lp_genai::ContentGenerator;
use lp_studio::Studio;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// The single studio session served by this process.
    studio: Mutex<Studio>,
    /// Generator used for refinements.
    pub(crate) generator: Arc<dyn ContentGenerator>,
    /// Application version for cache invalidation.
    pub(crate) version: String,
}

impl AppState {
    pub(crate) fn new(studio: Studio, generator: Arc<dyn ContentGenerator>, version: String) -> Self {
        Self {
            studio: Mutex::new(studio),
            generator,
            version,
        }
    }

    /// Lock the studio.
    ///
    /// Never hold the guard across an `.await`.
    pub(crate) fn studio(&self) -> MutexGuard<'_, Studio> {
        self.studio.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
