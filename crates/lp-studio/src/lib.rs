//! Generation pipeline, refinement and export for Launchpad.
//!
//! A [`Studio`] owns the single current [`ContentDocument`] and replaces it
//! as a whole:
//!
//! - [`Studio::generate`] runs fetch context, analyze, generate in order.
//! - [`Studio::refine`] sends the document and an instruction to the
//!   generator and swaps in the result, always keeping the previous
//!   `githubStats` ([`merge_refinement`]). A failed refinement keeps the
//!   previous document and leaves an apology in the [`Transcript`].
//! - [`Studio::update_meta`] applies design studio edits locally.
//! - [`Studio::export`] renders `index.html` without network access.
//!
//! ```
//! use lp_content::ContentDocument;
//! use lp_studio::{Phase, Studio};
//!
//! let mut doc = ContentDocument::default();
//! doc.meta.brand_name = "Rocket".to_owned();
//!
//! let studio = Studio::with_document(doc);
//! assert_eq!(studio.phase(), Phase::Ready);
//!
//! let page = studio.export_with_year(2025).unwrap();
//! assert_eq!(page.filename, "index.html");
//! ```
//!
//! [`ContentDocument`]: lp_content::ContentDocument

mod design;
mod error;
mod export;
mod mutation;
mod session;
mod transcript;

pub use design::MetaPatch;
pub use error::{OFFLINE_MESSAGE, REFINE_FAILED_MESSAGE, StudioError};
pub use export::{EXPORT_FILENAME, EXPORT_MIME, ExportArtifact};
pub use mutation::{apply_refinement, merge_refinement};
pub use session::{
    PendingRefinement, Phase, REFINE_OFFLINE_MESSAGE, REFINED_MESSAGE, Studio,
};
pub use transcript::{ChatMessage, Role, Transcript};
