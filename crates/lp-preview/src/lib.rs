//! Interactive preview for Launchpad pages.
//!
//! [`TreeBackend`] renders a [`ContentDocument`](lp_content::ContentDocument)
//! into a [`PreviewTree`]: a serializable node tree inside one scrollable
//! viewport frame. Every enter animation in the tree is a
//! [`Node::Reveal`] with its own id; a [`RevealController`] tracks those
//! ids as one-shot visibility observers.
//!
//! # Example
//!
//! ```
//! use lp_content::ContentDocument;
//! use lp_preview::{RevealController, Viewport, render_preview};
//!
//! let doc = ContentDocument::from_json(r#"{"meta": {"brandName": "Acme"}, "hero": {}}"#).unwrap();
//! let tree = render_preview(&doc, Viewport::Mobile, 2025);
//! let mut controller = RevealController::observe(&tree);
//!
//! let first = tree.reveal_ids()[0];
//! assert!(controller.report_visibility(first, 0.5).is_some());
//! assert!(controller.report_visibility(first, 1.0).is_none());
//! ```

mod backend;
mod controller;
mod markup;
mod node;
mod viewport;

pub use backend::{PreviewTree, SectionNode, TreeBackend, render_preview};
pub use controller::{RevealController, RevealEvent};
pub use markup::{PREVIEW_SCRIPT, preview_script, render_markup};
pub use node::{Node, RevealId};
pub use viewport::{ChromeBar, Viewport};
