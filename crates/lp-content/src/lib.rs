//! Landing page content schema for Launchpad.
//!
//! A [`ContentDocument`] is the single value every other crate consumes:
//! the renderers read it, the studio replaces it, the generator produces it.
//! It is plain data. Interpretation of `themeColor`, `fontPairing` and
//! `layoutStyle` happens in `lp-renderer`, which never fails on odd values.
//!
//! Documents cross the process boundary as camelCase JSON:
//!
//! ```
//! use lp_content::ContentDocument;
//!
//! let doc = ContentDocument::from_json(r#"{
//!     "meta": { "brandName": "Punchclock", "layoutStyle": "developer-tool" },
//!     "hero": { "headline": "Ship on time." }
//! }"#).unwrap();
//!
//! assert_eq!(doc.meta.brand_name, "Punchclock");
//! assert!(doc.features.is_empty());
//! ```

mod analysis;
mod color;
mod document;
mod error;
mod repo;

pub use analysis::{AnalysisResult, ProjectType, Tone};
pub use color::{DEFAULT_THEME_COLOR, normalize_hex_color};
pub use document::{
    ContentDocument, FaqItem, Feature, FontPairing, Hero, LayoutStyle, Meta, PricingPlan,
    ProblemSolution, RepoStats, SocialProof,
};
pub use error::ContentError;
pub use repo::RepoRef;
