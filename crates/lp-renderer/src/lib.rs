//! Section models and pluggable render backends for Launchpad.
//!
//! This crate turns a [`ContentDocument`](lp_content::ContentDocument) into
//! rendered output through a [`RenderBackend`].
//!
//! # Architecture
//!
//! Rendering happens in two steps:
//!
//! 1. [`compose_page`] resolves the [`Theme`] and [`Layout`], applies every
//!    section's presence rule and produces a [`PageModel`]: an ordered list
//!    of backend-agnostic [`Section`] values.
//! 2. [`PageRenderer`] walks that list and hands each section to the
//!    backend.
//!
//! Eligibility, defaults, card emphasis and reveal timing live only in
//! step 1, so every backend shows the same sections in the same order.
//!
//! Backends:
//! - [`StaticBackend`]: self-contained HTML document (the export)
//!
//! The interactive preview tree lives in the `lp-preview` crate.
//!
//! # Example
//!
//! ```
//! use lp_content::ContentDocument;
//! use lp_renderer::{PageRenderer, StaticBackend};
//!
//! let doc = ContentDocument::from_json(r#"{"meta": {"brandName": "Acme"}, "hero": {}}"#).unwrap();
//! let html = PageRenderer::new(StaticBackend::new())
//!     .with_copyright_year(2025)
//!     .render(&doc);
//!
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("&copy; 2025 Acme"));
//! ```

mod backend;
mod icons;
mod image;
mod layout;
mod renderer;
pub mod reveal;
pub mod sections;
mod static_html;
pub mod styles;
mod theme;
mod util;

pub use backend::RenderBackend;
pub use icons::Icon;
pub use image::{AiImage, IMAGE_HEIGHT, IMAGE_SERVICE_URL, IMAGE_WIDTH, ai_image_url};
pub use layout::{HeroVariant, Layout, Showcase, select_layout};
pub use renderer::{PageRenderer, RenderOptions};
pub use reveal::{REVEAL_THRESHOLD, Reveal, RevealDirection, RevealState};
pub use sections::{PageModel, Section, SectionKind, compose_page};
pub use static_html::{FONTS_URL, LUCIDE_CDN, StaticBackend, TAILWIND_CDN, render_static_html};
pub use styles::Styles;
pub use theme::{FontFamily, PALETTE, PaletteColor, Theme, resolve_theme};
pub use util::{escape_html, format_thousands};
