//! Design studio edits to `meta`.

use lp_content::{FontPairing, LayoutStyle, Meta, normalize_hex_color};
use lp_renderer::PALETTE;
use serde::Deserialize;

use crate::error::StudioError;

/// Partial update of the theme selectors.
///
/// Absent fields keep their current value. `themeColor` accepts a hex code
/// or the name of a curated palette entry (`"Emerald"`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MetaPatch {
    pub theme_color: Option<String>,
    pub font_pairing: Option<FontPairing>,
    pub layout_style: Option<LayoutStyle>,
}

impl MetaPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.theme_color.is_none() && self.font_pairing.is_none() && self.layout_style.is_none()
    }

    /// Build the replacement for `meta`.
    ///
    /// # Errors
    ///
    /// Returns [`StudioError::InvalidColor`] if `themeColor` is neither a hex
    /// code nor a palette name; `meta` is not consulted further.
    pub fn apply(&self, meta: &Meta) -> Result<Meta, StudioError> {
        let mut next = meta.clone();
        if let Some(color) = &self.theme_color {
            next.theme_color = resolve_color(color)?;
        }
        if let Some(font) = self.font_pairing {
            next.font_pairing = font.as_str().to_owned();
        }
        if let Some(layout) = self.layout_style {
            next.layout_style = layout.as_str().to_owned();
        }
        Ok(next)
    }
}

fn resolve_color(value: &str) -> Result<String, StudioError> {
    if let Some(hex) = normalize_hex_color(value) {
        return Ok(hex);
    }
    PALETTE
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(value.trim()))
        .map(|c| c.hex.to_owned())
        .ok_or_else(|| StudioError::InvalidColor(value.to_owned()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_apply_replaces_only_given_fields() {
        let meta = Meta {
            brand_name: "Rocket".to_owned(),
            theme_color: "#3b82f6".to_owned(),
            font_pairing: "sans".to_owned(),
            layout_style: "modern-saas".to_owned(),
            ..Meta::default()
        };
        let patch = MetaPatch {
            font_pairing: Some(FontPairing::Mono),
            layout_style: Some(LayoutStyle::DeveloperTool),
            ..MetaPatch::default()
        };

        let next = patch.apply(&meta).unwrap();

        assert_eq!(next.brand_name, "Rocket");
        assert_eq!(next.theme_color, "#3b82f6");
        assert_eq!(next.font_pairing, "mono");
        assert_eq!(next.layout_style, "developer-tool");
    }

    #[test]
    fn test_color_by_palette_name_or_hex() {
        assert_eq!(resolve_color("emerald").unwrap(), "#10b981");
        assert_eq!(resolve_color("#F97316").unwrap(), "#f97316");
        assert!(matches!(
            resolve_color("tomato"),
            Err(StudioError::InvalidColor(_))
        ));
    }

    #[test]
    fn test_deserialize_patch() {
        let patch: MetaPatch =
            serde_json::from_str(r#"{"themeColor":"Rose","fontPairing":"serif"}"#).unwrap();
        assert_eq!(patch.theme_color.as_deref(), Some("Rose"));
        assert_eq!(patch.font_pairing, Some(FontPairing::Serif));
        assert!(patch.layout_style.is_none());
        assert!(!patch.is_empty());

        assert!(serde_json::from_str::<MetaPatch>(r#"{"brandName":"x"}"#).is_err());
        assert!(serde_json::from_str::<MetaPatch>(r#"{"layoutStyle":"brutalist"}"#).is_err());
    }
}
