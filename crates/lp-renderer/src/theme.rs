//! Theme resolution.
//!
//! Every dark/light decision in every backend reads [`Theme::is_dark`],
//! which is derived from `meta.layoutStyle` and nothing else.

use lp_content::{DEFAULT_THEME_COLOR, FontPairing, LayoutStyle, Meta, normalize_hex_color};

use crate::styles::{DARK, LIGHT, Styles};

/// Concrete visual theme for one render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Dark palette (developer-tool layout).
    pub is_dark: bool,
    /// Validated, lowercase hex accent color.
    pub accent_color: String,
    /// Body font family.
    pub font: FontFamily,
}

impl Theme {
    /// Tailwind class table for this theme's mode.
    #[must_use]
    pub fn styles(&self) -> &'static Styles {
        if self.is_dark { &DARK } else { &LIGHT }
    }
}

/// Resolve the theme for a document's metadata.
///
/// Never fails: malformed colors fall back to [`DEFAULT_THEME_COLOR`],
/// unknown font pairings to [`FontFamily::Inter`], unknown layouts to light.
#[must_use]
pub fn resolve_theme(meta: &Meta) -> Theme {
    let accent_color = normalize_hex_color(&meta.theme_color).unwrap_or_else(|| {
        if !meta.theme_color.is_empty() {
            tracing::debug!(value = %meta.theme_color, "Invalid theme color, using default");
        }
        DEFAULT_THEME_COLOR.to_owned()
    });
    Theme {
        is_dark: LayoutStyle::from_name(&meta.layout_style) == LayoutStyle::DeveloperTool,
        accent_color,
        font: FontFamily::from(FontPairing::from_name(&meta.font_pairing)),
    }
}

/// Named webfont family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontFamily {
    #[default]
    Inter,
    PlayfairDisplay,
    JetBrainsMono,
}

impl FontFamily {
    /// Display name as used by the font provider.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Inter => "Inter",
            Self::PlayfairDisplay => "Playfair Display",
            Self::JetBrainsMono => "JetBrains Mono",
        }
    }

    /// Utility class applied to the page root.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Inter => "font-sans",
            Self::PlayfairDisplay => "font-serif",
            Self::JetBrainsMono => "font-mono",
        }
    }

    /// CSS `font-family` value with generic fallback.
    #[must_use]
    pub fn css_stack(self) -> &'static str {
        match self {
            Self::Inter => "'Inter', sans-serif",
            Self::PlayfairDisplay => "'Playfair Display', serif",
            Self::JetBrainsMono => "'JetBrains Mono', monospace",
        }
    }

    /// Label shown in the design studio.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Inter => "Modern Sans",
            Self::PlayfairDisplay => "Elegant Serif",
            Self::JetBrainsMono => "Tech Mono",
        }
    }
}

impl From<FontPairing> for FontFamily {
    fn from(pairing: FontPairing) -> Self {
        match pairing {
            FontPairing::Sans => Self::Inter,
            FontPairing::Serif => Self::PlayfairDisplay,
            FontPairing::Mono => Self::JetBrainsMono,
        }
    }
}

/// A curated accent color offered by the design studio.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaletteColor {
    pub name: &'static str,
    pub hex: &'static str,
}

/// Curated accent colors.
pub const PALETTE: [PaletteColor; 8] = [
    PaletteColor { name: "Blue", hex: "#3b82f6" },
    PaletteColor { name: "Indigo", hex: "#6366f1" },
    PaletteColor { name: "Violet", hex: "#8b5cf6" },
    PaletteColor { name: "Emerald", hex: "#10b981" },
    PaletteColor { name: "Rose", hex: "#f43f5e" },
    PaletteColor { name: "Orange", hex: "#f97316" },
    PaletteColor { name: "Slate", hex: "#64748b" },
    PaletteColor { name: "Black", hex: "#000000" },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(color: &str, font: &str, layout: &str) -> Meta {
        Meta {
            theme_color: color.to_owned(),
            font_pairing: font.to_owned(),
            layout_style: layout.to_owned(),
            ..Meta::default()
        }
    }

    #[test]
    fn test_developer_tool_is_dark() {
        let theme = resolve_theme(&meta("#10b981", "mono", "developer-tool"));
        assert!(theme.is_dark);
        assert_eq!(theme.accent_color, "#10b981");
        assert_eq!(theme.font, FontFamily::JetBrainsMono);
    }

    #[test]
    fn test_unknown_layout_is_light() {
        for layout in ["modern-saas", "", "neo-brutalist", "DEVELOPER-TOOL"] {
            assert!(!resolve_theme(&meta("#000", "sans", layout)).is_dark, "{layout}");
        }
    }

    #[test]
    fn test_malformed_color_falls_back_to_blue() {
        for color in ["", "blue", "#12", "javascript:alert(1)"] {
            let theme = resolve_theme(&meta(color, "sans", "modern-saas"));
            assert_eq!(theme.accent_color, DEFAULT_THEME_COLOR, "{color}");
        }
    }

    #[test]
    fn test_color_is_normalized() {
        let theme = resolve_theme(&meta("#F43F5E", "sans", "modern-saas"));
        assert_eq!(theme.accent_color, "#f43f5e");
    }

    #[test]
    fn test_unknown_font_falls_back_to_sans() {
        let theme = resolve_theme(&meta("#000", "wingdings", "modern-saas"));
        assert_eq!(theme.font, FontFamily::Inter);
        assert_eq!(theme.font.class(), "font-sans");
    }

    #[test]
    fn test_serif_font() {
        let theme = resolve_theme(&meta("#000", "serif", "modern-saas"));
        assert_eq!(theme.font.name(), "Playfair Display");
        assert_eq!(theme.font.css_stack(), "'Playfair Display', serif");
    }

    #[test]
    fn test_palette_colors_are_valid() {
        for color in PALETTE {
            assert_eq!(normalize_hex_color(color.hex).as_deref(), Some(color.hex));
        }
    }

    #[test]
    fn test_styles_follow_mode() {
        let dark = resolve_theme(&meta("", "", "developer-tool"));
        let light = resolve_theme(&meta("", "", "modern-saas"));
        assert_eq!(dark.styles().page_bg, "bg-[#0B0F19]");
        assert_eq!(light.styles().page_bg, "bg-white");
    }
}
