//! Layout selection from `meta.layoutStyle`.

use lp_content::LayoutStyle;

/// Hero variant chosen by the layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "kebab-case"))]
pub enum HeroVariant {
    /// Centered marketing hero with release badge and demo button.
    Saas,
    /// Split hero with star badge and install instructions.
    DevTool,
}

/// Framing panel shown next to (or below) the hero copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "kebab-case"))]
pub enum Showcase {
    /// Browser window with a generated dashboard screenshot.
    DashboardImage,
    /// Terminal window with the package install command.
    InstallTerminal,
}

/// Resolved layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    pub style: LayoutStyle,
    pub hero: HeroVariant,
    pub showcase: Showcase,
}

impl From<LayoutStyle> for Layout {
    fn from(style: LayoutStyle) -> Self {
        match style {
            LayoutStyle::ModernSaas => Self {
                style,
                hero: HeroVariant::Saas,
                showcase: Showcase::DashboardImage,
            },
            LayoutStyle::DeveloperTool => Self {
                style,
                hero: HeroVariant::DevTool,
                showcase: Showcase::InstallTerminal,
            },
        }
    }
}

/// Select the layout for a `layoutStyle` value.
///
/// Unrecognized values resolve to `modern-saas`.
#[must_use]
pub fn select_layout(layout_style: &str) -> Layout {
    Layout::from(LayoutStyle::from_name(layout_style))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_developer_tool_layout() {
        let layout = select_layout("developer-tool");
        assert_eq!(layout.style, LayoutStyle::DeveloperTool);
        assert_eq!(layout.hero, HeroVariant::DevTool);
        assert_eq!(layout.showcase, Showcase::InstallTerminal);
    }

    #[test]
    fn test_modern_saas_layout() {
        let layout = select_layout("modern-saas");
        assert_eq!(layout.hero, HeroVariant::Saas);
        assert_eq!(layout.showcase, Showcase::DashboardImage);
    }

    #[test]
    fn test_unknown_layout_falls_back() {
        for value in ["", "bento", "Developer-Tool", " developer-tool"] {
            assert_eq!(select_layout(value), select_layout("modern-saas"), "{value}");
        }
    }
}
