//! Viewport frames for the preview container.

use lp_renderer::Theme;
use lp_renderer::styles::{DESKTOP_FRAME, MOBILE_FRAME};
use serde::{Deserialize, Serialize};

/// Preview size mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Viewport {
    /// Fill the available space, with a browser chrome bar.
    #[default]
    Desktop,
    /// Fixed 375×750 device frame.
    Mobile,
}

impl Viewport {
    /// Parse a mode name, falling back to desktop.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("mobile") {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Mobile => "mobile",
        }
    }

    /// Classes for the scroll container.
    #[must_use]
    pub fn frame_class(self, theme: &Theme) -> String {
        let frame = match self {
            Self::Desktop => DESKTOP_FRAME,
            Self::Mobile => MOBILE_FRAME,
        };
        format!(
            "mx-auto relative scroll-smooth transition-all duration-300 {frame} {} {}",
            theme.font.class(),
            theme.styles().page_bg
        )
    }

    /// Browser chrome bar, shown only on desktop.
    #[must_use]
    pub fn chrome_bar(self, title: &str, theme: &Theme) -> Option<ChromeBar> {
        match self {
            Self::Mobile => None,
            Self::Desktop => Some(ChromeBar {
                title: if title.is_empty() { "Untitled".to_owned() } else { title.to_owned() },
                class: format!(
                    "sticky top-0 z-50 px-4 py-2 flex items-center justify-between text-xs border-b {}",
                    theme.styles().chrome_bar
                ),
            }),
        }
    }
}

/// Fake browser toolbar above the desktop preview.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChromeBar {
    pub title: String,
    pub class: String,
}

#[cfg(test)]
mod tests {
    use lp_content::Meta;
    use lp_renderer::resolve_theme;

    use super::*;

    fn theme(layout: &str) -> Theme {
        resolve_theme(&Meta {
            layout_style: layout.to_owned(),
            ..Meta::default()
        })
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Viewport::from_name("mobile"), Viewport::Mobile);
        assert_eq!(Viewport::from_name("MOBILE"), Viewport::Mobile);
        assert_eq!(Viewport::from_name("desktop"), Viewport::Desktop);
        assert_eq!(Viewport::from_name("tablet"), Viewport::Desktop);
    }

    #[test]
    fn test_mobile_frame() {
        let class = Viewport::Mobile.frame_class(&theme("modern-saas"));
        assert!(class.contains("w-[375px] h-[750px]"));
        assert!(class.contains("bg-white"));
        assert_eq!(Viewport::Mobile.chrome_bar("Acme", &theme("modern-saas")), None);
    }

    #[test]
    fn test_desktop_chrome_bar_title() {
        let dark = theme("developer-tool");
        let bar = Viewport::Desktop.chrome_bar("", &dark).unwrap();
        assert_eq!(bar.title, "Untitled");
        assert!(bar.class.contains("bg-[#0B0F19]"));
        let bar = Viewport::Desktop.chrome_bar("Acme", &dark).unwrap();
        assert_eq!(bar.title, "Acme");
    }
}
