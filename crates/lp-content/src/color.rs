//! Hex color validation.

/// Accent color used whenever `meta.themeColor` is not a valid hex color.
pub const DEFAULT_THEME_COLOR: &str = "#3b82f6";

/// Validate and normalize a hex color.
///
/// Accepts `#rgb` and `#rrggbb` (surrounding whitespace and letter case are
/// ignored) and returns the lowercase form. Returns `None` for anything else,
/// including named colors and `rgb()` notation.
///
/// ```
/// use lp_content::normalize_hex_color;
///
/// assert_eq!(normalize_hex_color(" #3B82F6 ").as_deref(), Some("#3b82f6"));
/// assert_eq!(normalize_hex_color("#fff").as_deref(), Some("#fff"));
/// assert_eq!(normalize_hex_color("blue"), None);
/// ```
#[must_use]
pub fn normalize_hex_color(value: &str) -> Option<String> {
    let digits = value.trim().strip_prefix('#')?;
    if !matches!(digits.len(), 3 | 6) || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    Some(format!("#{}", digits.to_ascii_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_short_and_long_forms() {
        assert_eq!(normalize_hex_color("#abc").as_deref(), Some("#abc"));
        assert_eq!(normalize_hex_color("#A1B2C3").as_deref(), Some("#a1b2c3"));
    }

    #[test]
    fn test_rejects_malformed_values() {
        for value in [
            "",
            "#",
            "3b82f6",
            "#3b82f",
            "#3b82f6ff",
            "#ggg",
            "red",
            "rgb(0,0,0)",
            "#3b82f6; background: url(x)",
        ] {
            assert_eq!(normalize_hex_color(value), None, "{value}");
        }
    }

    #[test]
    fn test_default_is_valid() {
        assert_eq!(
            normalize_hex_color(DEFAULT_THEME_COLOR).as_deref(),
            Some(DEFAULT_THEME_COLOR)
        );
    }
}
