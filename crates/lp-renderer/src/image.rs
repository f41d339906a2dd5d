//! Prompt-keyed illustration URLs.
//!
//! Images are never fetched here; the page references the generation
//! service by URL and the browser loads it.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Prompt-to-image service endpoint.
pub const IMAGE_SERVICE_URL: &str = "https://image.pollinations.ai/prompt/";
pub const IMAGE_WIDTH: u32 = 1200;
pub const IMAGE_HEIGHT: u32 = 800;

const FALLBACK_PROMPT: &str = "technology abstract software";

/// Characters escaped in a URI component (everything but `A-Za-z0-9-_.!~*'()`).
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Build the image URL for a prompt.
///
/// The seed is the prompt's character count, so the same prompt always
/// yields the same URL.
///
/// ```
/// use lp_renderer::ai_image_url;
///
/// assert_eq!(
///     ai_image_url("red sky"),
///     "https://image.pollinations.ai/prompt/red%20sky?width=1200&height=800&nologo=true&seed=7",
/// );
/// ```
#[must_use]
pub fn ai_image_url(prompt: &str) -> String {
    let prompt = if prompt.is_empty() { FALLBACK_PROMPT } else { prompt };
    let seed = prompt.chars().count();
    format!(
        "{IMAGE_SERVICE_URL}{}?width={IMAGE_WIDTH}&height={IMAGE_HEIGHT}&nologo=true&seed={seed}",
        utf8_percent_encode(prompt, COMPONENT)
    )
}

/// An illustration slot in a section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AiImage {
    pub prompt: String,
    pub alt: String,
}

impl AiImage {
    pub fn new(prompt: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            alt: alt.into(),
        }
    }

    #[must_use]
    pub fn url(&self) -> String {
        ai_image_url(&self.prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_prompt_seeds_from_fallback() {
        assert_eq!(
            ai_image_url(""),
            "https://image.pollinations.ai/prompt/technology%20abstract%20software?width=1200&height=800&nologo=true&seed=28"
        );
    }

    #[test]
    fn test_component_encoding() {
        let url = ai_image_url("a/b?c&d=#e (f)!");
        assert!(url.contains("/prompt/a%2Fb%3Fc%26d%3D%23e%20(f)!?"), "{url}");
    }

    #[test]
    fn test_unicode_prompt_seed_counts_chars() {
        let url = ai_image_url("café");
        assert!(url.contains("caf%C3%A9"));
        assert!(url.ends_with("seed=4"));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(ai_image_url("dashboard"), ai_image_url("dashboard"));
    }

    #[test]
    fn test_ai_image_url() {
        let image = AiImage::new("neon grid", "Grid");
        assert_eq!(image.url(), ai_image_url("neon grid"));
        assert_eq!(image.alt, "Grid");
    }
}
