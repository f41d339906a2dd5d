//! Security headers middleware.
//!
//! Adds security headers to all responses:
//! - Content-Security-Policy
//! - X-Content-Type-Options
//! - X-Frame-Options

use axum::http::HeaderValue;
use axum::http::header::HeaderName;
use tower_http::set_header::SetResponseHeaderLayer;

/// Content-Security-Policy header value.
///
/// The preview page loads Tailwind, Lucide and web fonts from their CDNs,
/// runs one inline bootstrap script and shows generated images.
const CSP: &str = "default-src 'self'; \
                   script-src 'self' 'unsafe-inline' https://cdn.tailwindcss.com https://unpkg.com; \
                   style-src 'self' 'unsafe-inline' https://fonts.googleapis.com; \
                   font-src 'self' data: https://fonts.gstatic.com; \
                   img-src 'self' data: https://image.pollinations.ai; \
                   connect-src 'self'; \
                   frame-ancestors 'none'";

/// Create layer that adds Content-Security-Policy header.
pub(crate) fn csp_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        HeaderName::from_static("content-security-policy"),
        HeaderValue::from_static(CSP),
    )
}

/// Create layer that adds X-Content-Type-Options header.
pub(crate) fn content_type_options_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        HeaderName::from_static("x-content-type-options"),
        HeaderValue::from_static("nosniff"),
    )
}

/// Create layer that adds X-Frame-Options header.
pub(crate) fn frame_options_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        HeaderName::from_static("x-frame-options"),
        HeaderValue::from_static("DENY"),
    )
}

#[cfg(test)]
mod tests {
    use lp_renderer::{IMAGE_SERVICE_URL, LUCIDE_CDN, TAILWIND_CDN};

    use super::*;

    #[test]
    fn test_csp_allows_page_dependencies() {
        assert!(CSP.contains("default-src 'self'"));
        assert!(CSP.contains(TAILWIND_CDN));
        assert!(LUCIDE_CDN.starts_with("https://unpkg.com"));
        assert!(IMAGE_SERVICE_URL.starts_with("https://image.pollinations.ai"));
        assert!(CSP.contains("frame-ancestors 'none'"));
    }
}
