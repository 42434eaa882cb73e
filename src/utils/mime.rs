//! MIME type detection for the dev server.
//!
//! Covers what the generator actually emits plus the handful of types
//! people drop into an output directory by hand.

use std::path::Path;

/// Common MIME type constants.
pub mod types {
    pub const HTML: &str = "text/html; charset=utf-8";
    pub const PLAIN: &str = "text/plain; charset=utf-8";
    pub const CSS: &str = "text/css; charset=utf-8";
    pub const JAVASCRIPT: &str = "text/javascript; charset=utf-8";
    pub const JSON: &str = "application/json";
    pub const XML: &str = "application/xml";
    pub const RSS: &str = "application/rss+xml";

    pub const SVG: &str = "image/svg+xml";
    pub const PNG: &str = "image/png";
    pub const JPEG: &str = "image/jpeg";
    pub const WEBP: &str = "image/webp";
    pub const ICO: &str = "image/x-icon";

    pub const WOFF2: &str = "font/woff2";

    pub const OCTET_STREAM: &str = "application/octet-stream";
}

/// Guess MIME type from file extension, for the Content-Type header.
pub fn from_path(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html" | "htm") => types::HTML,
        Some("css") => types::CSS,
        Some("js" | "mjs") => types::JAVASCRIPT,
        Some("json") => types::JSON,
        Some("xml") => types::XML,
        Some("rss") => types::RSS,
        Some("svg") => types::SVG,
        Some("png") => types::PNG,
        Some("jpg" | "jpeg") => types::JPEG,
        Some("webp") => types::WEBP,
        Some("ico") => types::ICO,
        Some("woff2") => types::WOFF2,
        Some("txt") => types::PLAIN,
        _ => types::OCTET_STREAM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(from_path(Path::new("en/index.html")), types::HTML);
        assert_eq!(from_path(Path::new("assets/site.1a2b3c4d.css")), types::CSS);
        assert_eq!(from_path(Path::new("en/feed.xml")), types::XML);
        assert_eq!(from_path(Path::new("unknown.bin")), types::OCTET_STREAM);
        assert_eq!(from_path(Path::new("no_extension")), types::OCTET_STREAM);
    }
}
