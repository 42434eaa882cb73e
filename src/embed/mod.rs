//! Embedded static resources.
//!
//! Everything the rendered site needs beyond its HTML is compiled into
//! the binary: the stylesheet, the enhancement script, and the root
//! redirect template. No asset pipeline, no external files to deploy.
//!
//! ```ignore
//! use crate::embed::{RedirectVars, REDIRECT_HTML, SITE_CSS, SITE_JS};
//!
//! let html = REDIRECT_HTML.render(&RedirectVars { target_url: "/en/" });
//! ```

mod template;

pub use template::{Template, TemplateVars};

/// Site stylesheet, written out with a content-hash filename.
pub const SITE_CSS: &str = include_str!("style.css");

/// Progressive-enhancement script (filter, load-more, copy, subscribe).
pub const SITE_JS: &str = include_str!("site.js");

/// Variables for the redirect template.
pub struct RedirectVars<'a> {
    pub target_url: &'a str,
}

impl TemplateVars for RedirectVars<'_> {
    fn apply(&self, content: &str) -> String {
        content.replace("__TARGET_URL__", self.target_url)
    }
}

/// Meta-refresh stub for the bare `/` entry point.
pub const REDIRECT_HTML: Template<RedirectVars<'static>> =
    Template::new(include_str!("redirect.html"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_renders_target() {
        let html = REDIRECT_HTML.render(&RedirectVars { target_url: "/en/" });
        assert!(html.contains(r#"url=/en/"#));
        assert!(html.contains(r#"href="/en/""#));
        assert!(!html.contains("__TARGET_URL__"));
    }

    #[test]
    fn test_embedded_assets_nonempty() {
        assert!(SITE_CSS.contains(".article-card"));
        assert!(SITE_JS.contains("subscribe"));
    }
}
