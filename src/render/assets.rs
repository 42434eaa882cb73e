//! Fingerprinted asset output.
//!
//! The stylesheet and script ship inside the binary (see
//! [`crate::embed`]) and land in the output as
//! `assets/site.{hash}.css` / `assets/site.{hash}.js`. The hash is a
//! content fingerprint, so a changed asset gets a new URL and stale
//! CDN copies never survive a deploy.

use std::fs;

use anyhow::{Context, Result};

use crate::config::SiteConfig;
use crate::debug;
use crate::embed::{SITE_CSS, SITE_JS};
use crate::utils::hash::fingerprint;

/// Site-relative URLs of the written assets, injected into page heads.
pub struct Assets {
    pub css_href: String,
    pub js_href: String,
}

impl Assets {
    /// Hrefs without files on disk, for shell tests.
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self {
            css_href: format!("/assets/site.{}.css", fingerprint(SITE_CSS)),
            js_href: format!("/assets/site.{}.js", fingerprint(SITE_JS)),
        }
    }
}

/// Write the embedded assets under `{output}/assets/`.
pub fn write_assets(config: &SiteConfig) -> Result<Assets> {
    let dir = config.build.output.join("assets");
    fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;

    let (css, js) = if config.build.minify {
        (fold_css(SITE_CSS), fold_js(SITE_JS))
    } else {
        (SITE_CSS.to_string(), SITE_JS.to_string())
    };

    let css_name = format!("site.{}.css", fingerprint(&css));
    let js_name = format!("site.{}.js", fingerprint(&js));

    fs::write(dir.join(&css_name), &css)?;
    fs::write(dir.join(&js_name), &js)?;
    debug!("assets"; "{css_name}, {js_name}");

    Ok(Assets {
        css_href: format!("/assets/{css_name}"),
        js_href: format!("/assets/{js_name}"),
    })
}

/// Strip comments and fold whitespace. CSS tolerates aggressive
/// folding since no value in the sheet contains meaningful newlines.
fn fold_css(css: &str) -> String {
    let mut out = String::with_capacity(css.len());
    let mut rest = css;
    while let Some(start) = rest.find("/*") {
        out.push_str(&rest[..start]);
        match rest[start..].find("*/") {
            Some(end) => rest = &rest[start + end + 2..],
            None => {
                rest = "";
                break;
            }
        }
    }
    out.push_str(rest);

    out.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace("{ ", "{")
        .replace(" }", "}")
        .replace("; ", ";")
        .replace(": ", ":")
        .replace(", ", ",")
}

/// Conservative JS fold: drop full-line comments and indentation,
/// keep line structure (string literals stay untouched).
fn fold_js(js: &str) -> String {
    js.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("//"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::test_ctx;

    #[test]
    fn test_write_assets_fingerprints() {
        let (_tmp, config, _store) = test_ctx();
        let assets = write_assets(&config).unwrap();

        assert!(assets.css_href.starts_with("/assets/site."));
        assert!(assets.css_href.ends_with(".css"));
        assert!(assets.js_href.ends_with(".js"));

        let on_disk = config
            .build
            .output
            .join(assets.css_href.trim_start_matches('/'));
        assert_eq!(fs::read_to_string(on_disk).unwrap(), SITE_CSS);
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let (_tmp, config, _store) = test_ctx();
        let first = write_assets(&config).unwrap();
        let second = write_assets(&config).unwrap();
        assert_eq!(first.css_href, second.css_href);
        assert_eq!(first.js_href, second.js_href);
    }

    #[test]
    fn test_minify_changes_fingerprint() {
        let (_tmp, mut config, _store) = test_ctx();
        let plain = write_assets(&config).unwrap();
        config.build.minify = true;
        let minified = write_assets(&config).unwrap();
        assert_ne!(plain.css_href, minified.css_href);
    }

    #[test]
    fn test_fold_css() {
        let css = "/* note */\nbody {\n  color: red;\n}\n";
        assert_eq!(fold_css(css), "body {color:red;}");
    }

    #[test]
    fn test_fold_js_keeps_strings() {
        let js = "// header\nvar a = \"two  spaces\";\n  call(a);\n";
        assert_eq!(fold_js(js), "var a = \"two  spaces\";\ncall(a);");
    }
}
