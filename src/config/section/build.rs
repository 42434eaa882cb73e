//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! data = "data"       # Data directory (events/, articles/, reflections/)
//! output = "public"   # Output directory for generated HTML
//!
//! [build.feed]
//! enable = true
//! limit = 50
//!
//! [build.sitemap]
//! enable = true
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Build settings: input/output paths, feed, sitemap.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "build")]
pub struct BuildSectionConfig {
    /// Data directory with `events/`, `articles/`, `reflections/` (relative to site root).
    #[config(default = "data", inline_doc = "Data directory (relative to site root).")]
    pub data: PathBuf,

    /// Output directory for generated HTML (relative to site root).
    #[config(default = "public", inline_doc = "Output directory (relative to site root).")]
    pub output: PathBuf,

    /// Minify emitted CSS/JS assets.
    #[config(default = "false", inline_doc = "Minify emitted CSS/JS assets.")]
    pub minify: bool,

    /// Clean output directory before building (CLI only).
    #[serde(skip)]
    #[config(skip)]
    pub clean: bool,

    /// RSS feed generation.
    #[config(sub)]
    pub feed: FeedConfig,

    /// Sitemap generation.
    #[config(sub)]
    pub sitemap: SitemapConfig,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            data: "data".into(),
            output: "public".into(),
            minify: false,
            clean: false,
            feed: FeedConfig::default(),
            sitemap: SitemapConfig::default(),
        }
    }
}

impl BuildSectionConfig {
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        self.feed.validate(diag);
    }
}

/// RSS feed generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "build.feed")]
pub struct FeedConfig {
    #[config(default = "true", inline_doc = "Enable feed generation.")]
    pub enable: bool,

    /// Newest articles per language feed.
    #[config(default = "50", inline_doc = "Newest articles per language feed.")]
    pub limit: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            enable: true,
            limit: 50,
        }
    }
}

impl FeedConfig {
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        if self.enable && self.limit == 0 {
            diag.error_with_hint(
                Self::FIELDS.limit,
                "must be at least 1",
                "set limit = 50, or disable the feed",
            );
        }
    }
}

/// Sitemap generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "build.sitemap")]
pub struct SitemapConfig {
    #[config(default = "true", inline_doc = "Generate sitemap.xml.")]
    pub enable: bool,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self { enable: true }
    }
}
