//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site.info]
//! title = "PTYTSCH"
//! tagline = "Berlin Cultural Digest"
//! url = "https://ptytsch.de"
//! author = "Roman Ponomarev"
//! email = "hi@ptytsch.de"
//! telegram = "https://t.me/ptytsch"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

/// Site section configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteSectionConfig {
    /// Site metadata (title, url, contact details).
    #[config(sub)]
    pub info: SiteInfoConfig,
}

/// Site metadata used in page chrome, feeds, and structured data.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site.info")]
pub struct SiteInfoConfig {
    /// Site title, used as the wordmark and in page titles.
    #[config(default = "PTYTSCH", inline_doc = "Site title, used in page titles.")]
    pub title: String,

    /// Short tagline appended to the front page title.
    #[config(default = "Berlin Cultural Digest", inline_doc = "Tagline for the front page title.")]
    pub tagline: String,

    /// Public base URL for canonical links, hreflang alternates, and feeds.
    #[config(default = "https://ptytsch.de", inline_doc = "Public base URL (canonical links, feeds).")]
    pub url: Option<String>,

    /// Site operator, shown in the impressum.
    #[config(default = "Roman Ponomarev", inline_doc = "Site operator, shown in the impressum.")]
    pub author: String,

    /// Contact email, shown on the about page and in structured data.
    #[config(default = "hi@ptytsch.de", inline_doc = "Contact email.")]
    pub email: String,

    /// Telegram channel URL, linked for Russian-language readers.
    #[config(default = "https://t.me/ptytsch", inline_doc = "Telegram channel URL.")]
    pub telegram: Option<String>,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            tagline: String::new(),
            url: None,
            author: String::new(),
            email: String::new(),
            telegram: None,
        }
    }
}

impl SiteInfoConfig {
    /// Validate site metadata.
    ///
    /// # Checks
    /// - `title` must not be empty
    /// - If `feed_enabled`, `url` must be set
    /// - `url` and `telegram` must be valid http(s) URLs when present
    /// - `email` must contain `@` when present
    pub fn validate(&self, feed_enabled: bool, diag: &mut crate::config::ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.title,
                "cannot be empty",
                "set a site title, e.g.: title = \"PTYTSCH\"",
            );
        }

        // Feed requires url
        if feed_enabled && self.url.is_none() {
            diag.error_with_hint(
                Self::FIELDS.url,
                format!(
                    "{} is enabled but {} is not configured",
                    crate::config::FeedConfig::FIELDS.enable,
                    Self::FIELDS.url
                ),
                format!("set {}, e.g.: \"https://ptytsch.de\"", Self::FIELDS.url),
            );
        }

        if let Some(url_str) = &self.url {
            Self::check_http_url(Self::FIELDS.url, url_str, diag);
        }
        if let Some(tg) = &self.telegram {
            Self::check_http_url(Self::FIELDS.telegram, tg, diag);
        }

        if !self.email.is_empty() && !self.email.contains('@') {
            diag.error(
                Self::FIELDS.email,
                format!("'{}' does not look like an email address", self.email),
            );
        }
    }

    /// Strict URL check: must parse, must be http(s), must have a host.
    fn check_http_url(
        field: crate::config::FieldPath,
        url_str: &str,
        diag: &mut crate::config::ConfigDiagnostics,
    ) {
        match url::Url::parse(url_str) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        field,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        field,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    field,
                    format!("invalid URL '{url_str}': {e}"),
                    "use format like https://example.com",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigDiagnostics, test_parse_config};

    #[test]
    fn test_info_parse() {
        let config = test_parse_config(
            "url = \"https://ptytsch.de\"\nemail = \"hi@ptytsch.de\"\ntelegram = \"https://t.me/ptytsch\"",
        );

        assert_eq!(config.site.info.title, "Test");
        assert_eq!(config.site.info.url.as_deref(), Some("https://ptytsch.de"));
        assert_eq!(config.site.info.email, "hi@ptytsch.de");
    }

    #[test]
    fn test_empty_title_rejected() {
        let info = SiteInfoConfig::default();
        let mut diag = ConfigDiagnostics::new();
        info.validate(false, &mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_feed_requires_url() {
        let info = SiteInfoConfig {
            title: "PTYTSCH".into(),
            ..SiteInfoConfig::default()
        };

        let mut diag = ConfigDiagnostics::new();
        info.validate(true, &mut diag);
        assert_eq!(diag.len(), 1);

        let mut diag = ConfigDiagnostics::new();
        info.validate(false, &mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_bad_scheme_rejected() {
        let info = SiteInfoConfig {
            title: "PTYTSCH".into(),
            url: Some("ftp://ptytsch.de".into()),
            ..SiteInfoConfig::default()
        };

        let mut diag = ConfigDiagnostics::new();
        info.validate(false, &mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_bad_email_rejected() {
        let info = SiteInfoConfig {
            title: "PTYTSCH".into(),
            email: "not-an-email".into(),
            ..SiteInfoConfig::default()
        };

        let mut diag = ConfigDiagnostics::new();
        info.validate(false, &mut diag);
        assert!(diag.has_errors());
    }
}
