//! Sitemap generation.
//!
//! Lists every rendered page: the language homes, article and
//! reflection pages, the reflections indexes, and the service pages
//! under each language prefix.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/en/</loc>
//!     <lastmod>2025-01-01</lastmod>
//!   </url>
//! </urlset>
//! ```

use anyhow::{Context, Result};
use std::borrow::Cow;
use std::fs;

use crate::config::SiteConfig;
use crate::content::ContentStore;
use crate::i18n::LANGUAGES;
use crate::log;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Build sitemap if enabled.
pub fn build_sitemap(config: &SiteConfig, store: &ContentStore) -> Result<()> {
    if config.build.sitemap.enable {
        Sitemap::build(config, store).write(config)?;
    }
    Ok(())
}

struct Sitemap {
    urls: Vec<UrlEntry>,
}

struct UrlEntry {
    loc: String,
    lastmod: Option<String>,
}

impl Sitemap {
    fn build(config: &SiteConfig, store: &ContentStore) -> Self {
        let base_url = config.base_url();
        let mut urls = Vec::new();

        for lang in LANGUAGES {
            let articles = store.articles_for(lang);
            let reflections = store.reflections_for(lang);

            // Indexes change whenever their newest entry does
            urls.push(UrlEntry {
                loc: format!("{base_url}/{lang}/"),
                lastmod: articles.first().map(|a| a.written_date().to_string()),
            });
            urls.push(UrlEntry {
                loc: format!("{base_url}/{lang}/reflections/"),
                lastmod: reflections.first().map(|r| r.written_date().to_string()),
            });

            for article in articles {
                urls.push(UrlEntry {
                    loc: format!("{base_url}{}", article.route()),
                    lastmod: Some(article.written_date().to_string()),
                });
            }

            for reflection in reflections {
                urls.push(UrlEntry {
                    loc: format!("{base_url}{}", reflection.route()),
                    lastmod: Some(reflection.written_date().to_string()),
                });
            }

            for page in ["about", "impressum", "privacy"] {
                urls.push(UrlEntry {
                    loc: format!("{base_url}/{lang}/{page}/"),
                    lastmod: None,
                });
            }
        }

        Self { urls }
    }

    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for entry in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&entry.loc));
            xml.push_str("</loc>\n");
            if let Some(lastmod) = entry.lastmod {
                xml.push_str("    <lastmod>");
                xml.push_str(&lastmod);
                xml.push_str("</lastmod>\n");
            }
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    fn write(self, config: &SiteConfig) -> Result<()> {
        let path = config.build.output.join("sitemap.xml");
        let xml = self.into_xml();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, xml)
            .with_context(|| format!("Failed to write sitemap to {}", path.display()))?;

        log!("sitemap"; "{}", config.root_relative(&path).display());
        Ok(())
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    // Fast path: check if escaping is needed
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn make_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.site.info.url = Some("https://example.com".to_string());
        config
    }

    fn seed_store(dir: &Path) -> ContentStore {
        let articles = dir.join("articles");
        let reflections = dir.join("reflections");
        fs::create_dir_all(&articles).unwrap();
        fs::create_dir_all(&reflections).unwrap();

        for (slug, lang, written_at) in [
            ("alpha", "en", "2025-06-10T08:30:00"),
            ("beta", "en", "2025-06-12T08:30:00"),
            ("gamma", "ru", "2025-06-11T08:30:00"),
        ] {
            fs::write(
                articles.join(format!("{slug}.json")),
                serde_json::to_string(&serde_json::json!({
                    "id": format!("a-{slug}"),
                    "event_id": format!("ev-{slug}"),
                    "title": format!("Title {slug}"),
                    "slug": slug,
                    "body": "Body.",
                    "language": lang,
                    "written_at": written_at,
                    "event": {"id": format!("ev-{slug}"), "name": "E", "scouted_at": ""}
                }))
                .unwrap(),
            )
            .unwrap();
        }

        fs::write(
            reflections.join("first-month.json"),
            serde_json::to_string(&serde_json::json!({
                "id": "r1",
                "title": "First month",
                "slug": "first-month",
                "body": "Intro.",
                "language": "en",
                "period_start": "2025-05-01",
                "period_end": "2025-05-31",
                "written_at": "2025-06-01T12:00:00"
            }))
            .unwrap(),
        )
        .unwrap();

        ContentStore::load(dir).unwrap()
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("<test>"), "&lt;test&gt;");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape_xml("it's"), "it&apos;s");
    }

    #[test]
    fn test_sitemap_empty() {
        let sitemap = Sitemap { urls: vec![] };
        let xml = sitemap.into_xml();

        assert!(xml.contains(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#)));
        assert!(xml.contains("</urlset>"));
        assert!(!xml.contains("<url>"));
    }

    #[test]
    fn test_sitemap_entry_rendering() {
        let sitemap = Sitemap {
            urls: vec![
                UrlEntry {
                    loc: "https://example.com/en/".to_string(),
                    lastmod: Some("2025-06-12".to_string()),
                },
                UrlEntry {
                    loc: "https://example.com/en/about/".to_string(),
                    lastmod: None,
                },
            ],
        };
        let xml = sitemap.into_xml();

        assert!(xml.contains("<loc>https://example.com/en/</loc>"));
        assert!(xml.contains("<lastmod>2025-06-12</lastmod>"));
        assert!(xml.contains("<loc>https://example.com/en/about/</loc>"));
        assert_eq!(xml.matches("<url>").count(), 2);
        assert_eq!(xml.matches("<lastmod>").count(), 1);
    }

    #[test]
    fn test_sitemap_escapes_special_chars() {
        let sitemap = Sitemap {
            urls: vec![UrlEntry {
                loc: "https://example.com/search?q=a&b=c".to_string(),
                lastmod: None,
            }],
        };
        let xml = sitemap.into_xml();

        assert!(xml.contains("<loc>https://example.com/search?q=a&amp;b=c</loc>"));
    }

    #[test]
    fn test_sitemap_xml_structure() {
        let sitemap = Sitemap {
            urls: vec![UrlEntry {
                loc: "https://example.com/en/".to_string(),
                lastmod: Some("2025-01-01".to_string()),
            }],
        };
        let xml = sitemap.into_xml();

        let lines: Vec<&str> = xml.lines().collect();
        assert_eq!(lines[0], r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        assert!(lines[1].starts_with("<urlset"));
        assert!(lines.last().unwrap().trim() == "</urlset>");
    }

    #[test]
    fn test_sitemap_covers_site_routes() {
        let tmp = TempDir::new().unwrap();
        let store = seed_store(tmp.path());
        let config = make_config();

        let xml = Sitemap::build(&config, &store).into_xml();

        assert!(xml.contains("<loc>https://example.com/en/</loc>"));
        assert!(xml.contains("<loc>https://example.com/ru/</loc>"));
        assert!(xml.contains("<loc>https://example.com/en/article/beta/</loc>"));
        assert!(xml.contains("<loc>https://example.com/ru/article/gamma/</loc>"));
        assert!(xml.contains("<loc>https://example.com/en/reflections/</loc>"));
        assert!(xml.contains("<loc>https://example.com/en/reflections/first-month/</loc>"));

        // Service pages exist under every language prefix
        assert!(xml.contains("<loc>https://example.com/en/about/</loc>"));
        assert!(xml.contains("<loc>https://example.com/de/impressum/</loc>"));
        assert!(xml.contains("<loc>https://example.com/ru/privacy/</loc>"));
        assert!(!xml.contains("<loc>https://example.com/about/</loc>"));
    }

    #[test]
    fn test_home_lastmod_tracks_newest_article() {
        let tmp = TempDir::new().unwrap();
        let store = seed_store(tmp.path());
        let config = make_config();

        let xml = Sitemap::build(&config, &store).into_xml();

        let home_pos = xml.find("<loc>https://example.com/en/</loc>").unwrap();
        let after = &xml[home_pos..];
        let lastmod = &after[after.find("<lastmod>").unwrap()..];
        assert!(lastmod.starts_with("<lastmod>2025-06-12</lastmod>"));
    }

    #[test]
    fn test_sitemap_disabled_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        let mut config = make_config();
        config.build.output = tmp.path().join("public");
        config.build.sitemap.enable = false;

        build_sitemap(&config, &ContentStore::default()).unwrap();
        assert!(!config.build.output.join("sitemap.xml").exists());
    }
}
