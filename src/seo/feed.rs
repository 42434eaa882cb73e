//! RSS 2.0 feed generation.
//!
//! One feed per language at `{lang}/feed.xml` plus a root `feed.xml`
//! mixing all languages, newest first. Articles without a parseable
//! timestamp are skipped rather than failing the build.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use rss::extension::{ExtensionBuilder, ExtensionMap};
use rss::{CategoryBuilder, ChannelBuilder, GuidBuilder, ItemBuilder, validation::Validate};

use crate::config::SiteConfig;
use crate::content::{Article, ContentStore};
use crate::i18n::{DEFAULT_LANG, LANGUAGES, Lang, ui};
use crate::log;
use crate::utils::date::DateTimeUtc;

/// Body excerpt length for items without a lead.
const ITEM_SUMMARY_CHARS: usize = 300;

const ATOM_NS: &str = "http://www.w3.org/2005/Atom";

/// Build the root feed and one feed per language.
pub fn build_feeds(config: &SiteConfig, store: &ContentStore) -> Result<()> {
    if !config.build.feed.enable {
        return Ok(());
    }

    let limit = config.build.feed.limit;

    RssFeed {
        lang: DEFAULT_LANG,
        home: String::new(),
        articles: store.articles().iter().take(limit).collect(),
        out: PathBuf::from("feed.xml"),
    }
    .write(config)?;

    for lang in LANGUAGES {
        RssFeed {
            lang,
            home: format!("{lang}/"),
            articles: store.articles_for(lang).into_iter().take(limit).collect(),
            out: PathBuf::from(lang.as_str()).join("feed.xml"),
        }
        .write(config)?;
    }

    Ok(())
}

/// One feed file: the root feed or a language's feed.
struct RssFeed<'a> {
    /// Language for channel metadata (the root feed uses the default).
    lang: Lang,
    /// Channel scope under the site root: `""` or `"{lang}/"`.
    home: String,
    /// Newest first, already capped to the configured limit.
    articles: Vec<&'a Article>,
    /// Output file relative to the output directory.
    out: PathBuf,
}

impl RssFeed<'_> {
    fn into_xml(self, config: &SiteConfig) -> Result<String> {
        let base_url = config.base_url();

        let items: Vec<_> = self
            .articles
            .iter()
            .filter_map(|article| article_to_rss_item(article, base_url))
            .collect();

        let self_href = format!("{}/{}feed.xml", base_url, self.home);

        let channel = ChannelBuilder::default()
            .title(&config.site.info.title)
            .link(format!("{}/{}", base_url, self.home))
            .description(ui(self.lang).site_description)
            .language(self.lang.as_str().to_string())
            .generator("ptytsch".to_string())
            .namespaces(BTreeMap::from([("atom".to_string(), ATOM_NS.to_string())]))
            .extensions(atom_self_link(&self_href))
            .items(items)
            .build();

        channel
            .validate()
            .map_err(|e| anyhow!("RSS validation failed: {e}"))?;
        Ok(channel.to_string())
    }

    fn write(self, config: &SiteConfig) -> Result<()> {
        let path = config.build.output.join(&self.out);
        let xml = self.into_xml(config)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, xml)?;

        log!("rss"; "{}", config.root_relative(&path).display());
        Ok(())
    }
}

/// `atom:link rel="self"` advertising the feed's own URL.
fn atom_self_link(href: &str) -> ExtensionMap {
    let link = ExtensionBuilder::default()
        .name("atom:link".to_string())
        .attrs(BTreeMap::from([
            ("href".to_string(), href.to_string()),
            ("rel".to_string(), "self".to_string()),
            ("type".to_string(), "application/rss+xml".to_string()),
        ]))
        .build();

    BTreeMap::from([(
        "atom".to_string(),
        BTreeMap::from([("link".to_string(), vec![link])]),
    )])
}

fn article_to_rss_item(article: &Article, base_url: &str) -> Option<rss::Item> {
    let pub_date = DateTimeUtc::parse(&article.written_at).map(DateTimeUtc::to_rfc2822)?;
    let link = format!("{}{}", base_url, article.route());

    let categories: Vec<_> = article
        .event
        .category()
        .map(|name| CategoryBuilder::default().name(name).build())
        .into_iter()
        .collect();

    Some(
        ItemBuilder::default()
            .title(article.title.clone())
            .link(Some(link.clone()))
            .guid(GuidBuilder::default().permalink(true).value(link).build())
            .description(article.summary(ITEM_SUMMARY_CHARS).to_string())
            .pub_date(pub_date)
            .categories(categories)
            .build(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn make_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.site.info.title = "PTYTSCH".to_string();
        config.site.info.url = Some("https://example.com".to_string());
        config
    }

    fn make_article(slug: &str, lang: &str, written_at: &str) -> Article {
        serde_json::from_str(&format!(
            r#"{{
                "id": "a-{slug}",
                "event_id": "ev-{slug}",
                "title": "Title {slug}",
                "slug": "{slug}",
                "lead": "Lead for {slug}.",
                "body": "Body for {slug}.",
                "language": "{lang}",
                "written_at": "{written_at}",
                "event": {{
                    "id": "ev-{slug}",
                    "name": "Event {slug}",
                    "category": "music",
                    "scouted_at": "2025-06-01T00:00:00"
                }}
            }}"#
        ))
        .unwrap()
    }

    fn seed_store(dir: &Path) -> ContentStore {
        let articles = dir.join("articles");
        fs::create_dir_all(&articles).unwrap();
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
                    "lead": format!("Lead for {slug}."),
                    "body": format!("Body for {slug}."),
                    "language": lang,
                    "written_at": written_at,
                    "event": {"id": format!("ev-{slug}"), "name": "E", "scouted_at": ""}
                }))
                .unwrap(),
            )
            .unwrap();
        }
        ContentStore::load(dir).unwrap()
    }

    #[test]
    fn test_article_to_rss_item_basic() {
        let article = make_article("alpha", "en", "2025-06-10T08:30:00");
        let item = article_to_rss_item(&article, "https://example.com").expect("should create item");

        assert_eq!(item.title(), Some("Title alpha"));
        assert_eq!(item.link(), Some("https://example.com/en/article/alpha/"));
        assert_eq!(item.description(), Some("Lead for alpha."));
        assert_eq!(item.pub_date(), Some("Tue, 10 Jun 2025 08:30:00 GMT"));
        assert_eq!(item.categories().len(), 1);
        assert_eq!(item.categories()[0].name(), "music");
    }

    #[test]
    fn test_article_to_rss_item_invalid_date() {
        let mut article = make_article("alpha", "en", "2025-06-10T08:30:00");
        article.written_at = "not a date".to_string();
        assert!(article_to_rss_item(&article, "https://example.com").is_none());
    }

    #[test]
    fn test_item_description_falls_back_to_body() {
        let mut article = make_article("alpha", "en", "2025-06-10T08:30:00");
        article.lead = String::new();
        let item = article_to_rss_item(&article, "https://example.com").unwrap();
        assert_eq!(item.description(), Some("Body for alpha."));
    }

    #[test]
    fn test_item_without_category() {
        let mut article = make_article("alpha", "en", "2025-06-10T08:30:00");
        article.event.category = None;
        let item = article_to_rss_item(&article, "https://example.com").unwrap();
        assert!(item.categories().is_empty());
    }

    #[test]
    fn test_feed_xml_channel_fields() {
        let config = make_config();
        let articles = [make_article("alpha", "ru", "2025-06-10T08:30:00")];
        let feed = RssFeed {
            lang: Lang::Ru,
            home: "ru/".to_string(),
            articles: articles.iter().collect(),
            out: PathBuf::from("ru/feed.xml"),
        };
        let xml = feed.into_xml(&config).unwrap();

        assert!(xml.contains("<title>PTYTSCH</title>"));
        assert!(xml.contains("<link>https://example.com/ru/</link>"));
        assert!(xml.contains("<language>ru</language>"));
        assert!(xml.contains(ui(Lang::Ru).site_description));
        assert!(xml.contains(r#"xmlns:atom="http://www.w3.org/2005/Atom""#));
        assert!(xml.contains(r#"rel="self""#));
        assert!(xml.contains("https://example.com/ru/feed.xml"));
        assert!(xml.contains("https://example.com/ru/article/alpha/</guid>"));
    }

    #[test]
    fn test_build_feeds_writes_root_and_per_language() {
        let tmp = TempDir::new().unwrap();
        let store = seed_store(tmp.path());

        let mut config = make_config();
        config.build.output = tmp.path().join("public");
        build_feeds(&config, &store).unwrap();

        let root = fs::read_to_string(config.build.output.join("feed.xml")).unwrap();
        assert!(root.contains("/en/article/beta/"));
        assert!(root.contains("/ru/article/gamma/"));
        assert_eq!(root.matches("<item>").count(), 3);

        let en = fs::read_to_string(config.build.output.join("en/feed.xml")).unwrap();
        assert_eq!(en.matches("<item>").count(), 2);
        assert!(!en.contains("/ru/article/"));

        // No German articles yet, but the feed still exists
        let de = fs::read_to_string(config.build.output.join("de/feed.xml")).unwrap();
        assert_eq!(de.matches("<item>").count(), 0);
    }

    #[test]
    fn test_feed_limit_caps_items() {
        let tmp = TempDir::new().unwrap();
        let store = seed_store(tmp.path());

        let mut config = make_config();
        config.build.output = tmp.path().join("public");
        config.build.feed.limit = 1;
        build_feeds(&config, &store).unwrap();

        let en = fs::read_to_string(config.build.output.join("en/feed.xml")).unwrap();
        assert!(en.contains("/en/article/beta/"));
        assert!(!en.contains("/en/article/alpha/"));
    }

    #[test]
    fn test_build_feeds_disabled() {
        let tmp = TempDir::new().unwrap();
        let mut config = make_config();
        config.build.output = tmp.path().join("public");
        config.build.feed.enable = false;

        build_feeds(&config, &ContentStore::default()).unwrap();
        assert!(!config.build.output.join("feed.xml").exists());
    }
}
