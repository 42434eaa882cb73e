//! JSON-LD structured data for article pages.
//!
//! Each article page embeds one schema.org `Article` object, with the
//! source event attached as `about` when the record names one.

use serde_json::{Value, json};

use crate::config::SiteConfig;
use crate::content::{Article, Event, Reflection};

/// Description length when an article has no lead.
const DESCRIPTION_CHARS: usize = 160;

/// schema.org `Article` object for the page's `ld+json` script.
pub fn article_jsonld(config: &SiteConfig, article: &Article) -> Value {
    let base_url = config.base_url();
    let info = &config.site.info;

    let mut doc = json!({
        "@context": "https://schema.org",
        "@type": "Article",
        "headline": article.title,
        "description": article.summary(DESCRIPTION_CHARS),
        "datePublished": article.written_at,
        "inLanguage": article.language,
        "author": {
            "@type": "Organization",
            "name": info.title,
            "email": info.email,
        },
        "publisher": {
            "@type": "Organization",
            "name": info.title,
            "url": base_url,
            "email": info.email,
        },
        "mainEntityOfPage": format!("{}{}", base_url, article.route()),
    });

    if !article.event.name.is_empty() {
        doc["about"] = event_jsonld(&article.event);
    }

    doc
}

/// schema.org `Article` object for a reflection page. No event to
/// attach, otherwise shaped like the article one.
pub fn reflection_jsonld(config: &SiteConfig, reflection: &Reflection) -> Value {
    let base_url = config.base_url();
    let info = &config.site.info;

    json!({
        "@context": "https://schema.org",
        "@type": "Article",
        "headline": reflection.title,
        "description": reflection.teaser(DESCRIPTION_CHARS),
        "datePublished": reflection.written_at,
        "inLanguage": reflection.language,
        "author": {
            "@type": "Organization",
            "name": info.title,
            "email": info.email,
        },
        "publisher": {
            "@type": "Organization",
            "name": info.title,
            "url": base_url,
            "email": info.email,
        },
        "mainEntityOfPage": format!("{}{}", base_url, reflection.route()),
    })
}

/// schema.org `Event` object with whatever details the record carries.
fn event_jsonld(event: &Event) -> Value {
    let mut about = json!({
        "@type": "Event",
        "name": event.name,
    });

    if let Some(start) = event.start_date() {
        about["startDate"] = json!(start);
    }
    if let Some(end) = event.end_date() {
        about["endDate"] = json!(end);
    }
    if let Some(venue) = event.venue() {
        let mut location = json!({
            "@type": "Place",
            "name": venue,
        });
        if let Some(city) = event.city() {
            location["address"] = json!({
                "@type": "PostalAddress",
                "addressLocality": city,
            });
        }
        about["location"] = location;
    }

    about
}
