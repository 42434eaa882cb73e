//! Record types for the pipeline's JSON output.
//!
//! The upstream pipeline writes one JSON file per record. Fields that
//! older records wrote as empty strings and newer ones as `null` are
//! exposed through accessors that treat both as absent.

use serde::Deserialize;

use crate::core::UrlPath;
use crate::i18n::{DEFAULT_LANG, Lang, reading_time};

/// A scouted cultural event, embedded verbatim in each article.
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub event_url: Option<String>,
    #[serde(default)]
    pub scouted_at: String,
}

impl Event {
    pub fn start_date(&self) -> Option<&str> {
        non_empty(&self.start_date)
    }

    pub fn end_date(&self) -> Option<&str> {
        non_empty(&self.end_date)
    }

    pub fn venue(&self) -> Option<&str> {
        non_empty(&self.venue)
    }

    pub fn city(&self) -> Option<&str> {
        non_empty(&self.city)
    }

    pub fn category(&self) -> Option<&str> {
        non_empty(&self.category)
    }

    pub fn event_url(&self) -> Option<&str> {
        non_empty(&self.event_url)
    }
}

/// A published essay with its event embedded.
#[derive(Debug, Clone, Deserialize)]
pub struct Article {
    pub id: String,
    pub event_id: String,
    pub title: String,
    /// Backfilled from the title at load time when a record predates slugs.
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub lead: String,
    pub body: String,
    pub language: String,
    #[serde(default)]
    pub word_count: Option<i64>,
    #[serde(default)]
    pub model_used: Option<String>,
    pub written_at: String,
    pub event: Event,
}

impl Article {
    /// Parsed site language, if the record carries one we publish.
    pub fn lang(&self) -> Option<Lang> {
        Lang::parse(&self.language.to_lowercase())
    }

    /// Site path of the article's page.
    pub fn route(&self) -> UrlPath {
        UrlPath::from_page(&format!(
            "/{}/article/{}",
            self.lang().unwrap_or(DEFAULT_LANG),
            self.slug
        ))
    }

    /// Calendar date part of the write timestamp.
    pub fn written_date(&self) -> &str {
        self.written_at.get(..10).unwrap_or(&self.written_at)
    }

    /// Estimated reading time in minutes.
    pub fn min_read(&self) -> u32 {
        reading_time(self.word_count)
    }

    pub fn lead(&self) -> Option<&str> {
        (!self.lead.is_empty()).then_some(self.lead.as_str())
    }

    /// Lead if present, else the opening of the body.
    pub fn summary(&self, limit: usize) -> &str {
        self.lead().unwrap_or_else(|| excerpt(&self.body, limit))
    }

    /// Seed string for the generative hero artwork.
    pub fn art_seed(&self) -> String {
        format!("{}{}", self.event_id, self.title)
    }
}

/// Aggregate numbers a reflection was written against.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Analysis {
    #[serde(default)]
    pub article_count: u32,
    /// Category slug to article count over the covered period.
    #[serde(default)]
    pub categories: std::collections::BTreeMap<String, u32>,
}

/// A periodic self-review essay over a window of published articles.
#[derive(Debug, Clone, Deserialize)]
pub struct Reflection {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub slug: String,
    pub body: String,
    pub language: String,
    pub period_start: String,
    pub period_end: String,
    #[serde(default)]
    pub analysis: Analysis,
    #[serde(default)]
    pub word_count: Option<i64>,
    #[serde(default)]
    pub model_used: Option<String>,
    pub written_at: String,
}

impl Reflection {
    pub fn lang(&self) -> Option<Lang> {
        Lang::parse(&self.language.to_lowercase())
    }

    /// Site path of the reflection's page.
    pub fn route(&self) -> UrlPath {
        UrlPath::from_page(&format!(
            "/{}/reflections/{}",
            self.lang().unwrap_or(DEFAULT_LANG),
            self.slug
        ))
    }

    pub fn written_date(&self) -> &str {
        self.written_at.get(..10).unwrap_or(&self.written_at)
    }

    pub fn min_read(&self) -> u32 {
        reading_time(self.word_count)
    }

    /// Opening of the first paragraph, for index teasers.
    pub fn teaser(&self, limit: usize) -> &str {
        let first = self.body.split("\n\n").next().unwrap_or("");
        excerpt(first, limit)
    }
}

/// Sidecar record describing how an article was written.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Trace {
    #[serde(default)]
    pub draft_word_count: u32,
    #[serde(default)]
    pub draft_text: Option<String>,
    #[serde(default)]
    pub revised_text: Option<String>,
    #[serde(default)]
    pub critique_assessment: Option<String>,
    #[serde(default)]
    pub critique_issues: Vec<CritiqueIssue>,
    #[serde(default)]
    pub research_sources_count: u32,
    #[serde(default)]
    pub expanded: bool,
}

impl Trace {
    /// Word count of the published text, counted the way the pipeline
    /// counts drafts (whitespace-separated runs).
    pub fn final_word_count(&self) -> usize {
        self.revised_text
            .as_deref()
            .map(|t| t.split_whitespace().count())
            .unwrap_or(0)
    }

    /// Issue counts as (critical, major, minor).
    pub fn severity_counts(&self) -> (usize, usize, usize) {
        let mut counts = (0, 0, 0);
        for issue in &self.critique_issues {
            match issue.severity.as_str() {
                "critical" => counts.0 += 1,
                "major" => counts.1 += 1,
                _ => counts.2 += 1,
            }
        }
        counts
    }
}

/// One finding from the critique pass.
#[derive(Debug, Clone, Deserialize)]
pub struct CritiqueIssue {
    #[serde(rename = "type")]
    pub kind: String,
    pub severity: String,
    #[serde(default)]
    pub fix: String,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// First `limit` characters of `text`, on a char boundary.
pub fn excerpt(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
