//! Content loading from the pipeline's data directory.
//!
//! The pipeline writes flat JSON files:
//!
//! | Path                              | Record                        |
//! |-----------------------------------|-------------------------------|
//! | `events/{id}.json`                | [`Event`]                     |
//! | `articles/{slug}.json`            | [`Article`] (event embedded)  |
//! | `articles/{slug}.trace.json`      | [`Trace`] sidecar             |
//! | `reflections/{slug}.json`         | [`Reflection`]                |
//!
//! A malformed record is skipped with a logged warning so one bad file
//! never takes the whole site down. A missing data directory is a hard
//! error.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use jwalk::WalkDir;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::de::DeserializeOwned;

use super::model::{Article, Event, Reflection, Trace};
use crate::i18n::{LANGUAGES, Lang};
use crate::utils::slug::slugify;
use crate::{debug, log};

/// Everything the pipeline has published, loaded once per build.
#[derive(Debug, Default)]
pub struct ContentStore {
    events: Vec<Event>,
    /// Sorted by `written_at` descending.
    articles: Vec<Article>,
    /// Sorted by `written_at` descending.
    reflections: Vec<Reflection>,
    /// Trace sidecars keyed by article slug.
    traces: FxHashMap<String, Trace>,
}

impl ContentStore {
    /// Load all records under `data_dir`.
    pub fn load(data_dir: &Path) -> Result<Self> {
        if !data_dir.is_dir() {
            bail!(
                "data directory not found: {} (expected events/, articles/, reflections/ inside)",
                data_dir.display()
            );
        }

        let mut store = Self {
            events: load_records(&data_dir.join("events")),
            ..Self::default()
        };
        store.load_articles(&data_dir.join("articles"));
        store.reflections = load_records(&data_dir.join("reflections"));

        backfill_slugs(&mut store.articles);
        backfill_slugs(&mut store.reflections);

        // ISO timestamps compare correctly as strings
        store
            .articles
            .sort_by(|a, b| b.written_at.cmp(&a.written_at));
        store
            .reflections
            .sort_by(|a, b| b.written_at.cmp(&a.written_at));

        debug!("content";
            "loaded {} events, {} articles ({} traced), {} reflections",
            store.events.len(),
            store.articles.len(),
            store.traces.len(),
            store.reflections.len()
        );
        Ok(store)
    }

    /// Articles and trace sidecars share a directory; the suffix tells
    /// them apart.
    fn load_articles(&mut self, dir: &Path) {
        for path in collect_json_files(dir) {
            let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
            if let Some(slug) = name.strip_suffix(".trace.json") {
                if let Some(trace) = parse_record::<Trace>(&path) {
                    self.traces.insert(slug.to_string(), trace);
                }
            } else if let Some(article) = parse_record::<Article>(&path) {
                self.articles.push(article);
            }
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// All articles, newest first, every language.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn reflections(&self) -> &[Reflection] {
        &self.reflections
    }

    /// Articles in one language, newest first.
    pub fn articles_for(&self, lang: Lang) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|a| a.lang() == Some(lang))
            .collect()
    }

    pub fn article_by_slug(&self, lang: Lang, slug: &str) -> Option<&Article> {
        self.articles
            .iter()
            .find(|a| a.lang() == Some(lang) && a.slug == slug)
    }

    pub fn reflections_for(&self, lang: Lang) -> Vec<&Reflection> {
        self.reflections
            .iter()
            .filter(|r| r.lang() == Some(lang))
            .collect()
    }

    pub fn reflection_by_slug(&self, lang: Lang, slug: &str) -> Option<&Reflection> {
        self.reflections
            .iter()
            .find(|r| r.lang() == Some(lang) && r.slug == slug)
    }

    pub fn trace(&self, slug: &str) -> Option<&Trace> {
        self.traces.get(slug)
    }

    /// Sibling articles covering the same event, one slug per language,
    /// in site language order. The language switcher disables languages
    /// that come back absent.
    pub fn alternates(&self, event_id: &str) -> Vec<(Lang, Option<&str>)> {
        LANGUAGES
            .iter()
            .map(|&lang| {
                let slug = self
                    .articles
                    .iter()
                    .find(|a| a.event_id == event_id && a.lang() == Some(lang))
                    .map(|a| a.slug.as_str());
                (lang, slug)
            })
            .collect()
    }
}

/// Collect `.json` files under `dir`, sorted by path.
///
/// Sorted so slug backfill sees records in a stable order across runs.
fn collect_json_files(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        debug!("content"; "no {} directory, skipping", dir.display());
        return Vec::new();
    }

    let mut files: Vec<_> = WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}

fn load_records<T: DeserializeOwned>(dir: &Path) -> Vec<T> {
    collect_json_files(dir)
        .iter()
        .filter_map(|path| parse_record(path))
        .collect()
}

/// Parse one record, logging and skipping on failure.
fn parse_record<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let parsed = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))
        .and_then(|text| {
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
        });

    match parsed {
        Ok(record) => Some(record),
        Err(e) => {
            log!("content"; "skipping record: {:#}", e);
            None
        }
    }
}

/// Give every record a non-empty, unique slug.
///
/// Records written before slugs existed get one derived from the title,
/// falling back to `{kind}-{id}` when the title transliterates to
/// nothing. Collisions get `-2`, `-3`, ... suffixes, matching what the
/// pipeline does at write time.
fn backfill_slugs<T: Sluggable>(records: &mut [T]) {
    let mut taken: FxHashSet<String> = records
        .iter()
        .map(|r| r.slug().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    for record in records.iter_mut() {
        if !record.slug().is_empty() {
            continue;
        }

        let mut base = slugify(record.title());
        if base.is_empty() {
            base = format!("{}-{}", T::KIND, record.id());
        }

        let mut slug = base.clone();
        let mut n = 2;
        while taken.contains(&slug) {
            slug = format!("{base}-{n}");
            n += 1;
        }
        taken.insert(slug.clone());
        record.set_slug(slug);
    }
}

/// Record access for slug backfilling.
trait Sluggable {
    const KIND: &'static str;
    fn id(&self) -> &str;
    fn title(&self) -> &str;
    fn slug(&self) -> &str;
    fn set_slug(&mut self, slug: String);
}

impl Sluggable for Article {
    const KIND: &'static str = "article";
    fn id(&self) -> &str {
        &self.id
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn slug(&self) -> &str {
        &self.slug
    }
    fn set_slug(&mut self, slug: String) {
        self.slug = slug;
    }
}

impl Sluggable for Reflection {
    const KIND: &'static str = "reflection";
    fn id(&self) -> &str {
        &self.id
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn slug(&self) -> &str {
        &self.slug
    }
    fn set_slug(&mut self, slug: String) {
        self.slug = slug;
    }
}
