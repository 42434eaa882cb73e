//! Validate command: scan the data directory and report bad records.
//!
//! The build intentionally skips malformed records so one bad file
//! never blocks publishing; this command is where those problems
//! surface. Run it in CI against the pipeline's output.

use std::fs;
use std::path::Path;

use anyhow::{Result, bail};
use rustc_hash::FxHashSet;

use crate::cli::ValidateArgs;
use crate::config::SiteConfig;
use crate::content::{Article, CATEGORIES, Reflection, Trace};
use crate::i18n::Lang;
use crate::log;
use crate::utils::date::DateTimeUtc;
use crate::utils::plural_count;

/// One problem found in the data directory.
struct Problem {
    file: String,
    message: String,
}

#[derive(Default)]
struct Report {
    problems: Vec<Problem>,
}

impl Report {
    fn push(&mut self, file: &Path, message: impl Into<String>) {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.display().to_string());
        self.problems.push(Problem {
            file: name,
            message: message.into(),
        });
    }
}

pub fn validate_data(config: &SiteConfig, args: &ValidateArgs) -> Result<()> {
    let data = &config.build.data;
    if !data.is_dir() {
        bail!("data directory not found: {}", data.display());
    }

    let mut report = Report::default();
    let article_slugs = check_articles(&data.join("articles"), &mut report);
    check_reflections(&data.join("reflections"), &mut report);
    check_traces(&data.join("articles"), &article_slugs, &mut report);

    if report.problems.is_empty() {
        log!("validate"; "all records valid");
        return Ok(());
    }

    for problem in &report.problems {
        log!("validate"; "{}: {}", problem.file, problem.message);
    }

    let summary = plural_count(report.problems.len(), "problem");
    if args.warn_only {
        log!("warning"; "{} found (ignored with --warn-only)", summary);
        Ok(())
    } else {
        bail!("{} found in {}", summary, config.root_relative(data).display());
    }
}

/// Check article records. Returns valid slugs for the orphan-trace pass.
fn check_articles(dir: &Path, report: &mut Report) -> FxHashSet<String> {
    let mut slugs = FxHashSet::default();
    // (lang, slug) pairs resolve to one page each
    let mut seen_routes = FxHashSet::default();

    for path in json_files(dir, false) {
        let Some(article) = parse::<Article>(&path, report) else {
            continue;
        };

        if article.title.trim().is_empty() {
            report.push(&path, "missing title");
        }
        if article.body.trim().is_empty() {
            report.push(&path, "missing body");
        }
        if Lang::parse(&article.language).is_none() {
            report.push(&path, format!("unknown language '{}'", article.language));
        }
        if DateTimeUtc::parse(&article.written_at).is_none() {
            report.push(&path, format!("invalid written_at '{}'", article.written_at));
        }

        let event = &article.event;
        if let Some(category) = event.category()
            && !CATEGORIES.contains(&category)
        {
            report.push(&path, format!("unknown category '{category}'"));
        }
        for (field, value) in [("start_date", event.start_date()), ("end_date", event.end_date())]
        {
            if let Some(date) = value
                && (date.len() != 10 || DateTimeUtc::parse(date).is_none())
            {
                report.push(&path, format!("invalid {field} '{date}'"));
            }
        }
        if let (Some(start), Some(end)) = (event.start_date(), event.end_date())
            && end < start
        {
            report.push(&path, format!("end_date '{end}' before start_date '{start}'"));
        }

        if !article.slug.is_empty() {
            if !seen_routes.insert((article.language.clone(), article.slug.clone())) {
                report.push(
                    &path,
                    format!("duplicate slug '{}' for language '{}'", article.slug, article.language),
                );
            }
            slugs.insert(article.slug);
        }
    }
    slugs
}

fn check_reflections(dir: &Path, report: &mut Report) {
    let mut seen_routes = FxHashSet::default();

    for path in json_files(dir, false) {
        let Some(reflection) = parse::<Reflection>(&path, report) else {
            continue;
        };

        if reflection.title.trim().is_empty() {
            report.push(&path, "missing title");
        }
        if reflection.body.trim().is_empty() {
            report.push(&path, "missing body");
        }
        if Lang::parse(&reflection.language).is_none() {
            report.push(&path, format!("unknown language '{}'", reflection.language));
        }
        for (field, date) in [
            ("period_start", &reflection.period_start),
            ("period_end", &reflection.period_end),
        ] {
            if DateTimeUtc::parse(date).is_none() {
                report.push(&path, format!("invalid {field} '{date}'"));
            }
        }
        if reflection.period_end < reflection.period_start {
            report.push(
                &path,
                format!(
                    "period_end '{}' before period_start '{}'",
                    reflection.period_end, reflection.period_start
                ),
            );
        }

        if !reflection.slug.is_empty()
            && !seen_routes.insert((reflection.language.clone(), reflection.slug.clone()))
        {
            report.push(
                &path,
                format!(
                    "duplicate slug '{}' for language '{}'",
                    reflection.slug, reflection.language
                ),
            );
        }
    }
}

/// A trace sidecar must belong to an article in the same directory.
fn check_traces(dir: &Path, article_slugs: &FxHashSet<String>, report: &mut Report) {
    for path in json_files(dir, true) {
        if parse::<Trace>(&path, report).is_none() {
            continue;
        }
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        let slug = name.trim_end_matches(".trace.json");
        if !article_slugs.contains(slug) {
            report.push(&path, format!("orphan trace: no article with slug '{slug}'"));
        }
    }
}

/// JSON files in `dir`, split into records and `.trace.json` sidecars.
fn json_files(dir: &Path, traces: bool) -> Vec<std::path::PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut files: Vec<_> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            let name = p.file_name().and_then(|n| n.to_str()).unwrap_or("");
            name.ends_with(".json") && name.ends_with(".trace.json") == traces
        })
        .collect();
    files.sort();
    files
}

fn parse<T: serde::de::DeserializeOwned>(path: &Path, report: &mut Report) -> Option<T> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            report.push(path, format!("unreadable: {e}"));
            return None;
        }
    };
    match serde_json::from_str(&content) {
        Ok(record) => Some(record),
        Err(e) => {
            report.push(path, format!("malformed JSON: {e}"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn data_dir(tmp: &TempDir) -> std::path::PathBuf {
        let data = tmp.path().join("data");
        fs::create_dir_all(data.join("articles")).unwrap();
        fs::create_dir_all(data.join("reflections")).unwrap();
        fs::create_dir_all(data.join("events")).unwrap();
        data
    }

    fn write_article(data: &Path, file: &str, json: &str) {
        fs::write(data.join("articles").join(file), json).unwrap();
    }

    const GOOD: &str = r#"{
        "id": "a1", "event_id": "ev1", "title": "T", "slug": "t",
        "lead": "", "body": "B", "language": "en",
        "written_at": "2025-06-10T08:30:00",
        "event": {"id": "ev1", "name": "E", "category": "music",
                  "start_date": "2025-06-20", "scouted_at": "2025-06-09T10:00:00"}
    }"#;

    #[test]
    fn test_clean_data_passes() {
        let tmp = TempDir::new().unwrap();
        let data = data_dir(&tmp);
        write_article(&data, "t.json", GOOD);

        let mut report = Report::default();
        check_articles(&data.join("articles"), &mut report);
        assert!(report.problems.is_empty());
    }

    #[test]
    fn test_bad_article_fields_reported() {
        let tmp = TempDir::new().unwrap();
        let data = data_dir(&tmp);
        write_article(
            &data,
            "bad.json",
            r#"{
                "id": "a1", "event_id": "ev1", "title": " ", "slug": "bad",
                "lead": "", "body": "", "language": "fr",
                "written_at": "yesterday",
                "event": {"id": "ev1", "name": "E", "category": "opera",
                          "start_date": "2025-06-20", "end_date": "2025-06-01",
                          "scouted_at": "2025-06-09T10:00:00"}
            }"#,
        );

        let mut report = Report::default();
        check_articles(&data.join("articles"), &mut report);
        let messages: Vec<_> = report.problems.iter().map(|p| p.message.as_str()).collect();
        assert!(messages.contains(&"missing title"));
        assert!(messages.contains(&"missing body"));
        assert!(messages.iter().any(|m| m.contains("unknown language 'fr'")));
        assert!(messages.iter().any(|m| m.contains("invalid written_at")));
        assert!(messages.iter().any(|m| m.contains("unknown category 'opera'")));
        assert!(messages.iter().any(|m| m.contains("before start_date")));
    }

    #[test]
    fn test_duplicate_slug_same_language_only() {
        let tmp = TempDir::new().unwrap();
        let data = data_dir(&tmp);
        write_article(&data, "a.json", GOOD);
        write_article(&data, "b.json", &GOOD.replace(r#""id": "a1""#, r#""id": "a2""#));
        // Same slug in another language is a different page
        write_article(
            &data,
            "c.json",
            &GOOD.replace(r#""language": "en""#, r#""language": "de""#),
        );

        let mut report = Report::default();
        check_articles(&data.join("articles"), &mut report);
        assert_eq!(report.problems.len(), 1);
        assert!(report.problems[0].message.contains("duplicate slug 't'"));
    }

    #[test]
    fn test_orphan_trace_reported() {
        let tmp = TempDir::new().unwrap();
        let data = data_dir(&tmp);
        write_article(&data, "t.json", GOOD);
        write_article(&data, "t.trace.json", r#"{"draft_word_count": 10}"#);
        write_article(&data, "ghost.trace.json", r#"{"draft_word_count": 10}"#);

        let mut report = Report::default();
        let slugs = check_articles(&data.join("articles"), &mut report);
        check_traces(&data.join("articles"), &slugs, &mut report);

        assert_eq!(report.problems.len(), 1);
        assert!(report.problems[0].message.contains("orphan trace"));
        assert!(report.problems[0].file.contains("ghost"));
    }

    #[test]
    fn test_malformed_json_reported() {
        let tmp = TempDir::new().unwrap();
        let data = data_dir(&tmp);
        write_article(&data, "broken.json", "{not json");

        let mut report = Report::default();
        check_articles(&data.join("articles"), &mut report);
        assert_eq!(report.problems.len(), 1);
        assert!(report.problems[0].message.contains("malformed JSON"));
    }

    #[test]
    fn test_bad_reflection_period() {
        let tmp = TempDir::new().unwrap();
        let data = data_dir(&tmp);
        fs::write(
            data.join("reflections/r.json"),
            r#"{
                "id": "r1", "title": "R", "slug": "r", "body": "B",
                "language": "en", "period_start": "2025-06-01",
                "period_end": "2025-05-01", "analysis": {"article_count": 1},
                "written_at": "2025-06-02T00:00:00"
            }"#,
        )
        .unwrap();

        let mut report = Report::default();
        check_reflections(&data.join("reflections"), &mut report);
        assert_eq!(report.problems.len(), 1);
        assert!(report.problems[0].message.contains("before period_start"));
    }
}
