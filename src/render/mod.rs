//! Static HTML rendering.
//!
//! Every page of the site is assembled here from escaped record text
//! and the frozen UI string tables, then written under the output
//! directory as `{route}/index.html`.
//!
//! | Module        | Pages                                        |
//! |---------------|----------------------------------------------|
//! | `layout`      | Document shell: head, header, footer         |
//! | `home`        | `/{lang}/` article feed                      |
//! | `article`     | `/{lang}/article/{slug}/`                    |
//! | `reflections` | `/{lang}/reflections/` and reflection pages  |
//! | `pages`       | About, impressum, privacy, 404, `/` redirect |
//! | `assets`      | Fingerprinted stylesheet and script          |

mod article;
mod assets;
mod home;
mod layout;
mod pages;
mod reflections;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::config::SiteConfig;
use crate::content::{Article, ContentStore, Reflection};
use crate::core::UrlPath;
use crate::i18n::{LANGUAGES, Lang};
use crate::logger::ProgressLine;
use crate::utils::date::DateTimeUtc;

pub use assets::Assets;

/// Shared state every page renderer reads.
pub struct RenderCtx<'a> {
    pub config: &'a SiteConfig,
    pub store: &'a ContentStore,
    pub assets: &'a Assets,
    /// One clock reading per build, so past-date strikethrough is
    /// consistent across pages.
    pub now: DateTimeUtc,
}

/// One page to render. Jobs are independent, so the batch fans out
/// over rayon.
enum PageJob<'a> {
    Home(Lang),
    Article(&'a Article),
    ReflectionsIndex(Lang),
    Reflection(&'a Reflection),
    About(Lang),
    Impressum(Lang),
    Privacy(Lang),
    NotFound,
    RootRedirect,
}

impl PageJob<'_> {
    /// Progress counter this job belongs to.
    fn kind(&self) -> &'static str {
        match self {
            PageJob::Article(_) => "articles",
            PageJob::Reflection(_) => "reflections",
            _ => "pages",
        }
    }
}

/// Render the whole site into the output directory.
pub fn render_site(config: &SiteConfig, store: &ContentStore) -> Result<()> {
    let assets = assets::write_assets(config)?;
    let ctx = RenderCtx {
        config,
        store,
        assets: &assets,
        now: DateTimeUtc::now(),
    };

    let jobs = collect_jobs(store);
    let count = |kind: &str| jobs.iter().filter(|j| j.kind() == kind).count();
    let progress = ProgressLine::new(&[
        ("articles", count("articles")),
        ("reflections", count("reflections")),
        ("pages", count("pages")),
    ]);

    let result = jobs.par_iter().try_for_each(|job| -> Result<()> {
        let (route, html) = render_job(&ctx, job)?;
        write_page(&config.build.output, &route, &html)?;
        progress.inc(job.kind());
        Ok(())
    });
    progress.finish();
    result
}

fn collect_jobs(store: &ContentStore) -> Vec<PageJob<'_>> {
    let mut jobs = vec![PageJob::NotFound, PageJob::RootRedirect];
    for lang in LANGUAGES {
        jobs.push(PageJob::Home(lang));
        jobs.push(PageJob::ReflectionsIndex(lang));
        jobs.push(PageJob::About(lang));
        jobs.push(PageJob::Impressum(lang));
        jobs.push(PageJob::Privacy(lang));
    }
    // Records with an unknown language have no page to live on
    jobs.extend(
        store
            .articles()
            .iter()
            .filter(|a| a.lang().is_some())
            .map(PageJob::Article),
    );
    jobs.extend(
        store
            .reflections()
            .iter()
            .filter(|r| r.lang().is_some())
            .map(PageJob::Reflection),
    );
    jobs
}

fn render_job(ctx: &RenderCtx, job: &PageJob) -> Result<(UrlPath, String)> {
    Ok(match job {
        PageJob::Home(lang) => home::render(ctx, *lang),
        PageJob::Article(article) => article::render(ctx, article),
        PageJob::ReflectionsIndex(lang) => reflections::render_index(ctx, *lang),
        PageJob::Reflection(reflection) => reflections::render_page(ctx, reflection),
        PageJob::About(lang) => pages::render_about(ctx, *lang),
        PageJob::Impressum(lang) => pages::render_impressum(ctx, *lang),
        PageJob::Privacy(lang) => pages::render_privacy(ctx, *lang),
        PageJob::NotFound => pages::render_not_found(ctx),
        PageJob::RootRedirect => pages::render_root_redirect(),
    })
}

/// Write a page to `{output}/{route}/index.html`.
///
/// The 404 page is the one route written as a bare file (`404.html`),
/// the convention static hosts expect.
fn write_page(output: &Path, route: &UrlPath, html: &str) -> Result<()> {
    let rel = route.as_str().trim_start_matches('/');
    let path = if rel.ends_with(".html") {
        output.join(rel)
    } else {
        output.join(rel).join("index.html")
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(&path, html).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// A minimal site rooted in a tempdir: one article per language
    /// for a shared event, one English reflection.
    pub fn test_ctx() -> (TempDir, SiteConfig, ContentStore) {
        let tmp = TempDir::new().unwrap();
        let data = tmp.path().join("data");
        let articles = data.join("articles");
        fs::create_dir_all(&articles).unwrap();
        fs::create_dir_all(data.join("events")).unwrap();
        fs::create_dir_all(data.join("reflections")).unwrap();

        fs::write(
            articles.join("archive-night.json"),
            r#"{
                "id": "a1",
                "event_id": "ev1",
                "title": "Night at the Archive",
                "slug": "archive-night",
                "lead": "A lead about the archive.",
                "body": "First paragraph.\n\nSecond paragraph.",
                "language": "en",
                "word_count": 450,
                "written_at": "2025-06-10T08:30:00",
                "event": {
                    "id": "ev1",
                    "name": "Archive Night",
                    "start_date": "2025-06-20",
                    "venue": "Silent Green",
                    "city": "Berlin",
                    "category": "exhibition",
                    "event_url": "https://example.org/archive",
                    "scouted_at": "2025-06-09T10:00:00"
                }
            }"#,
        )
        .unwrap();
        fs::write(
            articles.join("archivnacht.json"),
            r#"{
                "id": "a2",
                "event_id": "ev1",
                "title": "Nacht im Archiv",
                "slug": "archivnacht",
                "lead": "",
                "body": "Erster Absatz.",
                "language": "de",
                "written_at": "2025-06-10T09:00:00",
                "event": {
                    "id": "ev1",
                    "name": "Archive Night",
                    "start_date": "2025-06-20",
                    "category": "exhibition",
                    "scouted_at": "2025-06-09T10:00:00"
                }
            }"#,
        )
        .unwrap();
        fs::write(
            articles.join("archive-night.trace.json"),
            r#"{
                "draft_word_count": 400,
                "revised_text": "one two three four",
                "critique_assessment": "Solid draft.",
                "critique_issues": [
                    {"type": "factual", "severity": "critical", "fix": "check the dates"}
                ],
                "research_sources_count": 3,
                "expanded": true
            }"#,
        )
        .unwrap();
        fs::write(
            data.join("reflections/first-month.json"),
            r#"{
                "id": "r1",
                "title": "First month",
                "slug": "first-month",
                "body": "Looking back.\n\nMore text.",
                "language": "en",
                "period_start": "2025-05-01",
                "period_end": "2025-05-31",
                "analysis": {"article_count": 9, "categories": {"music": 4}},
                "word_count": 600,
                "written_at": "2025-06-01T12:00:00"
            }"#,
        )
        .unwrap();

        let mut config = crate::config::test_parse_config("");
        config.site.info.title = "PTYTSCH".into();
        config.site.info.tagline = "Berlin Cultural Digest".into();
        config.site.info.url = Some("https://ptytsch.test".into());
        config.site.info.author = "Roman Ponomarev".into();
        config.site.info.email = "hi@ptytsch.test".into();
        config.build.data = data.clone();
        config.build.output = tmp.path().join("public");

        let store = ContentStore::load(&data).unwrap();
        (tmp, config, store)
    }

    /// Context wrapper for page tests with a fixed clock.
    pub fn ctx<'a>(config: &'a SiteConfig, store: &'a ContentStore, assets: &'a Assets) -> RenderCtx<'a> {
        RenderCtx {
            config,
            store,
            assets,
            now: DateTimeUtc::new(2025, 6, 15, 12, 0, 0),
        }
    }

    #[test]
    fn test_write_page_routes() {
        let tmp = TempDir::new().unwrap();

        write_page(tmp.path(), &UrlPath::from_page("/en/article/x"), "<html>").unwrap();
        assert!(tmp.path().join("en/article/x/index.html").is_file());

        write_page(tmp.path(), &UrlPath::from_file("/404.html"), "<html>").unwrap();
        assert!(tmp.path().join("404.html").is_file());

        write_page(tmp.path(), &UrlPath::from_page("/"), "<html>").unwrap();
        assert!(tmp.path().join("index.html").is_file());
    }
}
