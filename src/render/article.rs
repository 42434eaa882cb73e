//! The `/{lang}/article/{slug}/` essay page.
//!
//! Hero artwork behind the text column, the essay itself, the process
//! trace when a sidecar exists, and the event sidebar. Language
//! alternates come from sibling articles covering the same event.

use std::fmt::Write;

use super::layout::{self, Page};
use super::RenderCtx;
use crate::art::artwork_svg;
use crate::content::{Article, Event, Trace, category_color};
use crate::core::UrlPath;
use crate::i18n::{Lang, category_label, format_date, is_date_past, typograph, ui};
use crate::seo::jsonld::article_jsonld;
use crate::utils::html::{escape, escape_attr};

/// Meta description length when an article has no lead.
const DESCRIPTION_CHARS: usize = 160;

pub fn render(ctx: &RenderCtx, article: &Article) -> (UrlPath, String) {
    let lang = article.lang().unwrap_or_default();
    let t = ui(lang);
    let color = category_color(article.event.category());

    let mut body = String::with_capacity(16 * 1024);
    let _ = write!(
        body,
        concat!(
            "<div class=\"article-page\">\n",
            "<div class=\"article-hero\">{art}</div>\n",
            "<article style=\"--accent:{color}\">\n",
            "<h1>{title}</h1>\n",
            "<div class=\"article-meta\">{published} {date} / {minutes} {min_read}</div>\n"
        ),
        art = artwork_svg(&article.art_seed(), color),
        color = color,
        title = typograph(&escape(&article.title), lang),
        published = escape(t.published),
        date = escape(&format_date(lang, article.written_date())),
        minutes = article.min_read(),
        min_read = escape(t.min_read),
    );

    if let Some(lead) = article.lead() {
        let _ = write!(
            body,
            "<p class=\"article-lead\">{}</p>\n",
            typograph(&escape(lead), lang)
        );
    }

    write_body(&mut body, &article.body, lang);

    let _ = write!(
        body,
        concat!(
            "<button type=\"button\" class=\"copy-link\" data-copied=\"{copied}\">",
            "{copy_link}</button>\n"
        ),
        copied = escape_attr(t.copied),
        copy_link = escape(t.copy_link),
    );

    if let Some(trace) = ctx.store.trace(&article.slug) {
        write_trace(&mut body, trace, lang);
    }

    body.push_str("</article>\n<div class=\"sidebar-col\">\n");
    write_event_sidebar(&mut body, ctx, &article.event, lang);
    body.push_str("</div>\n</div>\n");

    let page = Page {
        lang,
        title: format!("{} — {}", article.title, ctx.config.site.info.title),
        description: article.summary(DESCRIPTION_CHARS).to_string(),
        route: article.route(),
        alternates: alternates(ctx, article),
        og_type: "article",
        published: Some(article.written_at.clone()),
        jsonld: Some(article_jsonld(ctx.config, article)),
        body,
    };
    (page.route.clone(), layout::shell(ctx, &page))
}

/// Sibling slugs for the same event, one per language.
fn alternates(ctx: &RenderCtx, article: &Article) -> Vec<(Lang, Option<UrlPath>)> {
    ctx.store
        .alternates(&article.event_id)
        .into_iter()
        .map(|(lang, slug)| {
            let route = slug.map(|s| UrlPath::from_page(&format!("/{lang}/article/{s}")));
            (lang, route)
        })
        .collect()
}

/// Paragraphs split on blank lines, each typographed.
fn write_body(body: &mut String, text: &str, lang: Lang) {
    body.push_str("<div class=\"article-body\">\n");
    for paragraph in text.split("\n\n").filter(|p| !p.trim().is_empty()) {
        let _ = write!(body, "<p>{}</p>\n", typograph(&escape(paragraph.trim()), lang));
    }
    body.push_str("</div>\n");
}

fn severity_color(severity: &str) -> &'static str {
    match severity {
        "critical" => "#B91C1C",
        "major" => "#92600A",
        _ => "#666666",
    }
}

fn issue_label(t: &crate::i18n::UiStrings, kind: &str) -> Option<&'static str> {
    match kind {
        "factual" => Some(t.issue_factual),
        "voice" => Some(t.issue_voice),
        "structure" => Some(t.issue_structure),
        "language" => Some(t.issue_language),
        "depth" => Some(t.issue_depth),
        _ => None,
    }
}

/// "How this was written" disclosure. A `<details>` element, so it
/// works without the site script.
fn write_trace(body: &mut String, trace: &Trace, lang: Lang) {
    let t = ui(lang);
    let (critical, major, minor) = trace.severity_counts();

    let _ = write!(
        body,
        concat!(
            "<details class=\"process-trace\">\n",
            "<summary>{title}",
            "<span class=\"trace-stats\">{draft} → {final_count} {words}"
        ),
        title = escape(t.process_title),
        draft = trace.draft_word_count,
        final_count = trace.final_word_count(),
        words = escape(t.process_words),
    );
    for (count, severity) in [(critical, "critical"), (major, "major"), (minor, "minor")] {
        if count > 0 {
            let _ = write!(
                body,
                concat!(
                    " <span class=\"severity-dot\" style=\"background:{color}\"></span>",
                    "{count}"
                ),
                color = severity_color(severity),
                count = count,
            );
        }
    }
    if trace.research_sources_count > 0 {
        let _ = write!(
            body,
            " / {} {}",
            trace.research_sources_count,
            escape(t.process_sources)
        );
    }
    body.push_str("</span></summary>\n<div class=\"trace-detail\">\n");

    if trace.expanded {
        let _ = write!(
            body,
            "<div class=\"expanded-note\">{}</div>\n",
            escape(t.process_expanded)
        );
    }

    if trace.critique_assessment.is_some() || !trace.critique_issues.is_empty() {
        let _ = write!(
            body,
            "<div class=\"editor-note\">{}</div>\n",
            escape(t.process_editor_note)
        );
    }
    if let Some(assessment) = &trace.critique_assessment {
        let _ = write!(body, "<p>{}</p>\n", typograph(&escape(assessment), lang));
    }

    for issue in &trace.critique_issues {
        let label = issue_label(t, &issue.kind).unwrap_or(issue.kind.as_str());
        let _ = write!(
            body,
            concat!(
                "<div class=\"issue\">",
                "<span class=\"severity-dot\" style=\"background:{color}\"></span>",
                "<span class=\"kind\">{kind}</span> ",
                "<span class=\"fix\">{fix}</span></div>\n"
            ),
            color = severity_color(&issue.severity),
            kind = escape(label),
            fix = escape(&issue.fix),
        );
    }

    if let Some(draft) = &trace.draft_text {
        let _ = write!(
            body,
            "<details class=\"draft-text\"><summary>{}</summary>\n",
            escape(t.process_show_draft)
        );
        for paragraph in draft.split("\n\n").filter(|p| !p.trim().is_empty()) {
            let _ = write!(body, "<p>{}</p>\n", escape(paragraph.trim()));
        }
        body.push_str("</details>\n");
    }

    body.push_str("</div>\n</details>\n");
}

fn write_event_sidebar(body: &mut String, ctx: &RenderCtx, event: &Event, lang: Lang) {
    let t = ui(lang);
    let _ = write!(
        body,
        concat!(
            "<aside class=\"event-sidebar\">\n",
            "<h3>{name}</h3>\n",
            "<div class=\"rows\">\n",
            "<div><span class=\"card-category\" style=\"color:{color}\">{category}</span></div>\n"
        ),
        name = typograph(&escape(&event.name), lang),
        color = category_color(event.category()),
        category = escape(category_label(lang, event.category().unwrap_or(""))),
    );

    if let Some(start) = event.start_date() {
        // An event range stays current until its last day ends
        let reference = event.end_date().unwrap_or(start);
        let past = if is_date_past(reference, &ctx.now) {
            " class=\"past\""
        } else {
            ""
        };
        let _ = write!(
            body,
            "<div><span class=\"label\">{label}</span><span{past}>{start}",
            label = escape(t.date),
            start = escape(&format_date(lang, start)),
        );
        if let Some(end) = event.end_date().filter(|e| *e != start) {
            let _ = write!(body, " — {}", escape(&format_date(lang, end)));
        }
        body.push_str("</span></div>\n");
    }

    for (label, value) in [(t.venue, event.venue()), (t.city, event.city())] {
        if let Some(value) = value {
            let _ = write!(
                body,
                "<div><span class=\"label\">{}</span><span>{}</span></div>\n",
                escape(label),
                escape(value),
            );
        }
    }

    if let Some(url) = event.event_url() {
        let _ = write!(
            body,
            concat!(
                "<div><a class=\"event-link\" href=\"{url}\" target=\"_blank\" ",
                "rel=\"noopener noreferrer\">{label} →</a></div>\n"
            ),
            url = escape_attr(url),
            label = escape(t.event_link),
        );
    }

    body.push_str("</div>\n</aside>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::{ctx, test_ctx};
    use crate::render::Assets;

    #[test]
    fn test_article_page_composition() {
        let (_tmp, config, store) = test_ctx();
        let assets = Assets::in_memory();
        let ctx = ctx(&config, &store, &assets);
        let article = store.article_by_slug(Lang::En, "archive-night").unwrap();

        let (route, html) = render(&ctx, article);
        assert_eq!(route.as_str(), "/en/article/archive-night/");
        // Hero art seeded from event id + title, tinted per category
        assert!(html.contains("<svg viewBox=\"-20 -20 440 440\""));
        assert!(html.contains("#1A6B3C"));
        assert!(html.contains("Night at")); // title (typographed downstream of "at")
        assert!(html.contains("2 min read"));
        assert!(html.contains("<p>First paragraph.</p>"));
        assert!(html.contains("<p>Second paragraph.</p>"));
        assert!(html.contains("Silent Green"));
        assert!(html.contains(r#"href="https://example.org/archive""#));
    }

    #[test]
    fn test_article_alternates_join_on_event() {
        let (_tmp, config, store) = test_ctx();
        let assets = Assets::in_memory();
        let ctx = ctx(&config, &store, &assets);
        let article = store.article_by_slug(Lang::En, "archive-night").unwrap();

        let (_, html) = render(&ctx, article);
        assert!(html.contains(r#"hreflang="de" href="https://ptytsch.test/de/article/archivnacht/""#));
        // No Russian sibling for this event
        assert!(!html.contains(r#"hreflang="ru""#));
        assert!(html.contains(r#"<span class="disabled">RU</span>"#));
    }

    #[test]
    fn test_trace_disclosure_rendered() {
        let (_tmp, config, store) = test_ctx();
        let assets = Assets::in_memory();
        let ctx = ctx(&config, &store, &assets);
        let article = store.article_by_slug(Lang::En, "archive-night").unwrap();

        let (_, html) = render(&ctx, article);
        assert!(html.contains("How this was written"));
        assert!(html.contains("400 → 4 words"));
        assert!(html.contains("Expanded after review"));
        assert!(html.contains("check the dates"));
        // Critical issues get the red dot
        assert!(html.contains(r#"background:#B91C1C"#));
    }

    #[test]
    fn test_article_without_trace_or_lead() {
        let (_tmp, config, store) = test_ctx();
        let assets = Assets::in_memory();
        let ctx = ctx(&config, &store, &assets);
        let article = store.article_by_slug(Lang::De, "archivnacht").unwrap();

        let (_, html) = render(&ctx, article);
        assert!(!html.contains("process-trace"));
        assert!(!html.contains("article-lead"));
        // Description falls back to the body opening
        assert!(html.contains(r#"content="Erster Absatz.""#));
    }

    #[test]
    fn test_jsonld_embedded() {
        let (_tmp, config, store) = test_ctx();
        let assets = Assets::in_memory();
        let ctx = ctx(&config, &store, &assets);
        let article = store.article_by_slug(Lang::En, "archive-night").unwrap();

        let (_, html) = render(&ctx, article);
        assert!(html.contains(r#"<script type="application/ld+json">"#));
        assert!(html.contains(r#""@type":"Article""#));
        assert!(html.contains(r#""@type":"Event""#));
    }
}
