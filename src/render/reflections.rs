//! The `/{lang}/reflections/` index and individual reflection pages.
//!
//! Reflections are the system's periodic look back over its own
//! archive. Unlike articles they have no event and no cross-language
//! siblings, so a reflection page only alternates with the per-language
//! indexes.

use std::fmt::Write;

use super::layout::{self, Page};
use super::RenderCtx;
use crate::content::Reflection;
use crate::core::UrlPath;
use crate::i18n::{Lang, format_date, typograph, ui};
use crate::seo::jsonld::reflection_jsonld;
use crate::utils::html::{escape, escape_attr};

/// Teaser length on the index, matching the card leads in feel.
const TEASER_CHARS: usize = 300;

pub fn render_index(ctx: &RenderCtx, lang: Lang) -> (UrlPath, String) {
    let t = ui(lang);
    let reflections = ctx.store.reflections_for(lang);

    let mut body = String::with_capacity(8 * 1024);
    let _ = write!(
        body,
        concat!(
            "<div class=\"prose-page\">\n",
            "<h1>{title}</h1>\n",
            "<p class=\"reflections-about\">{about}</p>\n"
        ),
        title = escape(t.reflections_title),
        about = typograph(&escape(t.reflections_about), lang),
    );

    if reflections.is_empty() {
        let _ = write!(
            body,
            "<div class=\"empty-state\"><p>{}</p></div>\n",
            escape(t.we_are_close)
        );
    } else {
        for reflection in &reflections {
            write_item(&mut body, lang, reflection);
        }
    }
    body.push_str("</div>\n");

    let page = Page {
        lang,
        title: format!("{} — {}", t.reflections_title, ctx.config.site.info.title),
        description: t.reflections_about.to_string(),
        route: UrlPath::from_page(&format!("/{lang}/reflections")),
        alternates: Page::uniform_alternates("reflections"),
        og_type: "website",
        published: None,
        jsonld: None,
        body,
    };
    (page.route.clone(), layout::shell(ctx, &page))
}

fn write_item(body: &mut String, lang: Lang, reflection: &Reflection) {
    let t = ui(lang);
    let _ = write!(
        body,
        concat!(
            "<a class=\"reflection-item\" href=\"{route}\">\n",
            "<h2>{title}</h2>\n",
            "<div class=\"reflection-meta\">",
            "<span class=\"reflection-period\">{start} — {end}</span>",
            "<span>{count} {analyzed}</span>",
            "</div>\n",
            "<p class=\"teaser\">{teaser}</p>\n",
            "</a>\n"
        ),
        route = reflection.route(),
        title = typograph(&escape(&reflection.title), lang),
        start = escape(&format_date(lang, &reflection.period_start)),
        end = escape(&format_date(lang, &reflection.period_end)),
        count = reflection.analysis.article_count,
        analyzed = escape(t.articles_analyzed),
        teaser = typograph(&escape(reflection.teaser(TEASER_CHARS)), lang),
    );
}

pub fn render_page(ctx: &RenderCtx, reflection: &Reflection) -> (UrlPath, String) {
    let lang = reflection.lang().unwrap_or_default();
    let t = ui(lang);

    let mut body = String::with_capacity(8 * 1024);
    let _ = write!(
        body,
        concat!(
            "<article class=\"reflection-page\">\n",
            "<h1>{title}</h1>\n",
            "<div class=\"article-meta\">",
            "{period}: {start} — {end} / {count} {analyzed}",
            "</div>\n"
        ),
        title = typograph(&escape(&reflection.title), lang),
        period = escape(t.period_covered),
        start = escape(&format_date(lang, &reflection.period_start)),
        end = escape(&format_date(lang, &reflection.period_end)),
        count = reflection.analysis.article_count,
        analyzed = escape(t.articles_analyzed),
    );

    body.push_str("<div class=\"article-body\">\n");
    for paragraph in reflection.body.split("\n\n").filter(|p| !p.trim().is_empty()) {
        let _ = write!(body, "<p>{}</p>\n", typograph(&escape(paragraph.trim()), lang));
    }
    body.push_str("</div>\n");

    let _ = write!(
        body,
        concat!(
            "<button type=\"button\" class=\"copy-link\" data-copied=\"{copied}\">",
            "{copy_link}</button>\n</article>\n"
        ),
        copied = escape_attr(t.copied),
        copy_link = escape(t.copy_link),
    );

    let page = Page {
        lang,
        title: format!("{} — {}", reflection.title, ctx.config.site.info.title),
        description: reflection.teaser(160).to_string(),
        route: reflection.route(),
        // Reflections are written in one language only
        alternates: vec![(lang, Some(reflection.route()))],
        og_type: "article",
        published: Some(reflection.written_at.clone()),
        jsonld: Some(reflection_jsonld(ctx.config, reflection)),
        body,
    };
    (page.route.clone(), layout::shell(ctx, &page))
}
