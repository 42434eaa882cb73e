//! Document shell shared by every page.
//!
//! Builds the full HTML document around a page body: head metadata
//! (canonical, hreflang set, Open Graph, feed and stylesheet links),
//! the oversized wordmark header with the language selector, and the
//! footer. All record-derived text arrives here already escaped.

use std::fmt::Write;

use serde_json::Value;

use super::RenderCtx;
use crate::core::UrlPath;
use crate::i18n::{DEFAULT_LANG, LANGUAGES, Lang, typograph, ui};
use crate::utils::html::escape_attr;

/// The hand-drawn lightning mark, inlined wherever the wordmark shows.
const ICON_PATH: &str = "M6 20 L14 10 L16 14 L26 8 L20 16 L22 18 L10 22 Z";

/// One rendered page, ready for the shell.
pub struct Page {
    pub lang: Lang,
    /// Full `<title>` text, already composed.
    pub title: String,
    pub description: String,
    pub route: UrlPath,
    /// Same page in each language, `None` when no sibling exists.
    /// Drives both hreflang links and the language selector.
    pub alternates: Vec<(Lang, Option<UrlPath>)>,
    /// Open Graph object type: `website` or `article`.
    pub og_type: &'static str,
    /// `article:published_time`, articles and reflections only.
    pub published: Option<String>,
    pub jsonld: Option<Value>,
    pub body: String,
}

impl Page {
    /// Alternates for pages that exist in every language at the same
    /// route shape, e.g. `/{lang}/about/`.
    pub fn uniform_alternates(suffix: &str) -> Vec<(Lang, Option<UrlPath>)> {
        LANGUAGES
            .iter()
            .map(|&l| (l, Some(UrlPath::from_page(&format!("/{l}/{suffix}")))))
            .collect()
    }
}

/// Wrap a page body in the full document.
pub fn shell(ctx: &RenderCtx, page: &Page) -> String {
    let base_url = ctx.config.base_url();
    let info = &ctx.config.site.info;
    let lang = page.lang;
    let canonical = format!("{base_url}{}", page.route);

    let mut html = String::with_capacity(8 * 1024);
    let _ = write!(
        html,
        concat!(
            "<!doctype html>\n",
            r#"<html lang="{lang}">"#,
            "\n<head>\n",
            "<meta charset=\"utf-8\">\n",
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
            "<title>{title}</title>\n",
            "<meta name=\"description\" content=\"{description}\">\n",
            "<link rel=\"canonical\" href=\"{canonical}\">\n"
        ),
        lang = lang,
        title = escape_attr(&page.title),
        description = escape_attr(&page.description),
        canonical = escape_attr(&canonical),
    );

    write_hreflang(&mut html, base_url, &page.alternates);
    write_open_graph(&mut html, page, info, &canonical);

    let _ = write!(
        html,
        concat!(
            "<link rel=\"alternate\" type=\"application/rss+xml\" ",
            "title=\"{site} ({lang})\" href=\"{base}/{lang}/feed.xml\">\n",
            "<link rel=\"stylesheet\" href=\"{css}\">\n",
            "<script src=\"{js}\" defer></script>\n"
        ),
        site = escape_attr(&info.title),
        lang = lang,
        base = base_url,
        css = ctx.assets.css_href,
        js = ctx.assets.js_href,
    );

    if let Some(jsonld) = &page.jsonld {
        // "</" must not terminate the script element early
        let blob = jsonld.to_string().replace("</", "<\\/");
        let _ = write!(
            html,
            "<script type=\"application/ld+json\">{blob}</script>\n"
        );
    }

    html.push_str("</head>\n<body>\n");
    write_header(&mut html, ctx, page);
    let _ = write!(html, "<main>\n{}</main>\n", page.body);
    write_footer(&mut html, ctx, lang);
    html.push_str("</body>\n</html>\n");
    html
}

/// `<link rel="alternate" hreflang>` set, plus `x-default` pointing at
/// the English sibling when one exists.
fn write_hreflang(html: &mut String, base_url: &str, alternates: &[(Lang, Option<UrlPath>)]) {
    for (lang, route) in alternates {
        if let Some(route) = route {
            let _ = write!(
                html,
                "<link rel=\"alternate\" hreflang=\"{lang}\" href=\"{base_url}{route}\">\n"
            );
        }
    }
    if let Some(route) = alternates
        .iter()
        .find(|(l, _)| *l == DEFAULT_LANG)
        .and_then(|(_, r)| r.as_ref())
    {
        let _ = write!(
            html,
            "<link rel=\"alternate\" hreflang=\"x-default\" href=\"{base_url}{route}\">\n"
        );
    }
}

fn write_open_graph(
    html: &mut String,
    page: &Page,
    info: &crate::config::SiteInfoConfig,
    canonical: &str,
) {
    let locale = page.lang.locale().replace('-', "_");
    let _ = write!(
        html,
        concat!(
            "<meta property=\"og:type\" content=\"{og_type}\">\n",
            "<meta property=\"og:site_name\" content=\"{site}\">\n",
            "<meta property=\"og:locale\" content=\"{locale}\">\n",
            "<meta property=\"og:title\" content=\"{title}\">\n",
            "<meta property=\"og:description\" content=\"{description}\">\n",
            "<meta property=\"og:url\" content=\"{url}\">\n",
            "<meta name=\"twitter:card\" content=\"summary\">\n"
        ),
        og_type = page.og_type,
        site = escape_attr(&info.title),
        locale = locale,
        title = escape_attr(&page.title),
        description = escape_attr(&page.description),
        url = escape_attr(canonical),
    );
    if let Some(published) = &page.published {
        let _ = write!(
            html,
            "<meta property=\"article:published_time\" content=\"{}\">\n",
            escape_attr(published)
        );
    }
}

fn write_header(html: &mut String, ctx: &RenderCtx, page: &Page) {
    let title = escape_attr(&ctx.config.site.info.title);
    let _ = write!(
        html,
        concat!(
            "<header class=\"site-header\">\n",
            "<a class=\"wordmark\" href=\"/{lang}/\">",
            "<h1>{title}</h1>{icon}",
            "</a>\n",
            "<nav class=\"lang-picker\">"
        ),
        lang = page.lang,
        title = title,
        icon = icon_svg("mark-icon"),
    );

    for (lang, route) in &page.alternates {
        match route {
            Some(route) => {
                let active = if *lang == page.lang { " class=\"active\"" } else { "" };
                let _ = write!(
                    html,
                    "<a{active} href=\"{route}\" hreflang=\"{lang}\">{code}</a>",
                    code = lang.as_str().to_uppercase(),
                );
            }
            None => {
                let _ = write!(
                    html,
                    "<span class=\"disabled\">{}</span>",
                    lang.as_str().to_uppercase()
                );
            }
        }
    }
    html.push_str("</nav>\n</header>\n");
}

fn write_footer(html: &mut String, ctx: &RenderCtx, lang: Lang) {
    let _ = write!(
        html,
        concat!(
            "<footer class=\"site-footer\">\n",
            "<a class=\"about-link\" href=\"/{lang}/about/\">{about}</a>\n",
            "<span class=\"footer-mark\">{icon}{title}</span>\n",
            "</footer>\n"
        ),
        lang = lang,
        about = typograph(ui(lang).about_title, lang),
        icon = icon_svg("footer-icon"),
        title = escape_attr(&ctx.config.site.info.title),
    );
}

fn icon_svg(class: &str) -> String {
    format!(
        concat!(
            r#"<svg class="{class}" viewBox="0 0 32 32" aria-hidden="true">"#,
            r#"<path d="{path}" fill="currentColor"/></svg>"#
        ),
        class = class,
        path = ICON_PATH,
    )
}
