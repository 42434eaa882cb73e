//! The `/{lang}/` article feed.
//!
//! Server-side the page carries every article card; the embedded
//! script handles category filtering and the ten-at-a-time reveal.
//! Without it the page degrades to a full plain list.

use std::fmt::Write;

use super::layout::{self, Page};
use super::RenderCtx;
use crate::content::{Article, CATEGORIES, category_color};
use crate::core::UrlPath;
use crate::i18n::{Lang, category_label, format_date, is_date_past, typograph, ui};
use crate::utils::html::{escape, escape_attr};

pub fn render(ctx: &RenderCtx, lang: Lang) -> (UrlPath, String) {
    let t = ui(lang);
    let articles = ctx.store.articles_for(lang);

    let mut body = String::with_capacity(16 * 1024);
    write_filter_bar(&mut body, lang);

    if articles.is_empty() {
        let _ = write!(
            body,
            "<div class=\"empty-state\"><p>{}</p></div>\n",
            escape(t.nothing_yet)
        );
    } else {
        body.push_str("<div class=\"feed-grid\" data-feed>\n");
        for article in &articles {
            write_card(&mut body, ctx, lang, article);
        }
        body.push_str("</div>\n");
        let _ = write!(
            body,
            "<div class=\"load-more\"><button type=\"button\">{}</button></div>\n",
            escape(t.load_more)
        );
    }

    write_subscribe_card(&mut body, lang);

    let info = &ctx.config.site.info;
    let title = if info.tagline.is_empty() {
        info.title.clone()
    } else {
        format!("{} — {}", info.title, info.tagline)
    };
    let page = Page {
        lang,
        title,
        description: t.site_description.to_string(),
        route: UrlPath::from_page(&format!("/{lang}/")),
        alternates: Page::uniform_alternates(""),
        og_type: "website",
        published: None,
        jsonld: None,
        body,
    };
    (page.route.clone(), layout::shell(ctx, &page))
}

fn write_filter_bar(body: &mut String, lang: Lang) {
    body.push_str("<nav class=\"category-filter\">");
    for category in CATEGORIES {
        let _ = write!(
            body,
            concat!(
                "<a href=\"#\" data-category=\"{category}\" ",
                "style=\"color:{color}\">{label}</a>"
            ),
            category = category,
            color = category_color(Some(category)),
            label = escape(category_label(lang, category)),
        );
    }
    body.push_str("</nav>\n");
}

fn write_card(body: &mut String, ctx: &RenderCtx, lang: Lang, article: &Article) {
    let event = &article.event;
    let category = event.category().unwrap_or("");
    let color = category_color(event.category());
    // The card date is the event's start if known, else the write date
    let raw_date = event.start_date().unwrap_or_else(|| article.written_date());

    let _ = write!(
        body,
        concat!(
            "<a class=\"article-card\" href=\"{route}\" data-category=\"{category}\" ",
            "style=\"--cat-color:{color}\">\n",
            "<span class=\"card-category\" style=\"color:{color}\">{label}</span>\n",
            "<h2 class=\"card-title\">{title}</h2>\n"
        ),
        route = article.route(),
        category = escape_attr(category),
        color = color,
        label = escape(category_label(lang, category)),
        title = typograph(&escape(&article.title), lang),
    );

    if let Some(lead) = article.lead() {
        let _ = write!(
            body,
            "<p class=\"card-lead\">{}</p>\n",
            typograph(&escape(lead), lang)
        );
    }

    body.push_str("<span class=\"card-meta\">");
    if let Some(venue) = event.venue() {
        let _ = write!(body, "<span>{}</span><span>/</span>", escape(venue));
    }
    let past = if is_date_past(raw_date, &ctx.now) {
        " class=\"past\""
    } else {
        ""
    };
    let _ = write!(
        body,
        "<span{past}>{date}</span>",
        date = escape(&format_date(lang, raw_date)),
    );
    body.push_str("</span>\n</a>\n");
}

fn write_subscribe_card(body: &mut String, lang: Lang) {
    let t = ui(lang);
    let _ = write!(
        body,
        concat!(
            "<div class=\"subscribe-card\">\n",
            "<h2>{title}</h2>\n",
            "<p>{text}</p>\n",
            "<form class=\"subscribe-form\" data-lang=\"{lang}\" data-success=\"{success}\">\n",
            "<input type=\"email\" name=\"email\" required placeholder=\"{placeholder}\">\n",
            // Honeypot: invisible to readers, bots fill it in
            "<input class=\"hp-field\" type=\"text\" name=\"website\" tabindex=\"-1\" ",
            "autocomplete=\"off\" aria-hidden=\"true\">\n",
            "<button type=\"submit\">{button}</button>\n",
            "</form>\n",
            "</div>\n"
        ),
        title = escape(t.subscribe_title),
        text = typograph(&escape(t.subscribe_text), lang),
        lang = lang,
        success = escape_attr(t.subscribe_success),
        placeholder = escape_attr(t.subscribe_placeholder),
        button = escape(t.subscribe_button),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::tests::{ctx, test_ctx};
    use crate::render::Assets;

    #[test]
    fn test_home_feed_cards() {
        let (_tmp, config, store) = test_ctx();
        let assets = Assets::in_memory();
        let ctx = ctx(&config, &store, &assets);

        let (route, html) = render(&ctx, Lang::En);
        assert_eq!(route.as_str(), "/en/");
        assert!(html.contains(r#"href="/en/article/archive-night/""#));
        assert!(html.contains(r#"data-category="exhibition""#));
        // The exhibition brand color tints tag and hover
        assert!(html.contains("#1A6B3C"));
        // Event start date on the card, en-GB short month
        assert!(html.contains("20 Jun 2025"));
        // Past-date strikethrough is off for a future event
        assert!(!html.contains(r#"class="past""#));
        // German sibling lives on its own home page only
        assert!(!html.contains("archivnacht"));
    }

    #[test]
    fn test_home_empty_state_in_russian() {
        let (_tmp, config, store) = test_ctx();
        let assets = Assets::in_memory();
        let ctx = ctx(&config, &store, &assets);

        let (_, html) = render(&ctx, Lang::Ru);
        assert!(html.contains("ПОКА НИЧЕГО"));
        assert!(!html.contains("data-feed"));
    }

    #[test]
    fn test_subscribe_card_present_with_honeypot() {
        let (_tmp, config, store) = test_ctx();
        let assets = Assets::in_memory();
        let ctx = ctx(&config, &store, &assets);

        let (_, html) = render(&ctx, Lang::De);
        assert!(html.contains("ABONNIEREN"));
        assert!(html.contains(r#"name="website""#));
        assert!(html.contains(r#"data-lang="de""#));
    }

    #[test]
    fn test_home_title_carries_tagline() {
        let (_tmp, config, store) = test_ctx();
        let assets = Assets::in_memory();
        let ctx = ctx(&config, &store, &assets);

        let (_, html) = render(&ctx, Lang::En);
        assert!(html.contains("<title>PTYTSCH — Berlin Cultural Digest</title>"));
    }
}
