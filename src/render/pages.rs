//! The static pages: about, impressum, privacy, 404, and the bare `/`
//! redirect.
//!
//! Legal copy lives here rather than in the UI string tables since it
//! only ever appears on these two pages.

use std::fmt::Write;

use super::layout::{self, Page};
use super::RenderCtx;
use crate::core::UrlPath;
use crate::embed::{REDIRECT_HTML, RedirectVars};
use crate::i18n::{DEFAULT_LANG, Lang, typograph, ui};
use crate::utils::html::{escape, escape_attr};

pub fn render_about(ctx: &RenderCtx, lang: Lang) -> (UrlPath, String) {
    let t = ui(lang);

    let mut body = String::with_capacity(4 * 1024);
    let _ = write!(
        body,
        "<div class=\"prose-page\">\n<h1>{}</h1>\n<div class=\"article-body\">\n",
        escape(t.about_title)
    );
    for paragraph in t.about_text {
        let _ = write!(body, "<p>{}</p>\n", typograph(&escape(paragraph), lang));
    }
    body.push_str("</div>\n</div>\n");

    let page = Page {
        lang,
        title: format!("{} — {}", t.about, ctx.config.site.info.title),
        description: t.site_description.to_string(),
        route: UrlPath::from_page(&format!("/{lang}/about")),
        alternates: Page::uniform_alternates("about"),
        og_type: "website",
        published: None,
        jsonld: None,
        body,
    };
    (page.route.clone(), layout::shell(ctx, &page))
}

/// Per-language impressum strings. § 5 TMG obliges a German-hosted
/// publication to carry this page.
struct LegalStrings {
    responsible: &'static str,
    city: &'static str,
    contact: &'static str,
    disclaimer: &'static str,
    /// Follows the site title in one sentence.
    disclaimer_text: &'static str,
    copyright: &'static str,
    copyright_text: &'static str,
}

fn legal(lang: Lang) -> &'static LegalStrings {
    match lang {
        Lang::En => &LegalStrings {
            responsible: "Responsible according to § 5 TMG",
            city: "Munich, Germany",
            contact: "Contact",
            disclaimer: "Disclaimer",
            disclaimer_text: "is an autonomous AI-generated publication. All articles are written by artificial intelligence without human editorial oversight. The content reflects algorithmic analysis of cultural events and does not constitute professional criticism or journalism. Event details (dates, venues, descriptions) are sourced from publicly available information and may contain inaccuracies. We assume no liability for the accuracy, completeness, or timeliness of the content provided.",
            copyright: "Copyright",
            copyright_text: "All texts on this website are AI-generated. The website design, code, and brand are the intellectual property of the operator. Reproduction or distribution of these elements requires prior written consent.",
        },
        Lang::De => &LegalStrings {
            responsible: "Verantwortlich gemäß § 5 TMG",
            city: "München, Deutschland",
            contact: "Kontakt",
            disclaimer: "Haftungsausschluss",
            disclaimer_text: "ist eine autonome, KI-generierte Publikation. Alle Artikel werden von künstlicher Intelligenz ohne menschliche redaktionelle Aufsicht verfasst. Die Inhalte spiegeln algorithmische Analysen kultureller Veranstaltungen wider und stellen keine professionelle Kritik oder Berichterstattung dar. Veranstaltungsdetails (Daten, Orte, Beschreibungen) stammen aus öffentlich zugänglichen Informationen und können Ungenauigkeiten enthalten. Wir übernehmen keine Haftung für die Richtigkeit, Vollständigkeit oder Aktualität der bereitgestellten Inhalte.",
            copyright: "Urheberrecht",
            copyright_text: "Alle Texte auf dieser Website sind KI-generiert. Das Webdesign, der Code und die Marke sind geistiges Eigentum des Betreibers. Die Vervielfältigung oder Verbreitung dieser Elemente bedarf der vorherigen schriftlichen Zustimmung.",
        },
        Lang::Ru => &LegalStrings {
            responsible: "Ответственный согласно § 5 TMG",
            city: "Мюнхен, Германия",
            contact: "Контакт",
            disclaimer: "Отказ от ответственности",
            disclaimer_text: "— автономное издание, созданное искусственным интеллектом. Все статьи написаны ИИ без редакторского контроля. Содержание отражает алгоритмический анализ культурных событий и не является профессиональной критикой или журналистикой. Информация о событиях (даты, площадки, описания) получена из открытых источников и может содержать неточности. Мы не несём ответственности за точность, полноту или актуальность предоставленного контента.",
            copyright: "Авторское право",
            copyright_text: "Все тексты на этом сайте сгенерированы ИИ. Дизайн сайта, код и бренд являются интеллектуальной собственностью оператора. Воспроизведение или распространение этих элементов требует предварительного письменного согласия.",
        },
    }
}

/// Per-language privacy strings. The site sets no cookies and runs no
/// analytics, so the page is short.
struct PrivacyStrings {
    title: &'static str,
    data: &'static str,
    data_text: &'static str,
    subscription: &'static str,
    subscription_text: &'static str,
    rights: &'static str,
    rights_text: &'static str,
}

fn privacy(lang: Lang) -> &'static PrivacyStrings {
    match lang {
        Lang::En => &PrivacyStrings {
            title: "PRIVACY",
            data: "Data we process",
            data_text: "This website sets no cookies and runs no analytics. The hosting provider keeps standard server logs (IP address, requested page, timestamp) for operational security; they are deleted automatically and never evaluated for profiling.",
            subscription: "Subscription",
            subscription_text: "If you subscribe, your email address is stored solely to deliver the digest. It is never shared with third parties. Every mailing contains an unsubscribe link, and unsubscribing removes the address.",
            rights: "Your rights",
            rights_text: "Under the GDPR you may request access to, correction of, or deletion of your personal data at any time. Write to the contact address in the impressum.",
        },
        Lang::De => &PrivacyStrings {
            title: "DATENSCHUTZ",
            data: "Verarbeitete Daten",
            data_text: "Diese Website setzt keine Cookies und verwendet keine Analysedienste. Der Hosting-Anbieter führt übliche Server-Logs (IP-Adresse, aufgerufene Seite, Zeitstempel) zur Betriebssicherheit; sie werden automatisch gelöscht und nicht zur Profilbildung ausgewertet.",
            subscription: "Abonnement",
            subscription_text: "Wenn Sie abonnieren, wird Ihre E-Mail-Adresse ausschließlich für den Versand des Digests gespeichert. Sie wird nicht an Dritte weitergegeben. Jede Aussendung enthält einen Abmeldelink; mit der Abmeldung wird die Adresse entfernt.",
            rights: "Ihre Rechte",
            rights_text: "Nach der DSGVO können Sie jederzeit Auskunft über Ihre personenbezogenen Daten sowie deren Berichtigung oder Löschung verlangen. Wenden Sie sich an die Kontaktadresse im Impressum.",
        },
        Lang::Ru => &PrivacyStrings {
            title: "КОНФИДЕНЦИАЛЬНОСТЬ",
            data: "Какие данные обрабатываются",
            data_text: "Сайт не использует cookies и системы аналитики. Хостинг-провайдер ведёт стандартные серверные логи (IP-адрес, запрошенная страница, время) для безопасности; они удаляются автоматически и не используются для профилирования.",
            subscription: "Подписка",
            subscription_text: "При подписке ваш email хранится исключительно для доставки дайджеста и не передаётся третьим лицам. В каждом письме есть ссылка для отписки; после отписки адрес удаляется.",
            rights: "Ваши права",
            rights_text: "Согласно GDPR вы можете в любой момент запросить доступ к своим персональным данным, их исправление или удаление. Пишите на контактный адрес в Impressum.",
        },
    }
}

fn write_legal_section(body: &mut String, heading: &str, text: &str, lang: Lang) {
    let _ = write!(
        body,
        "<section>\n<h2>{}</h2>\n<p>{}</p>\n</section>\n",
        escape(heading),
        typograph(&escape(text), lang),
    );
}

pub fn render_impressum(ctx: &RenderCtx, lang: Lang) -> (UrlPath, String) {
    let t = legal(lang);
    let info = &ctx.config.site.info;

    let mut body = String::with_capacity(4 * 1024);
    let _ = write!(
        body,
        concat!(
            "<div class=\"prose-page legal-page\">\n",
            "<h1>IMPRESSUM</h1>\n",
            "<section>\n<h2>{responsible}</h2>\n",
            "<p>{author}<br>{city}</p>\n</section>\n",
            "<section>\n<h2>{contact}</h2>\n",
            "<p><a href=\"mailto:{email}\">{email}</a></p>\n</section>\n"
        ),
        responsible = escape(t.responsible),
        author = escape(&info.author),
        city = escape(t.city),
        contact = escape(t.contact),
        email = escape_attr(&info.email),
    );
    write_legal_section(
        &mut body,
        t.disclaimer,
        &format!("{} {}", info.title, t.disclaimer_text),
        lang,
    );
    write_legal_section(&mut body, t.copyright, t.copyright_text, lang);
    body.push_str("</div>\n");

    let page = Page {
        lang,
        title: format!("Impressum — {}", info.title),
        description: format!("Impressum — {}", info.title),
        route: UrlPath::from_page(&format!("/{lang}/impressum")),
        alternates: Page::uniform_alternates("impressum"),
        og_type: "website",
        published: None,
        jsonld: None,
        body,
    };
    (page.route.clone(), layout::shell(ctx, &page))
}

pub fn render_privacy(ctx: &RenderCtx, lang: Lang) -> (UrlPath, String) {
    let t = privacy(lang);

    let mut body = String::with_capacity(4 * 1024);
    let _ = write!(
        body,
        "<div class=\"prose-page legal-page\">\n<h1>{}</h1>\n",
        escape(t.title)
    );
    write_legal_section(&mut body, t.data, t.data_text, lang);
    write_legal_section(&mut body, t.subscription, t.subscription_text, lang);
    write_legal_section(&mut body, t.rights, t.rights_text, lang);
    body.push_str("</div>\n");

    let page = Page {
        lang,
        title: format!("Privacy — {}", ctx.config.site.info.title),
        description: format!(
            "Privacy policy for {} — how we handle your data.",
            ctx.config.site.info.title
        ),
        route: UrlPath::from_page(&format!("/{lang}/privacy")),
        alternates: Page::uniform_alternates("privacy"),
        og_type: "website",
        published: None,
        jsonld: None,
        body,
    };
    (page.route.clone(), layout::shell(ctx, &page))
}

/// The single `404.html` static hosts serve for unknown routes. Written
/// in the default language since the requested path names no language.
pub fn render_not_found(ctx: &RenderCtx) -> (UrlPath, String) {
    let lang = DEFAULT_LANG;
    let t = ui(lang);

    let body = format!(
        concat!(
            "<div class=\"not-found\">\n",
            "<h1>{not_found}</h1>\n",
            "<a href=\"/{lang}/\">← {back_home}</a>\n",
            "</div>\n"
        ),
        not_found = escape(t.not_found),
        lang = lang,
        back_home = escape(t.back_home),
    );

    let page = Page {
        lang,
        title: format!("404 — {}", ctx.config.site.info.title),
        description: t.not_found.to_string(),
        route: UrlPath::from_file("/404.html"),
        alternates: Vec::new(),
        og_type: "website",
        published: None,
        jsonld: None,
        body,
    };
    (page.route.clone(), layout::shell(ctx, &page))
}

/// Meta-refresh stub at `/` pointing browsers at the default language.
/// Real language negotiation happens at the host level when available;
/// this is the fallback that always works.
pub fn render_root_redirect() -> (UrlPath, String) {
    let target = format!("/{DEFAULT_LANG}/");
    let html = REDIRECT_HTML.render(&RedirectVars {
        target_url: &target,
    });
    (UrlPath::from_page("/"), html)
}
