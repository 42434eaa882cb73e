//! Reader-facing strings for every site language.
//!
//! The tables are frozen editorial copy. Rendering code reads fields
//! off [`UiStrings`] directly and runs them through
//! [`typograph`](super::typograph) where they land in markup.

use super::Lang;

/// One language's complete UI string set.
pub struct UiStrings {
    pub nothing_yet: &'static str,
    pub date: &'static str,
    pub venue: &'static str,
    pub city: &'static str,
    pub event_link: &'static str,
    pub about: &'static str,
    pub about_title: &'static str,
    pub about_text: [&'static str; 4],
    pub load_more: &'static str,
    pub not_found: &'static str,
    pub back_home: &'static str,
    pub published: &'static str,
    pub min_read: &'static str,
    pub copied: &'static str,
    pub copy_link: &'static str,
    pub we_are_close: &'static str,
    pub period_covered: &'static str,
    pub articles_analyzed: &'static str,
    pub reflections_title: &'static str,
    pub reflections_about: &'static str,
    pub site_description: &'static str,
    pub process_title: &'static str,
    pub process_words: &'static str,
    pub process_sources: &'static str,
    pub process_expanded: &'static str,
    pub process_editor_note: &'static str,
    pub process_show_draft: &'static str,
    pub issue_factual: &'static str,
    pub issue_voice: &'static str,
    pub issue_structure: &'static str,
    pub issue_language: &'static str,
    pub issue_depth: &'static str,
    pub subscribe_title: &'static str,
    pub subscribe_text: &'static str,
    pub subscribe_placeholder: &'static str,
    pub subscribe_button: &'static str,
    pub subscribe_success: &'static str,
}

static EN: UiStrings = UiStrings {
    nothing_yet: "NOTHING YET",
    date: "Date",
    venue: "Venue",
    city: "City",
    event_link: "Event link",
    about: "About",
    about_title: "WHAT IS THIS",
    about_text: [
        "PTYTSCH is an autonomous cultural digest powered by artificial intelligence. Every day, AI scouts Berlin's cultural landscape — exhibitions, concerts, performances, lectures, club nights — and selects the single most compelling upcoming event.",
        "Than it writes an original essay: sharp, opinionated, alive to the strange energy of this city.",
        "No editors. No rewritten press releases. Just truth, emotion, and experiments.",
        "The name is a nod to «Птюч» (Ptuch) — the legendary Moscow magazine and club of the 1990s that mixed electronic music, video art, and fashion into a single underground pulse. A brief, unrepeatable flash that proved culture doesn't need permission.",
    ],
    load_more: "more",
    not_found: "NOTHING HERE",
    back_home: "back to PTYTSCH",
    published: "Published",
    min_read: "min read",
    copied: "copied",
    copy_link: "copy link",
    we_are_close: "We are close",
    period_covered: "Period covered",
    articles_analyzed: "articles analyzed",
    reflections_title: "Reflections",
    reflections_about: "From time to time the system steps back and reads its own archive: what it covered, what it missed, which patterns kept returning. These notes are published as written.",
    site_description: "AI-powered daily essays on the most compelling upcoming cultural events in Berlin.",
    process_title: "How this was written",
    process_words: "words",
    process_sources: "sources",
    process_expanded: "Expanded after review",
    process_editor_note: "Editor's notes, unedited",
    process_show_draft: "show first draft",
    issue_factual: "factual",
    issue_voice: "voice",
    issue_structure: "structure",
    issue_language: "language",
    issue_depth: "depth",
    subscribe_title: "SUBSCRIBE",
    subscribe_text: "One essay a day about Berlin culture. No noise.",
    subscribe_placeholder: "your@email",
    subscribe_button: "subscribe",
    subscribe_success: "done",
};

static DE: UiStrings = UiStrings {
    nothing_yet: "NOCH NICHTS",
    date: "Datum",
    venue: "Ort",
    city: "Stadt",
    event_link: "Zum Event",
    about: "Über",
    about_title: "WAS IST DAS",
    about_text: [
        "PTYTSCH ist ein autonomer Kulturdigest, angetrieben von künstlicher Intelligenz. Jeden Tag durchsucht die KI Berlins Kulturlandschaft — Ausstellungen, Konzerte, Performances, Vorträge, Clubnächte — und wählt das eine überzeugendste bevorstehende Ereignis aus.",
        "Dann schreibt sie ein originales Essay: scharf, meinungsstark, lebendig gegenüber der seltsamen Energie dieser Stadt.",
        "Keine Redakteure. Keine umgeschriebenen Pressemitteilungen. Nur Wahrheit, Emotion und Experimente.",
        "Der Name ist eine Verbeugung vor «Птюч» (Ptjutsch) — dem legendären Moskauer Magazin und Club der 1990er, der elektronische Musik, Videokunst und Mode zu einem einzigen unterirdischen Puls verschmolz. Ein kurzer, unwiederholbarer Blitz, der bewies, dass Kultur keine Erlaubnis braucht.",
    ],
    load_more: "mehr",
    not_found: "HIER IST NICHTS",
    back_home: "zurück zu PTYTSCH",
    published: "Veröffentlicht",
    min_read: "Min. Lesezeit",
    copied: "kopiert",
    copy_link: "Link kopieren",
    we_are_close: "Wir sind nah",
    period_covered: "Zeitraum",
    articles_analyzed: "Artikel analysiert",
    reflections_title: "Reflexionen",
    reflections_about: "Von Zeit zu Zeit liest das System sein eigenes Archiv: was es behandelt hat, was fehlte, welche Muster wiederkehren. Diese Notizen erscheinen unverändert.",
    site_description: "KI-gestützte tägliche Essays über die spannendsten kulturellen Veranstaltungen in Berlin.",
    process_title: "Wie dieser Text entstand",
    process_words: "Wörter",
    process_sources: "Quellen",
    process_expanded: "Nach der Kritik erweitert",
    process_editor_note: "Redaktionsnotizen, unbearbeitet",
    process_show_draft: "ersten Entwurf zeigen",
    issue_factual: "Fakten",
    issue_voice: "Ton",
    issue_structure: "Aufbau",
    issue_language: "Sprache",
    issue_depth: "Tiefe",
    subscribe_title: "ABONNIEREN",
    subscribe_text: "Ein Essay pro Tag über Berliner Kultur. Kein Lärm.",
    subscribe_placeholder: "deine@email",
    subscribe_button: "abonnieren",
    subscribe_success: "fertig",
};

static RU: UiStrings = UiStrings {
    nothing_yet: "ПОКА НИЧЕГО",
    date: "Дата",
    venue: "Место",
    city: "Город",
    event_link: "Ссылка",
    about: "О проекте",
    about_title: "ЧТО ЭТО",
    about_text: [
        "PTYTSCH — автономный культурный дайджест на основе искусственного интеллекта. Каждый день ИИ исследует культурный ландшафт Берлина — выставки, концерты, перформансы, лекции, клубные ночи — и выбирает одно самое интересное предстоящее событие.",
        "Затем пишет оригинальное эссе: острое, с позицией, чувствующее странную энергию этого города.",
        "Никаких редакторов. Никаких переписанных пресс-релизов. Только правда, эмоция и эксперименты.",
        "Название — дань уважения «Птюч»: легендарный московский журнал и клуб 90-х, где электронная музыка, видеоарт и мода сплавлялись в один подземный пульс. Короткая, неповторимая вспышка, доказавшая, что культуре не нужно разрешение.",
    ],
    load_more: "больше",
    not_found: "ЗДЕСЬ НИЧЕГО",
    back_home: "назад на PTYTSCH",
    published: "Опубликовано",
    min_read: "мин. чтения",
    copied: "скопировано",
    copy_link: "скопировать ссылку",
    we_are_close: "Мы рядом",
    period_covered: "Период",
    articles_analyzed: "статей проанализировано",
    reflections_title: "Рефлексия",
    reflections_about: "Время от времени система перечитывает собственный архив: о чём писала, что упустила, какие закономерности повторяются. Эти заметки публикуются как есть.",
    site_description: "Ежедневные эссе об интереснейших культурных событиях Берлина, написанные ИИ.",
    process_title: "Как писался этот текст",
    process_words: "слов",
    process_sources: "источников",
    process_expanded: "Расширено после критики",
    process_editor_note: "Заметки редактора, как есть",
    process_show_draft: "показать первый черновик",
    issue_factual: "факты",
    issue_voice: "интонация",
    issue_structure: "структура",
    issue_language: "язык",
    issue_depth: "глубина",
    subscribe_title: "ПОДПИСКА",
    subscribe_text: "Одно эссе в день о культуре Берлина. Без шума.",
    subscribe_placeholder: "ваш@email",
    subscribe_button: "подписаться",
    subscribe_success: "готово",
};

/// The UI string table for a language.
pub fn ui(lang: Lang) -> &'static UiStrings {
    match lang {
        Lang::En => &EN,
        Lang::De => &DE,
        Lang::Ru => &RU,
    }
}

/// Localized label for an event category slug. Unknown slugs come back
/// as-is so new pipeline categories degrade gracefully.
pub fn category_label(lang: Lang, slug: &str) -> &str {
    let label = match (lang, slug) {
        (Lang::En, "music") => "music",
        (Lang::En, "cinema") => "cinema",
        (Lang::En, "theater") => "theater",
        (Lang::En, "exhibition") => "exhibition",
        (Lang::En, "lecture") => "lecture",
        (Lang::En, "festival") => "festival",
        (Lang::En, "performance") => "performance",
        (Lang::En, "club") => "club",
        (Lang::De, "music") => "Musik",
        (Lang::De, "cinema") => "Kino",
        (Lang::De, "theater") => "Theater",
        (Lang::De, "exhibition") => "Ausstellung",
        (Lang::De, "lecture") => "Vortrag",
        (Lang::De, "festival") => "Festival",
        (Lang::De, "performance") => "Performance",
        (Lang::De, "club") => "Club",
        (Lang::Ru, "music") => "музыка",
        (Lang::Ru, "cinema") => "кино",
        (Lang::Ru, "theater") => "театр",
        (Lang::Ru, "exhibition") => "выставка",
        (Lang::Ru, "lecture") => "лекция",
        (Lang::Ru, "festival") => "фестиваль",
        (Lang::Ru, "performance") => "перформанс",
        (Lang::Ru, "club") => "клуб",
        _ => return slug,
    };
    label
}
