//! Non-breaking-space typography for rendered text.
//!
//! Three families of rules, applied in order:
//!
//! 1. A short word (preposition, conjunction, article) at a line break
//!    reads badly, so the space AFTER a short word becomes `U+00A0`.
//!    A word only counts when preceded by whitespace or start of text;
//!    matching is case-insensitive and the word's own casing survives.
//! 2. Spaces around an em dash become non-breaking so the dash stays
//!    glued to its neighbors.
//! 3. A space after `«` or before `»` becomes non-breaking.
//!
//! Chains work because `U+00A0` itself counts as whitespace for rule 1,
//! so "и о у нас" glues all the way through.

use super::Lang;
use regex::Regex;
use std::sync::LazyLock;

/// No-break space inserted by [`typograph`].
pub const NBSP: char = '\u{a0}';

const SHORT_WORDS_EN: &[&str] = &[
    "a", "an", "the", "in", "on", "at", "to", "of", "by", "is", "it", "or", "and", "but", "no",
    "if",
];

const SHORT_WORDS_DE: &[&str] = &[
    "in", "an", "am", "im", "zu", "um", "ob", "und", "der", "die", "das", "den", "dem", "des",
    "ein", "vor",
];

const SHORT_WORDS_RU: &[&str] = &[
    "в", "на", "к", "с", "и", "о", "у", "а", "не", "ни", "из", "за", "по", "до", "от", "ко", "со",
    "но", "же", "ли", "бы", "то", "ее", "её",
];

fn word_regex(words: &[&str]) -> Regex {
    // Trailing space is part of the match; the left boundary is checked
    // against the source text to keep adjacent matches independent.
    Regex::new(&format!(r"(?i)(?:{}) ", words.join("|"))).unwrap()
}

fn short_words(lang: Lang) -> &'static Regex {
    static RE_EN: LazyLock<Regex> = LazyLock::new(|| word_regex(SHORT_WORDS_EN));
    static RE_DE: LazyLock<Regex> = LazyLock::new(|| word_regex(SHORT_WORDS_DE));
    static RE_RU: LazyLock<Regex> = LazyLock::new(|| word_regex(SHORT_WORDS_RU));
    match lang {
        Lang::En => &RE_EN,
        Lang::De => &RE_DE,
        Lang::Ru => &RE_RU,
    }
}

/// Apply the language's non-breaking-space rules to a piece of text.
pub fn typograph(text: &str, lang: Lang) -> String {
    let re = short_words(lang);
    let mut out = String::with_capacity(text.len() + 16);
    let mut last = 0;
    for m in re.find_iter(text) {
        let at_boundary = m.start() == 0
            || text[..m.start()]
                .chars()
                .next_back()
                .is_some_and(char::is_whitespace);
        if !at_boundary {
            continue;
        }
        // Matched word verbatim, then NBSP instead of the space.
        out.push_str(&text[last..m.end() - 1]);
        out.push(NBSP);
        last = m.end();
    }
    out.push_str(&text[last..]);

    out.replace(" — ", "\u{a0}—\u{a0}")
        .replace(" —", "\u{a0}—")
        .replace("— ", "—\u{a0}")
        .replace("« ", "«\u{a0}")
        .replace(" »", "\u{a0}»")
}
