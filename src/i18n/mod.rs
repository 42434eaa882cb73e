//! Localization: languages, UI strings, typography, date formatting.
//!
//! The site is trilingual. Every page exists (at most) once per
//! language, URLs carry the language as their first segment, and all
//! reader-facing strings come from the tables in [`translations`].
//!
//! | Module         | Description                                    |
//! |----------------|------------------------------------------------|
//! | `translations` | Per-language UI strings and category labels    |
//! | `typography`   | Non-breaking-space rules for rendered text     |
//! | `dates`        | Locale date formatting, reading time, cutoffs  |

use serde::{Deserialize, Serialize};
use std::fmt;

mod dates;
mod translations;
mod typography;

pub use dates::{format_date, is_date_past, reading_time};
pub use translations::{category_label, ui, UiStrings};
pub use typography::{typograph, NBSP};

/// Site language. URLs, feeds and content files carry the two-letter
/// code in lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    En,
    De,
    Ru,
}

/// All site languages, in canonical order (also the hreflang order).
pub const LANGUAGES: [Lang; 3] = [Lang::En, Lang::De, Lang::Ru];

/// Language used for the bare `/` redirect and as fallback.
pub const DEFAULT_LANG: Lang = Lang::En;

impl Lang {
    /// Two-letter lowercase code, as used in URLs and data files.
    pub fn as_str(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::De => "de",
            Lang::Ru => "ru",
        }
    }

    /// BCP 47 locale tag used for date formatting and HTML `lang`.
    pub fn locale(self) -> &'static str {
        match self {
            Lang::En => "en-GB",
            Lang::De => "de-DE",
            Lang::Ru => "ru-RU",
        }
    }

    /// Parse a two-letter code. Returns `None` for anything else.
    pub fn parse(code: &str) -> Option<Lang> {
        match code {
            "en" => Some(Lang::En),
            "de" => Some(Lang::De),
            "ru" => Some(Lang::Ru),
            _ => None,
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for Lang {
    fn default() -> Self {
        DEFAULT_LANG
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        for lang in LANGUAGES {
            assert_eq!(Lang::parse(lang.as_str()), Some(lang));
        }
        assert_eq!(Lang::parse("fr"), None);
        assert_eq!(Lang::parse("EN"), None);
        assert_eq!(Lang::parse(""), None);
    }

    #[test]
    fn test_serde_codes() {
        let lang: Lang = serde_json::from_str("\"ru\"").unwrap();
        assert_eq!(lang, Lang::Ru);
        assert_eq!(serde_json::to_string(&Lang::De).unwrap(), "\"de\"");
        assert!(serde_json::from_str::<Lang>("\"uk\"").is_err());
    }

    #[test]
    fn test_locales() {
        assert_eq!(Lang::En.locale(), "en-GB");
        assert_eq!(Lang::De.locale(), "de-DE");
        assert_eq!(Lang::Ru.locale(), "ru-RU");
    }
}
