//! Locale-aware date presentation and reading-time math.

use super::Lang;
use crate::utils::date::DateTimeUtc;

const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const MONTHS_DE: [&str; 12] = [
    "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.", "Nov.",
    "Dez.",
];

const MONTHS_RU: [&str; 12] = [
    "янв.", "февр.", "мар.", "апр.", "мая", "июн.", "июл.", "авг.", "сент.", "окт.", "нояб.",
    "дек.",
];

/// Format a `YYYY-MM-DD` date the way the locale's short-month style
/// renders it: `15 Jun 2025` (en-GB), `15. Juni 2025` (de-DE),
/// `15 июн. 2025 г.` (ru-RU).
///
/// Anything that is not a valid plain date comes back unchanged, so a
/// malformed value stays visible instead of vanishing.
pub fn format_date(lang: Lang, date: &str) -> String {
    if date.len() != 10 {
        return date.to_string();
    }
    let Some(d) = DateTimeUtc::parse(date) else {
        return date.to_string();
    };
    let month = (d.month - 1) as usize;
    match lang {
        Lang::En => format!("{} {} {}", d.day, MONTHS_EN[month], d.year),
        Lang::De => format!("{}. {} {}", d.day, MONTHS_DE[month], d.year),
        Lang::Ru => format!("{} {} {} г.", d.day, MONTHS_RU[month], d.year),
    }
}

/// Reading time in minutes at 200 words per minute, rounded half-up,
/// never below one. Missing or nonsensical word counts read as one
/// minute.
pub fn reading_time(word_count: Option<i64>) -> u32 {
    match word_count {
        Some(wc) if wc > 0 => ((wc + 100) / 200).max(1) as u32,
        _ => 1,
    }
}

/// Whether a `YYYY-MM-DD` date has fully passed by `now`.
///
/// An event stays current through its entire day: the comparison point
/// is 23:59:59 of the given date. Unparseable dates are never past.
pub fn is_date_past(date: &str, now: &DateTimeUtc) -> bool {
    match DateTimeUtc::parse(date) {
        Some(d) => d.end_of_day() < *now,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_en() {
        assert_eq!(format_date(Lang::En, "2025-06-15"), "15 Jun 2025");
        assert_eq!(format_date(Lang::En, "2025-01-05"), "5 Jan 2025");
        assert_eq!(format_date(Lang::En, "2024-12-31"), "31 Dec 2024");
    }

    #[test]
    fn test_format_date_de() {
        assert_eq!(format_date(Lang::De, "2025-06-15"), "15. Juni 2025");
        assert_eq!(format_date(Lang::De, "2025-03-01"), "1. März 2025");
        assert_eq!(format_date(Lang::De, "2025-09-07"), "7. Sept. 2025");
    }

    #[test]
    fn test_format_date_ru() {
        assert_eq!(format_date(Lang::Ru, "2025-06-15"), "15 июн. 2025 г.");
        assert_eq!(format_date(Lang::Ru, "2025-05-09"), "9 мая 2025 г.");
        assert_eq!(format_date(Lang::Ru, "2025-02-23"), "23 февр. 2025 г.");
    }

    #[test]
    fn test_format_date_invalid_passthrough() {
        assert_eq!(format_date(Lang::En, "not-a-date"), "not-a-date");
        assert_eq!(format_date(Lang::En, "2025-02-30"), "2025-02-30");
        assert_eq!(format_date(Lang::En, ""), "");
        // Timestamps are not plain dates
        assert_eq!(
            format_date(Lang::En, "2025-06-15T14:30:45"),
            "2025-06-15T14:30:45"
        );
    }

    #[test]
    fn test_reading_time() {
        assert_eq!(reading_time(None), 1);
        assert_eq!(reading_time(Some(0)), 1);
        assert_eq!(reading_time(Some(-5)), 1);
        assert_eq!(reading_time(Some(1)), 1);
        assert_eq!(reading_time(Some(200)), 1);
        assert_eq!(reading_time(Some(201)), 1);
        assert_eq!(reading_time(Some(299)), 1);
        assert_eq!(reading_time(Some(300)), 2);
        assert_eq!(reading_time(Some(450)), 2);
        assert_eq!(reading_time(Some(500)), 3);
        assert_eq!(reading_time(Some(1234)), 6);
    }

    #[test]
    fn test_is_date_past() {
        let now = DateTimeUtc::new(2025, 6, 15, 12, 0, 0);
        assert!(is_date_past("2025-06-14", &now));
        assert!(is_date_past("2020-01-01", &now));
        // The event's own day is not past until it ends
        assert!(!is_date_past("2025-06-15", &now));
        assert!(!is_date_past("2025-06-16", &now));
        assert!(!is_date_past("garbage", &now));
        assert!(!is_date_past("", &now));
    }

    #[test]
    fn test_is_date_past_day_boundary() {
        let last_second = DateTimeUtc::new(2025, 6, 15, 23, 59, 59);
        assert!(!is_date_past("2025-06-15", &last_second));

        let midnight_after = DateTimeUtc::new(2025, 6, 16, 0, 0, 0);
        assert!(is_date_past("2025-06-15", &midnight_after));
    }
}
