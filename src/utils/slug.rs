//! URL slug generation.
//!
//! Titles arrive in three scripts (Latin, German umlauts, Cyrillic).
//! `slugify` folds them into lowercase ASCII slugs: transliterate via
//! deunicode, collapse every non-alphanumeric run into a single dash,
//! trim dashes at both ends.

use deunicode::deunicode;

/// Convert a title into a URL slug.
///
/// Returns an empty string if nothing transliterable remains; callers
/// fall back to an id-based slug in that case.
///
/// # Example
/// ```ignore
/// assert_eq!(slugify("Berlin: Nacht der Museen!"), "berlin-nacht-der-museen");
/// ```
pub fn slugify(text: &str) -> String {
    let ascii = deunicode(text).to_lowercase();

    let mut slug = String::with_capacity(ascii.len());
    let mut prev_dash = true; // suppress leading dash
    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
            prev_dash = false;
        } else if !prev_dash {
            slug.push('-');
            prev_dash = true;
        }
    }

    // Trim trailing dash from a non-alphanumeric tail
    if slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_ascii() {
        assert_eq!(slugify("Hello World"), "hello-world");
    }

    #[test]
    fn test_slugify_punctuation_runs() {
        assert_eq!(
            slugify("Berlin: Nacht der Museen!"),
            "berlin-nacht-der-museen"
        );
        assert_eq!(slugify("a -- b"), "a-b");
    }

    #[test]
    fn test_slugify_german() {
        assert_eq!(slugify("Über die Brücke"), "uber-die-brucke");
    }

    #[test]
    fn test_slugify_cyrillic() {
        let slug = slugify("Ночь музеев");
        assert!(!slug.is_empty());
        assert!(slug.is_ascii());
        assert!(slug.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'));
        assert!(!slug.starts_with('-') && !slug.ends_with('-'));
    }

    #[test]
    fn test_slugify_leading_trailing() {
        assert_eq!(slugify("  --hello--  "), "hello");
    }

    #[test]
    fn test_slugify_empty_input() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_slugify_numbers() {
        assert_eq!(slugify("Top 10 Events 2025"), "top-10-events-2025");
    }
}
