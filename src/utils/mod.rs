//! Utility modules shared across the generator.
//!
//! | Module | Purpose                                        |
//! |--------|------------------------------------------------|
//! | `date` | UTC datetime parse/format (RFC 2822, RFC 3339) |
//! | `hash` | FxHash fingerprints for cache busting          |
//! | `html` | HTML entity escaping                           |
//! | `mime` | Content-Type detection for the dev server      |
//! | `path` | Path normalization                             |
//! | `slug` | ASCII slug generation from trilingual titles   |

pub mod date;
pub mod hash;
pub mod html;
pub mod mime;
pub mod path;
pub mod slug;

/// Return "s" suffix for plural counts
///
/// # Examples
///
/// - `plural_s(0)` -> `"s"` (0 files)
/// - `plural_s(1)` -> `""` (1 file)
/// - `plural_s(5)` -> `"s"` (5 files)
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, handling pluralization
///
/// # Examples
///
/// - `plural_count(0, "article")` -> `"0 articles"`
/// - `plural_count(1, "article")` -> `"1 article"`
/// - `plural_count(5, "article")` -> `"5 articles"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}
