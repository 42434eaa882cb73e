//! Event category palette.

/// Known category slugs, in filter-bar order.
pub const CATEGORIES: [&str; 8] = [
    "music",
    "cinema",
    "theater",
    "exhibition",
    "lecture",
    "festival",
    "performance",
    "club",
];

/// Brand color for a category. Unknown or missing categories fall back
/// to neutral gray.
pub fn category_color(category: Option<&str>) -> &'static str {
    match category {
        Some("music") => "#B91C1C",
        Some("cinema") => "#92600A",
        Some("theater") => "#6B2164",
        Some("exhibition") => "#1A6B3C",
        Some("lecture") => "#1E4D7B",
        Some("festival") => "#9C4A1A",
        Some("performance") => "#2D2D2D",
        Some("club") => "#4A1942",
        _ => "#666666",
    }
}
