//! Deterministic generative artwork for event pages.
//!
//! Every event gets a unique abstract composition derived from its id
//! and title, tinted with its category color. No image assets are
//! involved: the pipeline is seed string -> integer sequence -> shape
//! list -> inline SVG, and every step is pure.
//!
//! | Module     | Description                                   |
//! |------------|-----------------------------------------------|
//! | `sequence` | Seeded hash sequence (the randomness source)  |
//! | `compose`  | Maps a sequence onto the fixed shape layout   |
//! | `svg`      | Serializes a composition to an inline `<svg>` |

mod compose;
mod sequence;
mod svg;

pub use compose::{compose, Artwork, Shape, VIEW_BOX};
pub use sequence::seeded_sequence;

/// Render the artwork for a seed and accent color straight to SVG.
pub fn artwork_svg(seed: &str, color: &str) -> String {
    svg::render(&compose(seed, color))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artwork_svg_end_to_end() {
        let svg = artwork_svg("event42Title", "#B91C1C");
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("#B91C1C"));
        assert_eq!(svg, artwork_svg("event42Title", "#B91C1C"));
        assert_ne!(svg, artwork_svg("event43Title", "#B91C1C"));
    }
}
