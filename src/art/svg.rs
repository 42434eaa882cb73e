//! SVG serialization for composed artwork.
//!
//! Produces a single inline `<svg>` element ready to drop into page
//! markup. Numbers use shortest round-trip formatting, so whole
//! coordinates render without a fractional part.

use super::compose::{Artwork, Shape, VIEW_BOX};

/// Serialize an artwork into an inline SVG string.
///
/// The accent color is a `#rrggbb` literal from the category palette
/// and the geometry is numeric, so no attribute escaping is needed.
pub fn render(artwork: &Artwork) -> String {
    let mut svg = String::with_capacity(2048);
    svg.push_str(&format!(
        r#"<svg viewBox="{VIEW_BOX}" class="gen-art" preserveAspectRatio="xMidYMid meet" overflow="visible">"#
    ));

    let color = artwork.color.as_str();
    for shape in &artwork.shapes {
        match shape {
            Shape::StrokedCircle {
                cx,
                cy,
                r,
                stroke_width,
                opacity,
            } => svg.push_str(&format!(
                r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="none" stroke="{color}" stroke-width="{stroke_width}" opacity="{opacity}"/>"#
            )),
            Shape::FilledCircle { cx, cy, r, opacity } | Shape::Dot { cx, cy, r, opacity } => {
                svg.push_str(&format!(
                    r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{color}" opacity="{opacity}"/>"#
                ));
            }
            Shape::Line {
                x1,
                y1,
                x2,
                y2,
                stroke_width,
                opacity,
            } => svg.push_str(&format!(
                r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{color}" stroke-width="{stroke_width}" opacity="{opacity}"/>"#
            )),
            Shape::Polygon {
                points,
                stroke_width,
                fill_opacity,
                stroke_opacity,
            } => {
                let pts = points
                    .iter()
                    .map(|(x, y)| format!("{x},{y}"))
                    .collect::<Vec<_>>()
                    .join(" ");
                svg.push_str(&format!(
                    r#"<polygon points="{pts}" fill="{color}" stroke="{color}" stroke-width="{stroke_width}" fill-opacity="{fill_opacity}" stroke-opacity="{stroke_opacity}"/>"#
                ));
            }
            Shape::Arc {
                x1,
                y1,
                x2,
                y2,
                r,
                stroke_width,
                opacity,
            } => svg.push_str(&format!(
                r#"<path d="M {x1} {y1} A {r} {r} 0 0 1 {x2} {y2}" fill="none" stroke="{color}" stroke-width="{stroke_width}" opacity="{opacity}"/>"#
            )),
        }
    }

    svg.push_str("</svg>");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::art::compose::compose;

    #[test]
    fn test_svg_wrapper() {
        let svg = render(&compose("event42Title", "#B91C1C"));
        assert!(svg.starts_with(r#"<svg viewBox="-20 -20 440 440""#));
        assert!(svg.contains(r#"class="gen-art""#));
        assert!(svg.contains(r#"preserveAspectRatio="xMidYMid meet""#));
        assert!(svg.contains(r#"overflow="visible""#));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_element_counts() {
        let art = compose("event42Title", "#B91C1C");
        let svg = render(&art);

        let circles = svg.matches("<circle").count();
        let lines = svg.matches("<line").count();
        let paths = svg.matches("<path").count();
        let polygons = svg.matches("<polygon").count();

        // 1 outlined + 2 filled + dot cluster
        assert!(circles >= 9 && circles <= 18, "{circles} circles");
        assert!((3..=6).contains(&lines), "{lines} lines");
        assert_eq!(paths, 2);
        assert_eq!(polygons, 1);
        assert_eq!(
            circles + lines + paths + polygons,
            art.shapes.len(),
            "every shape serializes to exactly one element"
        );
    }

    #[test]
    fn test_arc_path_shape() {
        let art = Artwork {
            color: "#1A6B3C".into(),
            shapes: vec![Shape::Arc {
                x1: -30,
                y1: 120,
                x2: 210,
                y2: 120,
                r: 120,
                stroke_width: 7,
                opacity: 0.3,
            }],
        };
        let svg = render(&art);
        assert!(svg.contains(r#"d="M -30 120 A 120 120 0 0 1 210 120""#));
        assert!(svg.contains(r#"opacity="0.3""#));
    }

    #[test]
    fn test_opacity_formatting() {
        let svg = render(&compose("x", "#4A1942"));
        assert!(svg.contains(r#"opacity="0.4""#));
        assert!(svg.contains(r#"fill-opacity="0.12""#));
        assert!(!svg.contains("0.40000"));
    }

    #[test]
    fn test_color_applied_to_fill_and_stroke() {
        let svg = render(&compose("seed", "#92600A"));
        assert!(svg.contains(r##"stroke="#92600A""##));
        assert!(svg.contains(r##"fill="#92600A""##));
        // The outlined circle and both arcs stay unfilled
        assert_eq!(svg.matches(r#"fill="none""#).count(), 3);
    }

    #[test]
    fn test_deterministic_output() {
        let a = render(&compose("Ночь музеев12", "#6B2164"));
        let b = render(&compose("Ночь музеев12", "#6B2164"));
        assert_eq!(a, b);
    }
}
