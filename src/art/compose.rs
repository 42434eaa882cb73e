//! Shape composition for generative artwork.
//!
//! Maps a seeded integer sequence onto a fixed arrangement of drawable
//! primitives. The arrangement is part of the site's visual identity and
//! never varies: one outlined circle, two solid circles, a fan of lines,
//! one polygon, two half-circle arcs, and a cluster of dots, always in
//! that order. Only the parameters move with the seed.
//!
//! Canvas is 440x440 with a 20-unit bleed on every side
//! (viewBox `-20 -20 440 440`); parameter ranges keep shape centers
//! inside the visible area while strokes may overflow into the bleed.

use super::sequence::seeded_sequence;

/// Canvas viewBox: `min-x min-y width height`.
pub const VIEW_BOX: &str = "-20 -20 440 440";

/// One drawable primitive. All stroke/fill colors come from the
/// artwork's single accent color.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Outlined circle, no fill.
    StrokedCircle {
        cx: u32,
        cy: u32,
        r: u32,
        stroke_width: u32,
        opacity: f32,
    },
    /// Solid circle.
    FilledCircle { cx: u32, cy: u32, r: u32, opacity: f32 },
    /// Straight stroked segment.
    Line {
        x1: u32,
        y1: u32,
        x2: u32,
        y2: u32,
        stroke_width: u32,
        opacity: f32,
    },
    /// Regular polygon, filled and outlined.
    Polygon {
        points: Vec<(f64, f64)>,
        stroke_width: u32,
        fill_opacity: f32,
        stroke_opacity: f32,
    },
    /// Half-circle stroke from (x1, y1) to (x2, y2) with radius r.
    /// Endpoints may reach into the bleed area, hence signed.
    Arc {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        r: u32,
        stroke_width: u32,
        opacity: f32,
    },
    /// Small solid circle from the dot cluster.
    Dot { cx: u32, cy: u32, r: u32, opacity: f32 },
}

/// A composed artwork: an accent color plus an ordered shape list.
#[derive(Debug, Clone, PartialEq)]
pub struct Artwork {
    pub color: String,
    pub shapes: Vec<Shape>,
}

/// Compose the artwork for a seed and accent color.
///
/// Pure function: identical inputs give a structurally identical
/// artwork. The seed is typically `event_id + title`, the color the
/// event category's accent.
pub fn compose(seed: &str, color: &str) -> Artwork {
    let n = seeded_sequence(seed);
    let len = n.len();
    let mut shapes = Vec::with_capacity(24);

    // Large outlined circle
    shapes.push(Shape::StrokedCircle {
        cx: n[0] % 300 + 50,
        cy: n[1] % 300 + 50,
        r: n[2] % 130 + 80,
        stroke_width: n[3] % 12 + 8,
        opacity: 0.4,
    });

    // Big filled circle
    shapes.push(Shape::FilledCircle {
        cx: n[4] % 350 + 25,
        cy: n[5] % 350 + 25,
        r: n[6] % 80 + 50,
        opacity: 0.25,
    });

    // Second filled circle
    shapes.push(Shape::FilledCircle {
        cx: n[38] % 300 + 50,
        cy: n[39] % 300 + 50,
        r: n[40] % 70 + 35,
        opacity: 0.18,
    });

    // Diagonal lines
    let line_count = n[7] % 4 + 3;
    for i in 0..line_count as usize {
        let idx = 8 + i * 3;
        shapes.push(Shape::Line {
            x1: n[idx % len] % 400,
            y1: n[(idx + 1) % len] % 400,
            x2: n[(idx + 2) % len] % 400,
            y2: n[(idx + 3) % len] % 400,
            stroke_width: n[(idx + 4) % len] % 8 + 4,
            opacity: 0.3,
        });
    }

    // Polygon
    let sides = n[20] % 3 + 3;
    let cx = f64::from(n[21] % 200 + 100);
    let cy = f64::from(n[22] % 200 + 100);
    let r = f64::from(n[23] % 100 + 60);
    let rot = f64::from(n[24] % 360);
    let points = (0..sides)
        .map(|i| {
            let a = (std::f64::consts::PI * 2.0 * f64::from(i)) / f64::from(sides)
                + rot * std::f64::consts::PI / 180.0;
            (cx + r * a.cos(), cy + r * a.sin())
        })
        .collect();
    shapes.push(Shape::Polygon {
        points,
        stroke_width: 6,
        fill_opacity: 0.12,
        stroke_opacity: 0.35,
    });

    // Horizontal arc (half circle opening downward)
    let ax = (n[25] % 300 + 50) as i32;
    let ay = (n[26] % 300 + 50) as i32;
    let ar = n[27] % 120 + 50;
    shapes.push(Shape::Arc {
        x1: ax - ar as i32,
        y1: ay,
        x2: ax + ar as i32,
        y2: ay,
        r: ar,
        stroke_width: n[28] % 10 + 6,
        opacity: 0.3,
    });

    // Vertical arc (half circle opening leftward)
    let ax2 = (n[41] % 300 + 50) as i32;
    let ay2 = (n[42] % 300 + 50) as i32;
    let ar2 = n[43] % 80 + 40;
    shapes.push(Shape::Arc {
        x1: ax2,
        y1: ay2 - ar2 as i32,
        x2: ax2,
        y2: ay2 + ar2 as i32,
        r: ar2,
        stroke_width: n[44] % 8 + 4,
        opacity: 0.25,
    });

    // Dot cluster
    let dot_count = n[29] % 10 + 6;
    for i in 0..dot_count as usize {
        let idx = 30 + i;
        shapes.push(Shape::Dot {
            cx: n[idx % len] % 380 + 10,
            cy: n[(idx + 1) % len] % 380 + 10,
            r: n[(idx + 2) % len] % 10 + 5,
            opacity: 0.35,
        });
    }

    Artwork {
        color: color.to_string(),
        shapes,
    }
}
