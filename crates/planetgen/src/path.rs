//! Canvas geometry shared by the vector generators
//!
//! All generators draw on a 1000×1000 canvas with the planet centered at
//! (500, 500). Points are nalgebra `Point2<f64>`; serialization to SVG path
//! data is provided for callers that render paths directly.

use std::fmt::Write;

use nalgebra::{Point2, Vector2};

/// Canvas coordinate of the planet center on both axes
pub const CANVAS_CENTER: f64 = 500.0;

/// The planet center as a point
pub fn center() -> Point2<f64> {
    Point2::new(CANVAS_CENTER, CANVAS_CENTER)
}

/// Unit normal of the segment `prev → next`, rotated a quarter turn
/// counter-clockwise. Degenerate segments give a zero vector.
pub fn unit_normal(prev: &Point2<f64>, next: &Point2<f64>) -> Vector2<f64> {
    let d = next - prev;
    let normal = Vector2::new(-d.y, d.x);
    let len = normal.norm();
    if len > 0.0 { normal / len } else { normal }
}

/// Normal at `index` of a polyline, using its neighbours (clamped at the ends)
pub fn normal_at(points: &[Point2<f64>], index: usize) -> Vector2<f64> {
    let last = points.len().saturating_sub(1);
    let prev = &points[index.saturating_sub(1)];
    let next = &points[(index + 1).min(last)];
    unit_normal(prev, next)
}

/// SVG path data: move to the first point, line to the rest, one decimal.
/// `closed` appends `Z`. An empty slice yields an empty string.
pub fn svg_polyline(points: &[Point2<f64>], closed: bool) -> String {
    let mut d = String::new();
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            d.push(' ');
        }
        let cmd = if i == 0 { 'M' } else { 'L' };
        // Writing to a String cannot fail
        let _ = write!(d, "{} {:.1} {:.1}", cmd, p.x, p.y);
    }
    if closed && !d.is_empty() {
        d.push_str(" Z");
    }
    d
}
