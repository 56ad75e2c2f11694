//! Surface fracture lines
//!
//! Rough crusts crack. Each fracture runs between two random points on the
//! sphere, sampled at 13 steps, projected orthographically onto the canvas
//! and rotated by the axial tilt. Samples on the far hemisphere are dropped,
//! so a fracture can be partly visible or vanish entirely.

use log::trace;
use nalgebra::{Point2, Rotation2, Vector2};
use serde::Serialize;

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::path::{CANVAS_CENTER, svg_polyline};
use crate::stream::Stream;

/// Crusts at or below this roughness show no fractures
pub const MIN_FRACTURE_ROUGHNESS: f64 = 0.5;

/// Fracture attempts per unit of roughness
const FRACTURES_PER_ROUGHNESS: f64 = 8.0;

/// Segments per fracture (samples = segments + 1)
const SEGMENTS: usize = 12;

/// Projection radius of the planet disc
const SPHERE_RADIUS: f64 = 450.0;

/// Samples with depth at or below this are behind the planet
const VISIBLE_DEPTH: f64 = -100.0;

/// Longitude range of the first endpoint, radians
const LONGITUDE_RANGE: f64 = 6.28;

/// One projected fracture line. May hold no points.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi))]
pub struct GeologyPath {
    pub points: Vec<Point2<f64>>,
}

impl GeologyPath {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Open SVG polyline; empty paths give an empty string
    pub fn to_svg_path(&self) -> String {
        svg_polyline(&self.points, false)
    }
}

/// Projects a (lat, lon) pair in radians onto the tilted canvas.
/// Returns `None` when the point faces away from the viewer.
fn project(lat: f64, lon: f64, tilt: &Rotation2<f64>) -> Option<Point2<f64>> {
    let x = SPHERE_RADIUS * lat.cos() * lon.sin();
    let y = SPHERE_RADIUS * lat.sin();
    let z = SPHERE_RADIUS * lat.cos() * lon.cos();
    if z <= VISIBLE_DEPTH {
        return None;
    }
    let rotated = tilt * Vector2::new(x, y);
    Some(Point2::new(rotated.x + CANVAS_CENTER, -rotated.y + CANVAS_CENTER))
}

/// Generates `ceil(8 * roughness)` fracture paths when `roughness > 0.5`,
/// otherwise none. Four draws per path.
pub fn generate_geology_paths(stream: &mut Stream, roughness: f64, tilt_deg: f64) -> Vec<GeologyPath> {
    if roughness <= MIN_FRACTURE_ROUGHNESS {
        return Vec::new();
    }

    let count = (FRACTURES_PER_ROUGHNESS * roughness).ceil() as usize;
    let tilt = Rotation2::new(tilt_deg.to_radians());

    let paths: Vec<GeologyPath> = (0..count)
        .map(|_| {
            let lat1 = stream.next_unit() * 2.0 - 1.0;
            let lon1 = stream.next_unit() * LONGITUDE_RANGE;
            let lat2 = stream.next_unit() * 2.0 - 1.0;
            let lon2 = lon1 + stream.next_unit();

            let points = (0..=SEGMENTS)
                .filter_map(|t| {
                    let step = t as f64 / SEGMENTS as f64;
                    project(
                        lat1 + (lat2 - lat1) * step,
                        lon1 + (lon2 - lon1) * step,
                        &tilt,
                    )
                })
                .collect();
            GeologyPath { points }
        })
        .collect();

    trace!(
        "geology: {} fractures, {} visible",
        paths.len(),
        paths.iter().filter(|p| !p.is_empty()).count()
    );
    paths
}
