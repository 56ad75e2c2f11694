//! Cloud formations
//!
//! Clouds are arranged in latitude clusters. Each cluster has a main
//! formation and a smaller sidecar attached to one end. A formation is a
//! stack of ribbon-like layers built around a drifting spine that follows
//! the curvature of the sphere; each layer is shorter, thinner, darker and
//! pushed further poleward than the one before.

use std::f64::consts::PI;

use log::trace;
use nalgebra::Point2;
use serde::Serialize;

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::color::{Rgb, shift};
use crate::path::{CANVAS_CENTER, normal_at, svg_polyline};
use crate::state::PlanetState;
use crate::stream::Stream;

// =============================================================================
// Constants
// =============================================================================

/// Atmospheres thinner than this carry no clouds
pub const MIN_CLOUD_DENSITY: f64 = 0.1;

/// Radius of the sphere the spines wrap around
const CLOUD_RADIUS: f64 = 640.0;

/// Latitude span (in radii) shared out between clusters
const LATITUDE_RANGE: f64 = 1.85;

/// Segments per spine (points = segments + 1)
const SPINE_SEGMENTS: usize = 60;

/// How strongly spines bow toward the equator at their ends
const SPHERE_CURVE: f64 = -0.8;

/// Drift memory per spine step
const DRIFT_DAMPING: f64 = 0.95;

/// Minimum thickness of a formation
const MIN_THICKNESS: f64 = 5.0;

/// Perpendicular spacing between stacked layers at scale 1
const LAYER_SPACING: f64 = 14.0;

/// Each layer is this fraction shorter than the previous one
const LAYER_SHRINK: f64 = 0.08;

/// Layers never shrink below this fraction of the spine
const MIN_LAYER_LENGTH: f64 = 0.4;

const LAYER_OPACITY: f64 = 0.6;

/// How far a sidecar overlaps its main formation
const SIDECAR_OVERLAP: f64 = 40.0;

const SIDECAR_SCALE: f64 = 0.75;

// =============================================================================
// Types
// =============================================================================

/// One filled cloud layer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi))]
pub struct CloudElement {
    pub key: String,
    /// Closed outline
    pub points: Vec<Point2<f64>>,
    pub color: Rgb,
    pub opacity: f64,
}

impl CloudElement {
    /// Closed SVG path of the outline
    pub fn to_svg_path(&self) -> String {
        svg_polyline(&self.points, true)
    }
}

/// Parameters of a ribbon built around a spine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeOptions {
    pub base_thickness: f64,
    /// Random walk step of the thickness is up to a fifth of this
    pub thickness_variance: f64,
    pub edge_noise: f64,
    /// Exponent applied to the sine taper along the spine
    pub taper_power: f64,
}

impl Default for ShapeOptions {
    fn default() -> Self {
        Self {
            base_thickness: 30.0,
            thickness_variance: 10.0,
            edge_noise: 10.0,
            taper_power: 0.5,
        }
    }
}

// =============================================================================
// Spines and shapes
// =============================================================================

/// Builds a 61-point spine of the given width at vertical offset `y_base`
/// from the center, shifted sideways by `x_offset`. One draw per point.
pub fn cloud_spine(stream: &mut Stream, y_base: f64, width: f64, x_offset: f64) -> Vec<Point2<f64>> {
    let start_x = -width / 2.0 + x_offset;
    let step = width / SPINE_SEGMENTS as f64;
    let mut drift = 0.0;

    (0..=SPINE_SEGMENTS)
        .map(|i| {
            let x_rel = start_x + i as f64 * step;
            let x_ratio = x_rel / CLOUD_RADIUS;
            let curve = (x_ratio * x_ratio) * y_base * SPHERE_CURVE;
            drift += stream.next_unit() - 0.5;
            drift *= DRIFT_DAMPING;
            Point2::new(CANVAS_CENTER + x_rel, CANVAS_CENTER + (y_base + curve + drift))
        })
        .collect()
}

/// Outlines a ribbon around `spine`: the top edge forward, then the bottom
/// edge back. Two draws per spine point.
///
/// Returns `None` (without drawing) for spines shorter than three points.
pub fn shape_from_spine(
    stream: &mut Stream,
    spine: &[Point2<f64>],
    options: &ShapeOptions,
) -> Option<Vec<Point2<f64>>> {
    if spine.len() < 3 {
        return None;
    }

    let last = (spine.len() - 1) as f64;
    let mut thickness = options.base_thickness;
    let mut top = Vec::with_capacity(spine.len());
    let mut bottom = Vec::with_capacity(spine.len());

    for (i, point) in spine.iter().enumerate() {
        let normal = normal_at(spine, i);
        let taper = (i as f64 / last * PI).sin();
        let thick_mod = taper.powf(options.taper_power);

        thickness += (stream.next_unit() - 0.5) * (options.thickness_variance / 5.0);
        thickness = thickness.max(MIN_THICKNESS);
        let jag = (stream.next_unit() - 0.5) * options.edge_noise * thick_mod;
        let offset = thickness * thick_mod * 0.5 + jag;

        top.push(point + normal * offset);
        bottom.push(point - normal * offset);
    }

    top.extend(bottom.into_iter().rev());
    Some(top)
}

// =============================================================================
// Cloud system
// =============================================================================

struct CloudSystem<'s> {
    stream: &'s mut Stream,
    elements: Vec<CloudElement>,
}

impl CloudSystem<'_> {
    /// Stacks `layers + 1` ribbons along `spine`. Two draws per layer plus
    /// those of each ribbon.
    fn stack(
        &mut self,
        cluster: usize,
        spine: &[Point2<f64>],
        layers: usize,
        scale: f64,
        direction: f64,
        color: Rgb,
    ) {
        for i in 0..=layers {
            let layer = i as f64;
            let length_ratio = (1.0 - layer * LAYER_SHRINK).max(MIN_LAYER_LENGTH);
            let sub_len = (spine.len() as f64 * length_ratio).floor() as usize;
            let slack = (spine.len() - sub_len) as f64;
            let start = (self.stream.next_unit() * (slack * 0.8) + slack * 0.1).floor() as usize;
            let end = (start + sub_len).min(spine.len());
            let sub_spine = &spine[start.min(end)..end];

            let offset = layer * LAYER_SPACING * scale * direction;
            let disjoint = (self.stream.next_unit() - 0.5) * 20.0 * scale;
            let shifted: Vec<Point2<f64>> = sub_spine
                .iter()
                .enumerate()
                .map(|(j, p)| {
                    let n = normal_at(sub_spine, j);
                    Point2::new(p.x + n.x * offset + disjoint, p.y + n.y * offset)
                })
                .collect();

            let options = ShapeOptions {
                base_thickness: (35.0 - layer * 2.0) * scale,
                edge_noise: (12.0 + layer) * scale,
                taper_power: 0.5,
                ..ShapeOptions::default()
            };

            if let Some(points) = shape_from_spine(self.stream, &shifted, &options) {
                let key = format!("cloud-{}-{}-{}", cluster, i, self.elements.len());
                self.elements.push(CloudElement {
                    key,
                    points,
                    color: shift(color, 40.0 - layer * 10.0, -5.0, 0.0),
                    opacity: LAYER_OPACITY,
                });
            }
        }
    }

    fn cluster(&mut self, index: usize, zone_size: f64, cloud_color: Rgb) {
        let zone_top = -(LATITUDE_RANGE / 2.0) + index as f64 * zone_size;
        let lat_pos = zone_top + self.stream.next_unit() * zone_size * 0.8 + zone_size * 0.1;
        let y_base = lat_pos * CLOUD_RADIUS;
        let max_chord = (CLOUD_RADIUS * CLOUD_RADIUS - y_base * y_base).max(0.0).sqrt() * 2.0;
        let width = max_chord * (0.2 + self.stream.next_unit() * 0.7);
        let max_offset = (max_chord - width) / 2.0;
        let x_offset = self.stream.next_unit() * max_offset * 2.0 - max_offset;

        let dist = lat_pos.abs();
        let color = shift(cloud_color, dist * -15.0, dist * -5.0, 0.0);
        let direction = if y_base < 0.0 { -1.0 } else { 1.0 };

        let spine = cloud_spine(self.stream, y_base, width, x_offset);
        let main_layers = (self.stream.next_unit() * 4.0).floor() as usize + 4;
        self.stack(index, &spine, main_layers, 1.0, direction, color);

        let go_right = self.stream.next_unit() > 0.5;
        let attach = if go_right { spine.last() } else { spine.first() };
        let attach_x = attach.map_or(0.0, |p| p.x - CANVAS_CENTER);
        let sidecar_width = self.stream.next_unit() * 100.0 + 80.0;
        let sidecar_offset = if go_right {
            attach_x + sidecar_width / 2.0 - SIDECAR_OVERLAP
        } else {
            attach_x - sidecar_width / 2.0 + SIDECAR_OVERLAP
        };
        let sidecar = cloud_spine(self.stream, y_base, sidecar_width, sidecar_offset);
        let sidecar_layers = (self.stream.next_unit() * 3.0).floor() as usize + 2;
        self.stack(index, &sidecar, sidecar_layers, SIDECAR_SCALE, direction, color);
    }
}

/// Generates every cloud layer for a planet, in paint order.
///
/// Atmospheres below [`MIN_CLOUD_DENSITY`] yield nothing and draw nothing.
pub fn generate_cloud_paths(stream: &mut Stream, state: &PlanetState) -> Vec<CloudElement> {
    if state.atmosphere.density < MIN_CLOUD_DENSITY {
        return Vec::new();
    }

    let clusters = (stream.next_unit() * 2.0).floor() as usize + 3;
    let zone_size = LATITUDE_RANGE / clusters as f64;

    let mut system = CloudSystem {
        stream,
        elements: Vec::new(),
    };
    for c in 0..clusters {
        system.cluster(c, zone_size, state.cloud_color);
    }

    trace!("clouds: {} clusters, {} layers", clusters, system.elements.len());
    system.elements
}
