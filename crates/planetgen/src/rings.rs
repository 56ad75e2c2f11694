//! Ring systems
//!
//! A ring system is a set of concentric elliptical arcs. Most ringed planets
//! get a handful of simple banded rings tinted from the crust; the rest get a
//! dense particle system sampled across three bands, plus a few bright
//! feature rings.
//!
//! Every ring is emitted twice: the far half (180° to 360°) is painted behind
//! the planet and the near half (0° to 180°) in front of it.

use std::f64::consts::PI;

use log::trace;
use nalgebra::Point2;
use serde::Serialize;

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::color::{Rgb, shift};
use crate::path::center;
use crate::state::PlanetState;
use crate::stream::Stream;

/// Draws above this produce simple banded rings
const SIMPLE_RING_THRESHOLD: f64 = 0.2;

const SIMPLE_RING_COUNT: usize = 8;
const SIMPLE_INNER_RADIUS: f64 = 600.0;
const SIMPLE_RING_SPACING: f64 = 20.0;
const SIMPLE_PERSPECTIVE: f64 = 0.25;

/// Opacity below which a particle is discarded
const MIN_PARTICLE_OPACITY: f64 = 0.04;

/// A radial band of a complex ring system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingBand {
    pub inner: f64,
    pub outer: f64,
    pub density: f64,
    pub particles: usize,
}

impl RingBand {
    const fn new(inner: f64, outer: f64, density: f64, particles: usize) -> Self {
        Self {
            inner,
            outer,
            density,
            particles,
        }
    }

    fn radius_at(&self, progress: f64) -> f64 {
        self.inner + progress * (self.outer - self.inner)
    }
}

/// Bands of a complex ring system, innermost first
pub const RING_BANDS: [RingBand; 3] = [
    RingBand::new(540.0, 650.0, 0.8, 200),
    RingBand::new(670.0, 800.0, 0.5, 200),
    RingBand::new(810.0, 825.0, 0.3, 30),
];

/// An axis-aligned elliptical arc around a center, angles in degrees.
/// Positive angles run clockwise on screen (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
pub struct EllipticalArc {
    pub center: Point2<f64>,
    pub rx: f64,
    pub ry: f64,
    pub start_deg: f64,
    pub end_deg: f64,
}

impl EllipticalArc {
    pub fn new(rx: f64, ry: f64, start_deg: f64, end_deg: f64) -> Self {
        Self {
            center: center(),
            rx,
            ry,
            start_deg,
            end_deg,
        }
    }

    /// Point on the full ellipse at `deg`
    pub fn point_at(&self, deg: f64) -> Point2<f64> {
        let rad = deg.to_radians();
        Point2::new(
            self.center.x + self.rx * rad.cos(),
            self.center.y + self.ry * rad.sin(),
        )
    }

    /// Endpoints in drawing order: the arc is traced from the end angle back
    /// to the start angle
    pub fn endpoints(&self) -> (Point2<f64>, Point2<f64>) {
        (self.point_at(self.end_deg), self.point_at(self.start_deg))
    }

    /// SVG path data for the arc (counter-clockwise sweep)
    pub fn to_svg_path(&self) -> String {
        let (from, to) = self.endpoints();
        format!(
            "M {} {} A {} {} 0 0 0 {} {}",
            from.x, from.y, self.rx, self.ry, to.x, to.y
        )
    }

    /// Far half, painted behind the planet
    fn back(rx: f64, ry: f64) -> Self {
        Self::new(rx, ry, 180.0, 360.0)
    }

    /// Near half, painted over the planet
    fn front(rx: f64, ry: f64) -> Self {
        Self::new(rx, ry, 0.0, 180.0)
    }
}

/// One stroked ring arc
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
pub struct RingElement {
    pub key: String,
    pub arc: EllipticalArc,
    pub color: Rgb,
    pub width: f64,
    pub opacity: f64,
    /// Painted in front of the planet
    pub front: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
pub enum RingMode {
    Simple,
    Complex,
}

/// A generated ring system
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi))]
pub struct RingSystem {
    pub mode: RingMode,
    pub elements: Vec<RingElement>,
}

impl RingSystem {
    /// Halves painted behind the planet
    pub fn back(&self) -> impl Iterator<Item = &RingElement> {
        self.elements.iter().filter(|e| !e.front)
    }

    /// Halves painted in front of the planet
    pub fn front(&self) -> impl Iterator<Item = &RingElement> {
        self.elements.iter().filter(|e| e.front)
    }

    fn push_pair(&mut self, prefix: &str, index: usize, rx: f64, ry: f64, stroke: Stroke) {
        self.elements.push(RingElement {
            key: format!("{}-back-{}", prefix, index),
            arc: EllipticalArc::back(rx, ry),
            color: stroke.color,
            width: stroke.width,
            opacity: stroke.opacity,
            front: false,
        });
        self.elements.push(RingElement {
            key: format!("{}-front-{}", prefix, index),
            arc: EllipticalArc::front(rx, ry),
            color: stroke.color,
            width: stroke.width,
            opacity: stroke.opacity,
            front: true,
        });
    }
}

#[derive(Clone, Copy)]
struct Stroke {
    color: Rgb,
    width: f64,
    opacity: f64,
}

fn simple_rings(stream: &mut Stream, solid_color: Rgb) -> RingSystem {
    let mut system = RingSystem {
        mode: RingMode::Simple,
        elements: Vec::with_capacity(SIMPLE_RING_COUNT * 2),
    };
    for i in 0..SIMPLE_RING_COUNT {
        let rx = SIMPLE_INNER_RADIUS + i as f64 * SIMPLE_RING_SPACING;
        let ry = rx * SIMPLE_PERSPECTIVE;
        let width = stream.next_unit() * 8.0 + 2.0;
        let opacity = stream.next_unit() * 0.3 + 0.1;
        let lightness = if i % 2 == 0 { 20.0 } else { -20.0 };
        let color = shift(solid_color, lightness, -10.0, 0.0);
        system.push_pair("s", i, rx, ry, Stroke { color, width, opacity });
    }
    system
}

fn complex_rings(stream: &mut Stream, solid_color: Rgb, ice_color: Rgb) -> RingSystem {
    let palette = [
        solid_color,
        ice_color,
        shift(solid_color, 15.0, -10.0, 0.0),
        shift(ice_color, -15.0, 5.0, 0.0),
    ];
    let perspective = 0.25 + stream.next_unit() * 0.15;
    let mut system = RingSystem {
        mode: RingMode::Complex,
        elements: Vec::new(),
    };

    let mut particle = 0;
    for band in &RING_BANDS {
        for _ in 0..band.particles {
            let progress = stream.next_unit();
            let rx = band.radius_at(progress);
            let ry = rx * perspective;
            let wave = (progress * PI * (10.0 + stream.next_unit() * 10.0)).sin();
            let base_opacity = (band.density * 0.3) * (0.5 + stream.next_unit() * 0.5);
            let opacity = base_opacity + wave * 0.1;
            if opacity < MIN_PARTICLE_OPACITY {
                continue;
            }
            let color = stream.pick(&palette).copied().unwrap_or(solid_color);
            let width = 1.0 + stream.next_unit() * 3.5;
            system.push_pair("c", particle, rx, ry, Stroke { color, width, opacity });
            particle += 1;
        }
    }

    let feature_color = shift(ice_color, 40.0, 10.0, 0.0);
    let features = (stream.next_unit() * 3.0).floor() as usize;
    for i in 0..features {
        let band = stream.pick(&RING_BANDS).copied().unwrap_or(RING_BANDS[0]);
        let rx = band.radius_at(stream.next_unit());
        let ry = rx * perspective;
        let width = 2.0 + stream.next_unit() * 2.0;
        let opacity = 0.7 + stream.next_unit() * 0.2;
        let stroke = Stroke {
            color: feature_color,
            width,
            opacity,
        };
        system.push_pair("spec", i, rx, ry, stroke);
    }
    system
}

/// Generates a ring system from the crust and ice colors.
///
/// The first draw selects the mode: above 0.2 gives simple rings (16 draws),
/// otherwise a particle system.
pub fn generate_rings(stream: &mut Stream, solid_color: Rgb, ice_color: Rgb) -> RingSystem {
    let system = if stream.next_unit() > SIMPLE_RING_THRESHOLD {
        simple_rings(stream, solid_color)
    } else {
        complex_rings(stream, solid_color, ice_color)
    };
    trace!("rings: {:?} with {} arcs", system.mode, system.elements.len());
    system
}

/// Ring system of a planet, or `None` when the planet has no rings
pub fn planet_rings(stream: &mut Stream, state: &PlanetState) -> Option<RingSystem> {
    state
        .rings
        .then(|| generate_rings(stream, state.solid.color(), state.liquid.material.frozen_color))
}
