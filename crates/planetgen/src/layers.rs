//! Elevation layer thresholds
//!
//! Each terrain palette color is revealed where the noise field rises above
//! a cut point. Cut points are spaced by a geometrically growing gap, so
//! lowlands get fine bands and highlands coarse ones, then normalized into
//! [0.08, 0.83] and finally jittered per planet.

use crate::catalog::SolidKind;
use crate::stream::Stream;

/// Lowest normalized threshold
const FLOOR: f64 = 0.08;

/// Width of the normalized threshold range
const SPAN: f64 = 0.75;

const DEFAULT_GAP: f64 = 0.05;
const CRYSTAL_GAP: f64 = 0.03;
const SMOOTH_GAP: f64 = 0.08;

/// Crust roughness below which bands are spread wide
const SMOOTH_ROUGHNESS: f64 = 0.6;

/// Each gap is this much larger than the previous one
const GAP_GROWTH: f64 = 1.08;

/// Maximum jitter applied in either direction
const JITTER: f64 = 0.02;

fn initial_gap(kind: SolidKind, roughness: f64) -> f64 {
    // Smooth crusts win over crystal layering
    if roughness < SMOOTH_ROUGHNESS {
        SMOOTH_GAP
    } else if kind == SolidKind::Crystal {
        CRYSTAL_GAP
    } else {
        DEFAULT_GAP
    }
}

/// Deterministic, strictly increasing thresholds for `count` layers.
///
/// `count == 1` yields `[0.08]`; `count == 0` yields nothing.
///
/// ```
/// use planetgen::catalog::SolidKind;
/// use planetgen::layers::base_thresholds;
///
/// let t = base_thresholds(SolidKind::Rock, 1.0, 7);
/// assert_eq!(t.len(), 7);
/// assert_eq!(t[0], 0.08);
/// assert!((t[6] - 0.83).abs() < 1e-12);
/// ```
pub fn base_thresholds(kind: SolidKind, roughness: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }

    let mut stops = Vec::with_capacity(count);
    stops.push(0.0);
    let mut current = 0.0;
    let mut gap = initial_gap(kind, roughness);
    for _ in 1..count {
        current += gap;
        stops.push(current);
        gap *= GAP_GROWTH;
    }

    if current == 0.0 {
        return vec![FLOOR];
    }
    stops.iter().map(|v| FLOOR + (v / current) * SPAN).collect()
}

/// Nudges every threshold by up to ±0.02 (one draw each) and clamps to [0, 1].
///
/// The result is not guaranteed to stay increasing.
pub fn jitter_thresholds(stream: &mut Stream, thresholds: &[f64]) -> Vec<f64> {
    thresholds
        .iter()
        .map(|v| {
            let jitter = stream.next_unit() * (2.0 * JITTER) - JITTER;
            (v + jitter).clamp(0.0, 1.0)
        })
        .collect()
}

/// Jittered thresholds for `count` layers
pub fn generate_layer_thresholds(
    stream: &mut Stream,
    kind: SolidKind,
    roughness: f64,
    count: usize,
) -> Vec<f64> {
    jitter_thresholds(stream, &base_thresholds(kind, roughness, count))
}
