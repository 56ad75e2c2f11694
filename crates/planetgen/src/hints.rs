//! Numeric inputs for the rendering layer
//!
//! The renderer composes the planet from masks, gradients and filters. All
//! of the numbers it needs are derived here from the planet state and the
//! current view parameters, so the renderer holds no generation logic.

use serde::Serialize;

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::catalog::LiquidKind;
use crate::clouds::MIN_CLOUD_DENSITY;
use crate::color::{Rgb, shift};
use crate::config::ViewParams;
use crate::state::PlanetState;

/// Terrain noise seed used when the planet seed carries no number
pub const DEFAULT_NOISE_SEED: u64 = 123;

/// Slope of the per-layer threshold transfer function
const LAYER_SLOPE: f64 = 60.0;

/// How far the water level moves the layer cut points
const WATER_LEVEL_REACH: f64 = 1.5;

const WATER_MASK_SLOPE: f64 = 120.0;
const LAND_MASK_SLOPE: f64 = 50.0;

/// One stop of the atmosphere glow gradient
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
pub struct GlowStop {
    /// Radial offset, fraction of the planet radius
    pub offset: f64,
    pub opacity: f64,
}

/// Everything the renderer needs beyond the generated geometry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi))]
pub struct RenderHints {
    /// Intercept of each layer mask's linear transfer (slope 60)
    pub layer_intercepts: Vec<f64>,
    /// Intercept of the water mask transfer (slope 120)
    pub water_intercept: f64,
    /// Intercept of the land-only mask transfer (slope -50)
    pub land_intercept: f64,
    pub shadow_opacity: f64,
    /// Glow stops, all tinted with `glow_color`
    pub glow_stops: [GlowStop; 3],
    pub glow_color: Rgb,
    pub rim_color: Rgb,
    /// Ocean gradient from center to edge
    pub ocean_gradient: [Rgb; 2],
    pub noise_seed: u64,
    pub base_frequency: f64,
    pub show_clouds: bool,
    /// Magma oceans stay sharp; every other liquid is softened
    pub blur_liquid: bool,
}

/// Terrain noise seed: the leading integer of the text after the first `-`,
/// or [`DEFAULT_NOISE_SEED`] when there is none or it is zero.
///
/// ```
/// use planetgen::hints::noise_seed;
///
/// assert_eq!(noise_seed("planet-42"), 42);
/// assert_eq!(noise_seed("test-7b-x"), 7);
/// assert_eq!(noise_seed("nodash"), 123);
/// assert_eq!(noise_seed("zero-0"), 123);
/// ```
pub fn noise_seed(seed: &str) -> u64 {
    let Some(segment) = seed.split('-').nth(1) else {
        return DEFAULT_NOISE_SEED;
    };
    let segment = segment.trim_start();
    let digits = segment.strip_prefix('+').unwrap_or(segment);
    let value = digits
        .chars()
        .map_while(|c| c.to_digit(10))
        .fold(0u64, |acc, d| acc.saturating_mul(10).saturating_add(u64::from(d)));
    if value == 0 { DEFAULT_NOISE_SEED } else { value }
}

impl RenderHints {
    pub fn new(seed: &str, state: &PlanetState, thresholds: &[f64], view: &ViewParams) -> Self {
        let water = view.water_fraction();
        let water_offset = (water - 0.5) * WATER_LEVEL_REACH;
        let density = state.atmosphere.density;
        let liquid_color = state.liquid.color();

        Self {
            layer_intercepts: thresholds
                .iter()
                .map(|level| -((level + water_offset) * LAYER_SLOPE))
                .collect(),
            water_intercept: water * WATER_MASK_SLOPE + 0.5,
            land_intercept: -(water * LAND_MASK_SLOPE) + 0.5,
            shadow_opacity: view.shadow_opacity(),
            glow_stops: [
                GlowStop {
                    offset: 0.85,
                    opacity: 0.0,
                },
                GlowStop {
                    offset: 0.95,
                    opacity: density * 0.4,
                },
                GlowStop {
                    offset: 1.0,
                    opacity: density,
                },
            ],
            glow_color: state.cloud_color,
            rim_color: shift(state.cloud_color, 20.0, -10.0, 0.0),
            ocean_gradient: [shift(liquid_color, -5.0, 5.0, 0.0), liquid_color],
            noise_seed: noise_seed(seed),
            base_frequency: state.base_freq,
            show_clouds: view.clouds_enabled && density > MIN_CLOUD_DENSITY,
            blur_liquid: state.liquid.material.kind != LiquidKind::Magma,
        }
    }
}
