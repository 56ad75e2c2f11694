//! View parameters supplied by the rendering layer

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::state::PlanetState;

/// User-facing view controls. Percentages are in [0, 100].
///
/// Missing fields fall back to their defaults when deserialized, so a front
/// end can send only the controls it exposes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct ViewParams {
    /// Water coverage, percent
    pub water_level: f64,
    /// Strength of the cloud lens distortion
    pub lens_strength: f64,
    /// Night-side shadow intensity, percent
    pub shadow: f64,
    pub clouds_enabled: bool,
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            water_level: 50.0,
            lens_strength: 30.0,
            shadow: 50.0,
            clouds_enabled: true,
        }
    }
}

impl ViewParams {
    /// Defaults with the water level the planet suggests
    pub fn for_planet(state: &PlanetState) -> Self {
        Self {
            water_level: f64::from(state.suggested_water),
            ..Self::default()
        }
    }

    /// Water level as a fraction
    pub fn water_fraction(&self) -> f64 {
        self.water_level / 100.0
    }

    /// Shadow intensity as an opacity
    pub fn shadow_opacity(&self) -> f64 {
        self.shadow / 100.0
    }
}
