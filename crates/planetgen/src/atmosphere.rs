//! Atmosphere formation and naming
//!
//! Density comes from a random base plus whatever the surface liquid
//! contributes by evaporating. The name combines a density tier with the
//! liquid's vapor ("Thin Water Vapor", "Dense Chlorine Gas"), or reports
//! sediment worlds whose oceans boiled off entirely.

use std::fmt;

use serde::Serialize;

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::catalog::Liquid;
use crate::state::LiquidState;
use crate::stream::Stream;

/// Probability that a planet has no atmosphere at all
pub const VACUUM_CHANCE: f64 = 0.2;

/// Random spread added on top of the liquid contribution
const DENSITY_SPREAD: f64 = 0.3;

/// Sediment worlds are wrapped in vapor at least this dense
const SEDIMENT_MIN_DENSITY: f64 = 0.9;

/// Upper bound (inclusive) of the trace tier
const TRACE_LIMIT: f64 = 0.05;

/// Upper bound (exclusive) of the thin tier
const THIN_LIMIT: f64 = 0.35;

/// Upper bound (exclusive) of the moderate tier
const MODERATE_LIMIT: f64 = 0.7;

/// Vapor name used when there is no active liquid
const INERT_GAS: &str = "Inert Mix";

/// Density tier of an atmosphere
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi))]
pub enum AtmosphereTier {
    Vacuum,
    Trace,
    Thin,
    Moderate,
    Dense,
}

impl AtmosphereTier {
    /// Classify a density in [0, 1]
    ///
    /// ```
    /// use planetgen::atmosphere::AtmosphereTier;
    ///
    /// assert_eq!(AtmosphereTier::classify(0.02), AtmosphereTier::Trace);
    /// assert_eq!(AtmosphereTier::classify(0.5), AtmosphereTier::Moderate);
    /// assert_eq!(AtmosphereTier::classify(0.7), AtmosphereTier::Dense);
    /// ```
    pub fn classify(density: f64) -> Self {
        match density {
            d if d <= TRACE_LIMIT => Self::Trace,
            d if d < THIN_LIMIT => Self::Thin,
            d if d < MODERATE_LIMIT => Self::Moderate,
            _ => Self::Dense,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Vacuum => "Vacuum",
            Self::Trace => "Trace",
            Self::Thin => "Thin",
            Self::Moderate => "Moderate",
            Self::Dense => "Dense",
        }
    }
}

impl fmt::Display for AtmosphereTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A named atmosphere with density in [0, 1]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi))]
pub struct Atmosphere {
    pub name: String,
    pub density: f64,
    pub tier: AtmosphereTier,
}

impl Atmosphere {
    pub fn vacuum() -> Self {
        Self {
            name: AtmosphereTier::Vacuum.name().to_string(),
            density: 0.0,
            tier: AtmosphereTier::Vacuum,
        }
    }

    /// Name an atmosphere of the given density
    ///
    /// `gas` is the vapor of the active surface liquid, or `None` when there
    /// is nothing to evaporate.
    pub fn from_density(density: f64, gas: Option<&str>) -> Self {
        let tier = AtmosphereTier::classify(density);
        let name = match tier {
            AtmosphereTier::Trace => "Trace Gases".to_string(),
            _ => format!("{} {}", tier, gas.unwrap_or(INERT_GAS)),
        };
        Self {
            name,
            density,
            tier,
        }
    }

    /// Thick vapor envelope of a liquid that boiled down to sediment
    pub fn vaporized(density: f64, liquid_name: &str) -> Self {
        Self {
            name: format!("Dense Vaporized {}", liquid_name),
            density,
            tier: AtmosphereTier::Dense,
        }
    }

    pub fn is_vacuum(&self) -> bool {
        self.tier == AtmosphereTier::Vacuum
    }
}

impl fmt::Display for Atmosphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2})", self.name, self.density)
    }
}

/// Form the atmosphere for a planet.
///
/// Draws: one for the vacuum check; if an atmosphere forms, one for the
/// density spread; sediment worlds take one more for their forced density.
pub fn form_atmosphere(stream: &mut Stream, liquid: &Liquid, state: LiquidState) -> Atmosphere {
    if stream.next_unit() <= VACUUM_CHANCE {
        return Atmosphere::vacuum();
    }

    let density =
        (stream.next_unit() * DENSITY_SPREAD + state.atmosphere_contribution()).clamp(0.0, 1.0);

    match state {
        LiquidState::Sediment => {
            let forced = SEDIMENT_MIN_DENSITY + stream.next_unit() * (1.0 - SEDIMENT_MIN_DENSITY);
            Atmosphere::vaporized(forced, liquid.name)
        }
        LiquidState::None => Atmosphere::from_density(density, None),
        LiquidState::Liquid | LiquidState::Boiling => {
            Atmosphere::from_density(density, Some(liquid.gas))
        }
    }
}
