//! Planet state generation
//!
//! Derives one coherent planet from a single stream: temperature profile,
//! crust and surface liquid, atmosphere, biosphere, and the handful of
//! scalars the render layer needs (tilt, rings, noise frequency, water
//! level, roughness).
//!
//! The sequence of draws below is fixed. Reordering two calls, or drawing
//! inside a branch that previously did not draw, changes every planet.

use std::fmt;

use log::debug;
use serde::Serialize;

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use units::Temperature;

use crate::atmosphere::{Atmosphere, form_atmosphere};
use crate::catalog::{Catalog, ChemicalTag, Liquid, NO_LIQUID, SCORCHED_CRUST, Solid};
use crate::color::{Rgb, shift};
use crate::stream::Stream;
use crate::surface::{MaterialOverride, Surface};

// =============================================================================
// Tuning constants
// =============================================================================

/// Draws above this produce a runaway hot world
pub const HOT_WORLD_THRESHOLD: f64 = 0.92;

/// Chance of an extra-cold world
pub const COLD_WORLD_CHANCE: f64 = 0.12;

/// Chance of a ring system
pub const RING_CHANCE: f64 = 0.10;

/// Kelvin multiple of the melt/boil point beyond which a material changes state
const PHASE_CHANGE_FACTOR: f64 = 3.0;

/// Latitude fraction reported as the boiling band of a sediment world;
/// outside [0, 1], so no latitude ever boils
pub const NO_BOIL_BAND: f64 = -2.0;

/// Latitude fraction used when the planet has no temperature gradient
const FLAT_GRADIENT_LATITUDE: f64 = 0.5;

/// Stand-in boil/freeze points for the "None" liquid, far above any planet
const NO_LIQUID_BOIL: f64 = 9999.0;
const NO_LIQUID_FREEZE: f64 = 9998.0;

/// Vapor haze over a dried-out sediment world
const SEDIMENT_CLOUD: Rgb = Rgb::from_u32(0x59544f);

/// Maximum axial tilt in degrees (exclusive)
const MAX_TILT_DEG: f64 = 45.0;

// =============================================================================
// Types
// =============================================================================

/// Phase of the surface liquid at the planet's base temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
pub enum LiquidState {
    /// Too cold for any catalog liquid
    None,
    Liquid,
    Boiling,
    /// Boiled off entirely, leaving dry residue
    Sediment,
}

impl LiquidState {
    /// How much the evaporating liquid thickens the atmosphere
    pub fn atmosphere_contribution(&self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Liquid => 0.1,
            Self::Boiling => 0.4,
            Self::Sediment => 0.8,
        }
    }

    /// Whether the liquid surface actually holds liquid
    pub fn has_open_surface(&self) -> bool {
        matches!(self, Self::Liquid | Self::Boiling)
    }
}

impl fmt::Display for LiquidState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Liquid => "liquid",
            Self::Boiling => "boiling",
            Self::Sediment => "sediment",
        };
        write!(f, "{}", name)
    }
}

/// Chemistry of native life
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
pub enum LifeKind {
    #[serde(rename = "Carbon-Based")]
    CarbonBased,
    #[serde(rename = "Silicon-Based")]
    SiliconBased,
}

impl LifeKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::CarbonBased => "Carbon-Based",
            Self::SiliconBased => "Silicon-Based",
        }
    }

    /// Display color of the biosphere
    pub fn color(&self) -> Rgb {
        match self {
            Self::CarbonBased => Rgb::from_u32(0x10b981),
            Self::SiliconBased => Rgb::from_u32(0x9333ea),
        }
    }

    /// Viable temperature band (°C), open at both ends
    pub fn viable_band(&self) -> (f64, f64) {
        match self {
            Self::CarbonBased => (-15.0, 60.0),
            Self::SiliconBased => (200.0, 1000.0),
        }
    }

    fn tolerates(&self, temp_c: f64) -> bool {
        let (low, high) = self.viable_band();
        temp_c > low && temp_c < high
    }
}

impl fmt::Display for LifeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Native life and the temperature band it occupies
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
pub struct Biosphere {
    pub kind: LifeKind,
    pub color: Rgb,
    pub min_temp: f64,
    pub max_temp: f64,
}

impl Biosphere {
    pub fn new(kind: LifeKind) -> Self {
        let (min_temp, max_temp) = kind.viable_band();
        Self {
            kind,
            color: kind.color(),
            min_temp,
            max_temp,
        }
    }
}

/// A fully generated planet. Temperatures are whole degrees Celsius.
///
/// `min_temp <= base_temp <= max_temp` always holds by construction of the
/// offsets, but nothing downstream relies on it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi))]
pub struct PlanetState {
    pub base_temp: f64,
    pub max_temp: f64,
    pub min_temp: f64,
    pub solid: Surface<Solid>,
    pub liquid: Surface<Liquid>,
    pub liquid_state: LiquidState,
    /// Latitude fraction (0 = equator side, 1 = pole side) where the liquid boils
    pub lat_boil: f64,
    /// Latitude fraction where the liquid freezes
    pub lat_freeze: f64,
    pub atmosphere: Atmosphere,
    pub cloud_color: Rgb,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biosphere: Option<Biosphere>,
    /// Axial tilt in degrees, [0, 45)
    pub tilt: f64,
    pub rings: bool,
    /// Base frequency of the terrain noise
    pub base_freq: f64,
    /// Suggested water coverage, percent
    pub suggested_water: u32,
    pub roughness: f64,
}

impl PlanetState {
    pub fn has_life(&self) -> bool {
        self.biosphere.is_some()
    }

    pub fn solid_name(&self) -> &str {
        self.solid.display_name()
    }

    pub fn ocean_name(&self) -> &str {
        self.liquid.display_name()
    }

    /// Latitude fraction at which the surface reaches `temp_c`
    pub fn latitude_for(&self, temp_c: f64) -> f64 {
        latitude_for(self.max_temp, self.min_temp, temp_c)
    }
}

impl fmt::Display for PlanetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} crust, {} ({}), {}, {}°C [{}..{}]",
            self.solid_name(),
            self.ocean_name(),
            self.liquid_state,
            self.atmosphere.name,
            self.base_temp,
            self.min_temp,
            self.max_temp
        )?;
        if let Some(bio) = &self.biosphere {
            write!(f, ", {} life", bio.kind)?;
        }
        Ok(())
    }
}

// =============================================================================
// Generation
// =============================================================================

/// Fraction of the way from the warm equator to the cold pole at which the
/// surface reaches `temp_c`
pub fn latitude_for(max_temp: f64, min_temp: f64, temp_c: f64) -> f64 {
    if max_temp == min_temp {
        FLAT_GRADIENT_LATITUDE
    } else {
        (max_temp - temp_c) / (max_temp - min_temp)
    }
}

/// Draws the base temperature and the equator/pole extremes
fn draw_temperatures(stream: &mut Stream) -> (f64, f64, f64) {
    let mut base = (stream.next_unit() * 450.0 - 150.0).floor();
    if stream.next_unit() > HOT_WORLD_THRESHOLD {
        base += (stream.next_unit() * 4500.0).floor();
    }
    if stream.next_unit() < COLD_WORLD_CHANCE {
        base -= 150.0;
    }
    let max_temp = base + (stream.next_unit() * 50.0 + 20.0).floor();
    let min_temp = base - (stream.next_unit() * 80.0 + 40.0).floor();
    (base, max_temp, min_temp)
}

fn choose_solid(stream: &mut Stream, catalog: &Catalog, base_temp: f64) -> Surface<Solid> {
    let candidates = catalog.stable_solids(base_temp);
    let solid = stream
        .pick(&candidates)
        .map(|s| (*s).clone())
        .unwrap_or_else(|| SCORCHED_CRUST.clone());

    if Temperature::from_celsius(base_temp)
        .exceeds(Temperature::from_celsius(solid.melt), PHASE_CHANGE_FACTOR)
    {
        let variant = MaterialOverride::renamed(format!("Molten {}", solid.name))
            .with_color(shift(solid.color, 25.0, 15.0, 5.0));
        return Surface::with_variant(solid, variant);
    }
    Surface::plain(solid)
}

fn choose_liquid(
    stream: &mut Stream,
    catalog: &Catalog,
    base_temp: f64,
) -> (Surface<Liquid>, LiquidState, Rgb) {
    let candidates = catalog.liquids_above_freezing(base_temp);
    let Some(liquid) = stream.pick(&candidates).map(|l| (*l).clone()) else {
        let none = NO_LIQUID.clone();
        let cloud = none.cloud;
        return (Surface::plain(none), LiquidState::None, cloud);
    };

    let surface = Temperature::from_celsius(base_temp);
    let boil = Temperature::from_celsius(liquid.boil);

    if surface.exceeds(boil, PHASE_CHANGE_FACTOR) {
        let variant = MaterialOverride::renamed(format!("{} Sediment", liquid.name))
            .with_color(shift(liquid.color, -40.0, -30.0, 0.0))
            .with_tag(ChemicalTag::Dry);
        (
            Surface::with_variant(liquid, variant),
            LiquidState::Sediment,
            SEDIMENT_CLOUD,
        )
    } else if surface.exceeds(boil, 1.0) {
        let cloud = liquid.cloud;
        let variant = MaterialOverride::renamed(format!("Boiling {}", liquid.name));
        (
            Surface::with_variant(liquid, variant),
            LiquidState::Boiling,
            cloud,
        )
    } else {
        let cloud = liquid.cloud;
        (Surface::plain(liquid), LiquidState::Liquid, cloud)
    }
}

/// Life needs standing liquid. Carbon life needs water in its band; silicon
/// life needs a silicate crust in its band.
fn find_life(
    solid: &Surface<Solid>,
    liquid: &Liquid,
    state: LiquidState,
    base_temp: f64,
) -> Option<Biosphere> {
    if state != LiquidState::Liquid {
        return None;
    }
    if liquid.supports_carbon_life() && LifeKind::CarbonBased.tolerates(base_temp) {
        return Some(Biosphere::new(LifeKind::CarbonBased));
    }
    if LifeKind::SiliconBased.tolerates(base_temp) && solid.tag() == ChemicalTag::Silicon {
        return Some(Biosphere::new(LifeKind::SiliconBased));
    }
    None
}

/// Generates a planet from `stream` using materials from `catalog`.
///
/// # Example
/// ```
/// use planetgen::catalog::Catalog;
/// use planetgen::state::generate_planet_state;
/// use planetgen::stream::Stream;
///
/// let mut stream = Stream::from_text("test-1");
/// let planet = generate_planet_state(&mut stream, &Catalog::standard());
/// assert_eq!(planet.base_temp, 87.0);
/// assert_eq!(planet.solid_name(), "Obsidian");
/// assert_eq!(planet.ocean_name(), "Boiling Chlorine");
/// ```
pub fn generate_planet_state(stream: &mut Stream, catalog: &Catalog) -> PlanetState {
    let (base_temp, max_temp, min_temp) = draw_temperatures(stream);

    let solid = choose_solid(stream, catalog, base_temp);
    let (liquid, liquid_state, cloud_color) = choose_liquid(stream, catalog, base_temp);

    let atmosphere = form_atmosphere(stream, &liquid.material, liquid_state);
    let biosphere = find_life(&solid, &liquid.material, liquid_state, base_temp);

    let (boil, freeze) = match liquid_state {
        LiquidState::None => (NO_LIQUID_BOIL, NO_LIQUID_FREEZE),
        // A 0 °C freeze point (Water, Slime) is a real value, not "unset"
        _ => (liquid.material.boil, liquid.material.freeze),
    };
    let lat_boil = match liquid_state {
        LiquidState::Sediment => NO_BOIL_BAND,
        _ => latitude_for(max_temp, min_temp, boil),
    };
    let lat_freeze = latitude_for(max_temp, min_temp, freeze);

    let mut suggested_water = match liquid_state {
        LiquidState::None | LiquidState::Sediment => (stream.next_unit() * 15.0).floor(),
        LiquidState::Liquid | LiquidState::Boiling => (stream.next_unit() * 40.0 + 30.0).floor(),
    };
    if biosphere.is_some() {
        suggested_water = (stream.next_unit() * 20.0 + 45.0).floor();
    }

    let tilt = stream.next_unit() * MAX_TILT_DEG;
    let rings = stream.next_unit() < RING_CHANCE;
    let solid_roughness = solid.material.roughness;
    let base_freq = 0.006 - (solid_roughness * 0.5) * 0.0045;
    let roughness = solid_roughness * (0.5 + stream.next_unit());

    let state = PlanetState {
        base_temp,
        max_temp,
        min_temp,
        solid,
        liquid,
        liquid_state,
        lat_boil,
        lat_freeze,
        atmosphere,
        cloud_color,
        biosphere,
        tilt,
        rings,
        base_freq,
        suggested_water: suggested_water as u32,
        roughness,
    };
    debug!("generated planet: {}", state);
    state
}
