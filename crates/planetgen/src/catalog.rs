//! Material catalogs
//!
//! Two read-only reference tables: the liquids that can pool on a surface and
//! the solids that can form a crust. The generator never reaches for these
//! statics directly; it receives a [`Catalog`] so tests can substitute their
//! own tables.

use std::fmt;

use serde::Serialize;

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::color::Rgb;

/// Chemical family of a material
///
/// Mostly a display label. `Silicon` additionally gates silicon-based life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi))]
pub enum ChemicalTag {
    #[serde(rename = "C")]
    Carbon,
    #[serde(rename = "O")]
    Oxygen,
    #[serde(rename = "N")]
    Nitrogen,
    #[serde(rename = "Cl")]
    Chlorine,
    #[serde(rename = "S")]
    Sulfur,
    #[serde(rename = "Si")]
    Silicon,
    #[serde(rename = "Fe")]
    Iron,
    #[serde(rename = "Bio")]
    Organic,
    /// Liquid boiled away to sediment
    #[serde(rename = "Dry")]
    Dry,
    /// No material
    #[serde(rename = "-")]
    Inert,
}

impl ChemicalTag {
    /// Short display symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Carbon => "C",
            Self::Oxygen => "O",
            Self::Nitrogen => "N",
            Self::Chlorine => "Cl",
            Self::Sulfur => "S",
            Self::Silicon => "Si",
            Self::Iron => "Fe",
            Self::Organic => "Bio",
            Self::Dry => "Dry",
            Self::Inert => "-",
        }
    }
}

impl fmt::Display for ChemicalTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.symbol())
    }
}

/// Behavioral class of a liquid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi))]
pub enum LiquidKind {
    Standard,
    Volatile,
    Acid,
    Magma,
    Metal,
    Viscous,
    Organic,
    None,
}

/// Behavioral class of a solid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi))]
pub enum SolidKind {
    Rock,
    Glass,
    Dust,
    Ice,
    Metal,
    Organic,
    /// Finely layered crystalline crust; tightens terrain bands
    Crystal,
}

/// A liquid catalog entry. Temperatures are in °C.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi))]
pub struct Liquid {
    pub name: &'static str,
    pub color: Rgb,
    pub freeze: f64,
    pub boil: f64,
    pub tag: ChemicalTag,
    /// Tint of clouds condensed from this liquid
    pub cloud: Rgb,
    pub frozen_color: Rgb,
    pub kind: LiquidKind,
    /// Vapor name used in the atmosphere description
    pub gas: &'static str,
}

impl Liquid {
    /// Water and salt water are the only solvents that carry carbon life.
    pub fn supports_carbon_life(&self) -> bool {
        matches!(self.name, "Water" | "Salt Water")
    }
}

/// A solid catalog entry. Temperatures are in °C.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi))]
pub struct Solid {
    pub name: &'static str,
    pub color: Rgb,
    pub tag: ChemicalTag,
    /// Terrain roughness scalar; drives noise frequency and fracture count
    pub roughness: f64,
    pub kind: SolidKind,
    pub melt: f64,
}

/// Common read access for catalog records
pub trait Material {
    fn name(&self) -> &str;
    fn color(&self) -> Rgb;
    fn tag(&self) -> ChemicalTag;
}

impl Material for Liquid {
    fn name(&self) -> &str {
        self.name
    }

    fn color(&self) -> Rgb {
        self.color
    }

    fn tag(&self) -> ChemicalTag {
        self.tag
    }
}

impl Material for Solid {
    fn name(&self) -> &str {
        self.name
    }

    fn color(&self) -> Rgb {
        self.color
    }

    fn tag(&self) -> ChemicalTag {
        self.tag
    }
}

const fn liquid(
    name: &'static str,
    color: u32,
    freeze: f64,
    boil: f64,
    tag: ChemicalTag,
    cloud: u32,
    frozen_color: u32,
    kind: LiquidKind,
    gas: &'static str,
) -> Liquid {
    Liquid {
        name,
        color: Rgb::from_u32(color),
        freeze,
        boil,
        tag,
        cloud: Rgb::from_u32(cloud),
        frozen_color: Rgb::from_u32(frozen_color),
        kind,
        gas,
    }
}

const fn solid(
    name: &'static str,
    color: u32,
    tag: ChemicalTag,
    roughness: f64,
    kind: SolidKind,
    melt: f64,
) -> Solid {
    Solid {
        name,
        color: Rgb::from_u32(color),
        tag,
        roughness,
        kind,
        melt,
    }
}

use ChemicalTag as T;
use LiquidKind as L;
use SolidKind as S;

// =============================================================================
// Built-in tables
// =============================================================================

/// Candidate surface liquids
#[rustfmt::skip]
pub static LIQUIDS: [Liquid; 18] = [
    liquid("Water",         0x3b82f6,    0.0,  100.0, T::Carbon,   0xffffff, 0xe0f2fe, L::Standard, "Water Vapor"),
    liquid("Salt Water",    0x2563eb,   -2.0,  102.0, T::Carbon,   0xf1f5f9, 0xbfdbfe, L::Standard, "Water Vapor"),
    liquid("Heavy Water",   0x60a5fa,    3.8,  101.0, T::Carbon,   0xe0f2fe, 0x93c5fd, L::Standard, "Deuterium"),
    liquid("Peroxide",      0x7dd3fc,   -0.4,  150.0, T::Oxygen,   0xe0f2fe, 0xe0f2fe, L::Standard, "Oxygen"),
    liquid("Vinegar",       0xfde047,   -2.0,  118.0, T::Carbon,   0xfef9c3, 0xfacc15, L::Acid,     "Acetic Acid"),
    liquid("Brine",         0x0284c7,  -21.0,  108.0, T::Carbon,   0xf0f9ff, 0xbae6fd, L::Standard, "Chlorine"),
    liquid("Methane",       0x38bdf8, -182.0, -161.0, T::Carbon,   0xbae6fd, 0xbae6fd, L::Volatile, "Methane"),
    liquid("Ethane",        0x0ea5e9, -183.0,  -88.0, T::Carbon,   0xe0f2fe, 0x7dd3fc, L::Volatile, "Ethane"),
    liquid("Nitrogen",      0x60a5fa, -210.0, -195.0, T::Nitrogen, 0xf1f5f9, 0x93c5fd, L::Volatile, "Nitrogen"),
    liquid("Ammonia",       0x2dd4bf,  -77.0,  -33.0, T::Nitrogen, 0xccfbf1, 0x5eead4, L::Acid,     "Ammonia"),
    liquid("Chlorine",      0xa3e635, -101.0,  -34.0, T::Chlorine, 0xd9f99d, 0x84cc16, L::Acid,     "Chlorine Gas"),
    liquid("Sulfuric Acid", 0xfacc15,   10.0,  337.0, T::Sulfur,   0xfef08a, 0xeab308, L::Acid,     "Sulfur Dioxide"),
    liquid("Nitric Acid",   0xfb7185,  -42.0,   83.0, T::Nitrogen, 0xfca5a5, 0xf43f5e, L::Acid,     "Nitrogen Dioxide"),
    liquid("Lava",          0xff4500,  700.0, 3000.0, T::Silicon,  0x57534e, 0x292524, L::Magma,    "Silicate Vapor"),
    liquid("Mercury",       0xcbd5e1,  -39.0,  357.0, T::Iron,     0xe2e8f0, 0x94a3b8, L::Metal,    "Mercury Vapor"),
    liquid("Crude Oil",     0x020617,  -57.0,  200.0, T::Carbon,   0x52525b, 0x000000, L::Viscous,  "Petroleum Gas"),
    liquid("Blood",         0xdc2626,   -2.0,  100.0, T::Organic,  0xfca5a5, 0x991b1b, L::Organic,  "Iron Oxide"),
    liquid("Slime",         0x86efac,    0.0,  110.0, T::Organic,  0xbbf7d0, 0x22c55e, L::Organic,  "Methane"),
];

/// Candidate crust materials
#[rustfmt::skip]
pub static SOLIDS: [Solid; 19] = [
    solid("Silicate",    0x78716c, T::Silicon, 1.0, S::Rock,    1200.0),
    solid("Basalt",      0x3f3f46, T::Silicon, 1.0, S::Rock,    1100.0),
    solid("Granite",     0xa1a1aa, T::Silicon, 1.3, S::Rock,    1215.0),
    solid("Sandstone",   0xf59e0b, T::Silicon, 0.5, S::Rock,    1300.0),
    solid("Limestone",   0xe5e5e5, T::Carbon,  0.8, S::Rock,     900.0),
    solid("Obsidian",    0x18181b, T::Silicon, 1.1, S::Glass,   1000.0),
    solid("Pumice",      0xd4d4d8, T::Silicon, 1.5, S::Rock,    1200.0),
    solid("Regolith",    0x737373, T::Silicon, 1.4, S::Dust,    1200.0),
    solid("Slate",       0x475569, T::Silicon, 0.9, S::Rock,    1200.0),
    solid("Marble",      0xf3f4f6, T::Carbon,  0.7, S::Rock,    1200.0),
    solid("Water Ice",   0xe2e8f0, T::Carbon,  0.7, S::Ice,        0.0),
    solid("Dry Ice",     0xeff6ff, T::Carbon,  0.4, S::Ice,      -78.0),
    solid("Blue Ice",    0xbfdbfe, T::Carbon,  0.9, S::Ice,        0.0),
    solid("Methane Ice", 0x7dd3fc, T::Carbon,  0.5, S::Ice,     -182.0),
    solid("Iron Ore",    0xb91c1c, T::Iron,    1.2, S::Metal,   1538.0),
    solid("Gold Vein",   0xfacc15, T::Iron,    1.0, S::Metal,   1064.0),
    solid("Copper Ox",   0x34d399, T::Iron,    0.8, S::Metal,   1085.0),
    solid("Titanium",    0x94a3b8, T::Iron,    0.9, S::Metal,   1668.0),
    solid("Bone",        0xfef3c7, T::Organic, 0.9, S::Organic,  200.0),
];

/// Crust used when every catalog solid has been filtered out
pub static SCORCHED_CRUST: Solid = solid("Scorched Crust", 0x1a0500, T::Silicon, 1.2, S::Rock, 9999.0);

/// Placeholder liquid for worlds too cold for any catalog liquid
pub static NO_LIQUID: Liquid = liquid("None", 0x000000, 0.0, 0.0, T::Inert, 0xa1a1aa, 0xa1a1aa, L::None, "none");

/// The pair of material tables a generator draws from
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    pub liquids: &'a [Liquid],
    pub solids: &'a [Solid],
}

impl<'a> Catalog<'a> {
    pub fn new(liquids: &'a [Liquid], solids: &'a [Solid]) -> Self {
        Self { liquids, solids }
    }

    /// Liquids that are not frozen at `base_temp` (°C)
    pub fn liquids_above_freezing(&self, base_temp: f64) -> Vec<&'a Liquid> {
        self.liquids
            .iter()
            .filter(|l| base_temp > l.freeze)
            .collect()
    }

    /// Solids that can exist as crust at `base_temp` (°C); ices above their
    /// melting point are excluded
    pub fn stable_solids(&self, base_temp: f64) -> Vec<&'a Solid> {
        self.solids
            .iter()
            .filter(|s| !(s.kind == SolidKind::Ice && base_temp > s.melt))
            .collect()
    }
}

impl Catalog<'static> {
    /// The built-in liquid and solid tables
    pub fn standard() -> Self {
        Self::new(&LIQUIDS, &SOLIDS)
    }
}

impl Default for Catalog<'static> {
    fn default() -> Self {
        Self::standard()
    }
}
