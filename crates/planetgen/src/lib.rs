//! Seeded procedural planet generation
//!
//! This crate derives a complete fictional planet from a text seed: crust
//! and ocean materials, temperature profile, atmosphere and biosphere, plus
//! the vector primitives a renderer needs (terrain palette and layer
//! thresholds, fracture lines, cloud formations, ring arcs). The same seed
//! always reproduces the same planet.
//!
//! Most callers start from [`GenerationSession`].

pub mod atmosphere;
pub mod catalog;
pub mod clouds;
pub mod color;
pub mod config;
pub mod geology;
pub mod hints;
pub mod layers;
pub mod lens;
pub mod palette;
pub mod path;
pub mod rings;
pub mod session;
pub mod state;
pub mod stream;
pub mod surface;

// Re-export key types at crate root
pub use atmosphere::{Atmosphere, AtmosphereTier};
pub use catalog::{Catalog, ChemicalTag, Liquid, LiquidKind, Solid, SolidKind};
pub use clouds::CloudElement;
pub use color::{ColorError, Hsl, Rgb, shift};
pub use config::ViewParams;
pub use geology::GeologyPath;
pub use hints::RenderHints;
pub use lens::{LensError, LensMap};
pub use rings::{EllipticalArc, RingElement, RingMode, RingSystem};
pub use session::{Channel, GenerationSession, PlanetSnapshot};
pub use state::{Biosphere, LifeKind, LiquidState, PlanetState};
pub use stream::Stream;
pub use surface::{MaterialOverride, Surface};

#[cfg(test)]
mod atmosphere_test;
#[cfg(test)]
mod catalog_test;
#[cfg(test)]
mod clouds_test;
#[cfg(test)]
mod hints_test;
#[cfg(test)]
mod layers_test;
#[cfg(test)]
mod palette_test;
