//! Physical quantities shared by the planet generator.

pub mod temperature;


pub use temperature::{ABSOLUTE_ZERO_CELSIUS, Temperature};
