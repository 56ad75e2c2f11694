use serde::{Deserialize, Serialize};

/// Offset between the Celsius and Kelvin scales.
pub const ABSOLUTE_ZERO_CELSIUS: f64 = -273.15;

/// A temperature stored in Kelvin.
///
/// Material catalogs quote their phase transitions in Celsius, but the
/// generator compares them on an absolute scale: a world is "molten" when its
/// surface is more than three times hotter than a melting point, which only
/// makes sense in Kelvin.
///
/// # Examples
///
/// ```rust
/// use units::Temperature;
///
/// let surface = Temperature::from_celsius(87.0);
/// let boil = Temperature::from_celsius(-34.0);
/// assert!(surface.exceeds(boil, 1.0));
/// assert!(!surface.exceeds(boil, 3.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Temperature(f64);

impl Temperature {
    /// Creates a temperature from a value in Kelvin.
    pub fn from_kelvin(value: f64) -> Self {
        Self(value)
    }

    /// Creates a temperature from a value in Celsius (K = °C + 273.15).
    pub fn from_celsius(value: f64) -> Self {
        Self(value - ABSOLUTE_ZERO_CELSIUS)
    }

    pub fn to_kelvin(&self) -> f64 {
        self.0
    }

    /// Returns true when this temperature is strictly above `factor` times
    /// `threshold`, both measured in Kelvin.
    pub fn exceeds(&self, threshold: Temperature, factor: f64) -> bool {
        self.0 > threshold.0 * factor
    }
}
