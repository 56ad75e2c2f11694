//! RGB/HSL color handling
//!
//! Every derived color in the generator (palettes, cloud tints, ring bands,
//! molten and sediment variants) is produced by [`shift`]: convert to HSL,
//! nudge lightness, saturation and hue, clamp, and convert back.

use std::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Lightness floor applied by [`shift`]; keeps shadows from going pure black
pub const MIN_LIGHTNESS: f64 = 6.0;

/// Lightness ceiling applied by [`shift`]; keeps highlights from going pure white
pub const MAX_LIGHTNESS: f64 = 95.0;

/// Errors from parsing external hex color strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("expected 6 hex digits, got {0:?}")]
    Length(String),
    #[error("invalid hex digit in {0:?}")]
    Digit(String),
}

/// An 8-bit sRGB color.
///
/// Serializes as a lowercase `#rrggbb` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a packed `0xRRGGBB` literal.
    pub const fn from_u32(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// Parses `#rrggbb` or `rrggbb`.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorError::Length(hex.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ColorError::Digit(hex.to_string()))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Lowercase `#rrggbb`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_hsl(self) -> Hsl {
        Hsl::from(self)
    }

    /// Shorthand for [`shift`]
    pub fn shifted(self, lightness: f64, saturation: f64, hue: f64) -> Self {
        shift(self, lightness, saturation, hue)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Rgb::from_hex(&hex).map_err(de::Error::custom)
    }
}

/// Hue in degrees [0, 360), saturation and lightness in percent [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl From<Rgb> for Hsl {
    fn from(color: Rgb) -> Self {
        let r = f64::from(color.r) / 255.0;
        let g = f64::from(color.g) / 255.0;
        let b = f64::from(color.b) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            return Self {
                h: 0.0,
                s: 0.0,
                l: l * 100.0,
            };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Self {
            h: h / 6.0 * 360.0,
            s: s * 100.0,
            l: l * 100.0,
        }
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        let l = hsl.l / 100.0;
        let a = hsl.s * l.min(1.0 - l) / 100.0;
        let channel = |n: f64| {
            let k = (n + hsl.h / 30.0) % 12.0;
            let value = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
            (255.0 * value).round().clamp(0.0, 255.0) as u8
        };
        Self {
            r: channel(0.0),
            g: channel(8.0),
            b: channel(4.0),
        }
    }
}

/// The clamped HSL that [`shift`] converts back to RGB.
pub fn shift_hsl(color: Rgb, lightness: f64, saturation: f64, hue: f64) -> Hsl {
    let hsl = Hsl::from(color);
    let mut h = (hsl.h + hue) % 360.0;
    if h < 0.0 {
        h += 360.0;
    }
    Hsl {
        h,
        s: (hsl.s + saturation).clamp(0.0, 100.0),
        l: (hsl.l + lightness).clamp(MIN_LIGHTNESS, MAX_LIGHTNESS),
    }
}

/// Shifts lightness, saturation and hue of `color`.
///
/// Lightness is clamped to [6, 95], saturation to [0, 100], and hue wraps
/// modulo 360.
///
/// # Example
/// ```
/// use planetgen::color::{Rgb, shift};
///
/// let white = Rgb::from_u32(0xffffff);
/// assert_eq!(shift(white, 10.0, 0.0, 0.0).to_hex(), "#f2f2f2");
/// ```
pub fn shift(color: Rgb, lightness: f64, saturation: f64, hue: f64) -> Rgb {
    Rgb::from(shift_hsl(color, lightness, saturation, hue))
}
