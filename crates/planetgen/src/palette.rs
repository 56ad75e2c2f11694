//! Terrain color ramp
//!
//! Seven steps from deep shadow to highlight, all derived from the crust
//! color. The middle entry is the crust color itself.

use crate::color::{Rgb, shift};
use crate::state::PlanetState;

/// Number of colors in a terrain palette
pub const PALETTE_LEN: usize = 7;

/// (lightness, saturation, hue) shifts for each step; `None` keeps the base
const RAMP: [Option<(f64, f64, f64)>; PALETTE_LEN] = [
    Some((-45.0, 10.0, -15.0)),
    Some((-30.0, 5.0, -10.0)),
    Some((-15.0, 0.0, -5.0)),
    None,
    Some((15.0, 0.0, 5.0)),
    Some((30.0, -10.0, 10.0)),
    Some((50.0, -20.0, 15.0)),
];

/// Builds the ramp for a base color. No randomness is involved.
///
/// ```
/// use planetgen::color::Rgb;
/// use planetgen::palette::generate_palette;
///
/// let base = Rgb::from_u32(0x18181b);
/// let palette = generate_palette(base);
/// assert_eq!(palette[3], base);
/// assert_eq!(palette[0].to_hex(), "#0d0e12");
/// ```
pub fn generate_palette(base: Rgb) -> [Rgb; PALETTE_LEN] {
    RAMP.map(|step| match step {
        Some((l, s, h)) => shift(base, l, s, h),
        None => base,
    })
}

/// Palette for a planet's (possibly molten) crust
pub fn planet_palette(state: &PlanetState) -> [Rgb; PALETTE_LEN] {
    generate_palette(state.solid.color())
}
