//! WASM bindings for color utilities.

use wasm_bindgen::prelude::*;

use planetgen::{Hsl, Rgb, shift};

use crate::to_js;

/// Shift a "#rrggbb" color in HSL space.
///
/// Lightness is clamped to [6, 95], saturation to [0, 100], and hue wraps.
///
/// # Errors
/// Fails when `hex` is not a 6-digit hex color.
#[wasm_bindgen]
pub fn shift_color(hex: &str, lightness: f64, saturation: f64, hue: f64) -> Result<String, JsError> {
    let color = Rgb::from_hex(hex).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(shift(color, lightness, saturation, hue).to_hex())
}

/// Convert a "#rrggbb" color to `{ h, s, l }`.
#[wasm_bindgen]
pub fn hex_to_hsl(hex: &str) -> Result<JsValue, JsError> {
    let color = Rgb::from_hex(hex).map_err(|e| JsError::new(&e.to_string()))?;
    to_js(&Hsl::from(color))
}
