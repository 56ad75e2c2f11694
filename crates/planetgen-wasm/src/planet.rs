//! WASM bindings for planet generation.
//!
//! Each generator is exposed on its own so a front end can regenerate only
//! what changed; `generate_snapshot` returns everything at once.

use log::debug;
use wasm_bindgen::prelude::*;

use planetgen::{GenerationSession, LensMap, ViewParams};

use crate::{from_js, to_js};

/// Reads optional view parameters; `undefined` or `null` gives the planet's
/// own suggested view.
fn view_params(session: &GenerationSession, view: JsValue) -> Result<ViewParams, JsError> {
    if view.is_undefined() || view.is_null() {
        Ok(ViewParams::for_planet(session.state()))
    } else {
        from_js(view)
    }
}

// =============================================================================
// Planet State
// =============================================================================

/// Generate the planet state for a seed.
///
/// # Returns
/// A PlanetState: temperatures, crust and ocean materials, atmosphere,
/// biosphere, tilt, rings flag and terrain parameters.
#[wasm_bindgen]
pub fn generate_planet(seed: &str) -> Result<JsValue, JsError> {
    to_js(GenerationSession::new(seed).state())
}

/// Seven-color terrain ramp from the crust color.
#[wasm_bindgen]
pub fn generate_palette(seed: &str) -> Result<JsValue, JsError> {
    to_js(&GenerationSession::new(seed).palette())
}

/// Jittered elevation thresholds, one per palette color.
#[wasm_bindgen]
pub fn generate_layer_thresholds(seed: &str) -> Vec<f64> {
    GenerationSession::new(seed).layer_thresholds()
}

// =============================================================================
// Geometry
// =============================================================================

/// Fracture lines as point lists. Fully hidden fractures are empty lists.
#[wasm_bindgen]
pub fn generate_geology(seed: &str) -> Result<JsValue, JsError> {
    to_js(&GenerationSession::new(seed).geology())
}

/// SVG path data for each fracture line (empty strings for hidden ones).
#[wasm_bindgen]
pub fn generate_geology_svg(seed: &str) -> Vec<String> {
    GenerationSession::new(seed)
        .geology()
        .iter()
        .map(|p| p.to_svg_path())
        .collect()
}

/// Cloud layers in paint order.
#[wasm_bindgen]
pub fn generate_clouds(seed: &str) -> Result<JsValue, JsError> {
    to_js(&GenerationSession::new(seed).clouds())
}

/// Ring system, or `null` for planets without rings.
#[wasm_bindgen]
pub fn generate_rings(seed: &str) -> Result<JsValue, JsError> {
    to_js(&GenerationSession::new(seed).rings())
}

// =============================================================================
// Rendering
// =============================================================================

/// Mask intercepts, gradients and flags for the renderer.
///
/// # Arguments
/// * `seed` - Planet seed
/// * `view` - Optional ViewParams; missing fields use defaults
#[wasm_bindgen]
pub fn render_hints(seed: &str, view: JsValue) -> Result<JsValue, JsError> {
    let session = GenerationSession::new(seed);
    let view = view_params(&session, view)?;
    to_js(&session.render_hints(&view))
}

/// Everything generated for one planet.
///
/// # Arguments
/// * `seed` - Planet seed
/// * `view` - Optional ViewParams; missing fields use defaults
#[wasm_bindgen]
pub fn generate_snapshot(seed: &str, view: JsValue) -> Result<JsValue, JsError> {
    let session = GenerationSession::new(seed);
    let view = view_params(&session, view)?;
    let snapshot = session.snapshot(&view);
    debug!(
        "snapshot {:?}: {} clouds, {} fractures",
        seed,
        snapshot.clouds.len(),
        snapshot.geology.len()
    );
    to_js(&snapshot)
}

/// PNG bytes of the 256×256 lens displacement map.
///
/// Wrap them in a `data:image/png` URI for the displacement filter.
#[wasm_bindgen]
pub fn lens_map(strength: f64) -> Result<Vec<u8>, JsError> {
    LensMap::with_strength(strength)
        .to_png()
        .map_err(|e| JsError::new(&e.to_string()))
}
