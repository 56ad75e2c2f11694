//! WASM bindings for procedural planet generation.
//!
//! This crate hands generated planets to a JavaScript renderer as plain
//! objects. Every function is a pure function of its arguments; the same
//! seed always returns the same data.
//!
//! ## Quick Start (JavaScript)
//!
//! ```javascript
//! import init, { generate_snapshot, lens_map } from 'planetgen-wasm';
//!
//! await init();
//!
//! // Everything needed to draw one planet
//! const planet = generate_snapshot("test-1", { waterLevel: 60 });
//! console.log(`${planet.state.solid.material.name}, ${planet.clouds.length} cloud layers`);
//!
//! // PNG bytes for the cloud displacement filter
//! const png = lens_map(30);
//! const uri = URL.createObjectURL(new Blob([png], { type: 'image/png' }));
//! ```

use serde::Serialize;
use wasm_bindgen::prelude::*;

mod color;
mod planet;


// =============================================================================
// Serialization helpers
// =============================================================================

pub(crate) fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

pub(crate) fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}

// Types serialized by hand rather than derived
#[wasm_bindgen(typescript_custom_section)]
const TS_SHARED_TYPES: &'static str = r##"
/** Color as a lowercase "#rrggbb" string */
export type Rgb = string;
/** Canvas point [x, y] on the 1000x1000 planet canvas */
export type Point2<T> = [T, T];
"##;
