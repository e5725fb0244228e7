//! WASM bindings for Gate Graph.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { gate_graph_to_dot } from 'gate_graph';
//!
//! await init();
//!
//! const dot = gate_graph_to_dot(`x00: 1
//! y00: 0
//!
//! x00 AND y00 -> z00
//! `);
//! ```

use wasm_bindgen::prelude::*;

use crate::error::GateGraphError;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Convert a gate listing into a DOT graph description.
///
/// # Arguments
/// * `input` - The full listing, header included
///
/// # Returns
/// The DOT text, or an error string if a gate line is malformed.
#[wasm_bindgen]
pub fn gate_graph_to_dot(input: &str) -> Result<String, JsValue> {
    crate::convert(input).map_err(|e| {
        let err = GateGraphError::WasmError {
            message: e.to_string(),
        };
        JsValue::from_str(&err.to_string())
    })
}
