//! WASM bindings for cigar-core.
//!
//! Exposes `expand`, `compress` and `tokenize` as `#[wasm_bindgen]` functions
//! callable from JavaScript/TypeScript. Parsing is always strict here.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p cigar-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/cigar_wasm.wasm
//! ```

use wasm_bindgen::prelude::*;

/// Expand a CIGAR string into its edit string.
///
/// Throws a JS error if the input is not a well-formed CIGAR string.
#[wasm_bindgen]
pub fn expand(cigar: &str) -> std::result::Result<String, JsValue> {
    cigar_core::expand(cigar).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Compress an edit string into its canonical CIGAR string. Never throws.
#[wasm_bindgen]
pub fn compress(edits: &str) -> String {
    cigar_core::compress(edits)
}

/// Tokenize a CIGAR string into a JSON array of `{"count", "op"}` objects.
#[wasm_bindgen]
pub fn tokenize(cigar: &str) -> std::result::Result<String, JsValue> {
    let runs = cigar_core::tokenize(cigar).map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_json::to_string(&runs).map_err(|e| JsValue::from_str(&e.to_string()))
}
