//! wasm-bindgen boundary for JS hosts.
//!
//! Hosts that load the module through wasm-bindgen glue get marshaled values
//! instead of raw pointers: `greet` copies the greeting into an owned JS
//! string, so no host ever holds a view into linear memory. The core
//! operations live in the `greeting` crate.

use wasm_bindgen::prelude::*;

// Runs once when the JS glue initializes the module.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Wrapping sum of two signed 32-bit integers.
///
/// Overflow wraps with two's-complement semantics, matching the raw C-ABI
/// export.
#[wasm_bindgen]
pub fn add(a: i32, b: i32) -> i32 {
    greeting::add(a, b)
}

/// The greeting constant, marshaled into an owned string for the host.
///
/// Byte-identical content on every call. Marshaling is a binding-layer
/// concern; the core never manages foreign memory lifetimes.
#[wasm_bindgen]
pub fn greet() -> String {
    greeting::greeting().to_string()
}
