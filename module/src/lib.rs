//! Raw `extern "C"` surface of the hello_kiacha WASM module.
//!
//! Both entry points are `#[no_mangle] pub extern "C"` so they stay visible
//! and callable after dead-code elimination and fat LTO. The input and output
//! of `add` are primitive types pushed directly onto the Wasm stack; `greet`
//! returns a pointer into static storage inside exported linear memory, which
//! the host decodes as a NUL-terminated string.

use std::os::raw::c_char;

/// Return the wrapping sum of two signed 32-bit integers.
///
/// Overflow follows two's-complement wraparound: `add(i32::MAX, 1)` returns
/// `i32::MIN`. Total for all inputs, no side effects.
#[no_mangle]
pub extern "C" fn add(a: i32, b: i32) -> i32 {
    greeting::add(a, b)
}

/// Return a pointer to the NUL-terminated greeting in static storage.
///
/// The backing buffer is constructed once and never deallocated or mutated,
/// so the returned pointer stays valid for the life of the module. The host
/// receives a read-only view and must not free it through the boundary.
#[no_mangle]
pub extern "C" fn greet() -> *const c_char {
    greeting::greeting_cstr().as_ptr()
}
