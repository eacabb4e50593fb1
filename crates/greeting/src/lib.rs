//! # Greeting - core operations behind the hello_kiacha module boundary
//!
//! This crate owns the two operations the module boundary exposes: a wrapping
//! 32-bit addition and a process-wide immutable greeting constant. Boundary
//! crates (`hello-kiacha` for the raw C ABI, `kiacha-bindings` for
//! wasm-bindgen hosts) stay thin and delegate here.
//!
//! ## Greeting storage
//!
//! The greeting exists in two views over the same content:
//!
//! - [`greeting`] returns the Rust-facing `&'static str`.
//! - [`greeting_cstr`] returns a NUL-terminated `&'static CStr` suitable for
//!   handing across a C ABI as a raw pointer.
//!
//! The C view is constructed exactly once on first access via
//! [`once_cell::sync::Lazy`], so concurrent first callers cannot race on the
//! one-time write. Once constructed it is never reassigned: repeated queries
//! return identical content backed by identical storage, valid for the life
//! of the process.
//!
//! ## Example
//!
//! ```
//! use greeting::{add, greeting};
//!
//! assert_eq!(add(7, 8), 15);
//! assert_eq!(greeting(), "Hello Kiacha from WASM (C++)");
//! ```

use once_cell::sync::Lazy;
use std::ffi::{CStr, CString};

/// The greeting constant, byte-exact for wire/display compatibility with
/// hosts that check the literal content.
pub const GREETING: &str = "Hello Kiacha from WASM (C++)";

// One-time construction of the NUL-terminated view. The literal has no
// interior NUL, so the expect cannot fire.
static GREETING_C: Lazy<CString> =
    Lazy::new(|| CString::new(GREETING).expect("greeting has no interior NUL byte"));

/// Return the wrapping sum of two signed 32-bit integers.
///
/// Total over all representable inputs with no side effects. On overflow the
/// result follows two's-complement wraparound, which is observable behavior:
/// `add(i32::MAX, 1)` yields `i32::MIN`.
///
/// # Example
///
/// ```
/// use greeting::add;
///
/// assert_eq!(add(2, 3), 5);
/// assert_eq!(add(i32::MAX, 1), i32::MIN);
/// ```
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Return a read-only view of the greeting constant.
///
/// Idempotent: every call returns byte-identical content from the same
/// static storage.
pub fn greeting() -> &'static str {
    GREETING
}

/// Return the NUL-terminated C view of the greeting constant.
///
/// The backing buffer is never deallocated or mutated, so a raw pointer
/// obtained from it stays valid for the life of the module. Callers receive
/// a read-only view and must not attempt to free it.
pub fn greeting_cstr() -> &'static CStr {
    &GREETING_C
}
