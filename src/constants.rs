//! Fixed parameters of the Goldilocks field.
//!
//! These values determine every root of unity the crate derives, so they are
//! compile-time constants rather than runtime configuration.

/// Field modulus `p = 2^64 - 2^32 + 1`.
pub const MODULUS: u64 = 18446744069414584321;

/// Generator of the full multiplicative group.
pub const GENERATOR: u64 = 7;

/// Order of the multiplicative group, `p - 1`.
pub const ROOT_ORDER: u64 = MODULUS - 1;

/// Products whose degree is below this bound are multiplied schoolbook-style.
pub const FAST_MULTIPLY_THRESHOLD: usize = 8;
