#![forbid(unsafe_code)]
//! Provide pure aggregation and text-measurement helpers shared by the tally CLI and its tests.
//!
//! This crate is intentionally small and dependency-free. Every function takes borrowed input,
//! returns an owned or borrowed result, and has no side effects.
//!
//! ## Notes
//!
//! - This is a "semantic core" crate: **no IO**, no global state, no logging.
//! - Current scope: integer sequence sums (`aggregate`) and UTF-8 byte vs. character lengths (`text`).
//! - Every operation is total over its input domain; there is no error type.

pub mod aggregate;
pub mod text;

pub use aggregate::{sum, sum_all, sum_all_tails, tail};
pub use text::{TextLength, banger, byte_len, char_len};
