#![forbid(unsafe_code)]
//! tally: sum integer sequences and measure UTF-8 text.
//!
//! The computations live in [`tally_core`]; this crate is the command-line shell that parses
//! arguments, calls the core, and renders the returned values.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module
//!   enforces `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod version;

pub use tally_core::{aggregate, text};
