//! Argument parsing for the tally commands.
//!
//! Integers are parsed by hand rather than through clap's value parsers so that a bad token
//! surfaces as a typed [`ArgError`] carrying the offending text and a help hint.

use std::num::ParseIntError;

use miette::Diagnostic;
use thiserror::Error;

/// Errors produced while turning command-line tokens into integer sequences.
#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum ArgError {
    #[error("'{token}' is not a valid integer: {source}")]
    #[diagnostic(
        code(tally::args::invalid_integer),
        help("integers are written in base 10, optionally signed, e.g. `42` or `-7`")
    )]
    InvalidInteger {
        token: String,
        #[source]
        source: ParseIntError,
    },
}

/// Parse one signed integer token, ignoring surrounding whitespace.
pub fn parse_int(token: &str) -> Result<i64, ArgError> {
    token.trim().parse::<i64>().map_err(|source| ArgError::InvalidInteger {
        token: token.to_string(),
        source,
    })
}

/// Parse a list of tokens, one integer each.
pub fn parse_ints<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<i64>, ArgError> {
    tokens.iter().map(|t| parse_int(t.as_ref())).collect()
}

/// Parse a comma-separated sequence such as `1,2,3`.
///
/// ## Notes
/// - The empty string (or a string of only whitespace) is the empty sequence.
/// - Empty items between commas (`1,,2`) are rejected.
pub fn parse_sequence(raw: &str) -> Result<Vec<i64>, ArgError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    raw.split(',').map(parse_int).collect()
}
