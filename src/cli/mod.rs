//! CLI module for tally
//!
//! This module provides the command-line interface around `tally_core`.
//!
//! ## Commands
//!
//! - `sum <N>...` - Sum integers
//! - `tails <SEQ>...` - Sum each comma-separated sequence without its first element
//! - `len <TEXT>` - Report the byte and character length of a text value
//! - `bang [TEXT]` - Upper-case a message and append one `!` per byte
//!
//! ## Modules
//!
//! - `args` - Integer and sequence parsing
//! - `commands` - Command implementations
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod args;
pub mod commands;

use std::fmt;
use std::process;

use clap::{Parser, Subcommand};

use crate::version::TALLY_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Sum integer sequences and measure UTF-8 text
#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(version = TALLY_VERSION)]
#[command(about = "Sum integer sequences and measure UTF-8 text", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sum integers
    Sum {
        /// Integers to add up (none sums to 0)
        #[arg(value_name = "N", allow_hyphen_values = true)]
        numbers: Vec<String>,
    },

    /// Sum each sequence without its first element
    Tails {
        /// Comma-separated integers, e.g. `1,2,3` (use "" for an empty sequence)
        #[arg(value_name = "SEQ", allow_hyphen_values = true)]
        sequences: Vec<String>,
    },

    /// Report the byte and character length of a text value
    Len {
        /// Text to measure
        #[arg(value_name = "TEXT", allow_hyphen_values = true)]
        text: String,
    },

    /// Upper-case a message and append one `!` per byte
    Bang {
        /// Message to shout (prints a usage prompt when omitted)
        #[arg(value_name = "TEXT", allow_hyphen_values = true)]
        text: Option<String>,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
pub fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Sum { numbers } => commands::sum_numbers(&numbers),
        Command::Tails { sequences } => commands::sum_tails(&sequences),
        Command::Len { text } => commands::measure_text(&text),
        Command::Bang { text } => commands::bang(text.as_deref()),
    }
}

// ============================================================================
// Tests
// ============================================================================
