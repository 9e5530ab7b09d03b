//! CLI command implementations
//!
//! Each command has a pure `render_*` half that returns the text to print, and a thin wrapper
//! that prints it. All wrappers return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use miette::Diagnostic;
use tally_core::aggregate::{sum, sum_all_tails};
use tally_core::text::{TextLength, banger};

use super::args::{ArgError, parse_ints, parse_sequence};
use super::{CliError, CliResult, ExitCode};

/// Shown by `bang` when no message argument is present.
pub const BANG_PROMPT: &str = "Please provide a message eg: hello!";

impl From<ArgError> for CliError {
    fn from(err: ArgError) -> Self {
        let mut message = format!("ERROR: {err}");
        if let Some(help) = err.help() {
            message.push_str(&format!("\n  help: {help}"));
        }
        CliError::failure(message)
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Render the sum of integer tokens.
pub fn render_sum<S: AsRef<str>>(tokens: &[S]) -> Result<String, ArgError> {
    let numbers = parse_ints(tokens)?;
    Ok(sum(&numbers).to_string())
}

/// Render the tail sums of comma-separated sequences as a bracketed list, e.g. `[0, 0, 5]`.
pub fn render_tails<S: AsRef<str>>(sequences: &[S]) -> Result<String, ArgError> {
    let batch = sequences
        .iter()
        .map(|raw| parse_sequence(raw.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(format!("{:?}", sum_all_tails(&batch)))
}

/// Render both lengths of `text`, one line per unit.
pub fn render_len(text: &str) -> String {
    let len = TextLength::measure(text);
    format!("{text:?} is {} bytes\n{text:?} is {} characters", len.bytes, len.chars)
}

/// Render the shouted message, or a usage prompt when no message was given.
///
/// An empty message is still a message: it renders as the empty string.
pub fn render_bang(text: Option<&str>) -> String {
    match text {
        Some(text) => banger(text),
        None => BANG_PROMPT.to_string(),
    }
}

// ============================================================================
// Commands
// ============================================================================

#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn sum_numbers(tokens: &[String]) -> CliResult<ExitCode> {
    let out = render_sum(tokens).inspect_err(|err| tracing::warn!(%err, "rejected sum input"))?;
    tracing::debug!(result = %out, "summed sequence");
    println!("{out}");
    Ok(ExitCode::SUCCESS)
}

#[tracing::instrument(skip_all, fields(batch_len = sequences.len()))]
pub fn sum_tails(sequences: &[String]) -> CliResult<ExitCode> {
    let out = render_tails(sequences).inspect_err(|err| tracing::warn!(%err, "rejected tails input"))?;
    tracing::debug!(result = %out, "summed tails");
    println!("{out}");
    Ok(ExitCode::SUCCESS)
}

#[tracing::instrument(skip_all, fields(byte_len = text.len()))]
pub fn measure_text(text: &str) -> CliResult<ExitCode> {
    let len = TextLength::measure(text);
    tracing::debug!(bytes = len.bytes, chars = len.chars, single_byte = len.is_single_byte(), "measured text");
    println!("{}", render_len(text));
    Ok(ExitCode::SUCCESS)
}

#[tracing::instrument(skip_all, fields(has_text = text.is_some()))]
pub fn bang(text: Option<&str>) -> CliResult<ExitCode> {
    println!("{}", render_bang(text));
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn renders_sum() {
        assert_eq!(render_sum(&["1", "2", "3", "4", "5"]).unwrap(), "15");
        assert_eq!(render_sum::<&str>(&[]).unwrap(), "0");
        assert_eq!(render_sum(&["-3", "3", "-1"]).unwrap(), "-1");
    }

    #[test]
    fn renders_tails_as_list() {
        assert_eq!(render_tails(&["", "7", "1,2,3"]).unwrap(), "[0, 0, 5]");
        assert_eq!(render_tails(&["1,2,3,4,5"]).unwrap(), "[14]");
        assert_eq!(render_tails::<&str>(&[]).unwrap(), "[]");
    }

    #[test]
    fn renders_lengths_like_the_string_length_demo() {
        assert_eq!(render_len("İnanç"), "\"İnanç\" is 7 bytes\n\"İnanç\" is 5 characters");
        assert_eq!(render_len("carl"), "\"carl\" is 4 bytes\n\"carl\" is 4 characters");
    }

    #[test]
    fn arg_error_becomes_failure_with_help() {
        let err: CliError = render_sum(&["abc"]).unwrap_err().into();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.starts_with("ERROR: 'abc' is not a valid integer"));
        assert!(err.message.contains("help:"));
    }

    #[test]
    fn bang_renders_empty_message_as_empty() {
        assert_eq!(render_bang(Some("")), "");
        assert_eq!(bang(Some("")).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn bang_prompts_when_message_is_missing() {
        assert_eq!(render_bang(None), BANG_PROMPT);
        assert_eq!(bang(None).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn bang_shouts_message() {
        assert_eq!(render_bang(Some("hello")), "HELLO!!!!!");
    }
}
