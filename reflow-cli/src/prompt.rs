//! Interactive prompts for missing numeric arguments
//!
//! Prompts are generic over `BufRead`/`Write` so tests can drive them with
//! in-memory buffers instead of a terminal.

use crate::error::CliError;
use anyhow::Result;
use std::io::{BufRead, Write};

/// Ask for the line width until the user provides a usable answer.
///
/// A blank line accepts `default`.
pub fn prompt_line_width<R: BufRead, W: Write>(input: R, output: W, default: usize) -> Result<usize> {
    prompt_positive_integer(
        input,
        output,
        &format!("How many characters per line would you like (default {default}): "),
        "Please enter a valid number (e.g., 50, 80, 100).",
        default,
    )
}

/// Ask for the paragraph size until the user provides a usable answer.
///
/// A blank line accepts `default`.
pub fn prompt_sentences_per_paragraph<R: BufRead, W: Write>(
    input: R,
    output: W,
    default: usize,
) -> Result<usize> {
    prompt_positive_integer(
        input,
        output,
        &format!("How many sentences per paragraph would you like (default {default}): "),
        "Please enter a valid number (e.g., 2, 3, 5).",
        default,
    )
}

/// Prompt loop shared by both questions: blank accepts the default,
/// anything else must parse as a positive base-10 integer. Invalid input
/// prints a correction and re-prompts; end-of-input is an error.
fn prompt_positive_integer<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    question: &str,
    parse_help: &str,
    default: usize,
) -> Result<usize> {
    let mut line = String::new();
    loop {
        write!(output, "{question}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(CliError::StdinClosed.into());
        }

        let answer = line.trim();
        if answer.is_empty() {
            return Ok(default);
        }

        match answer.parse::<i64>() {
            Ok(value) if value > 0 => return Ok(value as usize),
            Ok(_) => writeln!(output, "Please enter a positive number greater than 0.")?,
            Err(_) => writeln!(output, "{parse_help}")?,
        }
    }
}
