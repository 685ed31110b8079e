//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Input file does not exist
    FileNotFound(String),
    /// Input or output file name lacks an accepted extension
    UnsupportedExtension(String),
    /// Input file holds nothing but whitespace
    EmptyInput(String),
    /// Standard input ended while a prompt was still waiting for a value
    StdinClosed,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "Input file does not exist: {path}"),
            CliError::UnsupportedExtension(path) => write!(
                f,
                "Unsupported extension: {path} (both input and output files must end in one of: \
                 .csv .txt .docx .pdf .md .json .text)"
            ),
            CliError::EmptyInput(path) => write!(f, "Input file is empty: {path}"),
            CliError::StdinClosed => {
                write!(f, "Standard input closed before a value was entered")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
