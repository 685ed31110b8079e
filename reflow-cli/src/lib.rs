//! Reflow CLI library
//!
//! This library provides the command-line interface for the reflow
//! text reformatter: argument handling, interactive prompting, file
//! validation, and file I/O around the `reflow-core` pipeline.

pub mod command;
pub mod error;
pub mod input;
pub mod output;
pub mod prompt;

pub use error::{CliError, CliResult};
