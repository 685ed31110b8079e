//! Input file validation and reading

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// File name extensions accepted for both the input and output paths.
///
/// The check is purely cosmetic: whatever the extension, content is read
/// and written as plain UTF-8 text.
pub const ACCEPTED_EXTENSIONS: [&str; 7] =
    [".csv", ".txt", ".docx", ".pdf", ".md", ".json", ".text"];

/// Check that a file name ends in one of the accepted extensions
pub fn validate_extension(path: &Path) -> Result<()> {
    let name = path.to_string_lossy();
    if ACCEPTED_EXTENSIONS.iter().any(|ext| name.ends_with(ext)) {
        Ok(())
    } else {
        Err(CliError::UnsupportedExtension(name.into_owned()).into())
    }
}

/// Check that the input file exists before anything is opened
pub fn ensure_exists(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(CliError::FileNotFound(path.display().to_string()).into())
    }
}

/// Read the input document as UTF-8 text.
///
/// Fails if the file cannot be read or decoded, or if it holds nothing
/// but whitespace.
pub fn read_document(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;

    if content.trim().is_empty() {
        return Err(CliError::EmptyInput(path.display().to_string()).into());
    }

    Ok(content)
}
