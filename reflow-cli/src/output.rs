//! Output file writing

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Write the reformatted text to `path`, replacing any existing file
pub fn write_document(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text)
        .with_context(|| format!("Failed to write output file: {}", path.display()))
}
