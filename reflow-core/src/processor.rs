//! The composed reflow pipeline

use crate::config::ReflowOptions;
use crate::error::Result;
use crate::normalize::normalize_whitespace;
use crate::paragraph::group_sentences;
use crate::sentence::split_sentences;
use crate::wrap::wrap_paragraph;

/// Reformats raw text into wrapped, sentence-grouped paragraphs.
///
/// Options are validated once at construction; after that,
/// [`reformat`](Reflower::reformat) is a pure function of its input.
#[derive(Debug, Clone)]
pub struct Reflower {
    options: ReflowOptions,
}

impl Reflower {
    /// Create a reflower, validating the options up front
    pub fn new(options: ReflowOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// The options this reflower was built with
    pub fn options(&self) -> &ReflowOptions {
        &self.options
    }

    /// Run the full pipeline: normalize whitespace, split into sentences,
    /// group into paragraphs, wrap each paragraph, and join the wrapped
    /// paragraphs with blank lines.
    ///
    /// The input's own line structure has no influence on the result, and
    /// empty or all-whitespace input produces an empty string.
    pub fn reformat(&self, raw: &str) -> String {
        let normalized = normalize_whitespace(raw);
        let sentences = split_sentences(&normalized);
        let paragraphs = group_sentences(&sentences, self.options.sentences_per_paragraph);

        let wrapped: Vec<String> = paragraphs
            .iter()
            .map(|paragraph| wrap_paragraph(paragraph, self.options.line_width).join("\n"))
            .collect();

        wrapped.join("\n\n")
    }
}

impl Default for Reflower {
    fn default() -> Self {
        // Default options are always valid.
        Self {
            options: ReflowOptions::default(),
        }
    }
}

/// Reformat `raw` with `options` in a single call
pub fn reformat(raw: &str, options: ReflowOptions) -> Result<String> {
    Ok(Reflower::new(options)?.reformat(raw))
}
