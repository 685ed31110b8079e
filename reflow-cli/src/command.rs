//! The reflow command: validation, prompting, and the reformat run

use anyhow::{Context, Result};
use clap::Parser;
use reflow_core::{
    ReflowOptions, Reflower, DEFAULT_LINE_WIDTH, DEFAULT_SENTENCES_PER_PARAGRAPH,
};
use std::io;
use std::path::PathBuf;

use crate::{input, output, prompt};

/// Arguments for the reflow command
#[derive(Debug, Parser)]
#[command(name = "reflow", version)]
#[command(about = "Reformat short-line text into wrapped, sentence-grouped paragraphs")]
pub struct ReflowArgs {
    /// Input file to reformat (extension must be one of:
    /// .csv .txt .docx .pdf .md .json .text)
    pub input: PathBuf,

    /// Output file to write, replaced if it already exists (same extension
    /// rule as the input)
    pub output: PathBuf,

    /// Maximum characters per line; prompted for interactively when omitted
    #[arg(value_parser = parse_line_width, allow_hyphen_values = true)]
    pub line_width: Option<usize>,

    /// Sentences joined into each paragraph; prompted for interactively
    /// when omitted
    #[arg(value_parser = parse_sentences_per_paragraph, allow_hyphen_values = true)]
    pub sentences_per_paragraph: Option<usize>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn parse_line_width(raw: &str) -> Result<usize, String> {
    parse_positive_integer(raw, "Line length")
}

fn parse_sentences_per_paragraph(raw: &str) -> Result<usize, String> {
    parse_positive_integer(raw, "Sentences per paragraph")
}

fn parse_positive_integer(raw: &str, what: &str) -> Result<usize, String> {
    let value: i64 = raw
        .parse()
        .map_err(|_| format!("{what} must be a valid integer"))?;
    if value <= 0 {
        return Err(format!("{what} must be a positive integer greater than zero"));
    }
    Ok(value as usize)
}

impl ReflowArgs {
    /// Execute the reformat run end to end
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting reflow");
        log::debug!("Arguments: {:?}", self);

        // The whitelist is checked before anything touches the filesystem.
        input::validate_extension(&self.input)?;
        input::validate_extension(&self.output)?;
        input::ensure_exists(&self.input)?;

        let options = self.resolve_options()?;
        log::debug!("Resolved options: {options:?}");

        let content = input::read_document(&self.input)?;
        log::info!(
            "Read {} bytes from {}",
            content.len(),
            self.input.display()
        );

        let reflower = Reflower::new(options).context("Failed to reformat text")?;
        let reformatted = reflower.reformat(&content);

        output::write_document(&self.output, &reformatted)?;
        log::info!(
            "Wrote {} bytes to {}",
            reformatted.len(),
            self.output.display()
        );

        println!(
            "Successfully wrote reformatted text to: {}",
            self.output.display()
        );
        println!(
            "  each line is up to {} characters long",
            options.line_width
        );
        println!(
            "  each paragraph has up to {} sentences",
            options.sentences_per_paragraph
        );

        Ok(())
    }

    /// Take width and group size from the arguments, prompting on standard
    /// input for whichever was omitted
    fn resolve_options(&self) -> Result<ReflowOptions> {
        let line_width = match self.line_width {
            Some(width) => width,
            None => prompt::prompt_line_width(
                io::stdin().lock(),
                io::stdout().lock(),
                DEFAULT_LINE_WIDTH,
            )?,
        };

        let sentences_per_paragraph = match self.sentences_per_paragraph {
            Some(count) => count,
            None => prompt::prompt_sentences_per_paragraph(
                io::stdin().lock(),
                io::stdout().lock(),
                DEFAULT_SENTENCES_PER_PARAGRAPH,
            )?,
        };

        Ok(ReflowOptions {
            line_width,
            sentences_per_paragraph,
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_full_argument_form() {
        let args =
            ReflowArgs::try_parse_from(["reflow", "in.txt", "out.md", "80", "2"]).unwrap();
        assert_eq!(args.input, PathBuf::from("in.txt"));
        assert_eq!(args.output, PathBuf::from("out.md"));
        assert_eq!(args.line_width, Some(80));
        assert_eq!(args.sentences_per_paragraph, Some(2));
    }

    #[test]
    fn numeric_arguments_are_optional() {
        let args = ReflowArgs::try_parse_from(["reflow", "in.txt", "out.txt"]).unwrap();
        assert_eq!(args.line_width, None);
        assert_eq!(args.sentences_per_paragraph, None);
    }

    #[test]
    fn missing_output_argument_is_a_usage_error() {
        assert!(ReflowArgs::try_parse_from(["reflow", "in.txt"]).is_err());
    }

    #[test]
    fn too_many_arguments_is_a_usage_error() {
        assert!(
            ReflowArgs::try_parse_from(["reflow", "in.txt", "out.txt", "70", "3", "extra"])
                .is_err()
        );
    }

    #[test]
    fn negative_width_is_rejected_with_a_descriptive_message() {
        let err = ReflowArgs::try_parse_from(["reflow", "in.txt", "out.txt", "-5"])
            .unwrap_err()
            .to_string();
        assert!(err.contains("Line length must be a positive integer"));
    }

    #[test]
    fn zero_width_is_rejected() {
        let err = ReflowArgs::try_parse_from(["reflow", "in.txt", "out.txt", "0"])
            .unwrap_err()
            .to_string();
        assert!(err.contains("Line length must be a positive integer"));
    }

    #[test]
    fn non_numeric_width_is_rejected() {
        let err = ReflowArgs::try_parse_from(["reflow", "in.txt", "out.txt", "wide"])
            .unwrap_err()
            .to_string();
        assert!(err.contains("Line length must be a valid integer"));
    }

    #[test]
    fn invalid_group_size_is_rejected() {
        let err = ReflowArgs::try_parse_from(["reflow", "in.txt", "out.txt", "70", "0"])
            .unwrap_err()
            .to_string();
        assert!(err.contains("Sentences per paragraph must be a positive integer"));
    }

    #[test]
    fn verbosity_flag_counts_repetitions() {
        let args =
            ReflowArgs::try_parse_from(["reflow", "in.txt", "out.txt", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);
    }
}
