//! Entry point for the reflow binary

use clap::Parser;
use reflow_cli::command::ReflowArgs;
use std::process;

fn main() {
    let args = ReflowArgs::parse();

    // {err:#} renders the full context chain on a single line.
    if let Err(err) = args.execute() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}
