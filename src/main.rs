use std::fs;
use std::io;
use std::path::PathBuf;

use clap::Parser;
use git_status_lines::{StatusReport, format_status};
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "git-status-lines")]
#[command(about = "Parse git status porcelain output into grouped change records")]
struct Cli {
    /// Porcelain text to parse; reads stdin when omitted
    input: Option<PathBuf>,

    /// Fail on the first unparseable line instead of skipping it
    #[arg(long)]
    strict: bool,

    /// Enable debug logging to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    simple_logging::log_to_stderr(if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });

    let text = match &cli.input {
        Some(path) => fs::read_to_string(path)?,
        None => io::read_to_string(io::stdin())?,
    };

    let report = if cli.strict {
        StatusReport::parse_strict(&text)?
    } else {
        StatusReport::parse(&text)
    };

    print!("{}", format_status(&report));
    Ok(())
}
