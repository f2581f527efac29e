mod error;
mod lines;
mod models;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use log::{info, LevelFilter};
use num_format::{Locale, ToFormattedString};

pub use crate::error::DedupError;
pub use crate::lines::{dedup_reader, write_lines};
pub use crate::models::{SeenLines, Summary};

#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// File to read lines from
    input: PathBuf,

    /// File to create or overwrite with the distinct lines
    output: PathBuf,

    /// Do not print the summary
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

pub fn init_logging(args: &Args) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    match args.verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Info);
        }
        _ => {
            builder.filter_level(LevelFilter::Debug);
        }
    }
    builder.init();
}

/// Reads `input` completely, then writes its distinct non-blank trimmed lines
/// to `output` in order of first occurrence.
///
/// The output is not opened until the input has been fully read, so a bad
/// input never creates or truncates `output`.
pub fn deduplicate(input: &Path, output: &Path) -> Result<Summary, DedupError> {
    let file = fs::File::open(input).map_err(|e| DedupError::input_open(input, e))?;
    let (seen, summary) =
        dedup_reader(io::BufReader::new(file)).map_err(|source| DedupError::InputUnreadable {
            path: input.to_path_buf(),
            source,
        })?;

    let to_output_error = |source| DedupError::OutputUnwritable {
        path: output.to_path_buf(),
        source,
    };
    let file = fs::File::create(output).map_err(to_output_error)?;
    write_lines(file, &seen).map_err(to_output_error)?;

    Ok(summary)
}

pub fn run(args: Args) -> Result<()> {
    info!(
        "deduplicating {} -> {}",
        args.input.display(),
        args.output.display()
    );
    let summary = deduplicate(&args.input, &args.output)?;
    info!("wrote {} lines to {}", summary.kept, args.output.display());

    if !args.quiet {
        println!(
            "Kept: {} of {} lines ({} duplicates, {} blank)",
            summary.kept.to_formatted_string(&Locale::en),
            summary.read.to_formatted_string(&Locale::en),
            summary.duplicates.to_formatted_string(&Locale::en),
            summary.blank.to_formatted_string(&Locale::en),
        );
    }
    Ok(())
}
