//! logsift - Suppression-aware log line filter
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use logsift::{filter_file, ExclusionPatterns};

/// Suppression-aware log line filter
#[derive(Parser, Debug)]
#[command(name = "logsift")]
#[command(about = "Filter a log file, dropping INFO/today lines and SEVERE blocks", long_about = None)]
struct Args {
    /// Path to the log file to read
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Path to write the filtered log to (created or truncated)
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    logsift::logging::init();

    // Computed once, before processing begins, so the date filter is stable
    // for the whole run.
    let patterns = ExclusionPatterns::for_today();

    match filter_file(&args.input, &args.output, patterns) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
