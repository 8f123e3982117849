//! # rpack CLI entry point
//!
//! Parses command-line arguments and runs one validation pass. Uses clap
//! derive macros for argument parsing; diagnostics and warnings go to
//! stderr through the tracing subscriber, the success line goes to stdout.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rpack_cli::check::run_check;

/// Reasoning-pack JSON validator.
///
/// Detects whether a document is a GLOBAL reasoning pack or a
/// THREAD-specific pack from its top-level keys, then checks every
/// required field of the detected schema, reporting missing keys and
/// type mismatches together.
#[derive(Parser, Debug)]
#[command(name = "rpack", version, about, long_about = None)]
struct Cli {
    /// Path to the JSON document to validate.
    file: PathBuf,

    /// Enable verbose output. Repeat for more verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    // Argument errors exit 1, not clap's default of 2; this tool uses
    // only exit codes 0 and 1. --help and --version still exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    // Initialize tracing on stderr. Warnings are part of the output
    // contract, so the default filter keeps them enabled; RUST_LOG can
    // still override at verbosity 0.
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run_check(&cli.file) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
