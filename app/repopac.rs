//! Command-line interface for repopac.
//!
//! Collects the report for every path given on the command line and prints it
//! to stdout in one write once all paths have been processed.

use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser};
use repopac::Report;
use std::env;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::exit;

/// RepoPac can help you package repository's content
#[derive(Parser)]
#[command(
    name = "repopac",
    version,
    about,
    long_about = None,
    override_usage = "repopac [PATH ...] [OPTIONS]",
    disable_version_flag = true
)]
struct Cli {
    /// One directory or one or more files
    #[arg(value_name = "PATH", default_value = ".")]
    paths: Vec<PathBuf>,

    /// Show version and exit
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,
}

const KNOWN_FLAGS: [&str; 4] = ["-h", "--help", "-v", "--version"];

/// Finds the first flag-like argument that is not spelled exactly as a known flag.
///
/// Arguments are scanned left to right and scanning stops at the first known
/// flag, which clap then handles. Clap alone would accept `-` and anything after
/// `--` as paths and would unbundle `-vh`; all of these are unknown options here.
fn first_unknown_option(args: &[OsString]) -> Option<String> {
    for arg in args.iter().skip(1) {
        let arg = arg.to_string_lossy();
        if KNOWN_FLAGS.contains(&arg.as_ref()) {
            return None;
        }
        if arg.starts_with('-') {
            return Some(arg.into_owned());
        }
    }
    None
}

fn parse_args() -> Cli {
    let args: Vec<OsString> = env::args_os().collect();
    if let Some(arg) = first_unknown_option(&args) {
        let e = Cli::command().error(
            ErrorKind::UnknownArgument,
            format!("unexpected argument '{}' found", arg),
        );
        let _ = e.print();
        exit(1);
    }
    match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout; everything else is a usage error.
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            exit(code);
        }
    }
}

#[cfg(feature = "logging")]
fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}

fn main() {
    let cli = parse_args();

    #[cfg(feature = "logging")]
    init_logging();

    let mut report = Report::default();
    for path in &cli.paths {
        report.add_target(path);
        for warning in report.take_diagnostics() {
            eprintln!("warning: {}", warning);
        }
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let written = handle.write_all(report.as_bytes());
    if let Err(e) = written.and_then(|()| handle.flush()) {
        eprintln!("Failed to write to stdout: {}", e);
        exit(1);
    }
}
