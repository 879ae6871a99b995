//! Identifier generator CLI.
//!
//! This binary delegates to `fancy_id::cli` for option handling and
//! generation, keeping the CLI behaviour testable without spawning a process.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use fancy_id::cli::{Options, run};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let options = Options::parse();
    match run(&options) {
        Ok(outcome) => {
            write_lines(&outcome.lines());
            ExitCode::SUCCESS
        }
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn write_lines(lines: &[String]) {
    let mut out = io::stdout().lock();
    for line in lines {
        if let Err(err) = writeln!(out, "{line}") {
            drop(err);
            return;
        }
    }
}
