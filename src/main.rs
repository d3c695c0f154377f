//! citymaps - shortest paths over maps of cities and roads
//!
//! Loads maps from bcm or ret files (or stdin) and routes across them with
//! any of the available algorithms.

mod cli;
mod commands;
mod logging;

use std::io;
use std::process::ExitCode;

use clap::Parser;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize structured logging
    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(command = ?cli.command, algorithms = ?cli.algorithm.0, "parse_args");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match commands::run(&cli, &mut out) {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
