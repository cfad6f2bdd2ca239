mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod utils;

use crate::cli::Cli;
use crate::config::RunConfig;
use crate::error::Result;
use clap::Parser;
use clap::error::ErrorKind;
use std::process::ExitCode;
use tracing::{debug, error, info};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Usage goes to stderr; stdout may be the structure stream.
            eprint!("{}", e.render());
            return ExitCode::from(parse_failure_status(e.kind()));
        }
    };

    if let Err(e) = logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone()) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match run_app(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Exit status for an argument-parsing outcome that ends the run early.
///
/// `--version` is the only clean exit; `-h` reports usage like any misuse.
fn parse_failure_status(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

fn run_app(cli: &Cli) -> Result<()> {
    info!("pdbrmseq v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", cli);

    let config = RunConfig::from_cli(cli)?;
    let status = commands::remove::run(&config)?;

    info!("Command completed with status {:?}.", status);
    Ok(())
}
