//! `flights` - CLI for flightlog
//!
//! Adds flights interactively, prints the stored flights, or searches them by
//! aircraft type.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing::debug;

use flightlog::cli::{execute, Cli};
use flightlog::{init_logging, Config, FlightStore};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> flightlog::Result<()> {
    // Load configuration, then let flags override it
    let mut config = Config::load_from(cli.config.clone())?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    let store = FlightStore::from_config(&config);
    store.initialize_schema()?;

    match cli.action() {
        Some(action) => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            execute(
                &action,
                &store,
                config.display.format,
                &mut stdin.lock(),
                &mut stdout.lock(),
            )?;
        }
        None => {
            debug!("No action given, printing help");
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
