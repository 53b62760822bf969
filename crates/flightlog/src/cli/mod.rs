//! Command-line interface for flightlog.
//!
//! This module provides the argument parser for the `flights` binary and
//! the actions it dispatches to.

mod commands;
pub mod prompt;

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

pub use commands::{execute, Action};

use crate::config::Config;
use crate::display::OutputFormat;

/// flights - Keep a local log of flights
///
/// Stores flights (destination, flight number, aircraft type) in a local
/// `SQLite` file. Add one interactively, print them all, or search by
/// aircraft type.
#[derive(Debug, Parser)]
#[command(name = "flights")]
#[command(author, version, about, long_about = None)]
#[command(group(
    ArgGroup::new("action")
        .args(["add_flight", "print_flights", "search_by_type"])
        .multiple(false)
))]
pub struct Cli {
    /// Add a new flight
    #[arg(short, long)]
    pub add_flight: bool,

    /// Print the list of flights
    #[arg(short, long)]
    pub print_flights: bool,

    /// Search flights by aircraft type
    #[arg(short, long, value_name = "TYPE")]
    pub search_by_type: Option<String>,

    /// Path to custom configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Path to the flights database (overrides configuration)
    #[arg(short, long, value_name = "FILE")]
    pub database: Option<PathBuf>,

    /// Output format for printed flights (overrides configuration)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        crate::logging::Verbosity::from_flags(self.quiet, self.verbose)
    }

    /// The requested action, or `None` when no action flag was given.
    ///
    /// An empty `--search-by-type` value counts as no action.
    #[must_use]
    pub fn action(&self) -> Option<Action> {
        if self.add_flight {
            Some(Action::AddFlight)
        } else if self.print_flights {
            Some(Action::PrintFlights)
        } else {
            self.search_by_type
                .as_ref()
                .filter(|aircraft_type| !aircraft_type.is_empty())
                .map(|aircraft_type| Action::SearchByType(aircraft_type.clone()))
        }
    }

    /// Apply command-line overrides on top of loaded configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(database) = &self.database {
            config.storage.database_path = Some(database.clone());
        }
        if let Some(format) = self.format {
            config.display.format = format;
        }
    }
}
