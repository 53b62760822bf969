//! `flightlog` - A command-line keeper of flight records
//!
//! This library stores flights (destination, flight number, aircraft type) in
//! a local `SQLite` file and renders them as a bordered text table or JSON.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod flight;
pub mod logging;
pub mod storage;

pub use config::Config;
pub use display::OutputFormat;
pub use error::{Error, Result};
pub use flight::{Flight, NewFlight};
pub use logging::init_logging;
pub use storage::FlightStore;
