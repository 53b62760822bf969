//! Text and JSON rendering of flight records.
//!
//! The table layout is fixed: three columns of 30, 20 and 15 characters,
//! centered titles and left-aligned values. Longer values are not truncated.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::flight::Flight;

const DESTINATION_WIDTH: usize = 30;
const FLIGHT_NUMBER_WIDTH: usize = 20;
const AIRCRAFT_TYPE_WIDTH: usize = 15;

const DESTINATION_TITLE: &str = "Название пункта назначения";
const FLIGHT_NUMBER_TITLE: &str = "Номер рейса";
const AIRCRAFT_TYPE_TITLE: &str = "Тип самолета";

/// Output format for listing and search results.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bordered text table
    #[default]
    Table,
    /// Pretty-printed JSON array
    Json,
}

/// A bordered table of flights.
#[derive(Debug, Clone, Copy)]
pub struct FlightTable<'a>(pub &'a [Flight]);

impl FlightTable<'_> {
    fn border(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "+-{}-+-{}-+-{}-+",
            "-".repeat(DESTINATION_WIDTH),
            "-".repeat(FLIGHT_NUMBER_WIDTH),
            "-".repeat(AIRCRAFT_TYPE_WIDTH)
        )
    }
}

impl fmt::Display for FlightTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::border(f)?;
        writeln!(
            f,
            "| {:^w1$} | {:^w2$} | {:^w3$} |",
            DESTINATION_TITLE,
            FLIGHT_NUMBER_TITLE,
            AIRCRAFT_TYPE_TITLE,
            w1 = DESTINATION_WIDTH,
            w2 = FLIGHT_NUMBER_WIDTH,
            w3 = AIRCRAFT_TYPE_WIDTH,
        )?;
        Self::border(f)?;

        for flight in self.0 {
            writeln!(
                f,
                "| {:<w1$} | {:<w2$} | {:<w3$} |",
                flight.destination,
                flight.flight_number,
                flight.aircraft_type,
                w1 = DESTINATION_WIDTH,
                w2 = FLIGHT_NUMBER_WIDTH,
                w3 = AIRCRAFT_TYPE_WIDTH,
            )?;
        }

        Self::border(f)
    }
}

/// The outcome of a search by aircraft type.
///
/// Renders a caption and table when there are matches, otherwise a
/// not-found sentence.
#[derive(Debug, Clone, Copy)]
pub struct SearchResults<'a> {
    /// The aircraft type that was searched for.
    pub aircraft_type: &'a str,
    /// Matching flights.
    pub flights: &'a [Flight],
}

impl fmt::Display for SearchResults<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.flights.is_empty() {
            return writeln!(
                f,
                "\nРейсов, обслуживаемых самолетом типа {}, не найдено.",
                self.aircraft_type
            );
        }

        writeln!(
            f,
            "\nРейсы, обслуживаемые самолетом типа {}: ",
            self.aircraft_type
        )?;
        write!(f, "{}", FlightTable(self.flights))
    }
}

/// Render all flights as a bordered table.
#[must_use]
pub fn render_table(flights: &[Flight]) -> String {
    FlightTable(flights).to_string()
}

/// Render the result of a search by aircraft type.
#[must_use]
pub fn render_search(aircraft_type: &str, flights: &[Flight]) -> String {
    SearchResults {
        aircraft_type,
        flights,
    }
    .to_string()
}

/// Render flights as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(flights: &[Flight]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(flights)?;
    json.push('\n');
    Ok(json)
}
