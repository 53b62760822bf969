//! CLI actions and their execution against a [`FlightStore`].

use std::io::{BufRead, Write};

use tracing::debug;

use super::prompt::prompt_new_flight;
use crate::display::{render_json, render_search, render_table, OutputFormat};
use crate::error::Result;
use crate::storage::FlightStore;

/// What the user asked the tool to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Prompt for a flight and store it.
    AddFlight,
    /// Print every stored flight.
    PrintFlights,
    /// Print flights with the given aircraft type.
    SearchByType(String),
}

/// Run an action, reading prompts from `input` and writing results to `output`.
///
/// # Errors
///
/// Returns an error if prompting, the store operation, or writing output fails.
pub fn execute<R: BufRead, W: Write>(
    action: &Action,
    store: &FlightStore,
    format: OutputFormat,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    debug!("Executing {:?} with {:?} output", action, format);

    match action {
        Action::AddFlight => {
            let flight = prompt_new_flight(input, output)?;
            store.add_flight(
                &flight.destination,
                &flight.flight_number,
                &flight.aircraft_type,
            )?;
        }
        Action::PrintFlights => {
            let flights = store.list_flights()?;
            let rendered = match format {
                OutputFormat::Table => render_table(&flights),
                OutputFormat::Json => render_json(&flights)?,
            };
            output.write_all(rendered.as_bytes())?;
        }
        Action::SearchByType(aircraft_type) => {
            let flights = store.find_by_aircraft_type(aircraft_type)?;
            let rendered = match format {
                OutputFormat::Table => render_search(aircraft_type, &flights),
                OutputFormat::Json => render_json(&flights)?,
            };
            output.write_all(rendered.as_bytes())?;
        }
    }

    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flight::Flight;
    use crate::logging::init_test_logging;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, FlightStore) {
        init_test_logging();
        let dir = TempDir::new().unwrap();
        let store = FlightStore::new(dir.path().join("flights.db"));
        store.initialize_schema().unwrap();
        (dir, store)
    }

    fn run(store: &FlightStore, action: &Action, format: OutputFormat, input: &str) -> String {
        let mut input = Cursor::new(input.to_string());
        let mut output = Vec::new();
        execute(action, store, format, &mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn seed(store: &FlightStore) {
        store.add_flight("Москва", "SU123", "Boeing 737").unwrap();
        store
            .add_flight("Санкт-Петербург", "SU124", "Airbus A320")
            .unwrap();
    }

    #[test]
    fn test_add_flight_from_prompts() {
        let (_dir, store) = create_test_store();

        run(
            &store,
            &Action::AddFlight,
            OutputFormat::Table,
            "Moscow\nSU123\nBoeing 737\n",
        );

        let flights = store.list_flights().unwrap();
        assert_eq!(flights.len(), 1);
        assert_eq!(flights[0].destination, "Moscow");
        assert_eq!(flights[0].flight_number, "SU123");
        assert_eq!(flights[0].aircraft_type, "Boeing 737");
    }

    #[test]
    fn test_add_flight_incomplete_input_stores_nothing() {
        let (_dir, store) = create_test_store();
        let mut input = Cursor::new("Moscow\nSU123\n");
        let mut output = Vec::new();

        let result = execute(
            &Action::AddFlight,
            &store,
            OutputFormat::Table,
            &mut input,
            &mut output,
        );
        assert!(result.is_err());
        assert!(store.list_flights().unwrap().is_empty());
    }

    #[test]
    fn test_print_flights_table() {
        let (_dir, store) = create_test_store();
        seed(&store);

        let output = run(&store, &Action::PrintFlights, OutputFormat::Table, "");
        for value in [
            "Москва",
            "SU123",
            "Boeing 737",
            "Санкт-Петербург",
            "SU124",
            "Airbus A320",
        ] {
            assert!(output.contains(value), "missing {value}");
        }
        assert_eq!(output.lines().count(), 6);
    }

    #[test]
    fn test_print_flights_json() {
        let (_dir, store) = create_test_store();
        seed(&store);

        let output = run(&store, &Action::PrintFlights, OutputFormat::Json, "");
        let flights: Vec<Flight> = serde_json::from_str(&output).unwrap();
        assert_eq!(flights, store.list_flights().unwrap());
    }

    #[test]
    fn test_search_by_type_table() {
        let (_dir, store) = create_test_store();
        seed(&store);

        let action = Action::SearchByType("Boeing 737".to_string());
        let output = run(&store, &action, OutputFormat::Table, "");

        assert!(output.contains("Москва"));
        assert!(output.contains("SU123"));
        assert!(output.contains("Boeing 737"));
        assert!(!output.contains("Санкт-Петербург"));
        assert!(!output.contains("SU124"));
        assert!(!output.contains("Airbus A320"));
    }

    #[test]
    fn test_search_by_type_not_found() {
        let (_dir, store) = create_test_store();
        seed(&store);

        let action = Action::SearchByType("Cessna 172".to_string());
        let output = run(&store, &action, OutputFormat::Table, "");
        assert_eq!(
            output,
            "\nРейсов, обслуживаемых самолетом типа Cessna 172, не найдено.\n"
        );
    }

    #[test]
    fn test_search_by_type_json_empty() {
        let (_dir, store) = create_test_store();
        seed(&store);

        let action = Action::SearchByType("Cessna 172".to_string());
        let output = run(&store, &action, OutputFormat::Json, "");
        assert_eq!(output, "[]\n");
    }
}
