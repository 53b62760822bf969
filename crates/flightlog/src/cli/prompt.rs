//! Interactive data entry for new flights.

use std::io::{BufRead, ErrorKind, Write};

use crate::error::Result;
use crate::flight::NewFlight;

const DESTINATION_PROMPT: &str = "Введите название пункта назначения: ";
const FLIGHT_NUMBER_PROMPT: &str = "Введите номер рейса: ";
const AIRCRAFT_TYPE_PROMPT: &str = "Введите тип самолета: ";

/// Write `prompt` and read one line of input.
///
/// The trailing line terminator is stripped; everything else, including
/// surrounding whitespace, is kept.
///
/// # Errors
///
/// Returns an `UnexpectedEof` I/O error if input ends before a line is read,
/// or any error from the underlying reader or writer.
pub fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String> {
    output.write_all(prompt.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(std::io::Error::new(
            ErrorKind::UnexpectedEof,
            "input ended before a value was entered",
        )
        .into());
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

/// Prompt for destination, flight number and aircraft type, in that order.
///
/// # Errors
///
/// Returns an error if any of the three values cannot be read.
pub fn prompt_new_flight<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<NewFlight> {
    let destination = read_line(input, output, DESTINATION_PROMPT)?;
    let flight_number = read_line(input, output, FLIGHT_NUMBER_PROMPT)?;
    let aircraft_type = read_line(input, output, AIRCRAFT_TYPE_PROMPT)?;

    Ok(NewFlight {
        destination,
        flight_number,
        aircraft_type,
    })
}
