//! `SQLite` schema definitions for flightlog.

/// SQL statement to create the flights table.
pub const CREATE_FLIGHTS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS flights (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    destination TEXT NOT NULL,
    flight_number TEXT NOT NULL,
    aircraft_type TEXT NOT NULL
)
";

/// SQL statement to create the aircraft types table.
///
/// Nothing reads or writes this table; it is kept so databases created by
/// older tooling keep the same layout.
pub const CREATE_AIRCRAFT_TYPES_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS aircraft_types (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    type TEXT NOT NULL
)
";

/// All schema creation statements in order.
pub const SCHEMA_STATEMENTS: &[&str] = &[CREATE_FLIGHTS_TABLE, CREATE_AIRCRAFT_TYPES_TABLE];
