//! Storage layer for flightlog.
//!
//! This module provides the `SQLite`-backed [`FlightStore`]. Every operation
//! opens its own connection and closes it before returning, so at most one
//! connection is open at a time and each insert is committed on its own.

pub mod schema;

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};
use tracing::debug;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::flight::Flight;

use schema::SCHEMA_STATEMENTS;

/// Persistent store of flight records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightStore {
    /// Path to the database file.
    path: PathBuf,
}

impl FlightStore {
    /// Create a store backed by the database file at `path`.
    ///
    /// Nothing is touched on disk until an operation runs.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a store using the database path from the configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.database_path())
    }

    /// Get the path to the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a fresh connection to the database file.
    fn connect(&self) -> Result<Connection> {
        debug!("Opening database at {}", self.path.display());
        Connection::open(&self.path).map_err(|source| Error::DatabaseOpen {
            path: self.path.clone(),
            source,
        })
    }

    /// Ensure the flight tables exist.
    ///
    /// Creates the parent directories and database file if they don't exist.
    /// Safe to call on every run: existing tables and rows are left alone.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or database file cannot be created,
    /// opened, or written.
    pub fn initialize_schema(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let conn = self.connect()?;
        for statement in SCHEMA_STATEMENTS {
            conn.execute(statement, [])?;
        }

        debug!("Schema ready at {}", self.path.display());
        Ok(())
    }

    /// Insert a flight and return its assigned id.
    ///
    /// Empty strings are stored as-is; the schema only rejects NULL.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or the insert fails.
    pub fn add_flight(
        &self,
        destination: &str,
        flight_number: &str,
        aircraft_type: &str,
    ) -> Result<i64> {
        let conn = self.connect()?;
        conn.execute(
            r"
            INSERT INTO flights (destination, flight_number, aircraft_type)
            VALUES (?1, ?2, ?3)
            ",
            params![destination, flight_number, aircraft_type],
        )?;

        let id = conn.last_insert_rowid();
        debug!("Added flight {} with id {}", flight_number, id);
        Ok(id)
    }

    /// List every stored flight in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or queried.
    pub fn list_flights(&self) -> Result<Vec<Flight>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            r"
            SELECT id, destination, flight_number, aircraft_type
            FROM flights ORDER BY id ASC
            ",
        )?;

        let flights = stmt
            .query_map([], Self::row_to_flight)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        debug!("Listed {} flights", flights.len());
        Ok(flights)
    }

    /// Find flights whose aircraft type equals `aircraft_type` exactly.
    ///
    /// The comparison is case-sensitive and byte-for-byte. No matches is an
    /// empty vector, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or queried.
    pub fn find_by_aircraft_type(&self, aircraft_type: &str) -> Result<Vec<Flight>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            r"
            SELECT id, destination, flight_number, aircraft_type
            FROM flights WHERE aircraft_type = ?1
            ORDER BY id ASC
            ",
        )?;

        let flights = stmt
            .query_map([aircraft_type], Self::row_to_flight)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        debug!(
            "Found {} flights with aircraft type {:?}",
            flights.len(),
            aircraft_type
        );
        Ok(flights)
    }

    /// Convert a database row to a Flight struct.
    fn row_to_flight(row: &rusqlite::Row) -> rusqlite::Result<Flight> {
        Ok(Flight {
            id: row.get(0)?,
            destination: row.get(1)?,
            flight_number: row.get(2)?,
            aircraft_type: row.get(3)?,
        })
    }
}
