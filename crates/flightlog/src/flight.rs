//! Flight record types.

use serde::{Deserialize, Serialize};

/// A stored flight record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    /// Row id assigned by the store.
    pub id: i64,
    /// Destination name.
    pub destination: String,
    /// Flight number. Not unique.
    pub flight_number: String,
    /// Free-text aircraft type, e.g. `Boeing 737`.
    pub aircraft_type: String,
}

/// The fields of a flight that has not been stored yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewFlight {
    /// Destination name.
    pub destination: String,
    /// Flight number.
    pub flight_number: String,
    /// Aircraft type.
    pub aircraft_type: String,
}

impl NewFlight {
    /// Create a new unsaved flight.
    #[must_use]
    pub fn new(
        destination: impl Into<String>,
        flight_number: impl Into<String>,
        aircraft_type: impl Into<String>,
    ) -> Self {
        Self {
            destination: destination.into(),
            flight_number: flight_number.into(),
            aircraft_type: aircraft_type.into(),
        }
    }
}
