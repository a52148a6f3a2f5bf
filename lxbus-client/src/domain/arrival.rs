//! Arrival rows and lookup results.

use chrono::NaiveDateTime;

/// One row of the results table: a bus expected at the stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrivalRecord {
    /// Route number shown on the bus (e.g. "728").
    pub bus_number: String,
    /// Destination shown on the bus.
    pub destination: String,
    /// Minutes until the bus reaches the stop.
    pub eta_minutes: i32,
    /// Expected arrival time as reported upstream (e.g. "10:05").
    pub arrival_timestamp: String,
    /// When the server last refreshed this row, if it said.
    pub last_modified: Option<NaiveDateTime>,
}

impl ArrivalRecord {
    pub fn new(
        bus_number: impl Into<String>,
        destination: impl Into<String>,
        eta_minutes: i32,
        arrival_timestamp: impl Into<String>,
    ) -> Self {
        Self {
            bus_number: bus_number.into(),
            destination: destination.into(),
            eta_minutes,
            arrival_timestamp: arrival_timestamp.into(),
            last_modified: None,
        }
    }

    pub fn with_last_modified(mut self, at: NaiveDateTime) -> Self {
        self.last_modified = Some(at);
        self
    }
}

/// A completed lookup: the rows in server order and the caption shown
/// alongside them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Arrivals {
    pub rows: Vec<ArrivalRecord>,
    pub caption: String,
}

impl Arrivals {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
