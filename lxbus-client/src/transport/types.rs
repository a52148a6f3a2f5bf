//! Lookup server response DTOs.
//!
//! These types map directly to the server's JSON bodies. The server wraps
//! every reply object in a one-element array and omits fields freely, so
//! almost everything is optional here and validated in `convert`.

use serde::Deserialize;

/// Reply body that may be a bare object or the usual one-element array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    /// The reply object the client acts on: the first one, if any.
    pub fn into_first(self) -> Option<T> {
        match self {
            OneOrMany::Many(items) => items.into_iter().next(),
            OneOrMany::One(item) => Some(item),
        }
    }
}

/// Response to `POST /api/newBusRequest`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReplyDto {
    /// Status of the submit. Older clients read `status_code`.
    #[serde(alias = "status_code")]
    pub statuscode: i32,

    /// Handle for subsequent polls; present when accepted.
    pub requestid: Option<String>,

    /// Human-readable message, usually only on failure.
    pub message: Option<String>,
}

/// Response to `GET /api/updateBusRequest`.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusReplyDto {
    #[serde(alias = "status_code")]
    pub statuscode: i32,

    pub message: Option<String>,

    /// Stop code the request was for (sent with invalid-code replies).
    pub stopcode: Option<String>,

    /// Arrival rows; only sent with status 0.
    pub payload: Option<Vec<ArrivalDto>>,
}

/// One arrival row in a status payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ArrivalDto {
    /// Bus route number. Sent as a string or a bare number.
    pub busnr: StringOrNumber,

    /// Destination name.
    pub dest: String,

    /// Minutes until arrival.
    pub eta_minutes: i32,

    /// Arrival time as published upstream ("HH:MM").
    pub pt_timestamp: String,

    /// ISO 8601 timestamp of the row's last refresh.
    pub last_modified: Option<String>,
}

/// JSON value that is either a string or a number, kept as text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

impl StringOrNumber {
    pub fn into_string(self) -> String {
        match self {
            StringOrNumber::String(s) => s,
            StringOrNumber::Number(n) => n.to_string(),
        }
    }
}
