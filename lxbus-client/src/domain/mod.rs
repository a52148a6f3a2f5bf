//! Domain types for the bus-arrival lookup.
//!
//! All types enforce their invariants at construction time, so code that
//! receives them can trust their validity.

mod arrival;
mod status;
mod stop_code;

pub use arrival::{ArrivalRecord, Arrivals};
pub use status::StatusCode;
pub use stop_code::{InvalidRequestId, InvalidStopCode, RequestId, StopCode};
