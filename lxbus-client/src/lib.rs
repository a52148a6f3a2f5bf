//! Bus-arrival lookup client.
//!
//! Drives the stop-code lookup widget: submits a stop code to the lookup
//! server, polls until the server has an answer, and renders either the
//! arrivals table or an error.

pub mod domain;
pub mod poller;
pub mod render;
pub mod store;
pub mod transport;
pub mod widget;

pub use poller::{LookupError, PollerConfig, RequestPoller};
pub use widget::LookupWidget;
