//! Display of lookup progress and results.
//!
//! The poller never touches display elements itself; it drives a
//! [`Renderer`] supplied by the host.

mod html;
mod templates;

use crate::domain::{ArrivalRecord, StopCode};

pub use html::HtmlRenderer;
pub use templates::{PreviousCodesTemplate, ResultsTableTemplate};

/// Which part of the widget is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiState {
    /// Input form shown, nothing pending.
    #[default]
    Idle,
    /// A lookup is in flight; the form is hidden.
    Waiting,
    /// A lookup finished; results or an error message are shown with the form.
    ResultsShown,
}

/// Display capability provided by the host.
pub trait Renderer {
    /// Show the input form with nothing pending.
    fn show_idle(&mut self);

    /// Hide the form and previous results while a lookup runs.
    fn show_waiting(&mut self);

    /// Show a results table, rows in the given order, with a caption.
    fn show_results(&mut self, rows: &[ArrivalRecord], caption: &str);

    /// Show a message in place of results.
    fn show_error(&mut self, message: &str);

    /// Interrupt the user with a message; does not change the visible region.
    fn show_alert(&mut self, message: &str);

    /// Refresh the list of previously used stop codes.
    fn show_previous_codes(&mut self, codes: &[StopCode]);
}
