//! Form controller for the lookup widget.
//!
//! Handles the UI events around a lookup: initial load, form submission
//! and picking a previously used code. The lookup itself is delegated to
//! [`RequestPoller`].

use tracing::{debug, warn};

use crate::domain::{Arrivals, StopCode};
use crate::poller::{LookupError, RequestPoller};
use crate::render::Renderer;
use crate::store::LocalStore;
use crate::transport::TransportClient;

/// Alert shown when the form is submitted empty.
pub const EMPTY_INPUT_ALERT: &str = "Please input a stop code";

/// The bus-arrival lookup widget.
pub struct LookupWidget<T, S, R> {
    poller: RequestPoller<T, S, R>,
}

impl<T, S, R> LookupWidget<T, S, R>
where
    T: TransportClient,
    S: LocalStore,
    R: Renderer,
{
    pub fn new(poller: RequestPoller<T, S, R>) -> Self {
        Self { poller }
    }

    pub fn poller(&self) -> &RequestPoller<T, S, R> {
        &self.poller
    }

    pub fn into_poller(self) -> RequestPoller<T, S, R> {
        self.poller
    }

    /// Prepare the display on initial load.
    pub fn set_up(&mut self) {
        self.poller.refresh_previous_codes();
        self.poller.renderer_mut().show_idle();
    }

    /// Handle a submission of the stop-code form.
    ///
    /// Blank input is refused with an alert and never reaches the server.
    /// Otherwise the widget switches to waiting mode, remembers the code,
    /// and runs the lookup to its end.
    pub async fn submit_input(&mut self, input: &str) -> Result<Arrivals, LookupError> {
        let stop_code = match StopCode::parse(input) {
            Ok(code) => code,
            Err(e) => {
                debug!("refusing empty stop code");
                self.poller.renderer_mut().show_alert(EMPTY_INPUT_ALERT);
                return Err(e.into());
            }
        };

        self.poller.renderer_mut().show_waiting();
        // Stored before the lookup so an invalid-code reply can purge it.
        self.remember(&stop_code);
        self.poller.lookup(&stop_code).await
    }

    /// Re-run a lookup for a code picked from the previous-codes list.
    pub async fn select_previous(&mut self, code: &StopCode) -> Result<Arrivals, LookupError> {
        self.submit_input(code.as_str()).await
    }

    fn remember(&mut self, code: &StopCode) {
        let store = self.poller.store_mut();
        if !store.is_available() {
            return;
        }
        if let Err(error) = store.add(code) {
            warn!(%code, %error, "could not store stop code");
        }
    }
}
