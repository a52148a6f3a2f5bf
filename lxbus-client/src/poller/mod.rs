//! The submit → poll → render lifecycle of one lookup.
//!
//! ```text
//! Idle ─submit─▶ Submitting ─accepted─▶ Polling ─┬─ reply ≥ 0 ──▶ RenderedResult
//!                    │                    ▲   │   ├─ reply < 0 ──▶ RenderedError
//!                    │ rejected/failed    └───┘   └─ budget out ─▶ RenderedTimeout
//!                    ▼                   pending
//!                  Idle
//! ```
//!
//! A lookup borrows the poller mutably from submit until its terminal
//! render, so a second lookup cannot start while one is polling.
//!
//! Transport failures are treated differently on each side of the accept:
//! a failed submit ends the lookup at once, while a failed poll just uses
//! up one try, the same as a "not yet returned" reply.

mod config;
mod error;
mod session;


use tracing::{Instrument, debug, info, info_span, warn};

use crate::domain::{Arrivals, StatusCode, StopCode};
use crate::render::Renderer;
use crate::store::LocalStore;
use crate::transport::{StatusReply, TransportClient, TransportError};

pub use config::{
    DEFAULT_TIMEOUT_MESSAGE, PollerConfig, SERVER_REJECTED_ALERT, SUBMIT_FAILED_ALERT,
};
pub use error::LookupError;
pub use session::PollSession;

/// Result of one poll.
#[derive(Debug)]
pub enum PollStep {
    /// No answer yet and tries remain; poll again after the interval.
    Retry,
    /// The session is over and its outcome has been rendered.
    Done(Result<Arrivals, LookupError>),
}

/// Drives lookups against a transport, rendering every transition.
pub struct RequestPoller<T, S, R> {
    transport: T,
    store: S,
    renderer: R,
    config: PollerConfig,
}

impl<T, S, R> RequestPoller<T, S, R>
where
    T: TransportClient,
    S: LocalStore,
    R: Renderer,
{
    pub fn new(transport: T, store: S, renderer: R, config: PollerConfig) -> Self {
        Self {
            transport,
            store,
            renderer,
            config,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn config(&self) -> &PollerConfig {
        &self.config
    }

    pub fn into_parts(self) -> (T, S, R) {
        (self.transport, self.store, self.renderer)
    }

    /// Run a whole lookup: submit, then poll every interval until the
    /// server answers or the try budget runs out.
    ///
    /// The outcome is rendered before this returns; the error value is
    /// for the caller's bookkeeping only.
    pub async fn lookup(&mut self, stop_code: &StopCode) -> Result<Arrivals, LookupError> {
        let span = info_span!("lookup", %stop_code);
        self.run(stop_code).instrument(span).await
    }

    async fn run(&mut self, stop_code: &StopCode) -> Result<Arrivals, LookupError> {
        let mut session = self.submit(stop_code).await?;
        loop {
            tokio::time::sleep(self.config.poll_interval).await;
            if let PollStep::Done(outcome) = self.poll(&mut session).await {
                return outcome;
            }
        }
    }

    /// Register a lookup with the server.
    ///
    /// On success returns a fresh session with no polls made. On failure
    /// the user is alerted, the form is shown again, and no session exists.
    pub async fn submit(&mut self, stop_code: &StopCode) -> Result<PollSession, LookupError> {
        match self.transport.create_request(stop_code).await {
            Ok(reply) if reply.status.is_error() => {
                warn!(status = %reply.status, message = %reply.message, "lookup rejected");
                self.renderer.show_alert(SERVER_REJECTED_ALERT);
                self.renderer.show_idle();
                Err(LookupError::ServerRejection {
                    status: reply.status,
                    message: reply.message,
                })
            }
            Ok(reply) => match reply.request_id {
                Some(request_id) => {
                    info!(%request_id, "lookup accepted");
                    Ok(PollSession::new(
                        request_id,
                        stop_code.clone(),
                        self.config.max_tries,
                    ))
                }
                None => Err(self.submit_failed(TransportError::MissingRequestId)),
            },
            Err(e) => Err(self.submit_failed(e)),
        }
    }

    fn submit_failed(&mut self, error: TransportError) -> LookupError {
        warn!(%error, "could not submit lookup");
        self.renderer.show_alert(SUBMIT_FAILED_ALERT);
        self.renderer.show_idle();
        LookupError::Transport(error)
    }

    /// Make one poll for `session`.
    ///
    /// The try is counted before the call goes out. Pending replies and
    /// transport failures both cost a try; once the budget is spent the
    /// timeout message is rendered and the session ends.
    pub async fn poll(&mut self, session: &mut PollSession) -> PollStep {
        let attempt = session.record_try();

        match self.transport.get_status(session.request_id()).await {
            Ok(reply) if !reply.status.is_pending() => {
                debug!(attempt, status = %reply.status, "lookup answered");
                return PollStep::Done(self.interpret(session, reply));
            }
            Ok(_) => debug!(attempt, "lookup not yet returned"),
            Err(error) => warn!(attempt, %error, "poll failed, counting it as pending"),
        }

        if session.has_tries_left() {
            return PollStep::Retry;
        }

        warn!(
            tries = session.tries_so_far(),
            request_id = %session.request_id(),
            "giving up on lookup"
        );
        self.renderer.show_error(&self.config.timeout_message);
        self.refresh_previous_codes();
        PollStep::Done(Err(LookupError::PollTimeout {
            tries: session.tries_so_far(),
        }))
    }

    /// Render a terminal reply.
    ///
    /// Error replies show their message alone; an invalid-code reply also
    /// purges the code from the store. Successful replies show one table
    /// row per payload entry, in payload order, captioned by the message.
    pub fn interpret(
        &mut self,
        session: &PollSession,
        reply: StatusReply,
    ) -> Result<Arrivals, LookupError> {
        let outcome = if reply.status.is_error() {
            if reply.status == StatusCode::REPLY_INVALID_CODE {
                let code = reply.stop_code.as_ref().unwrap_or(session.stop_code());
                self.forget(code);
            }
            self.renderer.show_error(&reply.message);
            Err(LookupError::ServerError {
                status: reply.status,
                message: reply.message,
            })
        } else {
            let arrivals = Arrivals {
                rows: reply.payload.unwrap_or_default(),
                caption: reply.message,
            };
            info!(rows = arrivals.len(), "lookup returned arrivals");
            self.renderer.show_results(&arrivals.rows, &arrivals.caption);
            Ok(arrivals)
        };

        self.refresh_previous_codes();
        outcome
    }

    /// Drop an invalid code from the store, if there is one.
    fn forget(&mut self, code: &StopCode) {
        if !self.store.is_available() {
            return;
        }
        info!(%code, "removing invalid stop code from store");
        if let Err(error) = self.store.delete(code) {
            warn!(%code, %error, "could not remove stop code from store");
        }
    }

    /// Show the stored codes again, if there is a store.
    pub fn refresh_previous_codes(&mut self) {
        if !self.store.is_available() {
            return;
        }
        match self.store.list_all() {
            Ok(codes) => self.renderer.show_previous_codes(&codes),
            Err(error) => warn!(%error, "could not list stored stop codes"),
        }
    }
}
