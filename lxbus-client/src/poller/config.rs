//! Poller configuration.

use std::time::Duration;

/// Seconds between polls. The server should not be asked more often.
const DEFAULT_POLL_SECS: u64 = 5;

/// Polls before giving up: 24 × 5 s = two minutes.
const DEFAULT_MAX_TRIES: u32 = 24;

/// Shown when the try budget runs out.
pub const DEFAULT_TIMEOUT_MESSAGE: &str =
    "Could not get a response from Carris. Maybe you should try again?";

/// Alert when the server refuses a new lookup.
pub const SERVER_REJECTED_ALERT: &str = "The server responded with an error. Please try again.";

/// Alert when a new lookup could not be sent at all.
pub const SUBMIT_FAILED_ALERT: &str = "Could not send a new request for a stopcode";

/// Configuration for the request poller.
#[derive(Debug, Clone)]
pub struct PollerConfig {
    /// Delay before each poll, including the first.
    pub poll_interval: Duration,

    /// Polls allowed per session.
    pub max_tries: u32,

    /// Message rendered when `max_tries` polls brought no answer.
    pub timeout_message: String,
}

impl PollerConfig {
    /// Create a config with the default interval, budget and message.
    pub fn new() -> Self {
        Self {
            poll_interval: Duration::from_secs(DEFAULT_POLL_SECS),
            max_tries: DEFAULT_MAX_TRIES,
            timeout_message: DEFAULT_TIMEOUT_MESSAGE.to_string(),
        }
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_max_tries(mut self, max_tries: u32) -> Self {
        self.max_tries = max_tries;
        self
    }

    pub fn with_timeout_message(mut self, message: impl Into<String>) -> Self {
        self.timeout_message = message.into();
        self
    }

    /// Upper bound on how long a session spends waiting between polls.
    pub fn budget(&self) -> Duration {
        self.poll_interval * self.max_tries
    }
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self::new()
    }
}
