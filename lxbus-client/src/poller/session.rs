//! Poll session state.

use crate::domain::{RequestId, StopCode};

/// One accepted lookup being polled.
///
/// Owns the try counter, so two sessions can never share one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollSession {
    request_id: RequestId,
    stop_code: StopCode,
    tries_so_far: u32,
    max_tries: u32,
}

impl PollSession {
    /// Start a session with no polls made yet.
    pub fn new(request_id: RequestId, stop_code: StopCode, max_tries: u32) -> Self {
        Self {
            request_id,
            stop_code,
            tries_so_far: 0,
            max_tries,
        }
    }

    pub fn request_id(&self) -> &RequestId {
        &self.request_id
    }

    pub fn stop_code(&self) -> &StopCode {
        &self.stop_code
    }

    pub fn tries_so_far(&self) -> u32 {
        self.tries_so_far
    }

    pub fn max_tries(&self) -> u32 {
        self.max_tries
    }

    /// Count a poll about to be issued and return its number (1-based).
    pub fn record_try(&mut self) -> u32 {
        self.tries_so_far = self.tries_so_far.saturating_add(1);
        self.tries_so_far
    }

    /// Whether another poll may be scheduled.
    pub fn has_tries_left(&self) -> bool {
        self.tries_so_far < self.max_tries
    }

    #[cfg(test)]
    pub(crate) fn with_tries_so_far(mut self, tries: u32) -> Self {
        self.tries_so_far = tries;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(max_tries: u32) -> PollSession {
        PollSession::new(
            RequestId::parse("r1").unwrap(),
            StopCode::parse("1712").unwrap(),
            max_tries,
        )
    }

    #[test]
    fn starts_at_zero() {
        let s = session(24);
        assert_eq!(s.tries_so_far(), 0);
        assert_eq!(s.max_tries(), 24);
        assert!(s.has_tries_left());
    }

    #[test]
    fn first_try_is_one() {
        let mut s = session(24);
        assert_eq!(s.record_try(), 1);
        assert_eq!(s.tries_so_far(), 1);
    }

    #[test]
    fn last_try_exhausts_budget() {
        let mut s = session(2);
        s.record_try();
        assert!(s.has_tries_left());
        s.record_try();
        assert!(!s.has_tries_left());
    }
}
