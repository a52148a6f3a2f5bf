//! Scripted transport for testing without a lookup server.
//!
//! Replies are queued up front and handed out in order. Once the status
//! queue runs dry every further poll answers "not yet returned", which is
//! what a server that never hears back from upstream looks like.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::{RequestId, StopCode};

use super::TransportClient;
use super::error::TransportError;
use super::reply::{CreateReply, StatusReply};

#[derive(Default)]
struct Script {
    create: VecDeque<Result<CreateReply, TransportError>>,
    status: VecDeque<Result<StatusReply, TransportError>>,
    submitted: Vec<StopCode>,
    polled: Vec<RequestId>,
}

/// Mock transport that serves scripted replies.
///
/// Clones share the same script, so a test can keep one handle to inspect
/// calls after moving another into the poller.
#[derive(Clone, Default)]
pub struct MockTransport {
    script: Arc<Mutex<Script>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the reply to the next create-request call.
    pub fn push_create(&self, reply: Result<CreateReply, TransportError>) -> &Self {
        self.lock().create.push_back(reply);
        self
    }

    /// Queue the reply to the next get-status call.
    pub fn push_status(&self, reply: Result<StatusReply, TransportError>) -> &Self {
        self.lock().status.push_back(reply);
        self
    }

    /// Queue `n` "not yet returned" replies.
    pub fn push_pending(&self, n: usize) -> &Self {
        let mut script = self.lock();
        for _ in 0..n {
            script.status.push_back(Ok(StatusReply::pending()));
        }
        drop(script);
        self
    }

    /// Stop codes submitted so far, in order.
    pub fn submitted(&self) -> Vec<StopCode> {
        self.lock().submitted.clone()
    }

    /// Request ids polled so far, in order.
    pub fn polled(&self) -> Vec<RequestId> {
        self.lock().polled.clone()
    }

    pub fn poll_count(&self) -> usize {
        self.lock().polled.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Script> {
        // A panic while holding the lock can only come from a failing test.
        self.script.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TransportClient for MockTransport {
    async fn create_request(&self, stop_code: &StopCode) -> Result<CreateReply, TransportError> {
        let mut script = self.lock();
        script.submitted.push(stop_code.clone());
        script
            .create
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Mock("no create reply scripted".to_string())))
    }

    async fn get_status(&self, request_id: &RequestId) -> Result<StatusReply, TransportError> {
        let mut script = self.lock();
        script.polled.push(request_id.clone());
        script
            .status
            .pop_front()
            .unwrap_or_else(|| Ok(StatusReply::pending()))
    }
}
