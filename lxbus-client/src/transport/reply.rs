//! Validated replies handed to the poller.

use crate::domain::{ArrivalRecord, RequestId, StatusCode, StopCode};

/// Reply to a create-request call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateReply {
    pub status: StatusCode,
    /// Present when the server accepted the request.
    pub request_id: Option<RequestId>,
    pub message: String,
}

impl CreateReply {
    /// An accepted submit, as the lookup server sends it (status 1).
    pub fn accepted(request_id: RequestId) -> Self {
        Self {
            status: StatusCode::new(1),
            request_id: Some(request_id),
            message: String::new(),
        }
    }

    pub fn rejected(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            request_id: None,
            message: message.into(),
        }
    }
}

/// Reply to a get-status call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReply {
    pub status: StatusCode,
    pub message: String,
    /// Stop code the server associates with the request, if it said.
    pub stop_code: Option<StopCode>,
    /// Arrival rows in server order; only present with [`StatusCode::OK`].
    pub payload: Option<Vec<ArrivalRecord>>,
}

impl StatusReply {
    /// The "still working on it" reply.
    pub fn pending() -> Self {
        Self::error(StatusCode::NOT_YET_RETURNED, "Reply not yet returned")
    }

    pub fn ok(rows: Vec<ArrivalRecord>, message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            message: message.into(),
            stop_code: None,
            payload: Some(rows),
        }
    }

    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            stop_code: None,
            payload: None,
        }
    }

    pub fn with_stop_code(mut self, stop_code: StopCode) -> Self {
        self.stop_code = Some(stop_code);
        self
    }
}
