//! Reply status codes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of a submit or poll reply.
///
/// Negative values are errors. The lookup server answers an accepted
/// submit with `1`, so any non-negative value counts as success; only
/// the named constants carry special meaning.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusCode(i32);

impl StatusCode {
    /// Reply carries a result payload.
    pub const OK: StatusCode = StatusCode(0);
    /// No buses found for the stop.
    pub const NO_BUSES: StatusCode = StatusCode(-1);
    /// The upstream source returned no information.
    pub const NO_INFO_RETURNED: StatusCode = StatusCode(-2);
    /// Request still pending; keep polling.
    pub const NOT_YET_RETURNED: StatusCode = StatusCode(-3);
    /// The stop code does not exist; cached copies must be purged.
    pub const REPLY_INVALID_CODE: StatusCode = StatusCode(-4);

    pub const fn new(code: i32) -> Self {
        StatusCode(code)
    }

    pub const fn code(self) -> i32 {
        self.0
    }

    /// Whether this status reports a failure.
    pub const fn is_error(self) -> bool {
        self.0 < 0
    }

    /// Whether the request is still being worked on server-side.
    pub fn is_pending(self) -> bool {
        self == Self::NOT_YET_RETURNED
    }
}

impl fmt::Debug for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            Self::OK => "OK",
            Self::NO_BUSES => "NO_BUSES",
            Self::NO_INFO_RETURNED => "NO_INFO_RETURNED",
            Self::NOT_YET_RETURNED => "NOT_YET_RETURNED",
            Self::REPLY_INVALID_CODE => "REPLY_INVALID_CODE",
            _ => return write!(f, "StatusCode({})", self.0),
        };
        write!(f, "StatusCode({}, {})", self.0, name)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
