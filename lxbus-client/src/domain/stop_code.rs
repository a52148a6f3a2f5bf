//! Stop code and request id types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an empty stop code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop code: {reason}")]
pub struct InvalidStopCode {
    reason: &'static str,
}

/// Identifier of a physical bus stop, as typed by the user.
///
/// The code is opaque to the client: the lookup server decides whether it
/// names a real stop. The only thing enforced here is that it is not blank.
/// Surrounding whitespace is trimmed.
///
/// # Examples
///
/// ```
/// use lxbus_client::domain::StopCode;
///
/// let code = StopCode::parse(" 1712 ").unwrap();
/// assert_eq!(code.as_str(), "1712");
///
/// assert!(StopCode::parse("").is_err());
/// assert!(StopCode::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StopCode(String);

impl StopCode {
    /// Parse a stop code, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidStopCode> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidStopCode {
                reason: "must not be empty",
            });
        }
        Ok(StopCode(trimmed.to_string()))
    }

    /// Returns the stop code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StopCode {
    type Error = InvalidStopCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        StopCode::parse(&value)
    }
}

impl From<StopCode> for String {
    fn from(code: StopCode) -> Self {
        code.0
    }
}

impl fmt::Debug for StopCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopCode({})", self.0)
    }
}

impl fmt::Display for StopCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error returned when the server hands back an empty request id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid request id: must not be empty")]
pub struct InvalidRequestId;

/// Server-issued handle for a pending lookup, used for every poll.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RequestId(String);

impl RequestId {
    pub fn parse(s: &str) -> Result<Self, InvalidRequestId> {
        if s.is_empty() {
            return Err(InvalidRequestId);
        }
        Ok(RequestId(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RequestId({})", self.0)
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
