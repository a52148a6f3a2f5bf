//! Lookup error types.

use crate::domain::{InvalidStopCode, StatusCode};
use crate::transport::TransportError;

/// Why a lookup ended without arrivals.
///
/// Every variant has already been shown to the user by the time the
/// caller sees it; none of them leave the widget unusable.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// Input was blank; nothing was sent
    #[error(transparent)]
    Validation(#[from] InvalidStopCode),

    /// Submit could not reach the server or got no usable reply
    #[error("could not submit lookup: {0}")]
    Transport(#[from] TransportError),

    /// Server refused the submit
    #[error("server rejected lookup (status {status}): {message}")]
    ServerRejection { status: StatusCode, message: String },

    /// Server accepted the lookup but answered it with an error
    #[error("lookup failed (status {status}): {message}")]
    ServerError { status: StatusCode, message: String },

    /// Server never produced an answer within the try budget
    #[error("no reply after {tries} polls")]
    PollTimeout { tries: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StopCode;

    #[test]
    fn error_display() {
        let err = LookupError::ServerError {
            status: StatusCode::REPLY_INVALID_CODE,
            message: "Invalid stop".into(),
        };
        assert_eq!(err.to_string(), "lookup failed (status -4): Invalid stop");

        let err = LookupError::PollTimeout { tries: 24 };
        assert_eq!(err.to_string(), "no reply after 24 polls");

        let err = LookupError::from(StopCode::parse("").unwrap_err());
        assert_eq!(err.to_string(), "invalid stop code: must not be empty");

        let err = LookupError::from(TransportError::Empty);
        assert_eq!(err.to_string(), "could not submit lookup: no data returned");
    }
}
