//! Store error types.

/// Errors from the local stop-code store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The host offers no local storage
    #[error("local storage is not available")]
    Unavailable,

    /// Reading or writing the backing file failed
    #[error("store I/O error: {message}")]
    Io { message: String },

    /// The backing file is not a valid store document
    #[error("store JSON error: {message}")]
    Json { message: String },
}
