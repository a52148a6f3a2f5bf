//! Transport error types.

/// Errors from talking to the lookup server.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server rejected our credentials or origin
    #[error("unauthorized by lookup server")]
    Unauthorized,

    /// Server returned an error status with a body we could not read as a reply
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// JSON deserialization failed
    #[error("JSON parse error: {message}{}", body_suffix(.body))]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Server answered with no reply object at all
    #[error("no data returned")]
    Empty,

    /// Submit was accepted but carried no request id to poll with
    #[error("accepted reply is missing a request id")]
    MissingRequestId,

    /// Scripted failure from the mock transport
    #[error("mock transport: {0}")]
    Mock(String),
}

fn body_suffix(body: &Option<String>) -> String {
    body.as_deref()
        .map(|b| format!(" (body: {b})"))
        .unwrap_or_default()
}
