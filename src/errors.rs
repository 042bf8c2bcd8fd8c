use thiserror::Error;

/// Error type that captures submission failures.
///
/// Field-level validation never travels through this enum; validators return
/// [`crate::validators::ValidationResult`] values instead. These variants
/// cover the one network operation in the crate and its surrounding I/O.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// The backend could not be reached at all (connection refused, DNS
    /// failure, timeout).
    #[error("Backend server is not running. Start the backend and try again.")]
    BackendUnreachable,
    /// The request was rejected before an HTTP status was available, most
    /// commonly an origin/CORS misconfiguration on the server.
    #[error("The request was blocked before reaching the server. Check the backend CORS configuration.")]
    CrossOrigin,
    /// The backend answered with a non-2xx status. `message` carries the
    /// body's `message`/`error` field when present, otherwise a generic
    /// `Server error: {status}` text.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// A submission is already in flight for this adapter.
    #[error("A submission is already in progress.")]
    AlreadyInFlight,
    /// The attached file could not be read from disk.
    #[error("Could not read attachment: {0}")]
    Attachment(#[from] std::io::Error),
    /// The draft could not be serialized into the wire format.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    /// The backend answered 2xx but the body was not the expected shape.
    #[error("Malformed server response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for SubmissionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            SubmissionError::BackendUnreachable
        } else if err.is_decode() || err.is_builder() {
            SubmissionError::MalformedResponse(err.to_string())
        } else {
            SubmissionError::CrossOrigin
        }
    }
}
