//! Unified error types for the uplink client.
//!
//! Two failure taxonomies are kept distinct in the variants. A rejected
//! handshake (`AuthRejected`) leaves no usable session behind; the caller
//! owning the process decides whether to exit. Everything else is a
//! per-call failure reported to the caller, with no retries and no
//! partial-result recovery.

use thiserror::Error;

/// Result alias used throughout the client.
pub type AppResult<T> = Result<T, AppError>;

/// Application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// The agent refused the authentication token.
    #[error("authentication rejected by agent: {0}")]
    AuthRejected(String),

    /// The agent did not signal readiness for a command; no further
    /// bytes were sent for this request.
    #[error("agent rejected command {command:?}: {reply}")]
    CommandRejected {
        command: &'static str,
        reply: String,
    },

    /// The payload was transmitted but the agent did not acknowledge it.
    #[error("agent rejected upload: {0}")]
    UploadRejected(String),

    /// Payload length is not representable in the 4-byte length prefix.
    #[error("payload of {0} bytes exceeds the u32 length prefix")]
    PayloadTooLarge(usize),

    /// The agent's response could not be decoded as the expected JSON.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A response frame was not valid UTF-8.
    #[error("response frame is not valid UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// An operation did not complete within the configured deadline.
    #[error("operation timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// Transport-level failure; always propagated, never swallowed.
    #[error("transport error: {0}")]
    Io(#[from] std::io::Error),
}
