//! # Error Types
//!
//! Typed errors for the model capability layer. The core pipeline itself
//! has no error cases of its own (zero matches and zero-area inputs are
//! valid results, and a summarization reply that is not JSON is recovered
//! into an explicit error record); what can fail is talking to the model
//! server, and those failures propagate to the caller unhandled.
//!
//! Errors carry a retryability classification so the calling layer can
//! decide whether re-invoking is worthwhile. The pipeline never retries on
//! its own.

use std::{error::Error as StdError, fmt};

/// Errors raised by the HTTP model providers.
#[derive(Debug)]
pub enum ModelError {
    /// The request never produced an HTTP response (connection refused,
    /// DNS failure, timeout).
    Transport {
        /// Endpoint the request was sent to.
        endpoint: String,
        /// Underlying client error.
        source: reqwest::Error,
    },
    /// The server answered with a non-success HTTP status.
    Status {
        /// HTTP status code.
        status: u16,
        /// Error message extracted from the response body, if any.
        message: String,
    },
    /// The response was well-formed HTTP but did not have the expected
    /// chat-completion shape.
    Shape {
        /// What was being looked for when the shape check failed.
        context: String,
    },
}

impl ModelError {
    /// Whether re-invoking the same request may succeed.
    ///
    /// Transport failures and server-side statuses (5xx, 429) are
    /// retryable; malformed response shapes are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            ModelError::Transport { .. } => true,
            ModelError::Status { status, .. } => *status >= 500 || *status == 429,
            ModelError::Shape { .. } => false,
        }
    }
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::Transport { endpoint, source } => write!(
                f,
                "request to {endpoint} failed (is the model server running?): {source}"
            ),
            ModelError::Status { status, message } => {
                write!(f, "model server returned HTTP {status}: {message}")
            }
            ModelError::Shape { context } => {
                write!(f, "unexpected response shape: {context}")
            }
        }
    }
}

impl StdError for ModelError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ModelError::Transport { source, .. } => Some(source),
            _ => None,
        }
    }
}
