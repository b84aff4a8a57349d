//! Text-generation client error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AiError {
    /// Transport failure (connection refused, DNS, TLS, ...).
    #[error("Failed to communicate with AI service: {0}")]
    Http(#[source] reqwest::Error),

    /// No response within the configured timeout.
    #[error("AI service request timed out. Please try again.")]
    Timeout,

    /// The service answered with a non-success status.
    #[error("AI service error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body was not the expected JSON.
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for AiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(e)
        }
    }
}
