//! Game service error types.

use derive_more::Display;
use tracing::instrument;

/// Message shown when the service gives no usable reason.
pub const GENERIC_FAILURE: &str = "An error occurred while communicating with the server.";

/// A request to the game service failed.
///
/// Every variant leaves the caller's session untouched; they differ only in
/// what the user is told.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ServiceError {
    /// The service answered with a non-success status.
    #[display("{detail}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Detail from the error body, or the generic message.
        detail: String,
    },
    /// The request never produced a response (connect, timeout, I/O).
    #[display("{}", GENERIC_FAILURE)]
    Transport(String),
    /// The response body did not match the expected shape.
    #[display("{}", GENERIC_FAILURE)]
    Decode(String),
}

impl std::error::Error for ServiceError {}

impl ServiceError {
    /// Builds a rejection, falling back to the generic message.
    #[instrument]
    pub fn rejected(status: u16, detail: Option<String>) -> Self {
        ServiceError::Rejected {
            status,
            detail: detail.unwrap_or_else(|| GENERIC_FAILURE.to_string()),
        }
    }

    /// Returns true if the service itself refused the request.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ServiceError::Rejected { .. })
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ServiceError::Decode(err.to_string())
        } else {
            ServiceError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::Decode(err.to_string())
    }
}
