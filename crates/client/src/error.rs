//! Error types for the Splunk client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Text used when Splunk rejects a request without any structured message.
pub const NO_ERROR_MESSAGE: &str = "No error messages returned from Splunk";

/// Errors that can occur during Splunk client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Authentication could not be attempted (e.g. login without credentials).
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// Transport failure: connection error, timeout, or unreadable body.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success response from Splunk.
    ///
    /// Displays only the service's own message text so callers see exactly
    /// what Splunk reported.
    #[error("{message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// A success response whose body was not the JSON we expected.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// The operating system's random source could not be read.
    #[error("Failed to read random source: {0}")]
    RandomSource(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// HTTP status code for service errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error indicates authentication failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::AuthFailed(_))
            || matches!(self, Self::ApiError { status, .. } if *status == 401 || *status == 403)
    }

    /// Check if this error came from the transport rather than from Splunk itself.
    pub fn is_transport_error(&self) -> bool {
        matches!(self, Self::HttpError(_) | Self::InvalidResponse(_))
    }
}
