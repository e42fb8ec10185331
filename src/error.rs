//! Error types for the PaleoDB client.
//!
//! A failed HTTP status and an unparseable body are separate variants so
//! callers can tell a rejected request from a broken response.

use thiserror::Error;

/// Main error type for the PaleoDB client.
#[derive(Error, Debug)]
pub enum Error {
    /// Transport failure (connection refused, DNS, timeout)
    #[error("HTTP error: {0}")]
    Http(String),

    /// The service answered with a 4xx or 5xx status
    #[error(transparent)]
    Api(#[from] PaleoDbError),

    /// The body of a successful response was not valid JSON
    #[error("Response parse failure for {url}: {message}")]
    Parse { url: String, message: String },

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error while writing diagnostics
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// HTTP status carried by the error, if the service produced one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(e) => Some(e.status()),
            _ => None,
        }
    }

    /// Check if this error came from a non-JSON response body.
    #[must_use]
    pub fn is_parse_failure(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

/// Typed errors for non-success HTTP statuses.
///
/// PBDB reports failures as `{"status_code": 400, "errors": ["..."]}`; the
/// `errors` entries become the message when they are present.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaleoDbError {
    /// Raised when the endpoint does not exist (404).
    #[error("HTTP request failed with status {status}: {message}")]
    NotFound { status: u16, message: String },

    /// Raised when the service throttles the caller (429).
    #[error("HTTP request failed with status {status}: {message}")]
    RateLimited { status: u16, message: String },

    /// Raised on any other client error, usually a bad parameter (4xx).
    #[error("HTTP request failed with status {status}: {message}")]
    Client { status: u16, message: String },

    /// Raised on server errors (5xx).
    #[error("HTTP request failed with status {status}: {message}")]
    Server { status: u16, message: String },
}

impl PaleoDbError {
    /// Classify a failed status code.
    #[must_use]
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            404 => Self::NotFound { status, message },
            429 => Self::RateLimited { status, message },
            500..=599 => Self::Server { status, message },
            _ => Self::Client { status, message },
        }
    }

    /// Get the HTTP status code.
    #[must_use]
    pub fn status(&self) -> u16 {
        match self {
            Self::NotFound { status, .. }
            | Self::RateLimited { status, .. }
            | Self::Client { status, .. }
            | Self::Server { status, .. } => *status,
        }
    }

    /// Get the error message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::NotFound { message, .. }
            | Self::RateLimited { message, .. }
            | Self::Client { message, .. }
            | Self::Server { message, .. } => message,
        }
    }
}
