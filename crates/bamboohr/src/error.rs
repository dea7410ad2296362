//! Client error types.

use std::path::PathBuf;

use thiserror::Error;

/// Client error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Client construction was given invalid settings.
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP request failed (connection, timeout, TLS, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A caller-supplied ID cannot be used as a path segment.
    #[error("Invalid identifier: {0:?}")]
    InvalidId(String),

    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The service answered with a status outside `[200, 400)`.
    ///
    /// The response body is not inspected.
    #[error("API error, status code: {status}")]
    Api {
        /// HTTP status code.
        status: u16,
    },

    /// A success response body did not decode into the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A local file could not be read.
    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// HTTP status code carried by an API error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status } => Some(*status),
            _ => None,
        }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Api { status: 404 })
    }

    /// Check if this is an authentication or authorization error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Api { status: 401 | 403 })
    }

    /// Check if this is a server error.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Api { status } if *status >= 500)
    }

    /// Check if the transport gave up waiting.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Http(e) if e.is_timeout())
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;
