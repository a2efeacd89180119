//! Error types for marquee.
//!
//! Every failure mode of the fetch/parse pipeline has an explicit variant so
//! callers can log precisely before degrading to an empty screen.

use thiserror::Error;

/// The unified error type for marquee operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The catalog answered with something other than HTTP 200.
    #[error("unexpected response status: {status}")]
    Status { status: u16 },

    /// The response body was not the expected JSON shape.
    #[error("malformed catalog response: {message}")]
    Parse { message: String },

    /// Input validation errors (catalog URL, sort mode, locale, transfer).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out: {message}")]
    Timeout { message: String },

    /// Generic HTTP or body read error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid catalog or image base URL.
    #[error("invalid catalog URL '{value}': {reason}")]
    CatalogUrl { value: String, reason: String },

    /// Unrecognized sort mode value.
    #[error("invalid sort mode '{value}': expected 'popular' or 'top_rated'")]
    SortMode { value: String },

    /// Unrecognized locale name.
    #[error("invalid locale '{value}'")]
    Locale { value: String },

    /// A transferred movie value could not be decoded.
    #[error("invalid movie transfer: {reason}")]
    Transfer { reason: String },
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse {
            message: err.to_string(),
        }
    }
}
