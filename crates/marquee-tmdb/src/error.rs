//! Conversions from HTTP client errors into marquee errors.

use marquee_core::Error;
use marquee_core::error::TransportError;

/// Classifies a `reqwest` failure.
pub(crate) fn transport_error(err: reqwest::Error) -> Error {
    let message = err.to_string();
    let transport = if err.is_timeout() {
        TransportError::Timeout { message }
    } else if err.is_connect() {
        TransportError::Connection { message }
    } else {
        TransportError::Http { message }
    };
    Error::Transport(transport)
}
