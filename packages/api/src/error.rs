//! Error type for remote calls.

use thiserror::Error;

/// Failure of a single request to the content API.
///
/// All variants carry opaque text meant for the operator; there are no
/// structured error codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with a non-success status. Displays the raw body.
    #[error("{body}")]
    Remote { status: u16, body: String },

    /// The request never completed (connection refused, DNS, timeout, ...).
    #[error("Request failed: {0}")]
    Transport(String),

    /// The response body could not be read as the expected JSON shape.
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn remote(status: u16, body: impl Into<String>) -> Self {
        Self::Remote {
            status,
            body: body.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_displays_raw_body() {
        let err = ApiError::remote(403, "Forbidden: not the admin");
        assert_eq!(err.to_string(), "Forbidden: not the admin");
    }

    #[test]
    fn test_transport_error_names_the_failure() {
        let err = ApiError::transport("connection refused");
        assert_eq!(err.to_string(), "Request failed: connection refused");
    }
}
