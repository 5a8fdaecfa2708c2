//! Backend error types
//!
//! Every failure talking to the backend ends up here, whichever HTTP stack
//! produced it (reqwest natively, gloo-net in the browser).

use thiserror::Error;

/// Errors that can occur when calling the backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// Connection refused or the host could not be reached
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    /// The request did not complete within the configured timeout
    #[error("Request timeout")]
    Timeout,

    /// Any other transport-level failure
    #[error("Request failed: {0}")]
    Transport(String),

    /// Non-success status with a body that is not JSON
    #[error("Backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The body could not be decoded into the expected shape
    #[error("Malformed response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },
}

impl BackendError {
    pub fn decode(endpoint: &str, err: impl std::fmt::Display) -> Self {
        BackendError::Decode {
            endpoint: endpoint.to_string(),
            message: err.to_string(),
        }
    }
}

#[cfg(feature = "client")]
impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            BackendError::Timeout
        } else if err.is_connect() {
            BackendError::Unavailable(err.to_string())
        } else {
            BackendError::Transport(err.to_string())
        }
    }
}

/// Result type alias for backend calls
pub type BackendResult<T> = Result<T, BackendError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BackendError::Status {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Backend returned HTTP 500: boom");

        let err = BackendError::decode("/get-sample", "expected a sequence");
        assert_eq!(
            err.to_string(),
            "Malformed response from /get-sample: expected a sequence"
        );
    }
}
