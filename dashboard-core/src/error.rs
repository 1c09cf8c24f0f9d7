//! Client Error Types
//!
//! Shared by every implementation of the client traits so the native and
//! browser transports report failures the same way.

use thiserror::Error;

/// Errors that can occur when calling the dashboard backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The request never produced a response (connection refused, DNS, CORS)
    #[error("Request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-success status
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body did not have the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ClientError {
    /// HTTP status if the backend responded at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = ClientError::Status {
            status: 502,
            message: "bad gateway".into(),
        };
        assert_eq!(err.to_string(), "API error 502: bad gateway");
        assert_eq!(err.status(), Some(502));
        assert_eq!(ClientError::Transport("refused".into()).status(), None);
    }
}
