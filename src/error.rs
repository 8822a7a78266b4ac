//! Error types shared across the client

use thiserror::Error;

/// Errors that can occur while talking to the control plane
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level failure (connect, timeout, TLS, ...)
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a status the caller did not expect
    #[error("unexpected status {status}: {message}")]
    UnexpectedStatus { status: u16, message: String },

    /// The response body could not be decoded into the requested type
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Client configuration is unusable (missing address, bad URL, ...)
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A job specification is missing a required piece
    #[error("invalid job spec: {0}")]
    InvalidSpec(String),
}

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_status_display() {
        let err = Error::UnexpectedStatus {
            status: 500,
            message: "internal error".to_string(),
        };
        assert_eq!(err.to_string(), "unexpected status 500: internal error");
    }

    #[test]
    fn test_decode_error_from_serde() {
        let parse_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Decode(_)));
    }
}
