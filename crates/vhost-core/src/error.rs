//! Error types for vhost directory operations.
//!
//! Every client call fails with exactly one of four kinds: the client could
//! not be configured, the server answered with a non-200 status, a 200 body
//! did not match the expected shape, or the transport itself failed.

use thiserror::Error;

/// Main error type for vhost directory operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The server URL cannot be resolved into a connectable location.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The server answered with a status other than 200.
    #[error("unexpected status code: {status}")]
    UnexpectedStatus {
        /// Numeric HTTP status code returned by the server
        status: u16,
    },

    /// A 200 response body did not decode into the expected record.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The underlying HTTP transport failed (refused, reset, DNS, ...).
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),
}

/// Specialized result type for vhost directory operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigError(_) => "CONFIG_ERROR",
            Self::UnexpectedStatus { .. } => "UNEXPECTED_STATUS",
            Self::MalformedResponse(_) => "MALFORMED_RESPONSE",
            Self::Transport(_) => "TRANSPORT",
        }
    }

    /// Returns the HTTP status carried by an [`Error::UnexpectedStatus`].
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if issuing the same call again may succeed.
    ///
    /// The client never retries by itself; this only helps callers decide
    /// whether a fresh invocation is worthwhile.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::UnexpectedStatus { status } => *status == 429 || *status >= 500,
            Self::Transport(err) => err.is_connect() || err.is_timeout(),
            Self::ConfigError(_) | Self::MalformedResponse(_) => false,
        }
    }
}

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedResponse(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ConfigError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    fn builder_error() -> reqwest::Error {
        reqwest::Client::new()
            .get("not a url")
            .build()
            .unwrap_err()
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            Error::ConfigError("test".to_string()).error_code(),
            "CONFIG_ERROR"
        );
        assert_eq!(
            Error::UnexpectedStatus { status: 503 }.error_code(),
            "UNEXPECTED_STATUS"
        );
        assert_eq!(
            Error::MalformedResponse("test".to_string()).error_code(),
            "MALFORMED_RESPONSE"
        );
        assert_eq!(Error::Transport(builder_error()).error_code(), "TRANSPORT");
    }

    #[test]
    fn test_error_display() {
        let err = Error::UnexpectedStatus { status: 404 };
        assert_eq!(err.to_string(), "unexpected status code: 404");

        let err = Error::ConfigError("missing host".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing host");
    }

    #[test]
    fn test_status_accessor() {
        assert_eq!(Error::UnexpectedStatus { status: 503 }.status(), Some(503));
        assert_eq!(Error::MalformedResponse("x".to_string()).status(), None);
    }

    #[test]
    fn test_is_transient() {
        assert!(Error::UnexpectedStatus { status: 503 }.is_transient());
        assert!(Error::UnexpectedStatus { status: 429 }.is_transient());
        assert!(!Error::UnexpectedStatus { status: 404 }.is_transient());
        assert!(!Error::ConfigError("x".to_string()).is_transient());
        assert!(!Error::MalformedResponse("x".to_string()).is_transient());
        assert!(!Error::Transport(builder_error()).is_transient());
    }

    #[test]
    fn test_from_reqwest_error_keeps_source() {
        let err: Error = builder_error().into();
        assert!(matches!(err, Error::Transport(_)));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_from_url_parse_error() {
        let err = url::Url::parse("not a url").unwrap_err();
        let vhost_err: Error = err.into();
        assert!(matches!(vhost_err, Error::ConfigError(_)));
    }

    #[test]
    fn test_from_serde_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
        let vhost_err: Error = err.into();
        assert!(matches!(vhost_err, Error::MalformedResponse(_)));
        assert_eq!(vhost_err.error_code(), "MALFORMED_RESPONSE");
    }
}
