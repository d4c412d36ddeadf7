//! Error types for the trading clients crate.
//!
//! This module provides [`ApiError`], the single error enum returned by the
//! core client and every provider method. Variants follow the failure
//! taxonomy of an HTTP API call: connectivity, timeout, non-success status,
//! and response decoding. Nothing is retried internally; the caller decides
//! what to do with the status code and body.

use thiserror::Error;

/// Errors that can occur while issuing a request to a provider API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// A network-level failure before a response was received
    /// (DNS, TCP, TLS, connection refused).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request timed out at the transport layer.
    #[error("request timed out: {url}")]
    Timeout {
        /// The URL that timed out
        url: String,
    },

    /// The provider answered with a non-2xx status.
    /// The body is carried verbatim for caller inspection.
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code returned by the provider
        status: u16,
        /// Raw response body, unmodified
        body: String,
    },

    /// A 2xx response whose body is not valid JSON.
    #[error("failed to decode response: {message}")]
    Decode {
        /// Description of the JSON parse failure
        message: String,
        /// The raw body that failed to parse
        body: String,
    },

    /// An endpoint path that does not start with `/`.
    /// Detected locally; no request is sent.
    #[error("endpoint path must start with '/': {0}")]
    InvalidPath(String),

    /// Credential material that cannot be placed on a request,
    /// e.g. a key containing non-ASCII header characters.
    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),
}

impl ApiError {
    /// Returns the HTTP status code if the provider answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True if the provider rejected the request with HTTP 429.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::Status { status: 429, .. })
    }

    /// True for 4xx responses (bad parameters, invalid credential, not found).
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Status { status, .. } if (400..500).contains(status))
    }

    /// True for 5xx responses.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Status { status, .. } if (500..600).contains(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_accessor() {
        let error = ApiError::Status {
            status: 404,
            body: "{\"error\":\"not found\"}".to_string(),
        };
        assert_eq!(error.status(), Some(404));

        let error = ApiError::InvalidPath("orders".to_string());
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_rate_limited_detection() {
        let error = ApiError::Status {
            status: 429,
            body: String::new(),
        };
        assert!(error.is_rate_limited());
        assert!(error.is_client_error());
        assert!(!error.is_server_error());
    }

    #[test]
    fn test_server_error_detection() {
        let error = ApiError::Status {
            status: 502,
            body: "bad gateway".to_string(),
        };
        assert!(error.is_server_error());
        assert!(!error.is_client_error());
        assert!(!error.is_rate_limited());
    }

    #[test]
    fn test_error_display() {
        let error = ApiError::Status {
            status: 404,
            body: "missing".to_string(),
        };
        assert_eq!(format!("{}", error), "HTTP 404: missing");

        let error = ApiError::InvalidPath("orders".to_string());
        assert_eq!(
            format!("{}", error),
            "endpoint path must start with '/': orders"
        );
    }
}
