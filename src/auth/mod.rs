//! Credential schemes for provider authentication.
//!
//! Providers prove authorization in one of two wire formats:
//!
//! - a single token merged into the query string under a fixed key
//!   (IEX Cloud `token`, Polygon `apiKey`)
//! - a key/secret pair carried as two custom headers on every request
//!   (Alpaca `APCA-API-KEY-ID` / `APCA-API-SECRET-KEY`)
//!
//! Header values are validated at construction so a malformed credential
//! fails fast instead of surfacing on the first request.

use std::fmt;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::client::Params;
use crate::errors::ApiError;

/// Credential material bound to one provider, immutable after construction.
pub enum Credentials {
    /// A bearer-style token sent as a query parameter under `key`.
    QueryToken {
        /// Query parameter name, e.g. `token` or `apiKey`
        key: &'static str,
        /// The secret token value
        token: String,
    },
    /// A key/secret pair sent as two custom headers on every request.
    HeaderPair {
        /// Header carrying the key identifier
        key_header: HeaderName,
        /// Header carrying the secret
        secret_header: HeaderName,
        /// Key identifier value
        key_id: HeaderValue,
        /// Secret value
        secret: HeaderValue,
    },
}

impl Credentials {
    /// Create a query-parameter token credential.
    ///
    /// An empty token is accepted and sent as-is; the provider is
    /// responsible for rejecting it.
    pub fn query_token(key: &'static str, token: impl Into<String>) -> Self {
        Self::QueryToken {
            key,
            token: token.into(),
        }
    }

    /// Create a header-pair credential.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidCredentials`] if either value cannot be
    /// encoded as an HTTP header.
    pub fn header_pair(
        key_header: HeaderName,
        secret_header: HeaderName,
        key_id: &str,
        secret: &str,
    ) -> Result<Self, ApiError> {
        let key_id = HeaderValue::from_str(key_id)
            .map_err(|e| ApiError::InvalidCredentials(format!("key id: {}", e)))?;
        let mut secret = HeaderValue::from_str(secret)
            .map_err(|e| ApiError::InvalidCredentials(format!("secret: {}", e)))?;
        secret.set_sensitive(true);

        Ok(Self::HeaderPair {
            key_header,
            secret_header,
            key_id,
            secret,
        })
    }

    /// Attach this credential to an outgoing request.
    ///
    /// Query-token schemes merge the token into `params` after the caller's
    /// entries, so a caller-supplied parameter with the same key is replaced
    /// (last-write-wins, never duplicated). Header-pair schemes set both
    /// headers and leave `params` untouched.
    pub(crate) fn apply(&self, params: &mut Params, headers: &mut HeaderMap) {
        match self {
            Self::QueryToken { key, token } => {
                params.insert(*key, token.clone());
            }
            Self::HeaderPair {
                key_header,
                secret_header,
                key_id,
                secret,
            } => {
                headers.insert(key_header.clone(), key_id.clone());
                headers.insert(secret_header.clone(), secret.clone());
            }
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QueryToken { key, .. } => f
                .debug_struct("QueryToken")
                .field("key", key)
                .field("token", &"<redacted>")
                .finish(),
            Self::HeaderPair {
                key_header,
                secret_header,
                ..
            } => f
                .debug_struct("HeaderPair")
                .field("key_header", key_header)
                .field("secret_header", secret_header)
                .field("key_id", &"<redacted>")
                .field("secret", &"<redacted>")
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderName;

    #[test]
    fn test_query_token_merges_into_params() {
        let credentials = Credentials::query_token("token", "secret-value");
        let mut params = Params::new();
        let mut headers = HeaderMap::new();

        credentials.apply(&mut params, &mut headers);

        assert_eq!(params.get("token"), Some("secret-value"));
        assert!(headers.is_empty());
    }

    #[test]
    fn test_query_token_replaces_caller_value() {
        let credentials = Credentials::query_token("token", "real");
        let mut params = Params::new().with("token", "spoofed").with("limit", "5");
        let mut headers = HeaderMap::new();

        credentials.apply(&mut params, &mut headers);

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("token"), Some("real"));
    }

    #[test]
    fn test_header_pair_sets_both_headers() {
        let credentials = Credentials::header_pair(
            HeaderName::from_static("apca-api-key-id"),
            HeaderName::from_static("apca-api-secret-key"),
            "key-123",
            "secret-456",
        )
        .unwrap();

        let mut params = Params::new().with("limit", "10");
        let mut headers = HeaderMap::new();
        credentials.apply(&mut params, &mut headers);

        assert_eq!(headers.get("apca-api-key-id").unwrap(), "key-123");
        assert_eq!(headers.get("apca-api-secret-key").unwrap(), "secret-456");
        // Query params are untouched by header schemes
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_header_pair_rejects_unencodable_material() {
        let result = Credentials::header_pair(
            HeaderName::from_static("apca-api-key-id"),
            HeaderName::from_static("apca-api-secret-key"),
            "key\nwith-newline",
            "secret",
        );
        assert!(matches!(result, Err(ApiError::InvalidCredentials(_))));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let credentials = Credentials::query_token("token", "super-secret");
        let output = format!("{:?}", credentials);
        assert!(!output.contains("super-secret"));
        assert!(output.contains("<redacted>"));

        let credentials = Credentials::header_pair(
            HeaderName::from_static("apca-api-key-id"),
            HeaderName::from_static("apca-api-secret-key"),
            "key-123",
            "secret-456",
        )
        .unwrap();
        let output = format!("{:?}", credentials);
        assert!(!output.contains("key-123"));
        assert!(!output.contains("secret-456"));
    }
}
