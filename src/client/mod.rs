//! Generic authenticated REST client.
//!
//! [`RestClient`] turns an [`Endpoint`] into exactly one outbound HTTP call:
//! it joins base URL + version segment + path, merges the credential into
//! the query or headers, sends the request and validates the response.
//! Every provider client in this crate goes through this one code path, so
//! authentication and URL composition are written and tested once.
//!
//! Façades depend on the [`IssueRequest`] trait rather than the concrete
//! client, which keeps them testable with a substitute transport.

mod endpoint;
mod params;

pub use endpoint::Endpoint;
pub use params::Params;

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::HeaderMap;
use serde_json::Value;

use crate::auth::Credentials;
use crate::errors::ApiError;

/// Default HTTP request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A response returned without JSON decoding.
///
/// Used for brokerage deletion calls, which may answer with an empty body.
#[derive(Clone, Debug)]
pub struct RawResponse {
    /// HTTP status code (always 2xx; other statuses become errors)
    pub status: u16,
    /// Raw response body, possibly empty
    pub body: String,
}

/// The request-issuing capability façades are built on.
///
/// Implemented by [`RestClient`]; callers can substitute their own
/// transport (e.g. a recording double in tests) via the façades'
/// `with_transport` constructors.
#[async_trait]
pub trait IssueRequest: Send + Sync {
    /// Issue the request and decode the response body as JSON.
    async fn issue(&self, endpoint: Endpoint<'_>) -> Result<Value, ApiError>;

    /// Issue the request and return the raw body without decoding.
    async fn issue_raw(&self, endpoint: Endpoint<'_>) -> Result<RawResponse, ApiError>;
}

/// Authenticated REST client bound to one provider's base URL and credential.
///
/// Stateless across calls: credentials are read-only after construction and
/// no response data is cached, so one instance may be shared freely between
/// tasks.
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl RestClient {
    /// Create a client with a default transport (30 second timeout).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the HTTP client cannot be
    /// initialized (e.g. the TLS backend fails to load).
    pub fn new(base_url: &str, credentials: Credentials) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(ApiError::Network)?;

        Ok(Self::with_http_client(http, base_url, credentials))
    }

    /// Create a client around a caller-configured [`reqwest::Client`]
    /// (custom timeout, proxy, connection pool).
    pub fn with_http_client(
        http: reqwest::Client,
        base_url: &str,
        credentials: Credentials,
    ) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        }
    }

    /// Join base URL, version segment and path.
    ///
    /// Tolerates a trailing separator on the base URL; the path must start
    /// with `/` and is used verbatim otherwise.
    fn compose_url(&self, endpoint: &Endpoint<'_>) -> Result<String, ApiError> {
        if !endpoint.path.starts_with('/') {
            return Err(ApiError::InvalidPath(endpoint.path.to_string()));
        }

        let base = match endpoint.base_url {
            Some(base) => base.trim_end_matches('/'),
            None => self.base_url.as_str(),
        };

        Ok(format!("{}/{}{}", base, endpoint.version, endpoint.path))
    }

    /// Build the final [`reqwest::Request`] with credentials attached.
    fn build_request(&self, endpoint: Endpoint<'_>) -> Result<reqwest::Request, ApiError> {
        let url = self.compose_url(&endpoint)?;

        let Endpoint {
            method, mut query, body, ..
        } = endpoint;

        let mut headers = HeaderMap::new();
        self.credentials.apply(&mut query, &mut headers);

        let mut builder = self.http.request(method, url.as_str()).headers(headers);

        if !query.is_empty() {
            builder = builder.query(query.as_pairs());
        }
        if let Some(body) = body {
            builder = builder.json(&body);
        }

        builder.build().map_err(ApiError::Network)
    }

    /// Send the request and validate the status, without decoding the body.
    async fn dispatch(&self, endpoint: Endpoint<'_>) -> Result<RawResponse, ApiError> {
        let request = self.build_request(endpoint)?;
        let method = request.method().clone();
        let url = request.url().to_string();

        debug!("[RestClient] {} {}", method, url);

        let response = self.http.execute(request).await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout { url: url.clone() }
            } else {
                ApiError::Network(e)
            }
        })?;

        let status = response.status();
        let body = response.text().await.map_err(ApiError::Network)?;

        debug!("[RestClient] {} {} -> {}", method, url, status);

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(RawResponse {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl IssueRequest for RestClient {
    async fn issue(&self, endpoint: Endpoint<'_>) -> Result<Value, ApiError> {
        let raw = self.dispatch(endpoint).await?;

        serde_json::from_str(&raw.body).map_err(|e| ApiError::Decode {
            message: e.to_string(),
            body: raw.body,
        })
    }

    async fn issue_raw(&self, endpoint: Endpoint<'_>) -> Result<RawResponse, ApiError> {
        self.dispatch(endpoint).await
    }
}
