//! Polygon.io market data and news client.
//!
//! Company details, financials, news and aggregates from the Polygon API.
//! Authentication is an `apiKey` query parameter on every request. Most
//! endpoints live under `v1`; financials, snapshots and previous-close use
//! `v2`.
//! API documentation: https://polygon.io/docs

use std::sync::Arc;

use serde_json::Value;

use crate::auth::Credentials;
use crate::client::{Endpoint, IssueRequest, Params, RestClient};
use crate::errors::ApiError;

const BASE_URL: &str = "https://api.polygon.io/";
const DEFAULT_VERSION: &str = "v1";
const V2: &str = "v2";
const API_KEY_PARAM: &str = "apiKey";

/// Default report type for [`PolygonClient::financials`] (quarterly).
const DEFAULT_FINANCIALS_TYPE: &str = "Q";
/// Default result limit for [`PolygonClient::financials`].
const DEFAULT_FINANCIALS_LIMIT: u32 = 16;
/// Default result limit for [`PolygonClient::aggregate`].
const DEFAULT_AGGREGATE_LIMIT: u32 = 500;

/// Polygon.io API client.
///
/// All methods return the provider's JSON document unmodified.
pub struct PolygonClient {
    transport: Arc<dyn IssueRequest>,
}

impl PolygonClient {
    /// Create a client for the production Polygon host.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the HTTP client cannot be
    /// initialized.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ApiError> {
        Self::with_base_url(api_key, BASE_URL)
    }

    /// Create a client against a different host.
    pub fn with_base_url(api_key: impl Into<String>, base_url: &str) -> Result<Self, ApiError> {
        let credentials = Credentials::query_token(API_KEY_PARAM, api_key);
        Ok(Self {
            transport: Arc::new(RestClient::new(base_url, credentials)?),
        })
    }

    /// Create a client over a custom transport.
    pub fn with_transport(transport: Arc<dyn IssueRequest>) -> Self {
        Self { transport }
    }

    async fn get(&self, version: &str, path: &str, query: Params) -> Result<Value, ApiError> {
        self.transport
            .issue(Endpoint::get(version, path).query(query))
            .await
    }

    /// Company details for a symbol.
    pub async fn details(&self, symbol: &str) -> Result<Value, ApiError> {
        let path = format!("/meta/symbols/{}/company", symbol);
        self.get(DEFAULT_VERSION, &path, Params::new()).await
    }

    /// Financial reports for a symbol.
    ///
    /// `report_type` defaults to `"Q"` (quarterly), `limit` to 16.
    pub async fn financials(
        &self,
        symbol: &str,
        report_type: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Value, ApiError> {
        let report_type = report_type.unwrap_or(DEFAULT_FINANCIALS_TYPE);
        let limit = limit.unwrap_or(DEFAULT_FINANCIALS_LIMIT);
        let path = format!("/reference/financials/{}", symbol);
        let query = Params::new()
            .with("limit", limit.to_string())
            .with("type", report_type);

        self.get(V2, &path, query).await
    }

    /// News articles for a symbol.
    pub async fn news(&self, symbol: &str) -> Result<Value, ApiError> {
        let path = format!("/meta/symbols/{}/news", symbol);
        self.get(DEFAULT_VERSION, &path, Params::new()).await
    }

    /// Daily aggregates for a symbol. `limit` defaults to 500.
    pub async fn aggregate(&self, symbol: &str, limit: Option<u32>) -> Result<Value, ApiError> {
        let limit = limit.unwrap_or(DEFAULT_AGGREGATE_LIMIT);
        let path = format!("/historic/agg/day/{}", symbol);

        self.get(DEFAULT_VERSION, &path, Params::new().with("limit", limit.to_string()))
            .await
    }

    /// Current snapshot for a US stock ticker.
    pub async fn snapshot(&self, symbol: &str) -> Result<Value, ApiError> {
        let path = format!("/snapshot/locale/us/markets/stocks/tickers/{}", symbol);
        self.get(V2, &path, Params::new()).await
    }

    /// Previous day's bar for a symbol.
    pub async fn prev(&self, symbol: &str) -> Result<Value, ApiError> {
        let path = format!("/aggs/ticker/{}/prev", symbol);
        self.get(V2, &path, Params::new()).await
    }

    /// Last quote for a symbol.
    pub async fn last_quote(&self, symbol: &str) -> Result<Value, ApiError> {
        let path = format!("/last_quote/stocks/{}", symbol);
        self.get(DEFAULT_VERSION, &path, Params::new()).await
    }
}
