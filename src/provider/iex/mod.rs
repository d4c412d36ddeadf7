//! IEX Cloud market data client.
//!
//! Fundamentals, OHLC and historical prices from the IEX Cloud API.
//! Authentication is a `token` query parameter on every request.
//! API documentation: https://iexcloud.io/docs/api/

use std::sync::Arc;

use serde_json::Value;

use crate::auth::Credentials;
use crate::client::{Endpoint, IssueRequest, Params, RestClient};
use crate::errors::ApiError;

const BASE_URL: &str = "https://cloud.iexapis.com/";
const DEFAULT_VERSION: &str = "beta";
const TOKEN_PARAM: &str = "token";

/// Default number of earnings periods returned by [`IexClient::earnings`].
const DEFAULT_EARNINGS_LAST: u32 = 5;
/// Default earnings period granularity.
const DEFAULT_EARNINGS_PERIOD: &str = "quarter";

/// IEX Cloud API client.
///
/// All methods return the provider's JSON document unmodified.
///
/// # Example
///
/// ```ignore
/// let client = IexClient::new("pk_live_...")?;
/// let earnings = client.earnings("AAPL", None, None).await?;
/// ```
pub struct IexClient {
    transport: Arc<dyn IssueRequest>,
}

impl IexClient {
    /// Create a client for the production IEX Cloud host.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the HTTP client cannot be
    /// initialized.
    pub fn new(token: impl Into<String>) -> Result<Self, ApiError> {
        Self::with_base_url(token, BASE_URL)
    }

    /// Create a client against a different host (sandbox, test server).
    pub fn with_base_url(token: impl Into<String>, base_url: &str) -> Result<Self, ApiError> {
        let credentials = Credentials::query_token(TOKEN_PARAM, token);
        Ok(Self {
            transport: Arc::new(RestClient::new(base_url, credentials)?),
        })
    }

    /// Create a client over a custom transport.
    pub fn with_transport(transport: Arc<dyn IssueRequest>) -> Self {
        Self { transport }
    }

    async fn get(&self, path: &str, query: Params) -> Result<Value, ApiError> {
        self.transport
            .issue(Endpoint::get(DEFAULT_VERSION, path).query(query))
            .await
    }

    /// Earnings for a symbol.
    ///
    /// `last` defaults to 5 periods, `period` to `"quarter"`.
    pub async fn earnings(
        &self,
        symbol: &str,
        last: Option<u32>,
        period: Option<&str>,
    ) -> Result<Value, ApiError> {
        let last = last.unwrap_or(DEFAULT_EARNINGS_LAST);
        let period = period.unwrap_or(DEFAULT_EARNINGS_PERIOD);
        let path = format!("/stock/{}/earnings/{}", symbol, last);

        self.get(&path, Params::new().with("period", period)).await
    }

    /// Performance of all market sectors.
    pub async fn sector_performance(&self) -> Result<Value, ApiError> {
        self.get("/stock/market/sector-performance", Params::new())
            .await
    }

    /// Open/high/low/close for a symbol.
    pub async fn ohlc(&self, symbol: &str) -> Result<Value, ApiError> {
        let path = format!("/stock/{}/ohlc", symbol);
        self.get(&path, Params::new()).await
    }

    /// Balance sheet for a symbol.
    pub async fn balance_sheet(&self, symbol: &str) -> Result<Value, ApiError> {
        let path = format!("/stock/{}/balance-sheet", symbol);
        self.get(&path, Params::new()).await
    }

    /// Income statement for a symbol.
    pub async fn income_statement(&self, symbol: &str) -> Result<Value, ApiError> {
        let path = format!("/stock/{}/income", symbol);
        self.get(&path, Params::new()).await
    }

    /// Cash flow statement for a symbol.
    pub async fn cash_flow(&self, symbol: &str) -> Result<Value, ApiError> {
        let path = format!("/stock/{}/cash-flow", symbol);
        self.get(&path, Params::new()).await
    }

    /// Six months of daily chart data for a symbol.
    pub async fn historical(&self, symbol: &str) -> Result<Value, ApiError> {
        let path = format!("/stock/{}/chart/6m", symbol);
        self.get(&path, Params::new()).await
    }
}
