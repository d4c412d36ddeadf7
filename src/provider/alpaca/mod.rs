//! Alpaca brokerage client.
//!
//! Account, order, position and watchlist management on the Alpaca trading
//! API, plus bars and last trades from the separate market-data host. Both
//! hosts share one credential pair carried as the `APCA-API-KEY-ID` and
//! `APCA-API-SECRET-KEY` headers on every request.
//!
//! Deletion endpoints may answer with an empty body, so they return the
//! raw transport result instead of decoded JSON.
//!
//! API documentation: https://docs.alpaca.markets/

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::HeaderName;
use serde_json::{json, Value};

use crate::auth::Credentials;
use crate::client::{Endpoint, IssueRequest, Params, RawResponse, RestClient};
use crate::errors::ApiError;
use crate::pacer::RequestPacer;

const BASE_URL: &str = "https://api.alpaca.markets/";
const DATA_URL: &str = "https://data.alpaca.markets/";
const TRADING_VERSION: &str = "v2";
const DATA_VERSION: &str = "v1";

const KEY_HEADER: HeaderName = HeaderName::from_static("apca-api-key-id");
const SECRET_HEADER: HeaderName = HeaderName::from_static("apca-api-secret-key");

/// Minimum spacing between requests recommended to stay under Alpaca's
/// rate limits. Not enforced unless the caller opts in via
/// [`AlpacaClient::with_request_spacing`].
pub const ALPACA_REQUEST_SPACING: Duration = Duration::from_millis(300);

/// Default timeframe for [`AlpacaClient::barset`].
const DEFAULT_BARSET_TIMEFRAME: &str = "day";
/// Default bar limit for [`AlpacaClient::barset`].
const DEFAULT_BARSET_LIMIT: u32 = 500;

/// Alpaca brokerage API client.
///
/// Trading methods return the provider's JSON document unmodified;
/// deletion methods return the raw response (status and body).
///
/// # Example
///
/// ```ignore
/// let client = AlpacaClient::new("key-id", "secret")?;
/// let order = client
///     .place_market_order("TSLA", 10, "buy", "day")
///     .await?;
/// ```
pub struct AlpacaClient {
    transport: Arc<dyn IssueRequest>,
    data_url: String,
    pacer: Option<RequestPacer>,
}

impl AlpacaClient {
    /// Create a client for the production trading and data hosts.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidCredentials`] if the key material cannot
    /// be encoded as HTTP headers, or [`ApiError::Network`] if the HTTP
    /// client cannot be initialized.
    pub fn new(key_id: &str, secret: &str) -> Result<Self, ApiError> {
        Self::with_base_urls(key_id, secret, BASE_URL, DATA_URL)
    }

    /// Create a client against different hosts (paper trading, test server).
    pub fn with_base_urls(
        key_id: &str,
        secret: &str,
        base_url: &str,
        data_url: &str,
    ) -> Result<Self, ApiError> {
        let credentials = Credentials::header_pair(KEY_HEADER, SECRET_HEADER, key_id, secret)?;

        Ok(Self {
            transport: Arc::new(RestClient::new(base_url, credentials)?),
            data_url: data_url.to_string(),
            pacer: None,
        })
    }

    /// Create a client over a custom transport. `data_url` is still used
    /// for the market-data endpoints' per-call base override.
    pub fn with_transport(transport: Arc<dyn IssueRequest>, data_url: &str) -> Self {
        Self {
            transport,
            data_url: data_url.to_string(),
            pacer: None,
        }
    }

    /// Enforce a minimum spacing between consecutive requests.
    ///
    /// Off by default. [`ALPACA_REQUEST_SPACING`] is the provider's
    /// recommended value.
    pub fn with_request_spacing(mut self, spacing: Duration) -> Self {
        self.pacer = Some(RequestPacer::new(spacing));
        self
    }

    async fn pace(&self) {
        if let Some(pacer) = &self.pacer {
            pacer.wait().await;
        }
    }

    async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.pace().await;
        self.transport
            .issue(Endpoint::get(TRADING_VERSION, path))
            .await
    }

    async fn data_get(&self, path: &str, query: Params) -> Result<Value, ApiError> {
        self.pace().await;
        self.transport
            .issue(
                Endpoint::get(DATA_VERSION, path)
                    .query(query)
                    .at_base(&self.data_url),
            )
            .await
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        self.pace().await;
        self.transport
            .issue(Endpoint::post(TRADING_VERSION, path).body(body))
            .await
    }

    async fn delete(&self, path: &str) -> Result<RawResponse, ApiError> {
        self.pace().await;
        self.transport
            .issue_raw(Endpoint::delete(TRADING_VERSION, path))
            .await
    }

    // ── Account ─────────────────────────────────────────────────────────

    /// Account details.
    pub async fn account(&self) -> Result<Value, ApiError> {
        self.get("/account").await
    }

    /// Market clock (open/close state and next session times).
    pub async fn clock(&self) -> Result<Value, ApiError> {
        self.get("/clock").await
    }

    /// All tradable assets.
    pub async fn assets(&self) -> Result<Value, ApiError> {
        self.get("/assets").await
    }

    // ── Orders ──────────────────────────────────────────────────────────

    /// A single order by id.
    pub async fn order(&self, order_id: &str) -> Result<Value, ApiError> {
        let path = format!("/orders/{}", order_id);
        self.get(&path).await
    }

    /// All open orders.
    pub async fn orders(&self) -> Result<Value, ApiError> {
        self.get("/orders").await
    }

    /// Place a market order.
    pub async fn place_market_order(
        &self,
        symbol: &str,
        qty: u32,
        side: &str,
        time_in_force: &str,
    ) -> Result<Value, ApiError> {
        let body = json!({
            "symbol": symbol,
            "qty": qty,
            "side": side,
            "type": "market",
            "time_in_force": time_in_force,
        });

        self.post("/orders", body).await
    }

    /// Place a stop order.
    pub async fn place_stop_order(
        &self,
        symbol: &str,
        qty: u32,
        side: &str,
        time_in_force: &str,
        stop_price: f64,
    ) -> Result<Value, ApiError> {
        let body = json!({
            "symbol": symbol,
            "qty": qty,
            "side": side,
            "type": "stop",
            "time_in_force": time_in_force,
            "stop_price": stop_price,
        });

        self.post("/orders", body).await
    }

    /// Cancel an order. The response body may be empty.
    pub async fn cancel_order(&self, order_id: &str) -> Result<RawResponse, ApiError> {
        let path = format!("/orders/{}", order_id);
        self.delete(&path).await
    }

    // ── Positions ───────────────────────────────────────────────────────

    /// All open positions.
    pub async fn positions(&self) -> Result<Value, ApiError> {
        self.get("/positions").await
    }

    /// The open position for a symbol.
    pub async fn position(&self, symbol: &str) -> Result<Value, ApiError> {
        let path = format!("/positions/{}", symbol);
        self.get(&path).await
    }

    /// Liquidate all open positions.
    pub async fn close_positions(&self) -> Result<RawResponse, ApiError> {
        self.delete("/positions").await
    }

    /// Liquidate the position for a symbol.
    pub async fn close_position(&self, symbol: &str) -> Result<RawResponse, ApiError> {
        let path = format!("/positions/{}", symbol);
        self.delete(&path).await
    }

    // ── Watchlists ──────────────────────────────────────────────────────

    /// Create a watchlist with an initial set of symbols.
    pub async fn create_watchlist(
        &self,
        name: &str,
        symbols: &[&str],
    ) -> Result<Value, ApiError> {
        let body = json!({
            "name": name,
            "symbols": symbols,
        });

        self.post("/watchlists", body).await
    }

    /// All watchlists.
    pub async fn all_watchlists(&self) -> Result<Value, ApiError> {
        self.get("/watchlists").await
    }

    /// A single watchlist by id.
    pub async fn get_watchlist(&self, watchlist_id: &str) -> Result<Value, ApiError> {
        let path = format!("/watchlists/{}", watchlist_id);
        self.get(&path).await
    }

    /// Add a symbol to a watchlist.
    pub async fn add_to_watchlist(
        &self,
        watchlist_id: &str,
        symbol: &str,
    ) -> Result<Value, ApiError> {
        let path = format!("/watchlists/{}", watchlist_id);
        self.post(&path, json!({ "symbol": symbol })).await
    }

    /// Remove a symbol from a watchlist.
    pub async fn remove_from_watchlist(
        &self,
        watchlist_id: &str,
        symbol: &str,
    ) -> Result<RawResponse, ApiError> {
        let path = format!("/watchlists/{}/{}", watchlist_id, symbol);
        self.delete(&path).await
    }

    /// Delete a watchlist.
    pub async fn delete_watchlist(&self, watchlist_id: &str) -> Result<RawResponse, ApiError> {
        let path = format!("/watchlists/{}", watchlist_id);
        self.delete(&path).await
    }

    // ── Market data host ────────────────────────────────────────────────

    /// Bars for a set of symbols from the market-data host.
    ///
    /// `timeframe` defaults to `"day"`, `limit` to 500.
    pub async fn barset(
        &self,
        symbols: &[&str],
        timeframe: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Value, ApiError> {
        let timeframe = timeframe.unwrap_or(DEFAULT_BARSET_TIMEFRAME);
        let limit = limit.unwrap_or(DEFAULT_BARSET_LIMIT);
        let path = format!("/bars/{}", timeframe);
        let query = Params::new()
            .with("symbols", symbols.join(","))
            .with("limit", limit.to_string());

        self.data_get(&path, query).await
    }

    /// Last trade for a symbol from the market-data host.
    pub async fn last_trade(&self, symbol: &str) -> Result<Value, ApiError> {
        let path = format!("/last/stocks/{}", symbol);
        self.data_get(&path, Params::new()).await
    }
}
