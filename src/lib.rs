//! Trading Clients
//!
//! Authenticated REST clients for three financial data/trading services:
//! IEX Cloud (market data), Polygon.io (market data and news) and Alpaca
//! (brokerage). All three share one generic client that composes the URL,
//! attaches the provider's credential scheme and validates the response;
//! the provider clients are thin endpoint catalogs on top of it.
//!
//! # Architecture
//!
//! ```text
//! +-----------+  +---------------+  +--------------+
//! | IexClient |  | PolygonClient |  | AlpacaClient |   (endpoint catalogs)
//! +-----------+  +---------------+  +--------------+
//!        \               |                /
//!         v              v               v
//!               +------------------+
//!               |   IssueRequest   |   (trait seam)
//!               +------------------+
//!                        |
//!                        v
//!               +------------------+
//!               |    RestClient    |   (auth, URL join, validation)
//!               +------------------+
//! ```
//!
//! Responses are opaque [`serde_json::Value`] documents; no provider schema
//! is modeled locally. Any non-2xx status fails the call with the original
//! status code and body ([`ApiError::Status`]); nothing is retried.
//!
//! # Core Types
//!
//! - [`RestClient`] - generic authenticated REST client
//! - [`IssueRequest`] - the request-issuing capability clients depend on
//! - [`Endpoint`] - one remote operation: verb, version, path, parameters
//! - [`Params`] - per-call parameter set with last-write-wins merging
//! - [`Credentials`] - query-token or header-pair credential material
//! - [`ApiError`] - connectivity / status / decode failure taxonomy
//! - [`RequestPacer`] - opt-in minimum inter-request spacing

pub mod auth;
pub mod client;
pub mod errors;
pub mod pacer;
pub mod provider;

pub use auth::Credentials;
pub use client::{Endpoint, IssueRequest, Params, RawResponse, RestClient};
pub use errors::ApiError;
pub use pacer::RequestPacer;
pub use provider::alpaca::{AlpacaClient, ALPACA_REQUEST_SPACING};
pub use provider::iex::IexClient;
pub use provider::polygon::PolygonClient;
