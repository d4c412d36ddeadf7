//! Provider-specific API clients.
//!
//! Each client is a catalog of endpoint calls: fixed path templates with
//! caller-supplied identifiers interpolated, fixed default versions, and a
//! handful of optional parameters with documented defaults. Every method is
//! a single call into the shared [`RestClient`](crate::client::RestClient)
//! with no branching; authentication and URL composition live in the core.
//!
//! Identifiers templated into paths (symbols, order ids) are not escaped;
//! callers must supply URL-safe values.

pub mod alpaca;
pub mod iex;
pub mod polygon;

pub use alpaca::AlpacaClient;
pub use iex::IexClient;
pub use polygon::PolygonClient;
