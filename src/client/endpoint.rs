//! Endpoint descriptor for a single remote operation.

use reqwest::Method;
use serde_json::Value;

use super::params::Params;

/// Describes one remote operation: verb, version segment, path, parameters
/// and an optional per-call base-URL override.
///
/// An `Endpoint` is built per call from a literal path template and caller
/// arguments; it is never persisted. Variable path segments (e.g. a symbol)
/// are templated directly into `path` by the caller and must be URL-safe.
#[derive(Debug)]
pub struct Endpoint<'a> {
    /// HTTP verb
    pub method: Method,
    /// Version segment placed between the base URL and the path, e.g. `v2`
    pub version: &'a str,
    /// Endpoint path, must start with `/`
    pub path: &'a str,
    /// Query parameters (GET/DELETE) or extra query on a body request
    pub query: Params,
    /// JSON body for POST/PUT
    pub body: Option<Value>,
    /// Overrides the client's base URL for this call only
    pub base_url: Option<&'a str>,
}

impl<'a> Endpoint<'a> {
    fn new(method: Method, version: &'a str, path: &'a str) -> Self {
        Self {
            method,
            version,
            path,
            query: Params::new(),
            body: None,
            base_url: None,
        }
    }

    /// A GET endpoint.
    pub fn get(version: &'a str, path: &'a str) -> Self {
        Self::new(Method::GET, version, path)
    }

    /// A POST endpoint.
    pub fn post(version: &'a str, path: &'a str) -> Self {
        Self::new(Method::POST, version, path)
    }

    /// A PUT endpoint.
    pub fn put(version: &'a str, path: &'a str) -> Self {
        Self::new(Method::PUT, version, path)
    }

    /// A DELETE endpoint.
    pub fn delete(version: &'a str, path: &'a str) -> Self {
        Self::new(Method::DELETE, version, path)
    }

    /// Set the query parameters.
    pub fn query(mut self, query: Params) -> Self {
        self.query = query;
        self
    }

    /// Set the JSON body.
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Send this call to a different host than the client's default,
    /// keeping the same credential handling.
    pub fn at_base(mut self, base_url: &'a str) -> Self {
        self.base_url = Some(base_url);
        self
    }
}
