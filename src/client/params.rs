//! Query/body parameter container.

/// An ordered set of request parameters.
///
/// A fresh `Params` is constructed for every call; the container is never
/// shared between requests, so credential injection cannot leak into a
/// later call. [`insert`](Params::insert) replaces an existing key, which
/// makes the final parameter set deterministic: a key appears at most once
/// and the last writer wins.
#[derive(Clone, Debug, Default)]
pub struct Params(Vec<(String, String)>);

impl Params {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter, replacing any existing entry with the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        self.0.retain(|(k, _)| *k != key);
        self.0.push((key, value.into()));
    }

    /// Builder-style [`insert`](Params::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up a parameter value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no parameters are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The parameters as key/value pairs, in insertion order.
    pub(crate) fn as_pairs(&self) -> &[(String, String)] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_existing_key() {
        let mut params = Params::new();
        params.insert("limit", "5");
        params.insert("period", "quarter");
        params.insert("limit", "10");

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("limit"), Some("10"));
        assert_eq!(params.get("period"), Some("quarter"));
    }

    #[test]
    fn test_with_builds_in_order() {
        let params = Params::new().with("a", "1").with("b", "2");
        assert_eq!(params.as_pairs(), &[
            ("a".to_string(), "1".to_string()),
            ("b".to_string(), "2".to_string()),
        ]);
    }

    #[test]
    fn test_empty_by_default() {
        let params = Params::new();
        assert!(params.is_empty());
        assert_eq!(params.get("anything"), None);
    }
}
