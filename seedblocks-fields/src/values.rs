//! Runtime field-value sets.
//!
//! A [`FieldValues`] is the name → value mapping the host supplies for one
//! content instance. The same type covers both the resolved shape (values
//! keyed by field name) and the raw fallback shape the host hands over when
//! its resolution service is unavailable — [`crate::rows`] canonicalizes the
//! difference for repeaters.

use serde_json::{Map, Value};

/// A resolved image field value.
///
/// Hosts either hand over the attachment identifier (`return_format: id`) or
/// a pre-resolved attributes object (`return_format: object`).
#[derive(Debug, Clone, PartialEq)]
pub enum ImageValue {
    /// Attachment identifier, to be resolved through the media store.
    Id(String),
    /// Already-resolved attributes.
    Resolved { url: String, alt: String },
}

/// Field name → value mapping for one content instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldValues {
    map: Map<String, Value>,
}

impl FieldValues {
    /// Create an empty value set.
    pub fn new() -> Self {
        Self { map: Map::new() }
    }

    /// Wrap a host-supplied map (resolved or raw fallback shape).
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self { map }
    }

    /// Set a value, replacing any existing one.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.map.insert(name.into(), value);
    }

    /// Get the raw value bound to a field name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.map.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }
}

impl FromIterator<(String, Value)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[(&str, Value); N]> for FieldValues {
    fn from(entries: [(&str, Value); N]) -> Self {
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_and_get() {
        let mut values = FieldValues::new();
        assert!(values.is_empty());
        values.set("title", json!("Welcome"));
        assert_eq!(values.get("title"), Some(&json!("Welcome")));
        assert_eq!(values.get("missing"), None);
        assert_eq!(values.len(), 1);
    }

    #[test]
    fn from_array_literal() {
        let values = FieldValues::from([("title", json!("Welcome")), ("count", json!(6))]);
        assert_eq!(values.len(), 2);
        assert_eq!(values.get("count"), Some(&json!(6)));
    }

    #[test]
    fn set_replaces_existing() {
        let mut values = FieldValues::from([("height", json!("small"))]);
        values.set("height", json!("large"));
        assert_eq!(values.get("height"), Some(&json!("large")));
        assert_eq!(values.len(), 1);
    }
}
