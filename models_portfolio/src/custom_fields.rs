//! Schema-free per-project attribute bag.
//!
//! Stored as JSONB. There is no schema and no versioning: every key is
//! optional for every consumer, and a missing key resolves to the caller's
//! default rather than an error.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Open string-keyed map of arbitrary JSON values attached to a project.
///
/// `set` works in memory; the caller persists the owning project afterward.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct CustomFields(Map<String, Value>);

impl CustomFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value at `key`, or `None` when absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Value at `key`, or `default` when absent. Never fails.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a Value) -> &'a Value {
        self.0.get(key).unwrap_or(default)
    }

    /// Insert or overwrite `key`. No type checking is performed on `value`.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl From<Map<String, Value>> for CustomFields {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Whether a bag value is an ordered sequence. Presentation renders lists as
/// bullet lists and everything else as a single value.
pub fn is_list(value: &Value) -> bool {
    value.is_array()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_missing_key_returns_default() {
        let fields = CustomFields::new();
        let default = json!("fallback");
        assert_eq!(fields.get_or("technologies", &default), &default);
        assert_eq!(fields.get("technologies"), None);
    }

    #[test]
    fn test_set_then_get() {
        let mut fields = CustomFields::new();
        fields.set("technologies", json!(["Rust", "Postgres"]));
        fields.set("live_url", json!("https://example.com"));
        // overwrite
        fields.set("live_url", json!("https://example.org"));

        assert_eq!(
            fields.get("technologies"),
            Some(&json!(["Rust", "Postgres"]))
        );
        assert_eq!(fields.get("live_url"), Some(&json!("https://example.org")));
    }

    #[test]
    fn test_is_list() {
        assert!(is_list(&json!([1, 2, 3])));
        assert!(!is_list(&json!("scalar")));
        assert!(!is_list(&json!({"nested": "map"})));
        assert!(!is_list(&json!(null)));
    }

    #[test]
    fn test_serde_transparent() {
        let mut fields = CustomFields::new();
        fields.set("stars", json!(42));

        let encoded = serde_json::to_string(&fields).unwrap();
        assert_eq!(encoded, r#"{"stars":42}"#);

        let decoded: CustomFields = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, fields);
    }
}
