//! Application configuration mapping
//!
//! The configuration is a plain JSON object: string keys mapped to
//! values of mixed scalar or nested-mapping type. Keys keep the order
//! they appear in the source document, and no schema is enforced.

use crate::error::{Result, SettleError};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Serializer, Value};

/// Resolved application configuration
///
/// A thin wrapper over the raw JSON mapping. `Default` produces the
/// built-in configuration used when the primary file is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppConfig {
    values: Map<String, Value>,
}

impl AppConfig {
    /// Get a configuration value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Get a configuration value as a string slice
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    /// Iterate over all key/value pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }

    /// Number of top-level configuration entries
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the mapping has no entries
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Render the mapping as UTF-8 JSON with 4-space indentation
    ///
    /// This is the format of the fallback artifact. No trailing newline
    /// is appended.
    pub fn to_json_pretty(&self) -> Result<String> {
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        String::from_utf8(buf)
            .map_err(|e| SettleError::internal(format!("rendered JSON is not UTF-8: {e}")))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let mut flags = Map::new();
        flags.insert("enable_new_ui".to_string(), Value::Bool(false));

        let mut values = Map::new();
        values.insert(
            "api_endpoint".to_string(),
            Value::String("https://api.example.com/v1".to_string()),
        );
        values.insert(
            "api_key".to_string(),
            Value::String("YOUR_DEFAULT_API_KEY".to_string()),
        );
        values.insert("logging_level".to_string(), Value::String("INFO".to_string()));
        values.insert("feature_flags".to_string(), Value::Object(flags));

        Self { values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_default_values() {
        let config = AppConfig::default();

        assert_eq!(
            config.get_str("api_endpoint"),
            Some("https://api.example.com/v1")
        );
        assert_eq!(config.get_str("api_key"), Some("YOUR_DEFAULT_API_KEY"));
        assert_eq!(config.get_str("logging_level"), Some("INFO"));
        assert_eq!(
            config.get("feature_flags"),
            Some(&json!({ "enable_new_ui": false }))
        );
        assert_eq!(config.len(), 4);
    }

    #[test]
    fn test_default_key_order() {
        let config = AppConfig::default();
        let keys: Vec<&str> = config.iter().map(|(k, _)| k.as_str()).collect();

        assert_eq!(
            keys,
            vec!["api_endpoint", "api_key", "logging_level", "feature_flags"]
        );
    }

    #[test]
    fn test_parsed_document_keeps_file_order() {
        let config: AppConfig =
            serde_json::from_str(r#"{"zebra": 1, "alpha": 2, "middle": 3}"#).unwrap();
        let keys: Vec<&str> = config.iter().map(|(k, _)| k.as_str()).collect();

        assert_eq!(keys, vec!["zebra", "alpha", "middle"]);
    }

    #[test]
    fn test_arbitrary_shapes_flow_through() {
        let config: AppConfig = serde_json::from_str(r#"{"x": 1}"#).unwrap();

        assert_eq!(config.get("x"), Some(&json!(1)));
        assert_eq!(config.get_str("x"), None);
        assert!(config.get("missing").is_none());
        assert_eq!(config.len(), 1);
        assert!(!config.is_empty());
    }

    #[test]
    fn test_pretty_rendering_uses_four_space_indent() {
        let config = AppConfig::default();
        let rendered = config.to_json_pretty().unwrap();

        assert!(rendered.starts_with("{\n    \"api_endpoint\""));
        assert!(rendered.contains("\n        \"enable_new_ui\": false"));
        assert!(!rendered.ends_with('\n'));
    }

    #[test]
    fn test_pretty_rendering_round_trips() {
        let config = AppConfig::default();
        let rendered = config.to_json_pretty().unwrap();
        let parsed: AppConfig = serde_json::from_str(&rendered).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn test_top_level_must_be_a_mapping() {
        assert!(serde_json::from_str::<AppConfig>("[1, 2, 3]").is_err());
        assert!(serde_json::from_str::<AppConfig>("42").is_err());
        assert!(serde_json::from_str::<AppConfig>("\"text\"").is_err());
    }
}
