//! Override-merge container for named configuration layers

use std::collections::HashSet;

use url::Url;

use crate::types::{ConfigError, ConfigResult};

use super::properties::PropertyMap;

/// One named layer contributing to a combined configuration
#[derive(Debug, Clone)]
pub struct Layer {
    name: String,
    properties: PropertyMap,
}

impl Layer {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn properties(&self) -> &PropertyMap {
        &self.properties
    }
}

/// An ordered collection of configuration layers with override-merge lookup
///
/// Layers added earlier take precedence: for a key present in several
/// layers, the value from the earliest-added layer wins. A layer either
/// fully shadows a key or is skipped for it; values are never deep-merged.
/// The layer list is fixed once resolution returns, so readers need no
/// synchronization.
#[derive(Debug, Clone, Default)]
pub struct CombinedConfig {
    layers: Vec<Layer>,
}

impl CombinedConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a layer with lower precedence than everything already added
    pub fn add_configuration(&mut self, properties: PropertyMap, name: &str) {
        self.layers.push(Layer {
            name: name.to_string(),
            properties,
        });
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer_names(&self) -> Vec<&str> {
        self.layers.iter().map(|l| l.name.as_str()).collect()
    }

    /// Merged value for a key; the earliest-added layer containing it wins
    pub fn get(&self, key: &str) -> Option<&str> {
        self.layers.iter().find_map(|l| l.properties.get(key))
    }

    /// Name of the layer that supplies a key's merged value
    pub fn source_of(&self, key: &str) -> Option<&str> {
        self.layers
            .iter()
            .find(|l| l.properties.contains_key(key))
            .map(|l| l.name.as_str())
    }

    /// All keys, highest-precedence layer first, without duplicates
    pub fn keys(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut keys = Vec::new();
        for layer in &self.layers {
            for (key, _) in layer.properties.iter() {
                if seen.insert(key) {
                    keys.push(key);
                }
            }
        }
        keys
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.get(key)
    }

    pub fn get_int(&self, key: &str) -> ConfigResult<Option<i64>> {
        match self.get(key) {
            None => Ok(None),
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .map(Some)
                .map_err(|e| ConfigError::InvalidValue {
                    key: key.to_string(),
                    value: raw.to_string(),
                    reason: e.to_string(),
                }),
        }
    }

    pub fn get_bool(&self, key: &str) -> ConfigResult<Option<bool>> {
        match self.get(key) {
            None => Ok(None),
            Some(raw) => parse_bool(raw).map(Some).ok_or_else(|| {
                ConfigError::InvalidValue {
                    key: key.to_string(),
                    value: raw.to_string(),
                    reason: "not a boolean".to_string(),
                }
            }),
        }
    }

    pub fn get_url(&self, key: &str) -> ConfigResult<Option<Url>> {
        match self.get(key) {
            None => Ok(None),
            Some(raw) => Url::parse(raw.trim())
                .map(Some)
                .map_err(|e| ConfigError::InvalidValue {
                    key: key.to_string(),
                    value: raw.to_string(),
                    reason: e.to_string(),
                }),
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(pairs: &[(&str, &str)]) -> PropertyMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_earliest_added_layer_wins() {
        let mut combined = CombinedConfig::new();
        combined.add_configuration(layer(&[("key", "first")]), "first");
        combined.add_configuration(layer(&[("key", "second"), ("other", "x")]), "second");

        assert_eq!(combined.get("key"), Some("first"));
        assert_eq!(combined.get("other"), Some("x"));
    }

    #[test]
    fn test_override_merge_not_deep_merge() {
        // A layer shadows a key completely; sibling keys under the same
        // structured prefix still fall through to lower layers.
        let mut combined = CombinedConfig::new();
        combined.add_configuration(layer(&[("server.port", "9000")]), "override");
        combined.add_configuration(
            layer(&[("server.port", "8080"), ("server.host", "localhost")]),
            "base",
        );

        assert_eq!(combined.get("server.port"), Some("9000"));
        assert_eq!(combined.get("server.host"), Some("localhost"));
    }

    #[test]
    fn test_source_of_reports_winning_layer() {
        let mut combined = CombinedConfig::new();
        combined.add_configuration(layer(&[("a", "1")]), "top");
        combined.add_configuration(layer(&[("a", "2"), ("b", "3")]), "bottom");

        assert_eq!(combined.source_of("a"), Some("top"));
        assert_eq!(combined.source_of("b"), Some("bottom"));
        assert_eq!(combined.source_of("missing"), None);
    }

    #[test]
    fn test_keys_deduplicated_in_precedence_order() {
        let mut combined = CombinedConfig::new();
        combined.add_configuration(layer(&[("a", "1"), ("b", "2")]), "top");
        combined.add_configuration(layer(&[("b", "x"), ("c", "3")]), "bottom");

        assert_eq!(combined.keys(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_typed_accessors() {
        let mut combined = CombinedConfig::new();
        combined.add_configuration(
            layer(&[
                ("port", "8080"),
                ("debug", "true"),
                ("verbose", "off"),
                ("endpoint", "https://cfg.internal/app"),
            ]),
            "app",
        );

        assert_eq!(combined.get_int("port").unwrap(), Some(8080));
        assert_eq!(combined.get_bool("debug").unwrap(), Some(true));
        assert_eq!(combined.get_bool("verbose").unwrap(), Some(false));
        assert_eq!(
            combined.get_url("endpoint").unwrap().unwrap().as_str(),
            "https://cfg.internal/app"
        );
        assert_eq!(combined.get_int("missing").unwrap(), None);
    }

    #[test]
    fn test_coercion_failure_is_invalid_value() {
        let mut combined = CombinedConfig::new();
        combined.add_configuration(layer(&[("port", "not-a-number")]), "app");

        let err = combined.get_int("port").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "port"));
        assert!(combined.get_bool("port").is_err());
    }

    #[test]
    fn test_empty_combined_config() {
        let combined = CombinedConfig::new();
        assert_eq!(combined.get("anything"), None);
        assert!(combined.keys().is_empty());
        assert!(combined.layer_names().is_empty());
    }
}
