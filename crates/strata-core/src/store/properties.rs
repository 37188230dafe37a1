//! Ordered property maps parsed from YAML sources

use serde_yaml::Value;

use crate::types::{ConfigError, ConfigResult};

/// An ordered key/value mapping produced from one configuration source
///
/// Keys are dot-joined paths (`server.port`); values are kept as strings
/// and coerced on lookup. Iteration follows the source document's order.
///
/// # Example
///
/// ```
/// use strata_core::PropertyMap;
///
/// let props = PropertyMap::from_yaml_str("app", "server:\n  port: 8080\n").unwrap();
/// assert_eq!(props.get("server.port"), Some("8080"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyMap {
    entries: Vec<(String, String)>,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a YAML document into a flattened property map
    ///
    /// Nested mappings flatten into dot-joined keys. Sequences of scalars
    /// flatten to one comma-joined value; sequences containing nested
    /// structure use numeric path segments. An empty document yields an
    /// empty map. `name` is only used in diagnostics.
    pub fn from_yaml_str(name: &str, content: &str) -> ConfigResult<Self> {
        let value: Value = serde_yaml::from_str(content).map_err(|e| ConfigError::Parse {
            name: name.to_string(),
            reason: e.to_string(),
        })?;

        let mut map = Self::new();
        match value {
            Value::Null => {}
            Value::Mapping(_) => flatten(&mut map, "", &value),
            _ => {
                return Err(ConfigError::Parse {
                    name: name.to_string(),
                    reason: "top level must be a mapping".to_string(),
                })
            }
        }
        Ok(map)
    }

    /// Insert a key, replacing any existing value for it
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

fn flatten(map: &mut PropertyMap, prefix: &str, value: &Value) {
    match value {
        Value::Mapping(mapping) => {
            for (key, child) in mapping {
                if let Some(key) = scalar_to_string(key) {
                    flatten(map, &join(prefix, &key), child);
                }
            }
        }
        Value::Sequence(items) => {
            if items.iter().all(is_scalar) {
                let joined = items
                    .iter()
                    .filter_map(scalar_to_string)
                    .collect::<Vec<_>>()
                    .join(",");
                map.insert(prefix, joined);
            } else {
                for (index, item) in items.iter().enumerate() {
                    flatten(map, &join(prefix, &index.to_string()), item);
                }
            }
        }
        Value::Tagged(tagged) => flatten(map, prefix, &tagged.value),
        Value::Null => {}
        scalar => {
            if let Some(text) = scalar_to_string(scalar) {
                map.insert(prefix, text);
            }
        }
    }
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

fn is_scalar(value: &Value) -> bool {
    matches!(
        value,
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_)
    )
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
