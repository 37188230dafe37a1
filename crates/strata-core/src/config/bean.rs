//! Bean materialization from merged properties
//!
//! Collects the keys below a prefix, applies call-site overrides, rebuilds
//! a nested value tree from the dot paths, and deserializes it into a typed
//! struct. Scalar strings are re-parsed as YAML scalars so numeric and
//! boolean fields coerce naturally.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};

use crate::store::CombinedConfig;
use crate::types::{ConfigError, ConfigResult};

pub(crate) fn materialize<T: DeserializeOwned>(
    combined: &CombinedConfig,
    prefix: Option<&str>,
    overrides: &HashMap<String, String>,
) -> ConfigResult<T> {
    let prefix_dot = prefix.map(|p| format!("{p}."));

    let mut flat: Vec<(String, String)> = Vec::new();
    for key in combined.keys() {
        let scoped = match &prefix_dot {
            Some(p) => match key.strip_prefix(p.as_str()) {
                Some(rest) => rest,
                None => continue,
            },
            None => key,
        };
        if scoped.is_empty() || overrides.contains_key(scoped) {
            continue;
        }
        let value = combined.get(key).unwrap_or_default();
        flat.push((scoped.to_string(), value.to_string()));
    }
    for (key, value) in overrides {
        flat.push((key.clone(), value.clone()));
    }

    let mut root = Mapping::new();
    for (path, raw) in &flat {
        let segments: Vec<&str> = path.split('.').collect();
        insert_path(&mut root, &segments, raw);
    }

    serde_yaml::from_value(Value::Mapping(root)).map_err(|e| ConfigError::Materialize {
        prefix: prefix.unwrap_or_default().to_string(),
        reason: e.to_string(),
    })
}

fn insert_path(map: &mut Mapping, segments: &[&str], raw: &str) {
    let key = Value::String(segments[0].to_string());
    if segments.len() == 1 {
        map.insert(key, scalar_value(raw));
        return;
    }
    if !matches!(map.get(&key), Some(Value::Mapping(_))) {
        map.insert(key.clone(), Value::Mapping(Mapping::new()));
    }
    if let Some(Value::Mapping(child)) = map.get_mut(&key) {
        insert_path(child, &segments[1..], raw);
    }
}

// Re-parsing the raw string recovers the scalar type the source document
// carried, so "8080" deserializes into integer fields and "true" into
// booleans. Anything that does not parse as a single scalar stays a string.
fn scalar_value(raw: &str) -> Value {
    match serde_yaml::from_str::<Value>(raw) {
        Ok(value @ (Value::Bool(_) | Value::Number(_) | Value::String(_) | Value::Null)) => value,
        _ => Value::String(raw.to_string()),
    }
}
