//! Managed adapters for configuration objects

use crate::config::Config;

use super::traits::ManagedObject;

/// Exposes a merged configuration as a managed object
///
/// Attributes are read from the live combined view per call.
#[derive(Debug, Clone)]
pub struct ManagedConfig {
    config: Config,
}

impl ManagedConfig {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl ManagedObject for ManagedConfig {
    fn description(&self) -> String {
        "merged application configuration".to_string()
    }

    fn attributes(&self) -> Vec<(String, String)> {
        self.config
            .keys()
            .into_iter()
            .map(|key| {
                let value = self.config.get_string(key).unwrap_or_default().to_string();
                (key.to_string(), value)
            })
            .collect()
    }
}

/// A managed object built from a fixed set of attribute pairs
///
/// Convenient for beans that do not want a hand-written `ManagedObject`
/// implementation.
#[derive(Debug, Clone, Default)]
pub struct ManagedProperties {
    description: String,
    attributes: Vec<(String, String)>,
}

impl ManagedProperties {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }
}

impl ManagedObject for ManagedProperties {
    fn description(&self) -> String {
        self.description.clone()
    }

    fn attributes(&self) -> Vec<(String, String)> {
        self.attributes.clone()
    }
}
