//! Merged configuration handle
//!
//! `Config` wraps the combined view produced by the layered resolver and
//! exposes typed lookups and bean materialization. Handles are cheap to
//! clone and expose no mutation API.

mod bean;

use std::collections::HashMap;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use url::Url;

use crate::resolver::LayeredResolver;
use crate::store::{system_properties, CombinedConfig, SYSTEM_PROPERTIES};
use crate::types::{ConfigError, ConfigResult, Location};

/// Environment variable naming the root configuration location
pub const CONFIG_LOCATION_VAR: &str = "STRATA_CONFIG_LOCATION";

/// Environment variable naming the source specification
pub const CONFIG_SPEC_VAR: &str = "STRATA_CONFIG";

/// The merged configuration view
///
/// # Example
///
/// ```no_run
/// use strata_core::Config;
///
/// // `app` overrides `common`; the process environment overrides both.
/// let config = Config::load("file:/etc/myapp", "common,app")?;
/// let port = config.get_int("server.port")?;
/// # Ok::<(), strata_core::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    combined: Arc<CombinedConfig>,
}

impl Config {
    /// Resolve configuration from a location string and a specification
    pub fn load(location: &str, specification: &str) -> ConfigResult<Self> {
        Self::from_location(Location::parse(location)?, specification)
    }

    /// Resolve configuration from an already parsed location
    pub fn from_location(location: Location, specification: &str) -> ConfigResult<Self> {
        let combined = LayeredResolver::new(location, specification).load()?;
        Ok(Self {
            combined: Arc::new(combined),
        })
    }

    /// Resolve configuration from the process environment
    ///
    /// Reads the location from `STRATA_CONFIG_LOCATION` and the
    /// specification from `STRATA_CONFIG`; an unset specification is
    /// treated as empty (system properties only).
    pub fn from_env() -> ConfigResult<Self> {
        let location =
            std::env::var(CONFIG_LOCATION_VAR).map_err(|_| ConfigError::InvalidLocation {
                location: String::new(),
                reason: format!("{CONFIG_LOCATION_VAR} is not set"),
            })?;
        let specification = std::env::var(CONFIG_SPEC_VAR).unwrap_or_default();
        Self::load(&location, &specification)
    }

    /// A configuration containing only the system-properties layer
    pub fn empty() -> Self {
        let mut combined = CombinedConfig::new();
        combined.add_configuration(system_properties(), SYSTEM_PROPERTIES);
        Self {
            combined: Arc::new(combined),
        }
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.combined.get_string(key)
    }

    pub fn get_int(&self, key: &str) -> ConfigResult<Option<i64>> {
        self.combined.get_int(key)
    }

    pub fn get_bool(&self, key: &str) -> ConfigResult<Option<bool>> {
        self.combined.get_bool(key)
    }

    pub fn get_url(&self, key: &str) -> ConfigResult<Option<Url>> {
        self.combined.get_url(key)
    }

    /// All merged keys, highest-precedence layer first
    pub fn keys(&self) -> Vec<&str> {
        self.combined.keys()
    }

    /// Name of the layer that supplies a key's merged value
    pub fn source_of(&self, key: &str) -> Option<&str> {
        self.combined.source_of(key)
    }

    pub fn layer_names(&self) -> Vec<&str> {
        self.combined.layer_names()
    }

    /// Materialize a typed bean from the keys below `prefix`
    ///
    /// Keys are scoped by `prefix.` (or taken whole when `prefix` is
    /// `None`), call-site overrides win over merged values, and scalar
    /// strings coerce into the bean's field types.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use std::collections::HashMap;
    /// use serde::Deserialize;
    /// use strata_core::Config;
    ///
    /// #[derive(Deserialize)]
    /// struct DbSettings {
    ///     host: String,
    ///     port: i64,
    /// }
    ///
    /// let config = Config::load("file:/etc/myapp", "common,app")?;
    /// let db: DbSettings = config.get_bean(Some("db"), &HashMap::new())?;
    /// # Ok::<(), strata_core::ConfigError>(())
    /// ```
    pub fn get_bean<T: DeserializeOwned>(
        &self,
        prefix: Option<&str>,
        overrides: &HashMap<String, String>,
    ) -> ConfigResult<T> {
        bean::materialize(&self.combined, prefix, overrides)
    }

    /// The underlying combined store
    pub fn combined(&self) -> &CombinedConfig {
        &self.combined
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{register_resource, unregister_resource};
    use std::env;

    #[test]
    fn test_load_merges_in_precedence_order() {
        register_resource("cfg-load/common.yaml", "x: 1\ny: 2\n");
        register_resource("cfg-load/app.yaml", "y: 3\nz: 4\n");

        let config = Config::load("classpath:/cfg-load", "common,app").unwrap();
        assert_eq!(config.get_string("x"), Some("1"));
        assert_eq!(config.get_string("y"), Some("3"));
        assert_eq!(config.get_string("z"), Some("4"));

        unregister_resource("cfg-load/common.yaml");
        unregister_resource("cfg-load/app.yaml");
    }

    #[test]
    fn test_typed_lookups() {
        register_resource(
            "cfg-typed/app.yaml",
            "port: 8080\ndebug: true\nendpoint: https://api.internal/v1\n",
        );

        let config = Config::load("classpath:/cfg-typed", "app,app").unwrap();
        assert_eq!(config.get_int("port").unwrap(), Some(8080));
        assert_eq!(config.get_bool("debug").unwrap(), Some(true));
        assert_eq!(
            config.get_url("endpoint").unwrap().unwrap().as_str(),
            "https://api.internal/v1"
        );
        assert_eq!(config.get_string("missing"), None);

        unregister_resource("cfg-typed/app.yaml");
    }

    #[test]
    fn test_unsupported_scheme_fails_at_load() {
        let err = Config::load("jar:/cfg", "app").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedScheme { .. }));
    }

    #[test]
    fn test_empty_contains_only_system_properties() {
        let config = Config::empty();
        assert_eq!(config.layer_names(), vec![SYSTEM_PROPERTIES]);
    }

    #[test]
    fn test_from_env() {
        register_resource("cfg-env/app.yaml", "cfg.env.probe: loaded\n");
        env::set_var(CONFIG_LOCATION_VAR, "classpath:/cfg-env");
        env::set_var(CONFIG_SPEC_VAR, "app,app");

        let config = Config::from_env().unwrap();
        assert_eq!(config.get_string("cfg.env.probe"), Some("loaded"));

        env::remove_var(CONFIG_LOCATION_VAR);
        env::remove_var(CONFIG_SPEC_VAR);
        unregister_resource("cfg-env/app.yaml");
    }

    #[test]
    fn test_handles_share_the_combined_view() {
        register_resource("cfg-share/app.yaml", "k: v\n");

        let config = Config::load("classpath:/cfg-share", "app,app").unwrap();
        let clone = config.clone();
        assert_eq!(clone.get_string("k"), config.get_string("k"));

        unregister_resource("cfg-share/app.yaml");
    }
}
