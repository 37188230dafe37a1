//! Layered configuration resolution
//!
//! Builds a combined configuration from a root location and a source-name
//! specification. Two notations are supported:
//! - explicit list: `"common,app"`, where every entry is mandatory and
//!   later entries override earlier ones
//! - hierarchical path: `"common/test"` (or `common:test`), whose suffix
//!   truncations form a most-specific-first chain of optional layers
//!
//! The process environment is merged as a synthetic `systemProperties`
//! layer with top precedence in both notations.

use tracing::{info, warn};

use crate::source::{select_strategy, SourceStrategy};
use crate::store::{system_properties, CombinedConfig, SYSTEM_PROPERTIES};
use crate::types::{ConfigError, ConfigResult, Location};

/// Resolves one location + specification pair into a combined configuration
pub struct LayeredResolver {
    location: Location,
    specification: String,
    strategy: Box<dyn SourceStrategy>,
}

impl LayeredResolver {
    pub fn new(location: Location, specification: impl Into<String>) -> Self {
        let strategy = select_strategy(&location);
        Self {
            location,
            specification: specification.into(),
            strategy,
        }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn specification(&self) -> &str {
        &self.specification
    }

    /// Load every named source and merge them in precedence order
    pub fn load(&self) -> ConfigResult<CombinedConfig> {
        info!(
            "loading configuration '{}' from '{}'",
            self.specification, self.location
        );
        if self.specification.contains(',') {
            self.load_explicit()
        } else {
            self.load_hierarchical()
        }
    }

    /// Explicit comma-separated list: every entry is mandatory.
    fn load_explicit(&self) -> ConfigResult<CombinedConfig> {
        let names: Vec<&str> = self
            .specification
            .split(',')
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .collect();

        let mut combined = CombinedConfig::new();
        combined.add_configuration(system_properties(), SYSTEM_PROPERTIES);
        info!("configuration source: SYSTEM");

        // The combiner gives precedence to layers added earlier, so the
        // list is inserted in reverse: later-listed names override
        // earlier-listed ones.
        for name in names.iter().rev() {
            match self.strategy.load(name, name)? {
                Some(properties) => {
                    combined.add_configuration(properties, name);
                    info!("configuration source: {}", name);
                }
                None => return Err(ConfigError::MandatorySourceMissing(name.to_string())),
            }
        }
        Ok(combined)
    }

    /// Hierarchical path: each suffix truncation is an optional layer,
    /// attempted most-specific first so it merges with higher precedence.
    fn load_hierarchical(&self) -> ConfigResult<CombinedConfig> {
        let segments: Vec<&str> = self
            .specification
            .split(['/', ':'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        let mut combined = CombinedConfig::new();
        combined.add_configuration(system_properties(), SYSTEM_PROPERTIES);
        info!("configuration source: SYSTEM");

        let mut loaded_any = false;
        for end in (1..=segments.len()).rev() {
            let name = segments[end - 1];
            let path = segments[..end].join("/");
            match self.strategy.load(name, &path) {
                Ok(Some(properties)) => {
                    combined.add_configuration(properties, name);
                    info!("configuration source: {}", name);
                    loaded_any = true;
                }
                Ok(None) => {
                    warn!(
                        "optional configuration layer '{}' not found at '{}'",
                        name, path
                    );
                }
                Err(e) => {
                    warn!("while loading configuration layer '{}': {}", name, e);
                }
            }
        }

        if !loaded_any && !segments.is_empty() {
            return Err(ConfigError::NoLayersLoaded(self.specification.clone()));
        }
        Ok(combined)
    }
}

impl std::fmt::Debug for LayeredResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayeredResolver")
            .field("location", &self.location)
            .field("specification", &self.specification)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{register_resource, unregister_resource};
    use std::env;

    fn resolver(base: &str, specification: &str) -> LayeredResolver {
        let location = Location::parse(&format!("classpath:/{base}")).unwrap();
        LayeredResolver::new(location, specification)
    }

    #[test]
    fn test_explicit_later_entries_override_earlier() {
        register_resource("lr-explicit/common.yaml", "x: 1\ny: 2\n");
        register_resource("lr-explicit/app.yaml", "y: 3\nz: 4\n");

        let combined = resolver("lr-explicit", "common,app").load().unwrap();
        assert_eq!(combined.get("x"), Some("1"));
        assert_eq!(combined.get("y"), Some("3"));
        assert_eq!(combined.get("z"), Some("4"));
        assert_eq!(combined.source_of("y"), Some("app"));

        unregister_resource("lr-explicit/common.yaml");
        unregister_resource("lr-explicit/app.yaml");
    }

    #[test]
    fn test_explicit_missing_source_is_fatal() {
        register_resource("lr-mandatory/common.yaml", "x: 1\n");

        let err = resolver("lr-mandatory", "common,absent").load().unwrap_err();
        assert!(
            matches!(err, ConfigError::MandatorySourceMissing(ref name) if name == "absent")
        );

        unregister_resource("lr-mandatory/common.yaml");
    }

    #[test]
    fn test_explicit_parse_error_propagates() {
        register_resource("lr-badparse/common.yaml", "a: [unclosed\n");

        let err = resolver("lr-badparse", "common,common").load().unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));

        unregister_resource("lr-badparse/common.yaml");
    }

    #[test]
    fn test_system_properties_override_every_layer() {
        register_resource("lr-system/app.yaml", "lr.system.probe: file\n");
        env::set_var("lr.system.probe", "environment");

        let combined = resolver("lr-system", "app,app").load().unwrap();
        assert_eq!(combined.get("lr.system.probe"), Some("environment"));
        assert_eq!(combined.source_of("lr.system.probe"), Some(SYSTEM_PROPERTIES));

        env::remove_var("lr.system.probe");
        unregister_resource("lr-system/app.yaml");
    }

    #[test]
    fn test_hierarchical_most_specific_wins() {
        register_resource("lr-hier/a.yaml", "k: a\nonly-a: 1\n");
        register_resource("lr-hier/a/b.yaml", "k: b\nonly-b: 2\n");
        register_resource("lr-hier/a/b/c.yaml", "k: c\n");

        let combined = resolver("lr-hier", "a/b/c").load().unwrap();
        assert_eq!(combined.get("k"), Some("c"));
        assert_eq!(combined.get("only-a"), Some("1"));
        assert_eq!(combined.get("only-b"), Some("2"));
        assert_eq!(
            combined.layer_names(),
            vec![SYSTEM_PROPERTIES, "c", "b", "a"]
        );

        unregister_resource("lr-hier/a.yaml");
        unregister_resource("lr-hier/a/b.yaml");
        unregister_resource("lr-hier/a/b/c.yaml");
    }

    #[test]
    fn test_hierarchical_missing_middle_layer_is_skipped() {
        register_resource("lr-gap/prod.yaml", "tier: base\n");

        let combined = resolver("lr-gap", "prod/web").load().unwrap();
        assert_eq!(combined.get("tier"), Some("base"));
        assert_eq!(combined.layer_names(), vec![SYSTEM_PROPERTIES, "prod"]);

        unregister_resource("lr-gap/prod.yaml");
    }

    #[test]
    fn test_hierarchical_colon_separator() {
        register_resource("lr-colon/common.yaml", "k: common\n");
        register_resource("lr-colon/common/test.yaml", "k: test\n");

        let combined = resolver("lr-colon", "common:test").load().unwrap();
        assert_eq!(combined.get("k"), Some("test"));

        unregister_resource("lr-colon/common.yaml");
        unregister_resource("lr-colon/common/test.yaml");
    }

    #[test]
    fn test_hierarchical_parse_error_is_skipped() {
        register_resource("lr-skip/a.yaml", "k: a\n");
        register_resource("lr-skip/a/b.yaml", "broken: [unclosed\n");

        let combined = resolver("lr-skip", "a/b").load().unwrap();
        assert_eq!(combined.get("k"), Some("a"));

        unregister_resource("lr-skip/a.yaml");
        unregister_resource("lr-skip/a/b.yaml");
    }

    #[test]
    fn test_hierarchical_nothing_found_is_fatal() {
        let err = resolver("lr-nothing", "a/b/c").load().unwrap_err();
        assert!(matches!(err, ConfigError::NoLayersLoaded(ref spec) if spec == "a/b/c"));
    }

    #[test]
    fn test_empty_specification_yields_system_only() {
        let combined = resolver("lr-empty", "").load().unwrap();
        assert_eq!(combined.layer_names(), vec![SYSTEM_PROPERTIES]);
    }

    #[test]
    fn test_hierarchical_fallback_over_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("prod.yaml"), "tier: base\n").unwrap();
        // No prod/web.yaml; the specific layer is simply skipped.

        let location = Location::parse(&format!("file:{}", dir.path().display())).unwrap();
        let combined = LayeredResolver::new(location, "prod/web").load().unwrap();
        assert_eq!(combined.get("tier"), Some("base"));
        assert_eq!(combined.layer_names(), vec![SYSTEM_PROPERTIES, "prod"]);
    }
}
