//! Classpath-style strategy backed by an embedded resource registry
//!
//! There is no runtime classpath to scan; `classpath:` locations resolve
//! against resources registered in-process, typically embedded with
//! `include_str!` during application startup.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tracing::debug;

use crate::store::PropertyMap;
use crate::types::{ConfigResult, Location};

use super::traits::SourceStrategy;

static RESOURCES: Lazy<RwLock<HashMap<String, String>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Register an embedded resource under a classpath-style path
///
/// `path` is matched against `<base>/<source>.yaml`; leading and trailing
/// slashes are ignored.
///
/// # Example
///
/// ```
/// use strata_core::source::register_resource;
///
/// register_resource("config/common.yaml", "db:\n  pool: 4\n");
/// ```
pub fn register_resource(path: impl Into<String>, content: impl Into<String>) {
    RESOURCES
        .write()
        .insert(normalize(&path.into()), content.into());
}

/// Remove a previously registered resource, reporting whether it existed
pub fn unregister_resource(path: &str) -> bool {
    RESOURCES.write().remove(&normalize(path)).is_some()
}

fn lookup(path: &str) -> Option<String> {
    RESOURCES.read().get(&normalize(path)).cloned()
}

fn normalize(path: &str) -> String {
    path.trim_matches('/').to_string()
}

/// Strategy for `classpath:` locations
#[derive(Debug)]
pub struct ClasspathStrategy {
    base: String,
}

impl ClasspathStrategy {
    pub fn new(location: &Location) -> Self {
        Self {
            base: location.base_path().trim_matches('/').to_string(),
        }
    }

    fn address(&self, source_path: &str) -> String {
        if self.base.is_empty() {
            format!("{source_path}.yaml")
        } else {
            format!("{}/{}.yaml", self.base, source_path)
        }
    }
}

impl SourceStrategy for ClasspathStrategy {
    fn name(&self) -> &str {
        "classpath"
    }

    fn load(&self, source_name: &str, source_path: &str) -> ConfigResult<Option<PropertyMap>> {
        let address = self.address(source_path);
        match lookup(&address) {
            Some(content) => PropertyMap::from_yaml_str(source_name, &content).map(Some),
            None => {
                debug!("no embedded resource at '{}'", address);
                Ok(None)
            }
        }
    }
}
