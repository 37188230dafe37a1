//! Filesystem strategy

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::store::PropertyMap;
use crate::types::{ConfigResult, Location};

use super::traits::SourceStrategy;

/// Strategy for `file:` locations
///
/// A missing or unreadable file is reported as absent; only malformed
/// content is an error.
#[derive(Debug)]
pub struct FileStrategy {
    base: PathBuf,
}

impl FileStrategy {
    pub fn new(location: &Location) -> Self {
        Self {
            base: PathBuf::from(location.base_path()),
        }
    }

    fn address(&self, source_path: &str) -> PathBuf {
        self.base.join(format!("{source_path}.yaml"))
    }

    pub fn base(&self) -> &Path {
        &self.base
    }
}

impl SourceStrategy for FileStrategy {
    fn name(&self) -> &str {
        "file"
    }

    fn load(&self, source_name: &str, source_path: &str) -> ConfigResult<Option<PropertyMap>> {
        let address = self.address(source_path);
        match fs::read_to_string(&address) {
            Ok(content) => PropertyMap::from_yaml_str(source_name, &content).map(Some),
            Err(e) => {
                debug!("cannot read '{}': {}", address.display(), e);
                Ok(None)
            }
        }
    }
}
