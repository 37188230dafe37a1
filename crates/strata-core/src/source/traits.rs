//! Source strategy trait

use crate::store::PropertyMap;
use crate::types::ConfigResult;

/// Loads one logical configuration source relative to a base location
///
/// Implementations:
/// - `ClasspathStrategy`: embedded resource registry
/// - `FileStrategy`: local filesystem
/// - `HttpStrategy`: http/https endpoints
///
/// `Ok(None)` means the source does not exist, a normal outcome for
/// optional layers. The caller decides whether absence is fatal; this layer
/// never retries.
pub trait SourceStrategy: Send + Sync {
    /// Short name of this strategy (the scheme family it serves)
    fn name(&self) -> &str;

    /// Fetch and parse `source_path` below the bound base location
    ///
    /// `source_name` is the short logical name used as the merge key and in
    /// diagnostics; `source_path` is relative to the base location.
    fn load(&self, source_name: &str, source_path: &str) -> ConfigResult<Option<PropertyMap>>;
}
