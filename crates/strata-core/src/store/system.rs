//! Synthetic system-properties pseudo-source

use super::properties::PropertyMap;

/// Layer name under which the environment snapshot is merged
pub const SYSTEM_PROPERTIES: &str = "systemProperties";

/// Snapshot the process environment as a property map
///
/// The snapshot is taken eagerly at resolution time; environment changes
/// made afterwards are not visible through the combined configuration.
pub fn system_properties() -> PropertyMap {
    std::env::vars().collect()
}
