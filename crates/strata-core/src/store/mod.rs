//! Property storage: sub-configurations and the override-merge container
//!
//! - `PropertyMap`: ordered key/value map parsed from one source
//! - `CombinedConfig`: named layers with first-added-wins lookup
//! - `system_properties`: eager snapshot of the process environment

mod combined;
mod properties;
mod system;

pub use combined::{CombinedConfig, Layer};
pub use properties::PropertyMap;
pub use system::{system_properties, SYSTEM_PROPERTIES};
