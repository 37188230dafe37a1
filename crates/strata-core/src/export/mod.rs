//! Runtime export of configuration for management introspection
//!
//! - `ExportRegistry`: publishes the merged configuration and beans under
//!   stable, collision-free identifiers
//! - `ManagementServer` / `ManagedObject`: the namespace interfaces
//! - `InMemoryManagementServer`: HashMap-backed server for tests and
//!   embedded use

mod managed;
mod memory;
mod name;
mod registry;
mod traits;

pub use managed::{ManagedConfig, ManagedProperties};
pub use memory::InMemoryManagementServer;
pub use name::{ExportName, EXPORT_DOMAIN};
pub use registry::ExportRegistry;
pub use traits::{ManagedObject, ManagementServer, RegistrationError, UnregistrationError};
