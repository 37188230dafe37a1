//! Management-namespace interfaces
//!
//! Consumers that want the merged configuration (and derived beans)
//! published for runtime introspection implement `ManagementServer`;
//! published objects implement `ManagedObject`.

use std::sync::Arc;

use thiserror::Error;

use super::name::ExportName;

/// A published object: a snapshot of introspectable attributes
pub trait ManagedObject: Send + Sync {
    /// Human-readable description of the object
    fn description(&self) -> String {
        String::new()
    }

    /// Attribute name/value pairs describing current state
    ///
    /// Taken per call, so implementations may read live data.
    fn attributes(&self) -> Vec<(String, String)>;
}

/// Errors surfaced by `ManagementServer::register`
#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error("an object is already registered under '{0}'")]
    AlreadyRegistered(ExportName),

    #[error("registration rejected for '{name}': {reason}")]
    Rejected { name: ExportName, reason: String },
}

/// Errors surfaced by `ManagementServer::unregister`
#[derive(Error, Debug)]
pub enum UnregistrationError {
    #[error("nothing registered under '{0}'")]
    NotFound(ExportName),

    #[error("unregistration failed for '{name}': {reason}")]
    Failed { name: ExportName, reason: String },
}

/// A runtime management namespace that objects can be exported into
pub trait ManagementServer: Send + Sync {
    fn register(
        &self,
        name: ExportName,
        object: Arc<dyn ManagedObject>,
    ) -> Result<(), RegistrationError>;

    fn unregister(&self, name: &ExportName) -> Result<(), UnregistrationError>;
}
