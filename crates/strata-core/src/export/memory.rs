//! In-memory management server for tests and embedded introspection

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::name::ExportName;
use super::traits::{ManagedObject, ManagementServer, RegistrationError, UnregistrationError};

/// HashMap-backed `ManagementServer`
///
/// Rejects duplicate registrations, matching the contract real management
/// namespaces enforce.
#[derive(Default)]
pub struct InMemoryManagementServer {
    objects: RwLock<HashMap<ExportName, Arc<dyn ManagedObject>>>,
}

impl InMemoryManagementServer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &ExportName) -> bool {
        self.objects.read().contains_key(name)
    }

    pub fn get(&self, name: &ExportName) -> Option<Arc<dyn ManagedObject>> {
        self.objects.read().get(name).cloned()
    }

    pub fn names(&self) -> Vec<ExportName> {
        self.objects.read().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.objects.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.read().is_empty()
    }
}

impl ManagementServer for InMemoryManagementServer {
    fn register(
        &self,
        name: ExportName,
        object: Arc<dyn ManagedObject>,
    ) -> Result<(), RegistrationError> {
        let mut objects = self.objects.write();
        if objects.contains_key(&name) {
            return Err(RegistrationError::AlreadyRegistered(name));
        }
        objects.insert(name, object);
        Ok(())
    }

    fn unregister(&self, name: &ExportName) -> Result<(), UnregistrationError> {
        match self.objects.write().remove(name) {
            Some(_) => Ok(()),
            None => Err(UnregistrationError::NotFound(name.clone())),
        }
    }
}

impl std::fmt::Debug for InMemoryManagementServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryManagementServer")
            .field("objects", &self.len())
            .finish()
    }
}
