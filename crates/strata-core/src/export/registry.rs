//! Export registry: publishes configuration and beans to a management namespace

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{error, info, trace, warn};

use crate::config::Config;

use super::managed::ManagedConfig;
use super::name::ExportName;
use super::traits::{ManagedObject, ManagementServer, RegistrationError, UnregistrationError};

/// Publishes the merged configuration and derived beans under stable,
/// collision-free identifiers
///
/// Beans exported before a server handle is bound are queued and flushed
/// when one arrives. Export is idempotent per identifier. `shutdown`
/// unregisters everything and may be followed by a later rebind.
///
/// One mutex owns the handle, the pending queue and the registered-name
/// set; every operation holds it for its full duration. Nothing here
/// performs transport I/O, so the lock is never held across a fetch.
pub struct ExportRegistry {
    config: Config,
    inner: Mutex<Inner>,
}

struct Inner {
    server: Option<Arc<dyn ManagementServer>>,
    pending: Vec<(String, Arc<dyn ManagedObject>)>,
    registered: HashSet<ExportName>,
}

impl ExportRegistry {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            inner: Mutex::new(Inner {
                server: None,
                pending: Vec::new(),
                registered: HashSet::new(),
            }),
        }
    }

    /// Whether a server handle is currently bound
    pub fn is_bound(&self) -> bool {
        self.inner.lock().server.is_some()
    }

    /// Identifiers currently registered
    pub fn registered_names(&self) -> Vec<ExportName> {
        self.inner.lock().registered.iter().cloned().collect()
    }

    /// Adopt a management server handle
    ///
    /// Binding a handle different from the current one tears the old
    /// exports down first. The merged configuration is then exported under
    /// the fixed root identifier (best effort: a failure is logged, never
    /// surfaced), and every queued bean is flushed. All queued beans are
    /// attempted and the queue is cleared; the first bean failure, if any,
    /// is returned.
    pub fn bind_server(&self, server: Arc<dyn ManagementServer>) -> Result<(), RegistrationError> {
        let mut inner = self.inner.lock();

        if let Some(old) = inner.server.clone() {
            if !Arc::ptr_eq(&old, &server) {
                Self::teardown_locked(&mut inner, &old);
            }
        }
        inner.server = Some(server.clone());

        // Root export failure is logged, never surfaced.
        let root = ExportName::config_root();
        if !inner.registered.contains(&root) {
            let managed = Arc::new(ManagedConfig::new(self.config.clone()));
            match server.register(root.clone(), managed) {
                Ok(()) => {
                    inner.registered.insert(root);
                }
                Err(e) => error!("unable to export configuration root: {}", e),
            }
        }

        let pending = std::mem::take(&mut inner.pending);
        let mut first_failure = None;
        for (type_name, object) in pending {
            if let Err(e) = Self::export_locked(&mut inner, &server, &type_name, object) {
                warn!("unable to export queued bean '{}': {}", type_name, e);
                if first_failure.is_none() {
                    first_failure = Some(e);
                }
            }
        }
        match first_failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Export a configuration bean under an identifier derived from its
    /// fully qualified type name
    ///
    /// Queued if no server is bound yet. Re-exporting an already registered
    /// name is a silent no-op; a registration failure is returned to the
    /// caller.
    pub fn export_bean(
        &self,
        type_name: &str,
        object: Arc<dyn ManagedObject>,
    ) -> Result<(), RegistrationError> {
        let mut inner = self.inner.lock();
        let Some(server) = inner.server.clone() else {
            inner.pending.push((type_name.to_string(), object));
            return Ok(());
        };
        Self::export_locked(&mut inner, &server, type_name, object)
    }

    fn export_locked(
        inner: &mut Inner,
        server: &Arc<dyn ManagementServer>,
        type_name: &str,
        object: Arc<dyn ManagedObject>,
    ) -> Result<(), RegistrationError> {
        let name = ExportName::for_type(type_name);
        if inner.registered.contains(&name) {
            return Ok(()); // already exported
        }
        server.register(name.clone(), object)?;
        inner.registered.insert(name);
        Ok(())
    }

    /// Unregister everything currently exported
    ///
    /// Safe to call repeatedly; a later `bind_server` starts over.
    pub fn shutdown(&self) {
        let mut inner = self.inner.lock();
        if let Some(server) = inner.server.clone() {
            Self::teardown_locked(&mut inner, &server);
        } else {
            inner.registered.clear();
        }
    }

    fn teardown_locked(inner: &mut Inner, server: &Arc<dyn ManagementServer>) {
        for name in inner.registered.drain() {
            match server.unregister(&name) {
                Ok(()) => {}
                Err(UnregistrationError::NotFound(_)) => {
                    // Another actor removed it already; benign race.
                    trace!("not unregistering '{}': already gone", name);
                }
                Err(e) => warn!("unable to unregister '{}': {}", name, e),
            }
        }
        info!("unexported all configuration objects");
    }
}

impl std::fmt::Debug for ExportRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("ExportRegistry")
            .field("bound", &inner.server.is_some())
            .field("pending", &inner.pending.len())
            .field("registered", &inner.registered.len())
            .finish()
    }
}
