//! Strata Core
//!
//! Runtime-agnostic layered configuration resolution.
//! Configuration is loaded from one base location (embedded `classpath:`
//! resources, local files, or http/https endpoints), merged across named
//! layers with override precedence, and optionally published to a runtime
//! management namespace for introspection.
//!
//! ## Resolution
//!
//! ```no_run
//! use strata_core::Config;
//!
//! // `app` overrides `common`; the process environment overrides both.
//! let config = Config::load("file:/etc/myapp", "common,app")?;
//! let listen = config.get_string("server.listen");
//! # Ok::<(), strata_core::ConfigError>(())
//! ```
//!
//! ## Export
//!
//! ```no_run
//! use std::sync::Arc;
//! use strata_core::{Config, ExportRegistry, InMemoryManagementServer, ManagedProperties};
//!
//! let config = Config::load("file:/etc/myapp", "common,app")?;
//! let registry = ExportRegistry::new(config);
//!
//! // Beans exported before a server is bound are queued and flushed on bind.
//! registry.export_bean("myapp.DbSettings", Arc::new(ManagedProperties::new("db")))?;
//! registry.bind_server(Arc::new(InMemoryManagementServer::new()))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod export;
pub mod resolver;
pub mod source;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use config::{Config, CONFIG_LOCATION_VAR, CONFIG_SPEC_VAR};
pub use export::{
    ExportName, ExportRegistry, InMemoryManagementServer, ManagedConfig, ManagedObject,
    ManagedProperties, ManagementServer, RegistrationError, UnregistrationError, EXPORT_DOMAIN,
};
pub use resolver::LayeredResolver;
pub use source::{register_resource, unregister_resource, SourceStrategy};
pub use store::{CombinedConfig, PropertyMap};
pub use types::{ConfigError, ConfigResult, Location, Scheme};
