//! Core types shared across the crate

mod error;
mod location;

pub use error::{ConfigError, ConfigResult};
pub use location::{Location, Scheme};
