//! Layered resolution of named configuration sources

mod layered;

pub use layered::LayeredResolver;
