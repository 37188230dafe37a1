//! Error taxonomy for configuration resolution

use thiserror::Error;

/// Errors that can occur while resolving configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The location string could not be parsed as a URI
    #[error("invalid configuration location '{location}': {reason}")]
    InvalidLocation { location: String, reason: String },

    /// The location's scheme has no loading strategy
    ///
    /// An unsupported scheme is a deployment mistake, not a transient
    /// condition; it is rejected when the location is constructed.
    #[error("no strategy for configuration location '{location}' (scheme '{scheme}')")]
    UnsupportedScheme { scheme: String, location: String },

    /// An explicitly listed source failed to load
    #[error("configuration '{0}' does not exist")]
    MandatorySourceMissing(String),

    /// A non-empty hierarchical specification yielded no layers at all
    #[error("config name '{0}' was given but no config file could be found")]
    NoLayersLoaded(String),

    /// A source was fetched but its content could not be parsed
    #[error("failed to parse configuration '{name}': {reason}")]
    Parse { name: String, reason: String },

    /// A remote source could not be fetched
    #[error("failed to fetch configuration '{name}' from '{address}': {reason}")]
    Transport {
        name: String,
        address: String,
        reason: String,
    },

    /// A key is present but its value does not coerce to the requested type
    #[error("invalid value '{value}' for key '{key}': {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    /// A configuration bean could not be materialized
    #[error("failed to materialize bean for prefix '{prefix}': {reason}")]
    Materialize { prefix: String, reason: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConfigError::MandatorySourceMissing("app".to_string());
        assert_eq!(err.to_string(), "configuration 'app' does not exist");

        let err = ConfigError::NoLayersLoaded("prod/web".to_string());
        assert!(err.to_string().contains("no config file could be found"));

        let err = ConfigError::UnsupportedScheme {
            scheme: "ftp".to_string(),
            location: "ftp:/cfg".to_string(),
        };
        assert!(err.to_string().contains("ftp"));
    }
}
