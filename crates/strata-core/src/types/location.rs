//! Source locations: where configuration is loaded from

use std::fmt;

use url::Url;

use super::error::{ConfigError, ConfigResult};

/// Transport scheme of a configuration location
///
/// The set is closed; strategy selection matches on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// Embedded resources registered in-process
    Classpath,
    /// Local filesystem
    File,
    /// Remote HTTP endpoint
    Http,
    /// Remote HTTPS endpoint
    Https,
}

impl Scheme {
    /// Parse a scheme string, `None` for anything outside the fixed set
    pub fn parse(scheme: &str) -> Option<Self> {
        match scheme {
            "classpath" => Some(Scheme::Classpath),
            "file" => Some(Scheme::File),
            "http" => Some(Scheme::Http),
            "https" => Some(Scheme::Https),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Classpath => "classpath",
            Scheme::File => "file",
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An absolute base location below which configuration sources live
///
/// Immutable once parsed; the resolver is bound to exactly one location.
///
/// # Example
///
/// ```
/// use strata_core::{Location, Scheme};
///
/// let location = Location::parse("classpath:/config").unwrap();
/// assert_eq!(location.scheme(), Scheme::Classpath);
///
/// assert!(Location::parse("ftp://cfg.internal/app").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    url: Url,
    scheme: Scheme,
}

impl Location {
    /// Parse a location from a URI string
    ///
    /// Fails for malformed URIs and for schemes outside
    /// `classpath`/`file`/`http`/`https`.
    pub fn parse(location: &str) -> ConfigResult<Self> {
        let url = Url::parse(location).map_err(|e| ConfigError::InvalidLocation {
            location: location.to_string(),
            reason: e.to_string(),
        })?;
        let scheme = Scheme::parse(url.scheme()).ok_or_else(|| ConfigError::UnsupportedScheme {
            scheme: url.scheme().to_string(),
            location: location.to_string(),
        })?;
        Ok(Self { url, scheme })
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The base path component of the location
    pub fn base_path(&self) -> &str {
        self.url.path()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}
