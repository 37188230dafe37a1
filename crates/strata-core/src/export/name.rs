//! Deterministic export identifiers

use std::fmt;

/// Namespace root under which all exports are registered
pub const EXPORT_DOMAIN: &str = "strata.config";

/// A structured, collision-free export identifier
///
/// Rendered as `domain:k0=v0,k1=v1`. Derivation from a fully qualified type
/// name tags each path segment with its index, so distinct names can never
/// collide.
///
/// # Example
///
/// ```
/// use strata_core::ExportName;
///
/// let name = ExportName::for_type("billing::DbSettings");
/// assert_eq!(name.to_string(), "strata.config:n0=billing,n1=DbSettings");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExportName {
    domain: String,
    components: Vec<(String, String)>,
}

impl ExportName {
    /// Identifier for the root configuration export
    pub fn config_root() -> Self {
        Self {
            domain: EXPORT_DOMAIN.to_string(),
            components: vec![("config".to_string(), "ROOT".to_string())],
        }
    }

    /// Derive an identifier from a fully qualified type name
    ///
    /// Both `.` and `::` separate segments, so dotted logical names and
    /// Rust type paths produce equivalent identifiers.
    pub fn for_type(type_name: &str) -> Self {
        let normalized = type_name.replace("::", ".");
        let components = normalized
            .split('.')
            .filter(|s| !s.is_empty())
            .enumerate()
            .map(|(index, part)| (format!("n{index}"), part.to_string()))
            .collect();
        Self {
            domain: EXPORT_DOMAIN.to_string(),
            components,
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn components(&self) -> &[(String, String)] {
        &self.components
    }
}

impl fmt::Display for ExportName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.domain)?;
        for (index, (key, value)) in self.components.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}
