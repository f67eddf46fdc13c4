use crate::shared::error::GraphError;
use std::borrow::Borrow;
use std::fmt;

/// Maximum length for package identities (security limit)
const MAX_PACKAGE_ID_LENGTH: usize = 255;

/// NewType wrapper for a package identity
///
/// Identities are opaque and case-preserving: `Newtonsoft.Json` and
/// `newtonsoft.json` are different packages as far as the graph is concerned.
/// Version qualifiers are never part of an identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageId(String);

impl PackageId {
    pub fn new(id: impl Into<String>) -> Result<Self, GraphError> {
        let id = id.into();

        if id.is_empty() {
            return Err(GraphError::InvalidPackageId {
                details: "Package identity cannot be empty".to_string(),
            });
        }

        // Security: Length limit to prevent DoS
        if id.len() > MAX_PACKAGE_ID_LENGTH {
            return Err(GraphError::InvalidPackageId {
                details: format!(
                    "Package identity is too long ({} bytes). Maximum allowed: {} bytes",
                    id.len(),
                    MAX_PACKAGE_ID_LENGTH
                ),
            });
        }

        if id.chars().any(char::is_control) {
            return Err(GraphError::InvalidPackageId {
                details: format!("Package identity {:?} contains control characters", id),
            });
        }

        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PackageId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
