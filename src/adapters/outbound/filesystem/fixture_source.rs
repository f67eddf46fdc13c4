use crate::dependency_resolution::domain::PackageId;
use crate::ports::outbound::{DependencySource, LookupError};
use crate::shared::error::GraphError;
use crate::shared::security;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{debug, warn};

/// FixtureSource adapter answering lookups from a static mapping
///
/// Used in test mode, where the configured repository URL is a path to a JSON
/// document of the form `{ "Package": ["Dep1", "Dep2"], ... }`. The document is
/// read once; lookups never touch the filesystem.
///
/// Unlike the live feed, a package missing from the mapping is not an error:
/// it simply has no dependencies, which lets fixtures omit leaf packages.
#[derive(Debug, Clone, Default)]
pub struct FixtureSource {
    dependencies: HashMap<PackageId, Vec<PackageId>>,
}

impl FixtureSource {
    /// Loads a fixture document from disk.
    ///
    /// # Errors
    /// Returns [`GraphError::Fixture`] if the file is missing, not a regular
    /// file, too large, not valid JSON, or not a mapping of identities to
    /// identity lists.
    pub fn from_path(path: &Path) -> Result<Self, GraphError> {
        let fixture_error = |details: String| GraphError::Fixture {
            path: path.to_path_buf(),
            details,
        };

        let content = security::read_input_file(path, "fixture repository")
            .map_err(|e| fixture_error(e.to_string()))?;

        let raw: HashMap<String, Vec<String>> = serde_json::from_str(&content)
            .map_err(|e| fixture_error(format!("Invalid JSON: {}", e)))?;

        let source = Self::from_map(raw).map_err(|e| fixture_error(e.to_string()))?;
        debug!(
            path = %path.display(),
            packages = source.dependencies.len(),
            "loaded fixture repository"
        );
        Ok(source)
    }

    /// Builds a fixture from an in-memory mapping.
    ///
    /// Self-references and repeated entries violate the dependency source
    /// contract; they are dropped here and logged as data-quality warnings.
    pub fn from_map(raw: HashMap<String, Vec<String>>) -> Result<Self, GraphError> {
        let mut dependencies = HashMap::with_capacity(raw.len());

        for (package, deps) in raw {
            let package = PackageId::new(package)?;
            let mut seen = HashSet::new();
            let mut cleaned = Vec::with_capacity(deps.len());

            for dep in deps {
                let dep = PackageId::new(dep)?;
                if dep == package {
                    warn!(package = %package, "fixture lists package as its own dependency; ignoring");
                    continue;
                }
                if !seen.insert(dep.clone()) {
                    warn!(package = %package, dependency = %dep, "fixture lists dependency twice; ignoring repeat");
                    continue;
                }
                cleaned.push(dep);
            }

            dependencies.insert(package, cleaned);
        }

        Ok(Self { dependencies })
    }

    /// Number of packages with an explicit entry
    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }
}

impl DependencySource for FixtureSource {
    fn lookup(&self, package: &PackageId) -> Result<Vec<PackageId>, LookupError> {
        Ok(self.dependencies.get(package).cloned().unwrap_or_default())
    }
}
