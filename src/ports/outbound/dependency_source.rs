use crate::dependency_resolution::domain::PackageId;
use thiserror::Error;

/// Failure to retrieve the direct dependencies of one package
///
/// Carries the queried identity and the underlying cause. Any lookup failure
/// aborts the whole traversal.
#[derive(Debug, Error)]
#[error("Failed to look up dependencies of '{package}'\n\n💡 Hint: Check that the repository URL is reachable and that the package exists on the feed")]
pub struct LookupError {
    package: String,
    #[source]
    source: anyhow::Error,
}

impl LookupError {
    pub fn new(package: &PackageId, source: impl Into<anyhow::Error>) -> Self {
        Self {
            package: package.to_string(),
            source: source.into(),
        }
    }

    /// Identity of the package whose lookup failed
    pub fn package(&self) -> &str {
        &self.package
    }
}

/// DependencySource port: "what does this package directly depend on?"
///
/// Contract for every implementation:
/// - the returned list holds no duplicates and never contains `package` itself
/// - a call neither mutates nor depends on state left by a previous call, so
///   repeated lookups against the same backing data give the same answer
/// - failures to retrieve or parse the backing data are reported as
///   [`LookupError`]
pub trait DependencySource {
    fn lookup(&self, package: &PackageId) -> Result<Vec<PackageId>, LookupError>;
}

impl<S: DependencySource + ?Sized> DependencySource for &S {
    fn lookup(&self, package: &PackageId) -> Result<Vec<PackageId>, LookupError> {
        (**self).lookup(package)
    }
}

impl<S: DependencySource + ?Sized> DependencySource for Box<S> {
    fn lookup(&self, package: &PackageId) -> Result<Vec<PackageId>, LookupError> {
        (**self).lookup(package)
    }
}
