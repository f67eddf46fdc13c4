use crate::dependency_resolution::domain::{DependencyGraph, PackageId};
use crate::shared::Result;

/// GraphFormatter port for rendering a built dependency graph
///
/// Formatters are pure consumers of the graph; they never trigger lookups.
pub trait GraphFormatter {
    /// Renders the graph reachable from `root`
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn format(&self, graph: &DependencyGraph, root: &PackageId) -> Result<String>;
}
