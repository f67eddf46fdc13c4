use crate::dependency_resolution::domain::{DependencyGraph, PackageId};
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;

/// Heading printed above the listing
const LISTING_HEADER: &str = "Dependency graph:\n";

/// ListingFormatter adapter producing one `package -> [deps]` line per
/// expanded package, in expansion order
pub struct ListingFormatter;

impl ListingFormatter {
    pub fn new() -> Self {
        Self
    }

    fn format_line(package: &PackageId, dependencies: &[PackageId]) -> String {
        let names: Vec<&str> = dependencies.iter().map(PackageId::as_str).collect();
        format!("{} -> [{}]\n", package, names.join(", "))
    }
}

impl Default for ListingFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for ListingFormatter {
    fn format(&self, graph: &DependencyGraph, _root: &PackageId) -> Result<String> {
        let mut output = String::from(LISTING_HEADER);
        for (package, dependencies) in graph.iter() {
            output.push_str(&Self::format_line(package, dependencies));
        }
        Ok(output)
    }
}
