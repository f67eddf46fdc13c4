use crate::dependency_resolution::domain::{DependencyGraph, PackageId};
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;
use std::collections::HashSet;

/// DotFormatter adapter producing a Graphviz DOT digraph
///
/// The root is highlighted; packages that were referenced but never expanded
/// (depth boundary) are drawn dashed. Render with e.g. `dot -Tpng graph.dot`.
pub struct DotFormatter;

impl DotFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Quotes a package identity as a DOT string literal
    fn quote(id: &PackageId) -> String {
        format!("\"{}\"", id.as_str().replace('\\', "\\\\").replace('"', "\\\""))
    }
}

impl Default for DotFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for DotFormatter {
    fn format(&self, graph: &DependencyGraph, root: &PackageId) -> Result<String> {
        let mut output = String::from("digraph dependencies {\n");
        output.push_str("    rankdir=LR;\n");
        output.push_str("    node [shape=box];\n");
        output.push_str(&format!(
            "    {} [style=bold];\n",
            Self::quote(root)
        ));

        let mut boundary: Vec<&PackageId> = Vec::new();
        let mut seen: HashSet<&PackageId> = HashSet::new();

        for (package, dependencies) in graph.iter() {
            for dependency in dependencies {
                output.push_str(&format!(
                    "    {} -> {};\n",
                    Self::quote(package),
                    Self::quote(dependency)
                ));
                if !graph.contains(dependency.as_str()) && seen.insert(dependency) {
                    boundary.push(dependency);
                }
            }
        }

        for package in boundary {
            output.push_str(&format!("    {} [style=dashed];\n", Self::quote(package)));
        }

        output.push_str("}\n");
        Ok(output)
    }
}
