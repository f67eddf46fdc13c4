use crate::dependency_resolution::domain::{DependencyGraph, PackageId};
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;
use std::collections::HashSet;

const BRANCH: &str = "+-- ";
const LAST_BRANCH: &str = "\\-- ";
const VERTICAL: &str = "|   ";
const SPACE: &str = "    ";

/// Marker for a package whose subtree was already printed elsewhere
const REPEATED_MARKER: &str = " (*)";

/// Marker for a dependency that leads back to a package on the current path
const CYCLE_MARKER: &str = " (cycle)";

/// AsciiTreeFormatter adapter rendering the graph as a tree rooted at the
/// traversal root
///
/// Packages that were never expanded (depth boundary) are printed as leaves.
/// Shared subtrees are printed once; later occurrences carry `(*)`.
pub struct AsciiTreeFormatter;

impl AsciiTreeFormatter {
    pub fn new() -> Self {
        Self
    }

    fn render_children(
        graph: &DependencyGraph,
        package: &PackageId,
        prefix: &str,
        path: &mut Vec<PackageId>,
        printed: &mut HashSet<PackageId>,
        output: &mut String,
    ) {
        let Some(children) = graph.dependencies_of(package.as_str()) else {
            return;
        };

        for (index, child) in children.iter().enumerate() {
            let is_last = index + 1 == children.len();
            let connector = if is_last { LAST_BRANCH } else { BRANCH };
            let has_children = graph
                .dependencies_of(child.as_str())
                .is_some_and(|deps| !deps.is_empty());

            output.push_str(prefix);
            output.push_str(connector);
            output.push_str(child.as_str());

            if path.contains(child) {
                output.push_str(CYCLE_MARKER);
                output.push('\n');
                continue;
            }
            if has_children && printed.contains(child) {
                output.push_str(REPEATED_MARKER);
                output.push('\n');
                continue;
            }
            output.push('\n');

            if has_children {
                printed.insert(child.clone());
                let child_prefix = format!("{}{}", prefix, if is_last { SPACE } else { VERTICAL });
                path.push(child.clone());
                Self::render_children(graph, child, &child_prefix, path, printed, output);
                path.pop();
            }
        }
    }
}

impl Default for AsciiTreeFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for AsciiTreeFormatter {
    fn format(&self, graph: &DependencyGraph, root: &PackageId) -> Result<String> {
        let mut output = format!("{}\n", root);
        let mut path = vec![root.clone()];
        let mut printed = HashSet::from([root.clone()]);

        Self::render_children(graph, root, "", &mut path, &mut printed, &mut output);
        Ok(output)
    }
}
