use super::PackageId;
use std::collections::HashMap;

/// DependencyGraph aggregate: package identity -> direct dependencies
///
/// Only packages that were expanded during traversal are keys. A package that
/// is referenced as a dependency but sat on the depth boundary is absent, so
/// `dependencies_of` returning `None` ("never expanded") is distinct from
/// returning an empty slice ("expanded, has no dependencies").
///
/// Iteration follows expansion order, which is breadth-first from the root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    order: Vec<PackageId>,
    adjacency: HashMap<PackageId, Vec<PackageId>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the dependency list of an expanded package.
    ///
    /// Re-inserting an existing key replaces its list but keeps its position.
    pub fn insert(&mut self, package: PackageId, dependencies: Vec<PackageId>) {
        if !self.adjacency.contains_key(&package) {
            self.order.push(package.clone());
        }
        self.adjacency.insert(package, dependencies);
    }

    pub fn dependencies_of(&self, package: &str) -> Option<&[PackageId]> {
        self.adjacency.get(package).map(Vec::as_slice)
    }

    pub fn contains(&self, package: &str) -> bool {
        self.adjacency.contains_key(package)
    }

    /// Expanded packages in expansion order
    pub fn packages(&self) -> &[PackageId] {
        &self.order
    }

    /// (package, dependencies) pairs in expansion order
    pub fn iter(&self) -> impl Iterator<Item = (&PackageId, &[PackageId])> {
        self.order
            .iter()
            .map(move |pkg| (pkg, self.adjacency[pkg].as_slice()))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Plain string view, convenient for comparisons and serialization
    pub fn to_string_map(&self) -> HashMap<String, Vec<String>> {
        self.iter()
            .map(|(pkg, deps)| {
                (
                    pkg.to_string(),
                    deps.iter().map(PackageId::to_string).collect(),
                )
            })
            .collect()
    }
}
