use crate::dependency_resolution::domain::{DependencyGraph, PackageId};
use crate::dependency_resolution::services::TraversalStats;

/// GraphResponse - response DTO carrying the built graph to the presenters
#[derive(Debug, Clone)]
pub struct GraphResponse {
    pub root: PackageId,
    pub graph: DependencyGraph,
    pub stats: TraversalStats,
}

impl GraphResponse {
    pub fn new(root: PackageId, graph: DependencyGraph, stats: TraversalStats) -> Self {
        Self { root, graph, stats }
    }
}
