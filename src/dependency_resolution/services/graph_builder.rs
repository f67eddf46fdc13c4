use crate::dependency_resolution::domain::{DependencyGraph, PackageId};
use crate::ports::outbound::{DependencySource, LookupError};
use std::collections::{HashSet, VecDeque};
use tracing::debug;

/// Counters collected while building a graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalStats {
    /// Number of `DependencySource::lookup` calls made
    pub lookups: usize,
    /// Number of distinct packages dequeued, including boundary packages
    pub visited: usize,
}

/// GraphBuilder service: bounded breadth-first traversal of a dependency source
///
/// The builder never knows which source it is talking to; choosing between a
/// live feed and a fixture happens where the source is constructed.
pub struct GraphBuilder;

impl GraphBuilder {
    /// Builds the dependency graph reachable from `root`, expanding packages
    /// whose distance from the root is below `max_depth`.
    ///
    /// The root sits at depth 0. A package dequeued at `depth >= max_depth` is
    /// marked visited but never looked up, so it does not appear as a key.
    /// `max_depth` is expected to be at least 1; with 0 nothing is expanded.
    ///
    /// # Errors
    /// The first [`LookupError`] aborts the traversal and is returned as-is;
    /// no partial graph is produced.
    pub fn build<S>(
        root: &PackageId,
        source: &S,
        max_depth: usize,
    ) -> Result<DependencyGraph, LookupError>
    where
        S: DependencySource + ?Sized,
    {
        Self::build_with_stats(root, source, max_depth).map(|(graph, _)| graph)
    }

    /// Same traversal as [`GraphBuilder::build`], also returning counters.
    pub fn build_with_stats<S>(
        root: &PackageId,
        source: &S,
        max_depth: usize,
    ) -> Result<(DependencyGraph, TraversalStats), LookupError>
    where
        S: DependencySource + ?Sized,
    {
        let mut graph = DependencyGraph::new();
        let mut visited: HashSet<PackageId> = HashSet::new();
        let mut queue: VecDeque<(PackageId, usize)> = VecDeque::new();
        let mut stats = TraversalStats::default();

        queue.push_back((root.clone(), 0));

        while let Some((package, depth)) = queue.pop_front() {
            // Siblings may enqueue the same package before it is first dequeued
            if !visited.insert(package.clone()) {
                continue;
            }
            stats.visited += 1;

            if depth >= max_depth {
                debug!(package = %package, depth, "depth bound reached, not expanding");
                continue;
            }

            let dependencies = source.lookup(&package)?;
            stats.lookups += 1;
            debug!(
                package = %package,
                depth,
                count = dependencies.len(),
                "expanded package"
            );

            for dependency in &dependencies {
                if !visited.contains(dependency) {
                    queue.push_back((dependency.clone(), depth + 1));
                }
            }
            graph.insert(package, dependencies);
        }

        Ok((graph, stats))
    }
}
