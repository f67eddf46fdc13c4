use crate::config::AppConfig;
use crate::dependency_resolution::domain::PackageId;

/// GraphRequest - request DTO for the graph building use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphRequest {
    /// Package the traversal starts from (depth 0)
    pub root: PackageId,
    /// Packages at this distance from the root or further are not expanded
    pub max_depth: usize,
}

impl GraphRequest {
    pub fn new(root: PackageId, max_depth: usize) -> Self {
        Self { root, max_depth }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.package().clone(), config.max_depth())
    }
}
