/// Dependency resolution core: domain types and the graph traversal service.
pub mod domain;
pub mod services;
