//! nuget-depgraph - dependency graph visualizer for NuGet feeds
//!
//! Resolves the transitive dependencies of a root package by repeatedly asking
//! a dependency source for direct dependencies, assembling the answers into a
//! depth-bounded, cycle-safe graph, and rendering it.
//!
//! # Architecture
//!
//! - **Domain** (`dependency_resolution`): `PackageId`, `DependencyGraph` and
//!   the breadth-first `GraphBuilder`
//! - **Application** (`application`): the graph building use case, DTOs and
//!   factories that pick adapters from the configuration
//! - **Ports** (`ports`): traits the core depends on
//! - **Adapters** (`adapters`): live feed client, fixture source, formatters,
//!   console and file output
//! - **Shared** (`shared`): error types and file-safety helpers
//!
//! # Example
//!
//! ```
//! use nuget_depgraph::prelude::*;
//! use std::collections::HashMap;
//!
//! # fn main() -> Result<()> {
//! let mut fixture = HashMap::new();
//! fixture.insert("App".to_string(), vec!["Lib".to_string()]);
//! let source = FixtureSource::from_map(fixture)?;
//!
//! let root = PackageId::new("App")?;
//! let graph = GraphBuilder::build(&root, &source, 10)?;
//!
//! assert_eq!(graph.dependencies_of("App"), Some(&[PackageId::new("Lib")?][..]));
//! assert_eq!(graph.dependencies_of("Lib"), Some(&[][..]));
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod dependency_resolution;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, FixtureSource, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        AsciiTreeFormatter, DotFormatter, ListingFormatter,
    };
    pub use crate::adapters::outbound::network::NuGetFeedSource;
    pub use crate::application::dto::{GraphRequest, GraphResponse};
    pub use crate::application::use_cases::BuildGraphUseCase;
    pub use crate::config::{AppConfig, ConfigOverrides};
    pub use crate::dependency_resolution::domain::{DependencyGraph, PackageId};
    pub use crate::dependency_resolution::services::{GraphBuilder, TraversalStats};
    pub use crate::ports::outbound::{
        DependencySource, GraphFormatter, LookupError, OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::error::GraphError;
    pub use crate::shared::Result;
}
