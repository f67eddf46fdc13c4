use crate::application::dto::{GraphRequest, GraphResponse};
use crate::dependency_resolution::domain::PackageId;
use crate::dependency_resolution::services::GraphBuilder;
use crate::ports::outbound::{DependencySource, LookupError, ProgressReporter};
use crate::shared::Result;
use std::cell::Cell;

/// BuildGraphUseCase - resolves the dependency graph of one root package
///
/// Generic over the dependency source so the same use case serves both the
/// live feed and the offline fixture; the caller decides which one it gets.
///
/// # Type Parameters
/// * `S` - DependencySource implementation
/// * `PR` - ProgressReporter implementation
pub struct BuildGraphUseCase<S, PR> {
    source: S,
    progress_reporter: PR,
}

impl<S, PR> BuildGraphUseCase<S, PR>
where
    S: DependencySource,
    PR: ProgressReporter,
{
    /// Creates a new BuildGraphUseCase with injected dependencies
    pub fn new(source: S, progress_reporter: PR) -> Self {
        Self {
            source,
            progress_reporter,
        }
    }

    /// Executes the traversal described by `request`
    ///
    /// # Errors
    /// Returns the first lookup failure; nothing of the partial graph is kept.
    pub fn execute(&self, request: GraphRequest) -> Result<GraphResponse> {
        self.progress_reporter.report(&format!(
            "🔍 Resolving dependencies of {} (max depth {})",
            request.root, request.max_depth
        ));

        let reporting_source = ReportingDependencySource::new(&self.source, &self.progress_reporter);

        match GraphBuilder::build_with_stats(&request.root, &reporting_source, request.max_depth) {
            Ok((graph, stats)) => {
                self.progress_reporter.report_completion(&format!(
                    "✅ Resolved {} package(s) with {} lookup(s)",
                    graph.len(),
                    stats.lookups
                ));
                Ok(GraphResponse::new(request.root, graph, stats))
            }
            Err(e) => {
                self.progress_reporter.report_error(&format!(
                    "❌ Dependency resolution stopped at '{}'",
                    e.package()
                ));
                Err(e.into())
            }
        }
    }
}

/// Decorator that reports a running lookup count for any dependency source
struct ReportingDependencySource<'a, S, PR> {
    inner: &'a S,
    progress_reporter: &'a PR,
    completed: Cell<usize>,
}

impl<'a, S, PR> ReportingDependencySource<'a, S, PR> {
    fn new(inner: &'a S, progress_reporter: &'a PR) -> Self {
        Self {
            inner,
            progress_reporter,
            completed: Cell::new(0),
        }
    }
}

impl<S, PR> DependencySource for ReportingDependencySource<'_, S, PR>
where
    S: DependencySource,
    PR: ProgressReporter,
{
    fn lookup(&self, package: &PackageId) -> std::result::Result<Vec<PackageId>, LookupError> {
        let dependencies = self.inner.lookup(package)?;
        self.completed.set(self.completed.get() + 1);
        self.progress_reporter
            .report_progress(self.completed.get(), Some(package.as_str()));
        Ok(dependencies)
    }
}
