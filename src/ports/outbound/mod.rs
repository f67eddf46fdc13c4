/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (package feeds, fixtures, console, files).
pub mod dependency_source;
pub mod graph_formatter;
pub mod output_presenter;
pub mod progress_reporter;

pub use dependency_source::{DependencySource, LookupError};
pub use graph_formatter::GraphFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
