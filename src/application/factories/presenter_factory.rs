use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::{Path, PathBuf};

/// Extensions written as-is; anything else is swapped for `.dot`
const DOT_EXTENSIONS: [&str; 2] = ["dot", "gv"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    File(PathBuf),
}

/// Picks where rendered output goes: stdout or a file.
pub struct PresenterFactory;

impl PresenterFactory {
    /// # Examples
    /// ```
    /// use nuget_depgraph::application::factories::{PresenterFactory, PresenterType};
    ///
    /// let presenter = PresenterFactory::create(PresenterType::Stdout);
    /// ```
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::File(path) => Box::new(FileSystemWriter::new(path)),
        }
    }

    /// Path the DOT document is written to for a configured `output_file`
    ///
    /// Image names such as `graph.png` become `graph.dot`; `.dot`/`.gv`
    /// paths are kept.
    pub fn graph_file_path(output_file: &Path) -> PathBuf {
        let is_dot = output_file
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| DOT_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()));

        if is_dot {
            output_file.to_path_buf()
        } else {
            output_file.with_extension("dot")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_create_stdout_presenter() {
        let presenter = PresenterFactory::create(PresenterType::Stdout);
        assert!(presenter.present("").is_ok());
    }

    #[test]
    fn test_create_file_presenter() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("graph.dot");

        let presenter = PresenterFactory::create(PresenterType::File(path.clone()));
        presenter.present("digraph dependencies {}\n").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "digraph dependencies {}\n");
    }

    #[test]
    fn test_graph_file_path() {
        assert_eq!(
            PresenterFactory::graph_file_path(Path::new("graph.png")),
            PathBuf::from("graph.dot")
        );
        assert_eq!(
            PresenterFactory::graph_file_path(Path::new("out/deps.gv")),
            PathBuf::from("out/deps.gv")
        );
        assert_eq!(
            PresenterFactory::graph_file_path(Path::new("deps.DOT")),
            PathBuf::from("deps.DOT")
        );
        assert_eq!(
            PresenterFactory::graph_file_path(Path::new("graph")),
            PathBuf::from("graph.dot")
        );
    }

    #[test]
    fn test_presenter_type_equality() {
        let file1 = PresenterType::File(PathBuf::from("/tmp/a.dot"));
        let file2 = PresenterType::File(PathBuf::from("/tmp/a.dot"));
        assert_eq!(file1, file2);
        assert_ne!(file1, PresenterType::Stdout);
    }
}
