use crate::ports::outbound::OutputPresenter;
use crate::shared::error::GraphError;
use crate::shared::security;
use crate::shared::Result;
use anyhow::Context;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Writes a rendered graph to a file, typically the DOT document
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    fn write_error(&self, details: impl ToString) -> GraphError {
        GraphError::FileWrite {
            path: self.output_path.clone(),
            details: details.to_string(),
        }
    }

    /// The parent directory must already exist and the target must not be a symlink
    fn check_target(&self) -> std::result::Result<(), GraphError> {
        let parent = self
            .output_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty());
        if let Some(parent) = parent {
            if !parent.is_dir() {
                return Err(self.write_error(format!(
                    "Parent directory does not exist: {}",
                    parent.display()
                )));
            }
        }

        security::reject_symlink(&self.output_path).map_err(|e| self.write_error(e))
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.check_target()?;
        fs::write(&self.output_path, content).map_err(|e| self.write_error(e))?;

        eprintln!("✅ Graph written: {}", self.output_path.display());
        Ok(())
    }
}

/// Prints rendered output (config summary, listing, tree) to stdout
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|()| stdout.flush())
            .context("Failed to write to stdout")
    }
}
