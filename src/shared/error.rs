use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The graph was built and printed
    Success = 0,
    /// Configuration, fixture, lookup or output error
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors raised outside the traversal itself.
///
/// Lookup failures during traversal are reported through
/// [`LookupError`](crate::ports::outbound::LookupError) instead, which keeps
/// the queried package identity attached to the cause.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Invalid configuration: {details}\n\n💡 Hint: Check the config file fields (package_name, repository_url, max_depth)")]
    Config { details: String },

    #[error("Failed to load fixture repository: {path}\nDetails: {details}\n\n💡 Hint: In test mode, repository_url must point to a JSON file mapping package names to dependency lists")]
    Fixture { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWrite { path: PathBuf, details: String },

    #[error("Invalid package identity: {details}")]
    InvalidPackageId { details: String },
}

impl GraphError {
    pub fn config(details: impl Into<String>) -> Self {
        GraphError::Config {
            details: details.into(),
        }
    }
}
