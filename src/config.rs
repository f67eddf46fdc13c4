//! Configuration file support for nuget-depgraph.
//!
//! The configuration is read once at startup into an immutable [`AppConfig`]
//! and handed explicitly to whatever needs it. JSON is the primary format;
//! YAML and TOML are accepted based on the file extension.

use crate::dependency_resolution::domain::PackageId;
use crate::shared::error::GraphError;
use crate::shared::security;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::warn;

const DEFAULT_OUTPUT_FILE: &str = "graph.png";
const DEFAULT_MAX_DEPTH: i64 = 10;

/// Raw configuration file schema. Every field is optional at this stage;
/// required fields are enforced by [`AppConfig::resolve`].
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub package_name: Option<String>,
    pub repository_url: Option<String>,
    pub test_mode: Option<bool>,
    pub output_file: Option<String>,
    pub ascii_tree: Option<bool>,
    pub max_depth: Option<i64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// Values given on the command line that take precedence over the file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub max_depth: Option<i64>,
    pub ascii_tree: Option<bool>,
    pub output_file: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Yaml,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yml") | Some("yaml") => ConfigFormat::Yaml,
            Some("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Json,
        }
    }

    fn parse(self, content: &str) -> Result<ConfigFile, String> {
        match self {
            ConfigFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Yaml => serde_yaml_ng::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        }
    }

    fn name(self) -> &'static str {
        match self {
            ConfigFormat::Json => "JSON",
            ConfigFormat::Yaml => "YAML",
            ConfigFormat::Toml => "TOML",
        }
    }
}

/// Validated, immutable application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    package: PackageId,
    repository_url: String,
    test_mode: bool,
    output_file: PathBuf,
    ascii_tree: bool,
    max_depth: usize,
}

impl AppConfig {
    /// Applies defaults and overrides to a raw config and validates the result.
    ///
    /// # Errors
    /// Returns [`GraphError::Config`] if `package_name` or `repository_url`
    /// is missing or empty, or `max_depth` is not a positive integer.
    pub fn resolve(file: ConfigFile, overrides: &ConfigOverrides) -> Result<Self, GraphError> {
        let package_name = file.package_name.unwrap_or_default();
        if package_name.trim().is_empty() {
            return Err(GraphError::config("Package name is required"));
        }

        let repository_url = file.repository_url.unwrap_or_default();
        if repository_url.trim().is_empty() {
            return Err(GraphError::config("Repository URL is required"));
        }

        let max_depth = overrides
            .max_depth
            .or(file.max_depth)
            .unwrap_or(DEFAULT_MAX_DEPTH);
        let max_depth = usize::try_from(max_depth)
            .ok()
            .filter(|depth| *depth >= 1)
            .ok_or_else(|| GraphError::config("Max depth must be a positive integer"))?;

        let package = PackageId::new(package_name)
            .map_err(|e| GraphError::config(format!("package_name: {}", e)))?;

        let output_file = overrides
            .output_file
            .clone()
            .or(file.output_file)
            .unwrap_or_else(|| DEFAULT_OUTPUT_FILE.to_string());

        Ok(Self {
            package,
            repository_url,
            test_mode: file.test_mode.unwrap_or(false),
            output_file: PathBuf::from(output_file),
            ascii_tree: overrides.ascii_tree.or(file.ascii_tree).unwrap_or(false),
            max_depth,
        })
    }

    pub fn package(&self) -> &PackageId {
        &self.package
    }

    pub fn repository_url(&self) -> &str {
        &self.repository_url
    }

    pub fn test_mode(&self) -> bool {
        self.test_mode
    }

    pub fn output_file(&self) -> &Path {
        &self.output_file
    }

    pub fn ascii_tree(&self) -> bool {
        self.ascii_tree
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Human-readable parameter block printed before the graph
    pub fn summary(&self) -> String {
        let mut out = String::from("Configuration parameters:\n");
        let _ = writeln!(out, "  package_name: {}", self.package);
        let _ = writeln!(out, "  repository_url: {}", self.repository_url);
        let _ = writeln!(out, "  test_mode: {}", self.test_mode);
        let _ = writeln!(out, "  output_file: {}", self.output_file.display());
        let _ = writeln!(out, "  ascii_tree: {}", self.ascii_tree);
        let _ = writeln!(out, "  max_depth: {}", self.max_depth);
        out
    }
}

/// Reads and parses a config file without validating it.
pub fn load_config_file(path: &Path) -> Result<ConfigFile, GraphError> {
    let content = security::read_input_file(path, "config file").map_err(|e| {
        GraphError::config(format!("Config file not found or unreadable: {} ({})", path.display(), e))
    })?;

    let format = ConfigFormat::from_path(path);
    let config = format.parse(&content).map_err(|e| {
        GraphError::config(format!(
            "Invalid {} in config file: {} ({})",
            format.name(),
            path.display(),
            e
        ))
    })?;

    warn_unknown_fields(&config);
    Ok(config)
}

/// Loads, merges and validates the configuration in one step.
pub fn load_config_from_path(
    path: &Path,
    overrides: &ConfigOverrides,
) -> Result<AppConfig, GraphError> {
    let file = load_config_file(path)?;
    AppConfig::resolve(file, overrides)
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        warn!("Unknown config field '{}' will be ignored", key);
    }
}
