use clap::Parser;
use nuget_depgraph::config::ConfigOverrides;
use std::path::PathBuf;

/// Resolve and visualize the transitive dependency graph of a NuGet package
#[derive(Parser, Debug)]
#[command(name = "nuget-depgraph")]
#[command(version)]
#[command(about = "Resolve and visualize the transitive dependency graph of a NuGet package", long_about = None)]
pub struct Args {
    /// Path to the config file (JSON, or YAML/TOML by extension)
    #[arg(short, long, value_name = "PATH")]
    pub config: PathBuf,

    /// Override max_depth from the config file
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub max_depth: Option<i64>,

    /// Print an ASCII tree instead of writing the graph file
    #[arg(long)]
    pub ascii_tree: bool,

    /// Override output_file from the config file
    #[arg(long, value_name = "PATH")]
    pub output_file: Option<String>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Command-line values that take precedence over the config file
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            max_depth: self.max_depth,
            ascii_tree: self.ascii_tree.then_some(true),
            output_file: self.output_file.clone(),
        }
    }
}
