use crate::adapters::outbound::filesystem::FixtureSource;
use crate::adapters::outbound::network::NuGetFeedSource;
use crate::config::AppConfig;
use crate::ports::outbound::DependencySource;
use crate::shared::Result;
use std::path::Path;

/// Factory for selecting the dependency source
///
/// This is the only place that looks at `test_mode`: the traversal itself is
/// handed a ready-made source and never branches on its kind.
pub struct SourceFactory;

impl SourceFactory {
    /// Creates the dependency source described by the configuration
    ///
    /// In test mode `repository_url` is a path to a fixture document, loaded
    /// eagerly so a missing fixture fails before any traversal starts.
    /// Otherwise it is the base URL of a NuGet v2 feed.
    ///
    /// # Errors
    /// Returns an error if the fixture cannot be loaded or the HTTP client
    /// cannot be constructed.
    pub fn create(config: &AppConfig) -> Result<Box<dyn DependencySource>> {
        if config.test_mode() {
            let fixture = FixtureSource::from_path(Path::new(config.repository_url()))?;
            Ok(Box::new(fixture))
        } else {
            Ok(Box::new(NuGetFeedSource::new(config.repository_url())?))
        }
    }

    /// Returns the progress message describing the selected source
    pub fn progress_message(config: &AppConfig) -> String {
        if config.test_mode() {
            format!("📖 Using fixture repository: {}", config.repository_url())
        } else {
            format!("🌐 Using package feed: {}", config.repository_url())
        }
    }
}
