/// Network adapters for live package feeds
mod nuget_client;
pub mod odata_feed;

pub use nuget_client::NuGetFeedSource;
