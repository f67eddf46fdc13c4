use super::odata_feed::{self, FeedEntry, FeedPage};
use crate::dependency_resolution::domain::PackageId;
use crate::ports::outbound::{DependencySource, LookupError};
use crate::shared::Result;
use std::time::Duration;
use tracing::debug;

/// Per-request timeout for feed queries
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Upper bound on `rel="next"` links followed for one package
const MAX_FEED_PAGES: usize = 50;

/// NuGetFeedSource adapter querying a live NuGet v2 (OData) feed
///
/// Each lookup issues blocking `FindPackagesById()` requests, following the
/// feed's paging links, accepts gzip-compressed bodies, and reads the
/// dependency field of the latest version.
/// Failures are never retried; the traversal that called us stops.
pub struct NuGetFeedSource {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl NuGetFeedSource {
    /// Creates a feed source for the given base URL (e.g. `https://www.nuget.org/api/v2`)
    pub fn new(base_url: &str) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("nuget-depgraph/{}", version);
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(user_agent)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Rejects identities that could alter the request URL or the OData filter
    fn validate_url_component(package: &PackageId) -> Result<()> {
        let id = package.as_str();

        if id.contains('/') || id.contains('\\') {
            anyhow::bail!("Security: package identity contains path separators which are not allowed");
        }

        if id.contains("..") {
            anyhow::bail!("Security: package identity contains '..' which is not allowed");
        }

        if id.contains('#') || id.contains('?') || id.contains('@') || id.contains('\'') {
            anyhow::bail!("Security: package identity contains URL-unsafe characters");
        }

        Ok(())
    }

    fn query_url(&self, package: &PackageId) -> String {
        format!(
            "{}/FindPackagesById()?id='{}'",
            self.base_url,
            urlencoding::encode(package.as_str())
        )
    }

    /// Accepts a `rel="next"` href only if it stays on the configured feed
    fn resolve_next_link(&self, href: &str) -> Result<String> {
        let url = if href.starts_with("http://") || href.starts_with("https://") {
            href.to_string()
        } else {
            format!("{}/{}", self.base_url, href.trim_start_matches('/'))
        };

        if !url.starts_with(&format!("{}/", self.base_url)) {
            anyhow::bail!("Feed pagination link leaves the configured feed: {}", href);
        }
        Ok(url)
    }

    fn fetch_page(&self, url: &str) -> Result<FeedPage> {
        let response = self.client.get(url).send()?;

        if !response.status().is_success() {
            anyhow::bail!("Feed returned status code {}", response.status());
        }

        odata_feed::parse_page(&response.text()?)
    }

    /// Walks the feed pages until the `IsLatestVersion` entry turns up.
    ///
    /// Without such a flag the last entry of the last page is used, since
    /// feeds list versions in ascending order.
    fn find_entry(&self, package: &PackageId) -> Result<Option<FeedEntry>> {
        Self::validate_url_component(package)?;

        let mut url = self.query_url(package);
        let mut last_seen = None;

        for page_number in 1..=MAX_FEED_PAGES {
            debug!(%url, page = page_number, "querying feed");
            let page = self.fetch_page(&url)?;

            if let Some(latest) = page.latest() {
                return Ok(Some(latest.clone()));
            }
            if let Some(last) = page.entries.last() {
                last_seen = Some(last.clone());
            }

            match page.next_link {
                Some(next) => url = self.resolve_next_link(&next)?,
                None => return Ok(last_seen),
            }
        }

        anyhow::bail!(
            "Feed for '{}' spans more than {} pages",
            package,
            MAX_FEED_PAGES
        )
    }

    fn fetch_dependencies(&self, package: &PackageId) -> Result<Vec<PackageId>> {
        let entry = self
            .find_entry(package)?
            .ok_or_else(|| anyhow::anyhow!("Package '{}' was not found on the feed", package))?;
        debug!(package = %package, version = %entry.version, "resolved feed entry");

        odata_feed::split_dependency_field(&entry.dependencies, package)
    }
}

impl DependencySource for NuGetFeedSource {
    fn lookup(&self, package: &PackageId) -> std::result::Result<Vec<PackageId>, LookupError> {
        self.fetch_dependencies(package)
            .map_err(|e| LookupError::new(package, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use mockito::{Matcher, Server};
    use std::error::Error as _;
    use std::io::Write;

    fn id(name: &str) -> PackageId {
        PackageId::new(name).unwrap()
    }

    fn feed_with(dependencies: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom" xmlns:d="http://schemas.microsoft.com/ado/2007/08/dataservices" xmlns:m="http://schemas.microsoft.com/ado/2007/08/dataservices/metadata">
  <entry>
    <m:properties>
      <d:Version>1.0.0</d:Version>
      <d:Dependencies>{}</d:Dependencies>
      <d:IsLatestVersion m:type="Edm.Boolean">true</d:IsLatestVersion>
    </m:properties>
  </entry>
</feed>"#,
            dependencies
        )
    }

    /// Feed page with `(version, dependencies, is_latest)` entries and an optional next link
    fn feed_page(entries: &[(&str, &str, bool)], next: Option<&str>) -> String {
        let mut xml = String::from(
            r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom" xmlns:d="http://schemas.microsoft.com/ado/2007/08/dataservices" xmlns:m="http://schemas.microsoft.com/ado/2007/08/dataservices/metadata">
  <title type="text">FindPackagesById</title>
  <link rel="self" title="FindPackagesById" href="FindPackagesById" />
"#,
        );
        for (version, dependencies, latest) in entries {
            xml.push_str(&format!(
                r#"  <entry>
    <author><name>Someone</name></author>
    <content type="application/zip" src="https://example.org/package/{version}" />
    <m:properties>
      <d:Version>{version}</d:Version>
      <d:Dependencies>{dependencies}</d:Dependencies>
      <d:IsLatestVersion m:type="Edm.Boolean">{latest}</d:IsLatestVersion>
    </m:properties>
  </entry>
"#
            ));
        }
        if let Some(href) = next {
            xml.push_str(&format!("  <link rel=\"next\" href=\"{}\" />\n", href));
        }
        xml.push_str("</feed>");
        xml
    }

    fn next_page_mock(server: &mut Server, package: &str, skiptoken: &str) -> mockito::Mock {
        server
            .mock("GET", Matcher::Regex(r"^/FindPackagesById(\?|$)".to_string()))
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("id".into(), format!("'{}'", package)),
                Matcher::UrlEncoded("$skiptoken".into(), skiptoken.into()),
            ]))
    }

    fn find_packages_mock(server: &mut Server, package: &str) -> mockito::Mock {
        server
            .mock("GET", Matcher::Regex(r"^/FindPackagesById\(\)".to_string()))
            .match_query(Matcher::UrlEncoded("id".into(), format!("'{}'", package)))
    }

    #[test]
    fn test_feed_source_creation_trims_slash() {
        let source = NuGetFeedSource::new("https://example.org/api/v2/").unwrap();
        assert_eq!(source.base_url(), "https://example.org/api/v2");
    }

    #[test]
    fn test_query_url_format() {
        let source = NuGetFeedSource::new("https://example.org/api/v2").unwrap();
        assert_eq!(
            source.query_url(&id("Newtonsoft.Json")),
            "https://example.org/api/v2/FindPackagesById()?id='Newtonsoft.Json'"
        );
    }

    #[test]
    fn test_validate_url_component_rejects_unsafe_ids() {
        for bad in ["a/b", "a\\b", "a..b", "a#b", "a?b", "a@b", "a'b"] {
            assert!(
                NuGetFeedSource::validate_url_component(&id(bad)).is_err(),
                "{} should be rejected",
                bad
            );
        }
        assert!(NuGetFeedSource::validate_url_component(&id("Serilog.Sinks.File")).is_ok());
    }

    #[test]
    fn test_lookup_plain_response() {
        let mut server = Server::new();
        let mock = find_packages_mock(&mut server, "Lib")
            .with_status(200)
            .with_header("content-type", "application/atom+xml")
            .with_body(feed_with("Core:[1.0, ):net45|Lib:1.0|Extra:2.0"))
            .create();

        let source = NuGetFeedSource::new(&server.url()).unwrap();
        let deps = source.lookup(&id("Lib")).unwrap();

        assert_eq!(deps, vec![id("Core"), id("Extra")]);
        mock.assert();
    }

    #[test]
    fn test_lookup_gzip_response() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder
            .write_all(feed_with("Core:1.0").as_bytes())
            .unwrap();
        let compressed = encoder.finish().unwrap();

        let mut server = Server::new();
        let mock = find_packages_mock(&mut server, "Lib")
            .with_status(200)
            .with_header("content-type", "application/atom+xml")
            .with_header("content-encoding", "gzip")
            .with_body(compressed)
            .create();

        let source = NuGetFeedSource::new(&server.url()).unwrap();
        assert_eq!(source.lookup(&id("Lib")).unwrap(), vec![id("Core")]);
        mock.assert();
    }

    #[test]
    fn test_lookup_http_error_status() {
        let mut server = Server::new();
        let _mock = find_packages_mock(&mut server, "Lib")
            .with_status(500)
            .create();

        let source = NuGetFeedSource::new(&server.url()).unwrap();
        let err = source.lookup(&id("Lib")).unwrap_err();

        assert_eq!(err.package(), "Lib");
        assert!(err.source().unwrap().to_string().contains("500"));
    }

    #[test]
    fn test_lookup_unknown_package() {
        let mut server = Server::new();
        let _mock = find_packages_mock(&mut server, "Ghost")
            .with_status(200)
            .with_body(r#"<feed xmlns="http://www.w3.org/2005/Atom"></feed>"#)
            .create();

        let source = NuGetFeedSource::new(&server.url()).unwrap();
        let err = source.lookup(&id("Ghost")).unwrap_err();
        assert!(err.source().unwrap().to_string().contains("not found on the feed"));
    }

    #[test]
    fn test_lookup_malformed_response() {
        let mut server = Server::new();
        let _mock = find_packages_mock(&mut server, "Lib")
            .with_status(200)
            .with_body("<feed><entry>")
            .create();

        let source = NuGetFeedSource::new(&server.url()).unwrap();
        let err = source.lookup(&id("Lib")).unwrap_err();
        assert!(err.source().unwrap().to_string().contains("Malformed feed response"));
    }

    #[test]
    fn test_lookup_follows_next_link_to_latest_version() {
        let mut server = Server::new();
        let next = format!(
            "{}/FindPackagesById?id='Big'&amp;$skiptoken='Big','2.0.0'",
            server.url()
        );
        let first = find_packages_mock(&mut server, "Big")
            .with_status(200)
            .with_body(feed_page(
                &[("1.0.0", "OldDep1:1.0", false), ("2.0.0", "OldDep2:1.0", false)],
                Some(&next),
            ))
            .expect(1)
            .create();
        let second = next_page_mock(&mut server, "Big", "'Big','2.0.0'")
            .with_status(200)
            .with_body(feed_page(
                &[("3.0.0", "NewDep:[2.0, )|Shared:1.0", true)],
                None,
            ))
            .expect(1)
            .create();

        let source = NuGetFeedSource::new(&server.url()).unwrap();
        let deps = source.lookup(&id("Big")).unwrap();

        assert_eq!(deps, vec![id("NewDep"), id("Shared")]);
        first.assert();
        second.assert();
    }

    #[test]
    fn test_lookup_stops_paging_once_latest_found() {
        let mut server = Server::new();
        let next = format!(
            "{}/FindPackagesById?id='Big'&amp;$skiptoken='Big','2.0.0'",
            server.url()
        );
        let _first = find_packages_mock(&mut server, "Big")
            .with_status(200)
            .with_body(feed_page(
                &[("1.0.0", "OldDep:1.0", false), ("2.0.0", "Current:1.0", true)],
                Some(&next),
            ))
            .create();
        let second = next_page_mock(&mut server, "Big", "'Big','2.0.0'")
            .expect(0)
            .create();

        let source = NuGetFeedSource::new(&server.url()).unwrap();
        assert_eq!(source.lookup(&id("Big")).unwrap(), vec![id("Current")]);
        second.assert();
    }

    #[test]
    fn test_lookup_unflagged_feed_uses_last_entry_of_last_page() {
        let mut server = Server::new();
        let next = format!(
            "{}/FindPackagesById?id='Big'&amp;$skiptoken='Big','2.0.0'",
            server.url()
        );
        let _first = find_packages_mock(&mut server, "Big")
            .with_status(200)
            .with_body(feed_page(
                &[("1.0.0", "A:1.0", false), ("2.0.0", "B:1.0", false)],
                Some(&next),
            ))
            .create();
        let _second = next_page_mock(&mut server, "Big", "'Big','2.0.0'")
            .with_status(200)
            .with_body(feed_page(&[("3.0.0", "C:1.0", false)], None))
            .create();

        let source = NuGetFeedSource::new(&server.url()).unwrap();
        assert_eq!(source.lookup(&id("Big")).unwrap(), vec![id("C")]);
    }

    #[test]
    fn test_lookup_rejects_next_link_off_feed() {
        let mut server = Server::new();
        let _first = find_packages_mock(&mut server, "Big")
            .with_status(200)
            .with_body(feed_page(
                &[("1.0.0", "A:1.0", false)],
                Some("https://elsewhere.example/FindPackagesById?id='Big'"),
            ))
            .create();

        let source = NuGetFeedSource::new(&server.url()).unwrap();
        let err = source.lookup(&id("Big")).unwrap_err();
        assert!(err
            .source()
            .unwrap()
            .to_string()
            .contains("leaves the configured feed"));
    }

    #[test]
    fn test_resolve_relative_next_link() {
        let source = NuGetFeedSource::new("https://example.org/api/v2").unwrap();
        assert_eq!(
            source
                .resolve_next_link("FindPackagesById?id='A'&$skiptoken='A','1.0.0'")
                .unwrap(),
            "https://example.org/api/v2/FindPackagesById?id='A'&$skiptoken='A','1.0.0'"
        );
        assert!(source
            .resolve_next_link("https://example.org/api/v2-evil/FindPackagesById")
            .is_err());
    }

    #[test]
    fn test_lookup_unsafe_identity_makes_no_request() {
        let mut server = Server::new();
        let mock = server.mock("GET", Matcher::Any).expect(0).create();

        let source = NuGetFeedSource::new(&server.url()).unwrap();
        assert!(source.lookup(&id("../etc")).is_err());
        mock.assert();
    }

    #[test]
    fn test_lookup_unreachable_feed() {
        // Port 9 (discard) on localhost is not expected to serve HTTP
        let source = NuGetFeedSource::new("http://127.0.0.1:9").unwrap();
        let err = source.lookup(&id("Lib")).unwrap_err();
        assert_eq!(err.package(), "Lib");
    }
}
