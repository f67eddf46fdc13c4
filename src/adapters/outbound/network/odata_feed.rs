//! Parsing of NuGet v2 (OData/Atom) package feed responses.
//!
//! A `FindPackagesById()` response is an Atom feed with one `<entry>` per
//! published version. Each entry carries an `<m:properties>` block whose
//! `<d:Dependencies>` field packs every dependency as
//! `Id:VersionRange:TargetFramework`, separated by `|`.

use crate::dependency_resolution::domain::PackageId;
use crate::shared::Result;
use anyhow::Context;
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Debug, Deserialize)]
struct Feed {
    // `self` comes before the entries, `next` after them
    #[serde(rename = "link", default)]
    links: Vec<Link>,
    #[serde(rename = "entry", default)]
    entries: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
struct Link {
    #[serde(rename = "@rel", default)]
    rel: String,
    #[serde(rename = "@href", default)]
    href: String,
}

#[derive(Debug, Deserialize)]
struct Entry {
    #[serde(rename = "properties", alias = "m:properties", default)]
    properties: Properties,
}

#[derive(Debug, Default, Deserialize)]
struct Properties {
    #[serde(rename = "Version", alias = "d:Version", default)]
    version: TextValue,
    #[serde(rename = "IsLatestVersion", alias = "d:IsLatestVersion", default)]
    is_latest_version: TextValue,
    #[serde(rename = "Dependencies", alias = "d:Dependencies", default)]
    dependencies: TextValue,
}

/// Element text, tolerating OData attributes such as `m:type` or `m:null`
#[derive(Debug, Default, Deserialize)]
struct TextValue {
    #[serde(rename = "$text", default)]
    value: Option<String>,
}

impl TextValue {
    fn as_str(&self) -> &str {
        self.value.as_deref().map(str::trim).unwrap_or_default()
    }
}

/// One version entry of a feed page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    pub version: String,
    pub dependencies: String,
    pub is_latest: bool,
}

/// One page of a `FindPackagesById()` response
///
/// Feeds page long version lists; `next_link` is the `rel="next"` href when
/// more entries follow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedPage {
    pub entries: Vec<FeedEntry>,
    pub next_link: Option<String>,
}

impl FeedPage {
    /// The entry flagged `IsLatestVersion`, if this page holds it
    pub fn latest(&self) -> Option<&FeedEntry> {
        self.entries.iter().find(|entry| entry.is_latest)
    }
}

/// Parses one feed page.
///
/// # Errors
/// Returns an error if the body is not a well-formed feed document.
pub fn parse_page(xml: &str) -> Result<FeedPage> {
    let feed: Feed = quick_xml::de::from_str(xml).context("Malformed feed response")?;

    let next_link = feed
        .links
        .into_iter()
        .find(|link| link.rel == "next" && !link.href.trim().is_empty())
        .map(|link| link.href.trim().to_string());

    let entries = feed
        .entries
        .into_iter()
        .map(|entry| FeedEntry {
            version: entry.properties.version.as_str().to_string(),
            dependencies: entry.properties.dependencies.as_str().to_string(),
            is_latest: entry
                .properties
                .is_latest_version
                .as_str()
                .eq_ignore_ascii_case("true"),
        })
        .collect();

    Ok(FeedPage { entries, next_link })
}

/// Splits a `Dependencies` field into package identities.
///
/// Version ranges and target frameworks are discarded. `package` itself and
/// repeated identities (common when several frameworks list the same
/// dependency) are dropped, keeping the first occurrence.
///
/// # Errors
/// Returns an error if an identity in the field is not a valid `PackageId`.
pub fn split_dependency_field(field: &str, package: &PackageId) -> Result<Vec<PackageId>> {
    let mut seen = HashSet::new();
    let mut dependencies = Vec::new();

    for item in field.split('|') {
        let id = item.split(':').next().map(str::trim).unwrap_or_default();
        if id.is_empty() || id == package.as_str() {
            continue;
        }
        if seen.insert(id) {
            dependencies.push(
                PackageId::new(id)
                    .with_context(|| format!("Invalid dependency entry {:?}", item))?,
            );
        }
    }

    Ok(dependencies)
}
