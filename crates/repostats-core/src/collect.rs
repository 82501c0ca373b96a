//! Download-URL collection
//!
//! Walks a package list and records, for every downloadable version, which
//! package and version a download URL belongs to.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::package::PackagesIndex;

/// Package identity behind a download URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadRecord {
    pub identifier: String,
    pub version: String,
}

/// Download URL to package mapping
///
/// Iterates in the order URLs were first seen. Inserting an already known URL
/// replaces its record without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadRecords {
    entries: IndexMap<String, DownloadRecord>,
}

impl DownloadRecords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `url`, returning the record it replaced
    pub fn insert(
        &mut self,
        url: impl Into<String>,
        record: DownloadRecord,
    ) -> Option<DownloadRecord> {
        self.entries.insert(url.into(), record)
    }

    pub fn get(&self, url: &str) -> Option<&DownloadRecord> {
        self.entries.get(url)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DownloadRecord)> {
        self.entries.iter().map(|(url, record)| (url.as_str(), record))
    }
}

/// Builds the download URL mapping for every package in `index`
///
/// Versions without a download URL (or with an empty one) are skipped. When
/// several versions share a URL, the last one processed wins.
pub fn collect_downloads(index: &PackagesIndex) -> DownloadRecords {
    let mut records = DownloadRecords::new();

    for package in &index.packages {
        debug!("Analyze \"{}\" - \"{}\"", package.name, package.identifier);

        for release in &package.versions {
            let Some(url) = release.download_url.as_deref().filter(|u| !u.is_empty()) else {
                continue;
            };

            debug!(
                "Version \"{}\" can be downloaded from \"{}\"",
                release.version, url
            );
            records.insert(
                url,
                DownloadRecord {
                    identifier: package.identifier.clone(),
                    version: release.version.clone(),
                },
            );
        }
    }

    records
}
