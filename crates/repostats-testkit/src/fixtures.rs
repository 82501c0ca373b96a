//! JSON fixture builders
//!
//! Produce the three documents repostats consumes: `repository.json`,
//! `packages.json` and a GitHub release-by-tag response.

use serde_json::{Value, json};

/// Builds a `https://github.com/.../releases/download/...` URL
pub fn github_download_url(username: &str, repository: &str, tag: &str, filename: &str) -> String {
    format!(
        "https://github.com/{}/{}/releases/download/{}/{}",
        username, repository, tag, filename
    )
}

/// Builds a `repository.json` body pointing at `packages_url`
pub fn repository_json(packages_url: &str) -> String {
    json!({
        "name": "Test repository",
        "maintainer": { "name": "repostats tests" },
        "packages": {
            "url": packages_url,
            "sha256": "0000000000000000000000000000000000000000000000000000000000000000",
            "update_time_utc": "2024-01-01 00:00:00",
            "update_timestamp": 1704067200
        }
    })
    .to_string()
}

/// Package entry for [`packages_json`]
#[derive(Debug, Clone)]
pub struct PackageFixture {
    name: String,
    identifier: String,
    versions: Vec<(String, Option<String>)>,
}

impl PackageFixture {
    pub fn new(name: &str, identifier: &str) -> Self {
        Self {
            name: name.to_string(),
            identifier: identifier.to_string(),
            versions: Vec::new(),
        }
    }

    /// Adds a version; `None` leaves `download_url` out of the JSON entirely
    pub fn version(mut self, version: &str, download_url: Option<&str>) -> Self {
        self.versions
            .push((version.to_string(), download_url.map(str::to_string)));
        self
    }

    fn to_value(&self) -> Value {
        let versions: Vec<Value> = self
            .versions
            .iter()
            .map(|(version, url)| {
                let mut entry = json!({ "version": version, "status": "stable" });
                if let Some(url) = url {
                    entry["download_url"] = json!(url);
                }
                entry
            })
            .collect();

        json!({
            "name": self.name,
            "identifier": self.identifier,
            "type": "plugin",
            "versions": versions,
        })
    }
}

/// Builds a `packages.json` body
pub fn packages_json(packages: &[PackageFixture]) -> String {
    let packages: Vec<Value> = packages.iter().map(PackageFixture::to_value).collect();
    json!({ "packages": packages }).to_string()
}

/// Asset entry for [`release_json`]
#[derive(Debug, Clone)]
pub struct AssetFixture {
    pub browser_download_url: String,
    pub download_count: u64,
}

impl AssetFixture {
    pub fn new(browser_download_url: impl Into<String>, download_count: u64) -> Self {
        Self {
            browser_download_url: browser_download_url.into(),
            download_count,
        }
    }
}

/// Builds a GitHub `releases/tags/{tag}` response body
pub fn release_json(tag: &str, assets: &[AssetFixture]) -> String {
    let assets: Vec<Value> = assets
        .iter()
        .map(|asset| {
            let name = asset
                .browser_download_url
                .rsplit('/')
                .next()
                .unwrap_or_default();
            json!({
                "name": name,
                "browser_download_url": asset.browser_download_url,
                "download_count": asset.download_count,
                "size": 1024,
            })
        })
        .collect();

    json!({ "tag_name": tag, "assets": assets }).to_string()
}
