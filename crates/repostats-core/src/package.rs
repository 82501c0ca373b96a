//! Package repository manifest documents
//!
//! A repository is described by two documents: the top-level
//! `repository.json`, which points at the package list, and `packages.json`,
//! which lists every package with its released versions.

use serde::{Deserialize, Serialize};

/// Top-level repository manifest (`repository.json`)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RepositoryIndex {
    /// Reference to the package list
    #[serde(default)]
    pub packages: Option<PackagesRef>,
}

/// Pointer from the repository manifest to the package list
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PackagesRef {
    /// Location of `packages.json`
    #[serde(default)]
    pub url: Option<String>,
}

impl RepositoryIndex {
    /// URL of the package list, if the manifest names a non-empty one
    pub fn packages_url(&self) -> Option<&str> {
        self.packages
            .as_ref()
            .and_then(|p| p.url.as_deref())
            .filter(|url| !url.is_empty())
    }
}

/// Package list (`packages.json`)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PackagesIndex {
    #[serde(default)]
    pub packages: Vec<Package>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Package {
    #[serde(default)]
    pub name: String,
    /// Reverse-domain package identifier (e.g. "com.github.alice.proj")
    #[serde(default)]
    pub identifier: String,
    #[serde(default)]
    pub versions: Vec<PackageVersion>,
}

/// A single released version of a package
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PackageVersion {
    #[serde(default)]
    pub version: String,
    /// Archive location; absent for versions that cannot be downloaded
    #[serde(default)]
    pub download_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_index_packages_url() {
        let json = r#"{
            "name": "KiCad official repository",
            "packages": {
                "url": "https://repository.kicad.org/packages.json",
                "sha256": "abc123",
                "update_time_utc": "2024-01-01 00:00:00"
            }
        }"#;

        let index: RepositoryIndex = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(
            index.packages_url(),
            Some("https://repository.kicad.org/packages.json")
        );
    }

    #[test]
    fn test_repository_index_without_packages() {
        let index: RepositoryIndex = serde_json::from_str("{}").expect("Failed to deserialize");
        assert!(index.packages_url().is_none());

        let index: RepositoryIndex =
            serde_json::from_str(r#"{"packages": {}}"#).expect("Failed to deserialize");
        assert!(index.packages_url().is_none());
    }

    #[test]
    fn test_repository_index_empty_packages_url() {
        let index: RepositoryIndex =
            serde_json::from_str(r#"{"packages": {"url": ""}}"#).expect("Failed to deserialize");
        assert!(index.packages_url().is_none());
    }

    #[test]
    fn test_packages_index_deserialization() {
        let json = r#"{
            "packages": [
                {
                    "name": "Proj",
                    "identifier": "com.github.alice.proj",
                    "type": "plugin",
                    "versions": [
                        {
                            "version": "1.0",
                            "status": "stable",
                            "download_url": "https://github.com/alice/proj/releases/download/v1.0/pkg.zip"
                        },
                        { "version": "0.9" }
                    ]
                }
            ]
        }"#;

        let index: PackagesIndex = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(index.packages.len(), 1);

        let package = &index.packages[0];
        assert_eq!(package.identifier, "com.github.alice.proj");
        assert_eq!(package.versions.len(), 2);
        assert!(package.versions[0].download_url.is_some());
        assert!(package.versions[1].download_url.is_none());
    }

    #[test]
    fn test_packages_index_tolerates_missing_fields() {
        let index: PackagesIndex =
            serde_json::from_str(r#"{"packages": [{}]}"#).expect("Failed to deserialize");

        assert_eq!(index.packages[0].name, "");
        assert!(index.packages[0].versions.is_empty());
    }
}
