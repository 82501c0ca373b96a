//! Release download URL parsing

use repostats_core::config::consts::endpoints::GITHUB_HOST;
use url::Url;

/// Location of a release asset, parsed from a download URL path
///
/// Download URLs have the shape
/// `/{username}/{repository}/releases/download/{tag}/{filename}`. The first
/// three captures and the tag are single non-empty path segments; the
/// filename is the remainder of the path and may itself contain slashes.
/// Segments are kept as they appear in the path (percent-encoded).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetLocation {
    pub username: String,
    pub repository: String,
    pub tag: String,
    pub filename: String,
}

impl AssetLocation {
    /// Parses a URL path, returning `None` if it is not a release download path
    pub fn parse_path(path: &str) -> Option<Self> {
        let mut parts = path.strip_prefix('/')?.splitn(6, '/');

        let username = non_empty(parts.next())?;
        let repository = non_empty(parts.next())?;
        if parts.next()? != "releases" || parts.next()? != "download" {
            return None;
        }
        let tag = non_empty(parts.next())?;
        let filename = parts.next()?;

        Some(Self {
            username: username.to_string(),
            repository: repository.to_string(),
            tag: tag.to_string(),
            filename: filename.to_string(),
        })
    }

    /// Parses a download URL served by github.com
    ///
    /// Any other host yields `None`, whatever the path looks like.
    pub fn from_download_url(url: &Url) -> Option<Self> {
        if url.host_str() != Some(GITHUB_HOST) {
            return None;
        }
        Self::parse_path(url.path())
    }
}

fn non_empty(segment: Option<&str>) -> Option<&str> {
    segment.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(username: &str, repository: &str, tag: &str, filename: &str) -> AssetLocation {
        AssetLocation {
            username: username.to_string(),
            repository: repository.to_string(),
            tag: tag.to_string(),
            filename: filename.to_string(),
        }
    }

    #[test]
    fn test_parse_release_download_path() {
        let parsed = AssetLocation::parse_path("/alice/proj/releases/download/v1.0/pkg.zip");
        assert_eq!(parsed, Some(location("alice", "proj", "v1.0", "pkg.zip")));
    }

    #[test]
    fn test_filename_keeps_remaining_segments() {
        let parsed = AssetLocation::parse_path("/alice/proj/releases/download/v1.0/dist/pkg.zip");
        assert_eq!(parsed.unwrap().filename, "dist/pkg.zip");
    }

    #[test]
    fn test_empty_filename_is_accepted() {
        let parsed = AssetLocation::parse_path("/alice/proj/releases/download/v1.0/");
        assert_eq!(parsed.unwrap().filename, "");
    }

    #[test]
    fn test_non_release_paths_rejected() {
        let paths = [
            "",
            "/",
            "alice/proj/releases/download/v1.0/pkg.zip",
            "/alice/proj/archive/refs/tags/v1.0.zip",
            "/alice/proj/releases/tag/v1.0",
            "/alice/proj/releases/download/v1.0",
            "//proj/releases/download/v1.0/pkg.zip",
            "/alice//releases/download/v1.0/pkg.zip",
            "/alice/proj/releases/download//pkg.zip",
        ];

        for path in paths {
            assert!(
                AssetLocation::parse_path(path).is_none(),
                "Path should not parse: {:?}",
                path
            );
        }
    }

    #[test]
    fn test_from_download_url_requires_github_host() {
        let github =
            Url::parse("https://github.com/alice/proj/releases/download/v1.0/pkg.zip").unwrap();
        assert!(AssetLocation::from_download_url(&github).is_some());

        for other in [
            "https://gitlab.com/alice/proj/releases/download/v1.0/pkg.zip",
            "https://api.github.com/alice/proj/releases/download/v1.0/pkg.zip",
            "https://objects.githubusercontent.com/alice/proj/releases/download/v1.0/pkg.zip",
            "https://example.org/pkg.zip",
        ] {
            let url = Url::parse(other).unwrap();
            assert!(
                AssetLocation::from_download_url(&url).is_none(),
                "Host should be rejected: {}",
                other
            );
        }
    }

    #[test]
    fn test_host_comparison_is_case_insensitive() {
        let url =
            Url::parse("https://GitHub.com/alice/proj/releases/download/v1.0/pkg.zip").unwrap();
        assert!(AssetLocation::from_download_url(&url).is_some());
    }

    #[test]
    fn test_locations_compare_all_fields() {
        let base = location("alice", "proj", "v1.0", "pkg.zip");

        assert_eq!(base, location("alice", "proj", "v1.0", "pkg.zip"));
        assert_ne!(base, location("bob", "proj", "v1.0", "pkg.zip"));
        assert_ne!(base, location("alice", "other", "v1.0", "pkg.zip"));
        assert_ne!(base, location("alice", "proj", "v1.1", "pkg.zip"));
        assert_ne!(base, location("alice", "proj", "v1.0", "other.zip"));
    }
}
