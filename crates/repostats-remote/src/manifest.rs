//! Repository manifest fetching
//!
//! Fetches `repository.json`, follows its `packages.url` and fetches the
//! package list. Any failure here is fatal for a run: there is nothing to
//! report without the package list.

use reqwest::blocking::Client;
use repostats_core::{PackagesIndex, RepositoryIndex, RepostatsError};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Fetches the top-level repository manifest
///
/// # Errors
///
/// Returns error if the request fails, the status is 400 or above, or the
/// body is not a repository manifest
pub fn fetch_repository(
    client: &Client,
    repository_url: &Url,
) -> Result<RepositoryIndex, ManifestError> {
    get_json(client, repository_url)
}

/// Fetches the package list referenced by the repository manifest
///
/// `packages.url` may be absolute or relative to `repository_url`.
///
/// # Errors
///
/// Returns error if either fetch fails or the repository manifest names no
/// package list
pub fn fetch_packages(
    client: &Client,
    repository_url: &Url,
) -> Result<PackagesIndex, ManifestError> {
    let repository = fetch_repository(client, repository_url)?;

    let packages_url = repository
        .packages_url()
        .ok_or_else(|| ManifestError::MissingPackagesUrl {
            url: repository_url.clone(),
        })?;
    let packages_url = repository_url
        .join(packages_url)
        .map_err(|source| ManifestError::InvalidPackagesUrl {
            value: packages_url.to_string(),
            source,
        })?;

    get_json(client, &packages_url)
}

fn get_json<T: DeserializeOwned>(client: &Client, url: &Url) -> Result<T, ManifestError> {
    debug!("Download \"{}\"", url);

    let response = client
        .get(url.as_str())
        .send()
        .map_err(|source| ManifestError::Request {
            url: url.clone(),
            source,
        })?;

    let status = response.status().as_u16();
    if status >= 400 {
        return Err(ManifestError::Status {
            url: url.clone(),
            status,
        });
    }

    response.json().map_err(|source| ManifestError::InvalidBody {
        url: url.clone(),
        source,
    })
}

/// Manifest fetch errors
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Server answered with an error status
    #[error("\"{url}\" returned status code {status}")]
    Status {
        /// URL that failed
        url: Url,
        /// HTTP status code
        status: u16,
    },

    /// Repository manifest has no `packages.url`
    #[error("No packages.json url found in \"{url}\"")]
    MissingPackagesUrl {
        /// Repository manifest URL
        url: Url,
    },

    /// `packages.url` is not a URL
    #[error("Invalid packages.json url \"{value}\": {source}")]
    InvalidPackagesUrl {
        /// Value found in the manifest
        value: String,
        #[source]
        source: url::ParseError,
    },

    /// Request could not be sent or the response not read
    #[error("Request to \"{url}\" failed: {source}")]
    Request {
        /// URL that failed
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    /// Body is not the expected JSON document
    #[error("\"{url}\" returned an invalid document: {source}")]
    InvalidBody {
        /// URL that failed
        url: Url,
        #[source]
        source: reqwest::Error,
    },
}

impl From<ManifestError> for RepostatsError {
    fn from(err: ManifestError) -> Self {
        match err {
            ManifestError::Status { url, status } => RepostatsError::ManifestFetchFailed {
                url: url.to_string(),
                status,
            },
            ManifestError::MissingPackagesUrl { url } => {
                RepostatsError::ManifestPackagesUrlMissing { url: url.to_string() }
            }
            ManifestError::InvalidPackagesUrl { value, source } => {
                RepostatsError::ManifestInvalid {
                    url: value,
                    reason: source.to_string(),
                }
            }
            ManifestError::InvalidBody { url, source } => RepostatsError::ManifestInvalid {
                url: url.to_string(),
                reason: source.to_string(),
            },
            err @ ManifestError::Request { .. } => {
                RepostatsError::NetworkFetchFailed(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::build_client;
    use mockito::{Matcher, Server};
    use repostats_core::Settings;
    use repostats_testkit::fixtures::{PackageFixture, packages_json, repository_json};
    use repostats_testkit::mock::{PACKAGES_PATH, REPOSITORY_PATH, mock_json, mock_repository};

    fn client() -> Client {
        build_client(&Settings::default()).expect("Failed to build client")
    }

    #[test]
    fn test_fetch_packages_follows_packages_url() {
        let mut server = Server::new();
        let body = packages_json(&[PackageFixture::new("Proj", "com.github.alice.proj").version(
            "1.0",
            Some("https://github.com/alice/proj/releases/download/v1.0/pkg.zip"),
        )]);
        let mocked = mock_repository(&mut server, &body);

        let url = Url::parse(&mocked.repository_url).unwrap();
        let index = fetch_packages(&client(), &url).expect("Fetch should succeed");

        mocked.repository.assert();
        mocked.packages.assert();
        assert_eq!(index.packages.len(), 1);
        assert_eq!(index.packages[0].identifier, "com.github.alice.proj");
    }

    #[test]
    fn test_fetch_packages_resolves_relative_packages_url() {
        let mut server = Server::new();
        let repo = mock_json(&mut server, REPOSITORY_PATH, 200, &repository_json("packages.json"));
        let packages = mock_json(&mut server, PACKAGES_PATH, 200, &packages_json(&[]));

        let url = Url::parse(&format!("{}{}", server.url(), REPOSITORY_PATH)).unwrap();
        let index = fetch_packages(&client(), &url).expect("Fetch should succeed");

        repo.assert();
        packages.assert();
        assert!(index.packages.is_empty());
    }

    #[test]
    fn test_manifest_fetches_never_send_token() {
        let mut server = Server::new();
        let packages_url = format!("{}{}", server.url(), PACKAGES_PATH);
        let repo = server
            .mock("GET", REPOSITORY_PATH)
            .match_header("authorization", Matcher::Missing)
            .with_status(200)
            .with_body(repository_json(&packages_url))
            .create();
        let packages = server
            .mock("GET", PACKAGES_PATH)
            .match_header("authorization", Matcher::Missing)
            .with_status(200)
            .with_body(packages_json(&[]))
            .create();

        let settings = Settings::default().with_token(Some("ghp_secret".to_string()));
        let client = build_client(&settings).expect("Failed to build client");
        let url = Url::parse(&format!("{}{}", server.url(), REPOSITORY_PATH)).unwrap();
        fetch_packages(&client, &url).expect("Fetch should succeed");

        repo.assert();
        packages.assert();
    }

    #[test]
    fn test_repository_not_found_is_status_error() {
        let mut server = Server::new();
        let mock = mock_json(&mut server, REPOSITORY_PATH, 404, "{}");

        let url = Url::parse(&format!("{}{}", server.url(), REPOSITORY_PATH)).unwrap();
        let result = fetch_packages(&client(), &url);

        mock.assert();
        match result.unwrap_err() {
            ManifestError::Status { url: failed, status } => {
                assert_eq!(status, 404);
                assert_eq!(failed, url);
            }
            e => panic!("Expected Status error, got: {:?}", e),
        }
    }

    #[test]
    fn test_packages_server_error_is_status_error() {
        let mut server = Server::new();
        let packages_url = format!("{}{}", server.url(), PACKAGES_PATH);
        let _repo = mock_json(&mut server, REPOSITORY_PATH, 200, &repository_json(&packages_url));
        let _packages = mock_json(&mut server, PACKAGES_PATH, 500, "");

        let url = Url::parse(&format!("{}{}", server.url(), REPOSITORY_PATH)).unwrap();
        let err = fetch_packages(&client(), &url).unwrap_err();

        assert!(matches!(err, ManifestError::Status { status: 500, .. }));
        assert!(err.to_string().contains("packages.json"));
    }

    #[test]
    fn test_missing_packages_url_is_error() {
        let mut server = Server::new();
        let mock = mock_json(&mut server, REPOSITORY_PATH, 200, r#"{"name": "empty"}"#);

        let url = Url::parse(&format!("{}{}", server.url(), REPOSITORY_PATH)).unwrap();
        let result = fetch_packages(&client(), &url);

        mock.assert();
        assert!(matches!(
            result.unwrap_err(),
            ManifestError::MissingPackagesUrl { .. }
        ));
    }

    #[test]
    fn test_invalid_json_is_error() {
        let mut server = Server::new();
        let _mock = mock_json(&mut server, REPOSITORY_PATH, 200, "not json");

        let url = Url::parse(&format!("{}{}", server.url(), REPOSITORY_PATH)).unwrap();
        let result = fetch_repository(&client(), &url);

        assert!(matches!(result.unwrap_err(), ManifestError::InvalidBody { .. }));
    }

    #[test]
    fn test_status_error_maps_to_workspace_error() {
        let err = ManifestError::Status {
            url: Url::parse("https://repository.kicad.org/repository.json").unwrap(),
            status: 404,
        };

        let err: RepostatsError = err.into();
        assert!(matches!(
            err,
            RepostatsError::ManifestFetchFailed { status: 404, .. }
        ));
    }
}
