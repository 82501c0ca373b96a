//! GitHub release metadata and asset matching

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use url::Url;

use super::asset::AssetLocation;

/// GitHub Release metadata from API
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Release {
    /// List of downloadable assets
    #[serde(default)]
    pub assets: Vec<Asset>,
}

/// GitHub Release asset (downloadable file)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Asset {
    /// Direct download URL
    #[serde(default)]
    pub browser_download_url: Option<String>,
    /// Number of times the asset was downloaded
    #[serde(default)]
    pub download_count: Option<u64>,
}

impl Asset {
    /// Location parsed from `browser_download_url`
    ///
    /// Only the path is inspected, the host is not.
    pub fn location(&self) -> Option<AssetLocation> {
        let url = Url::parse(self.browser_download_url.as_deref()?).ok()?;
        AssetLocation::parse_path(url.path())
    }
}

impl Release {
    /// Download count of the first asset located at `target`
    ///
    /// Scanning stops at the first asset whose location equals `target`; if
    /// that asset carries no counter the result is `None`.
    pub fn download_count_for(&self, target: &AssetLocation) -> Option<u64> {
        self.assets
            .iter()
            .find(|asset| asset.location().as_ref() == Some(target))
            .and_then(|asset| asset.download_count)
    }
}

/// Fetches release metadata from a release-by-tag endpoint
///
/// `auth` is sent as the `authorization` header when present.
///
/// # Errors
///
/// Returns error if the request fails, the status is 400 or above, or the
/// body is not release JSON
pub fn fetch_release(
    client: &Client,
    url: &Url,
    auth: Option<&HeaderValue>,
) -> Result<Release, ReleaseError> {
    debug!("Download \"{}\"", url);

    let mut request = client.get(url.as_str());
    if let Some(auth) = auth {
        request = request.header(AUTHORIZATION, auth.clone());
    }

    let response = request
        .send()
        .map_err(|source| ReleaseError::Request {
            url: url.clone(),
            source,
        })?;

    let status = response.status().as_u16();
    if status >= 400 {
        return Err(ReleaseError::Status {
            url: url.clone(),
            status,
        });
    }

    response.json().map_err(|source| ReleaseError::InvalidBody {
        url: url.clone(),
        source,
    })
}

/// Release lookup errors
#[derive(Debug, Error)]
pub enum ReleaseError {
    /// API answered with an error status (missing release, rate limit, ...)
    #[error("\"{url}\" returned status code {status}")]
    Status {
        /// URL that failed
        url: Url,
        /// HTTP status code
        status: u16,
    },

    /// Request could not be sent or the response not read
    #[error("Request to \"{url}\" failed: {source}")]
    Request {
        /// URL that failed
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    /// Body is not release JSON
    #[error("\"{url}\" returned invalid release data: {source}")]
    InvalidBody {
        /// URL that failed
        url: Url,
        #[source]
        source: reqwest::Error,
    },
}
