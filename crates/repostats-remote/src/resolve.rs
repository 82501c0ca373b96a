//! Download count resolution for a single download URL
//!
//! ```text
//! download_count(url)
//!     ↓
//! 1. Parse URL, require host github.com     → else None
//!     ↓
//! 2. Parse path into AssetLocation          → else None
//!     ↓
//! 3. GET {api}/repos/{u}/{r}/releases/tags/{tag}, bearer token if any
//!     → status >= 400 / transport error     → log, None
//!     ↓
//! 4. First asset with the same location     → its download_count
//! ```
//!
//! Failures here never abort a run; they only mean there is no data for
//! the URL in question.

use reqwest::blocking::Client;
use reqwest::header::HeaderValue;
use tracing::error;
use url::Url;

use crate::client::{ClientError, bearer_header};
use crate::github::{AssetLocation, ReleaseError, fetch_release, release_tag_url};

/// Resolves download counts through the GitHub release API
#[derive(Debug, Clone)]
pub struct DownloadCountResolver {
    client: Client,
    api_base: Url,
    auth: Option<HeaderValue>,
}

impl DownloadCountResolver {
    /// Unauthenticated resolver
    ///
    /// # Arguments
    ///
    /// * `client` - Shared client
    /// * `api_base` - GitHub API root
    pub fn new(client: Client, api_base: Url) -> Self {
        Self {
            client,
            api_base,
            auth: None,
        }
    }

    /// Sends `token` as a bearer credential with every release lookup
    ///
    /// `None` leaves the resolver unauthenticated.
    ///
    /// # Errors
    ///
    /// Returns `InvalidToken` if the token is not a valid header value
    pub fn with_token(mut self, token: Option<&str>) -> Result<Self, ClientError> {
        self.auth = token.map(bearer_header).transpose()?;
        Ok(self)
    }

    /// Number of times the asset behind `download_url` was downloaded
    ///
    /// Returns `None` when the URL is not a github.com release download, the
    /// release lookup fails, or no asset of the release matches.
    pub fn download_count(&self, download_url: &str) -> Option<u64> {
        let url = Url::parse(download_url).ok()?;
        let location = AssetLocation::from_download_url(&url)?;

        let api_url = match release_tag_url(&self.api_base, &location) {
            Ok(api_url) => api_url,
            Err(e) => {
                error!("Cannot build release url for \"{}\": {}", download_url, e);
                return None;
            }
        };

        match fetch_release(&self.client, &api_url, self.auth.as_ref()) {
            Ok(release) => release.download_count_for(&location),
            Err(e @ ReleaseError::Status { .. }) => {
                error!("{}", e);
                None
            }
            Err(e) => {
                error!("Release lookup for \"{}\" failed: {}", download_url, e);
                None
            }
        }
    }
}
