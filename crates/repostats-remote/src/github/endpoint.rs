//! URL construction helpers for the GitHub release API

use thiserror::Error;
use url::Url;

use super::asset::AssetLocation;

/// Parses a GitHub API root
///
/// # Arguments
///
/// * `value` - API root, e.g. "https://api.github.com"
///
/// # Errors
///
/// Returns error if the value does not parse or cannot carry a path
pub fn github_api_base_url(value: &str) -> Result<Url, UrlError> {
    let url = Url::parse(value)?;
    if url.cannot_be_a_base() {
        return Err(UrlError::CannotBeABase { url });
    }
    Ok(url)
}

/// Builds the release-by-tag endpoint for an asset
///
/// Produces `{api_base}/repos/{username}/{repository}/releases/tags/{tag}`,
/// keeping any path prefix of `api_base` (GitHub Enterprise roots such as
/// `https://ghe.example.com/api/v3`). Captured segments are inserted as they
/// appeared in the download URL, so percent-encoding is not applied twice.
///
/// # Errors
///
/// Returns error if `api_base` cannot be a base
pub fn release_tag_url(api_base: &Url, location: &AssetLocation) -> Result<Url, UrlError> {
    if api_base.cannot_be_a_base() {
        return Err(UrlError::CannotBeABase {
            url: api_base.clone(),
        });
    }

    let mut url = api_base.clone();
    let prefix = api_base.path().trim_end_matches('/');
    url.set_path(&format!(
        "{}/repos/{}/{}/releases/tags/{}",
        prefix, location.username, location.repository, location.tag
    ));
    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}

/// URL construction errors
#[derive(Debug, Error)]
pub enum UrlError {
    /// URL cannot be used as a base
    #[error("URL cannot be a base: {url}")]
    CannotBeABase {
        /// The problematic URL
        url: Url,
    },

    /// Invalid URL parse error
    #[error("Invalid URL: {0}")]
    ParseError(#[from] url::ParseError),
}
