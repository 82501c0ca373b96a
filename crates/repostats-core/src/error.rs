use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepostatsError {
    // Manifest errors
    #[error("MANIFEST_FETCH_FAILED: \"{url}\" returned status code {status}")]
    ManifestFetchFailed { url: String, status: u16 },

    #[error("MANIFEST_PACKAGES_URL_MISSING: no packages.json url found in \"{url}\"")]
    ManifestPackagesUrlMissing { url: String },

    #[error("MANIFEST_INVALID: failed to parse \"{url}\": {reason}")]
    ManifestInvalid { url: String, reason: String },

    // Config errors
    #[error("CONFIG_INVALID_VALUE: {field}: {reason}")]
    ConfigInvalidValue { field: String, reason: String },

    // Network errors
    #[error("NETWORK_FETCH_FAILED: {0}")]
    NetworkFetchFailed(String),
}

pub type Result<T> = std::result::Result<T, RepostatsError>;
