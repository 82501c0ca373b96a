//! HTTP client construction
//!
//! One client is built per run and reused for every request. It carries the
//! identifying `User-Agent` and `Accept: application/json`. The GitHub token
//! is not part of the client: manifest hosts never see it, and release
//! lookups attach it per request through [`bearer_header`].

pub use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use repostats_core::config::consts::http::ACCEPT_JSON;
use repostats_core::Settings;
use thiserror::Error;

/// Builds the shared HTTP client for a run
///
/// # Arguments
///
/// * `settings` - Run settings (user agent, timeout)
///
/// # Errors
///
/// Returns error if the client cannot be constructed
pub fn build_client(settings: &Settings) -> Result<Client, ClientError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_JSON));

    Client::builder()
        .user_agent(settings.user_agent.as_str())
        .default_headers(headers)
        .timeout(settings.timeout)
        .build()
        .map_err(ClientError::Build)
}

/// `authorization: Bearer <token>` value, marked sensitive
///
/// # Errors
///
/// Returns `InvalidToken` if the token contains characters not allowed in a
/// header
pub fn bearer_header(token: &str) -> Result<HeaderValue, ClientError> {
    let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
        .map_err(|_| ClientError::InvalidToken)?;
    value.set_sensitive(true);
    Ok(value)
}

/// HTTP client construction errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// Token contains characters not allowed in a header
    #[error("GitHub token is not a valid header value")]
    InvalidToken,

    /// reqwest refused the configuration
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}
