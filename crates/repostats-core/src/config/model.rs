use std::fmt;
use std::time::Duration;

use url::Url;

use super::consts::{endpoints, http};
use crate::error::{RepostatsError, Result};

/// Settings for a single run
///
/// Built once at startup and handed to the HTTP client and the fetchers.
/// The token is optional: when present every request carries a bearer
/// `authorization` header, when absent requests go out unauthenticated.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    /// URL of the top-level repository manifest
    pub repository_url: String,
    /// Root of the GitHub REST API
    pub github_api_url: String,
    /// Optional GitHub credential
    pub github_token: Option<String>,
    /// User agent sent with every request
    pub user_agent: String,
    /// Transport timeout for every request
    pub timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            repository_url: endpoints::REPOSITORY_JSON.to_string(),
            github_api_url: endpoints::GITHUB_API.to_string(),
            github_token: None,
            user_agent: http::USER_AGENT.to_string(),
            timeout: Duration::from_secs(http::DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Settings {
    /// Sets the GitHub token, treating an empty or blank value as absent
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.github_token = token.filter(|t| !t.trim().is_empty());
        self
    }

    /// Parsed repository manifest URL
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalidValue` if the configured value is not a URL
    pub fn repository_url(&self) -> Result<Url> {
        parse_url("repository_url", &self.repository_url)
    }

    /// Parsed GitHub API root
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalidValue` if the configured value is not a URL
    pub fn github_api_url(&self) -> Result<Url> {
        parse_url("github_api_url", &self.github_api_url)
    }

    /// Checks that every configured URL parses
    pub fn validate(&self) -> Result<()> {
        self.repository_url()?;
        self.github_api_url()?;
        Ok(())
    }
}

fn parse_url(field: &str, value: &str) -> Result<Url> {
    Url::parse(value).map_err(|e| RepostatsError::ConfigInvalidValue {
        field: field.to_string(),
        reason: format!("'{}' is not a valid URL: {}", value, e),
    })
}

// The token never ends up in debug logs.
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("repository_url", &self.repository_url)
            .field("github_api_url", &self.github_api_url)
            .field(
                "github_token",
                &self.github_token.as_ref().map(|_| "<redacted>"),
            )
            .field("user_agent", &self.user_agent)
            .field("timeout", &self.timeout)
            .finish()
    }
}
