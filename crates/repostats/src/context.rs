//! Global context for CLI commands

use anyhow::Result;
use repostats_core::Settings;
use repostats_remote::github::github_api_base_url;
use repostats_remote::{Client, DownloadCountResolver, build_client};
use tracing::debug;
use url::Url;

/// Parsed endpoints and the shared HTTP client for one run
pub struct Context {
    pub client: Client,
    pub repository_url: Url,
    resolver: DownloadCountResolver,
}

impl Context {
    /// Validate settings and build the HTTP client
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A configured URL does not parse
    /// - The token is not a valid header value
    /// - The HTTP client cannot be built
    pub fn new(settings: &Settings) -> Result<Self> {
        debug!("Settings: {:?}", settings);
        settings.validate()?;

        let repository_url = settings.repository_url()?;
        let github_api_url = github_api_base_url(&settings.github_api_url)?;
        let client = build_client(settings)?;
        let resolver = DownloadCountResolver::new(client.clone(), github_api_url)
            .with_token(settings.github_token.as_deref())?;

        Ok(Self {
            client,
            repository_url,
            resolver,
        })
    }

    /// Release lookups, authenticated when a token is configured
    pub fn resolver(&self) -> &DownloadCountResolver {
        &self.resolver
    }
}
