//! CLI command structure using clap

use std::time::Duration;

use clap::{Parser, Subcommand};
use repostats_core::Settings;
use repostats_core::config::consts::{endpoints, env, http};

#[derive(Parser)]
#[command(name = "repostats")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Repository manifest to start from
    #[arg(long, global = true, env = env::REPOSITORY_URL)]
    #[arg(default_value = endpoints::REPOSITORY_JSON)]
    pub repository_url: String,

    /// GitHub API root used for release lookups
    #[arg(long, global = true, env = env::GITHUB_API_URL, default_value = endpoints::GITHUB_API)]
    pub github_api_url: String,

    /// GitHub token for authenticated API calls
    #[arg(long, global = true, env = env::GITHUB_TOKEN, hide_env_values = true)]
    pub github_token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = http::DEFAULT_TIMEOUT_SECS)]
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,
}

impl Cli {
    /// Run settings from flags and environment
    pub fn settings(&self) -> Settings {
        Settings {
            repository_url: self.repository_url.clone(),
            github_api_url: self.github_api_url.clone(),
            timeout: Duration::from_secs(self.timeout),
            ..Settings::default()
        }
        .with_token(self.github_token.clone())
    }
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    /// Report download counts for every package (default)
    Report {
        /// Also print the results as JSON on stdout
        #[arg(long)]
        json: bool,
    },

    /// List download URLs without querying GitHub
    List {
        #[arg(long)]
        json: bool,
    },

    /// Resolve the download count of a single URL
    Count {
        /// Release download URL (e.g. https://github.com/{user}/{repo}/releases/download/{tag}/{file})
        url: String,
    },
}
