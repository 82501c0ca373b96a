//! Network side of repostats.
//!
//! The crate is organized into four modules:
//!
//! - [`client`]: the shared blocking HTTP client
//! - [`manifest`]: repository manifest fetching
//! - [`github`]: release download URL parsing and release lookups
//! - [`resolve`]: per-URL download count resolution
//!
//! # Example
//!
//! ```no_run
//! use repostats_core::{Settings, collect_downloads};
//! use repostats_remote::{DownloadCountResolver, build_client, fetch_packages};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = Settings::default();
//! let client = build_client(&settings)?;
//!
//! let index = fetch_packages(&client, &settings.repository_url()?)?;
//! let records = collect_downloads(&index);
//!
//! let resolver = DownloadCountResolver::new(client, settings.github_api_url()?)
//!     .with_token(settings.github_token.as_deref())?;
//! for (url, record) in records.iter() {
//!     println!("{} {}: {:?}", record.identifier, record.version, resolver.download_count(url));
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod github;
pub mod manifest;
pub mod resolve;

pub use client::{Client, ClientError, bearer_header, build_client};
pub use manifest::{ManifestError, fetch_packages, fetch_repository};
pub use resolve::DownloadCountResolver;
