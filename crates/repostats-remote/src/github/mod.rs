//! GitHub release download statistics
//!
//! This module provides the pieces needed to look up how often a release
//! asset was downloaded:
//! - Typed parsing of release download URLs
//! - Release-by-tag endpoint construction
//! - Release metadata fetching and asset matching

pub mod asset;
pub mod endpoint;
pub mod release;

// Re-exports for convenient access
pub use asset::AssetLocation;
pub use release::{Asset, Release, ReleaseError, fetch_release};
pub use endpoint::{UrlError, github_api_base_url, release_tag_url};
