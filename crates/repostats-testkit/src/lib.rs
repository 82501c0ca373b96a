//! Test utilities for repostats
//!
//! This crate provides shared testing utilities used across the repostats workspace:
//! JSON fixture builders for the documents the tool consumes, and mockito helpers
//! that serve them. Endpoints are always passed in explicitly, so tests never
//! touch the process environment.

pub mod fixtures;
pub mod mock;

pub use fixtures::{
    AssetFixture, PackageFixture, github_download_url, packages_json, release_json,
    repository_json,
};
pub use mock::{MockedRepository, mock_json, mock_release, mock_repository};
