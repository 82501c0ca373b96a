//! Core types for repostats.
//!
//! This crate holds everything that does not touch the network:
//!
//! - [`config`]: run settings and their defaults
//! - [`package`]: manifest documents as served by a package repository
//! - [`collect`]: the download-URL collector that turns a package list into
//!   [`DownloadRecords`]
//! - [`error`]: the workspace-level error type

// Core modules
pub mod collect;
pub mod config;
pub mod error;
pub mod package;

// Re-export commonly used types
pub use collect::{DownloadRecord, DownloadRecords, collect_downloads};
pub use config::Settings;
pub use error::{RepostatsError, Result};
pub use package::{Package, PackageVersion, PackagesIndex, RepositoryIndex};
