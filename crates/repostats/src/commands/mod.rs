//! CLI command implementations

pub mod count;
pub mod list;
pub mod report;
