//! Log output setup
//!
//! Installed once from `main` before any command runs. Lines go to stderr as
//! `2024-01-01 12:00:00  INFO message`; stdout stays free for command output.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::ChronoLocal;

/// Timestamp format of every log line
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Crates whose logs follow the verbosity flag; everything else stays at warn
const OWN_CRATES: [&str; 3] = ["repostats", "repostats_core", "repostats_remote"];

/// Default filter directives for the given verbosity
pub fn default_directives(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    let mut directives = vec!["warn".to_string()];
    directives.extend(OWN_CRATES.iter().map(|krate| format!("{}={}", krate, level)));
    directives.join(",")
}

/// Initialize logging
///
/// `RUST_LOG` takes precedence over the verbosity flag when set.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init()
        .ok(); // Ignore error if already initialized
}
