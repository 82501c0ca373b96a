//! `repostats report` - download counts for every package in the repository

use anyhow::Result;
use repostats_core::{RepostatsError, collect_downloads};
use repostats_remote::fetch_packages;
use serde::Serialize;
use tracing::info;

use crate::context::Context;
use crate::output;

#[derive(Serialize)]
struct ReportRow<'a> {
    url: &'a str,
    identifier: &'a str,
    version: &'a str,
    download_count: Option<u64>,
}

/// Fetch, collect and resolve, logging one line per download URL
///
/// # Errors
///
/// Fails only when the manifests cannot be fetched; per-URL lookups never
/// fail the command
pub fn run(ctx: &Context, json: bool) -> Result<()> {
    let index = fetch_packages(&ctx.client, &ctx.repository_url).map_err(RepostatsError::from)?;
    let records = collect_downloads(&index);
    let resolver = ctx.resolver();

    let mut rows = Vec::with_capacity(records.len());
    for (url, record) in records.iter() {
        let download_count = resolver.download_count(url);
        log_result(url, download_count);

        rows.push(ReportRow {
            url,
            identifier: &record.identifier,
            version: &record.version,
            download_count,
        });
    }

    let resolved = rows.iter().filter(|r| r.download_count.is_some()).count();
    info!("Resolved {} of {} download URLs", resolved, rows.len());

    if json {
        output::print_json(&rows)?;
    }

    Ok(())
}

pub fn log_result(url: &str, download_count: Option<u64>) {
    match download_count {
        Some(n) => info!("Package \"{}\" was downloaded {} times", url, n),
        None => info!("Package \"{}\" has no download statistics available", url),
    }
}
