//! `repostats list` - show collected download URLs without querying GitHub

use anyhow::Result;
use repostats_core::{RepostatsError, collect_downloads};
use repostats_remote::fetch_packages;
use serde::Serialize;

use crate::context::Context;
use crate::output;

#[derive(Serialize)]
struct ListEntry<'a> {
    url: &'a str,
    identifier: &'a str,
    version: &'a str,
}

pub fn run(ctx: &Context, json: bool) -> Result<()> {
    let index = fetch_packages(&ctx.client, &ctx.repository_url).map_err(RepostatsError::from)?;
    let records = collect_downloads(&index);

    let entries: Vec<ListEntry> = records
        .iter()
        .map(|(url, record)| ListEntry {
            url,
            identifier: &record.identifier,
            version: &record.version,
        })
        .collect();

    if json {
        output::print_json(&entries)?;
        return Ok(());
    }

    for entry in &entries {
        output::print_line(&format!(
            "{}\t{}\t{}",
            entry.identifier, entry.version, entry.url
        ))?;
    }

    Ok(())
}
