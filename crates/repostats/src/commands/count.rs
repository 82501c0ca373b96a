//! `repostats count` - resolve a single download URL

use anyhow::Result;

use crate::commands::report::log_result;
use crate::context::Context;
use crate::output;

pub fn run(ctx: &Context, url: &str) -> Result<()> {
    let count = ctx.resolver().download_count(url);
    log_result(url, count);

    match count {
        Some(n) => output::print_line(&n.to_string())?,
        None => output::print_line("no data")?,
    }

    Ok(())
}
