use std::future::Future;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use parcel_aggregation::SearchEngine;
use parcel_core::config::ParcelConfig;
use parcel_core::models::SearchQuery;

use super::build_registry;
use crate::cli::SearchArgs;

/// Run one search and write the response JSON to `out`.
///
/// Portal calls still in flight when `cancel` resolves are reported as
/// unavailable; the response is printed either way.
pub async fn run_search<W, C>(mut config: ParcelConfig, args: &SearchArgs, out: &mut W, cancel: C) -> Result<()>
where
    W: Write,
    C: Future<Output = ()>,
{
    let query = read_query(&args.query)?;
    let registry = build_registry(&mut config, &args.source)?;
    tracing::debug!(sources = ?registry.sources(), "portal registry ready");

    let engine = SearchEngine::new(&config, registry);
    let response = engine.search_until(&query, cancel).await?;

    if args.pretty {
        serde_json::to_writer_pretty(&mut *out, &response)?;
    } else {
        serde_json::to_writer(&mut *out, &response)?;
    }
    writeln!(out)?;
    Ok(())
}

fn read_query(path: &Path) -> Result<SearchQuery> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read query from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read query file {}", path.display()))?
    };
    serde_json::from_str(&text).context("query is not a valid search request")
}
