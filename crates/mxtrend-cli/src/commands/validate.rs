use std::io::Write;

use anyhow::{bail, Context, Result};
use mxtrend_cli::SourceArgs;
use mxtrend_core::guide::catalog;
use mxtrend_core::{Dataset, GuideCatalog};
use tracing::info;

use super::AppContext;

/// Indicators present in `dataset` with no entry in `guide`.
pub fn orphan_indicators<'a>(dataset: &'a Dataset, guide: &GuideCatalog) -> Vec<&'a str> {
    dataset
        .indicators()
        .into_iter()
        .filter(|name| !guide.contains(name))
        .collect()
}

pub fn handle<W: Write>(ctx: &AppContext, source: &SourceArgs, out: &mut W) -> Result<()> {
    let snapshot = ctx
        .store
        .load_snapshot(&source.source)
        .with_context(|| format!("loading snapshot '{}'", source.source))?;
    let (dataset, stats) = (&snapshot.dataset, &snapshot.stats);
    let category = source.catalog_category();
    let orphans = orphan_indicators(dataset, catalog(category));

    for name in &orphans {
        writeln!(out, "missing guide entry: {name}")?;
    }
    if !orphans.is_empty() {
        bail!(
            "{} indicator(s) in '{}' have no entry in the {} guide catalog",
            orphans.len(),
            source.source,
            category
        );
    }

    info!("Validation successful!");
    writeln!(
        out,
        "ok: {} indicators, {} rows, every indicator has a {} guide entry",
        dataset.indicators().len(),
        dataset.len(),
        category
    )?;
    writeln!(
        out,
        "rows: {} read, {} kept, {} dropped for missing values, {} without keys",
        stats.rows_read, stats.rows_kept, stats.incomplete_rows, stats.keyless_rows
    )?;
    if !stats.ignored_columns.is_empty() {
        writeln!(out, "ignored columns: {}", stats.ignored_columns.join(", "))?;
    }
    Ok(())
}
