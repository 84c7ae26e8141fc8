use std::io::Write;

use anyhow::Result;
use mxtrend_cli::SourceArgs;
use mxtrend_core::guide::catalog;
use tabwriter::TabWriter;

use super::AppContext;

/// Indicators of a snapshot in selector order; `*` marks the default.
pub fn handle<W: Write>(ctx: &AppContext, source: &SourceArgs, out: &mut W) -> Result<()> {
    let dataset = ctx.load(&source.source)?;
    let guide = catalog(source.catalog_category());
    let default = ctx.defaults.indicator(&dataset);

    let mut writer = TabWriter::new(out);
    writeln!(writer, "#\tINDICATOR\tLABEL")?;
    for (idx, name) in dataset.indicators().into_iter().enumerate() {
        let marker = if Some(name) == default { "*" } else { "" };
        let label = guide.get(name).map_or("-", |entry| entry.translated_label);
        writeln!(writer, "{idx}{marker}\t{name}\t{label}")?;
    }
    writer.flush()?;
    Ok(())
}
