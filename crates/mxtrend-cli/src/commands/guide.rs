use std::io::Write;

use anyhow::Result;
use mxtrend_cli::ListFormat;
use mxtrend_core::guide::catalog;
use mxtrend_core::Category;
use tabwriter::TabWriter;

pub fn handle<W: Write>(category: Category, format: ListFormat, out: &mut W) -> Result<()> {
    let guide = catalog(category);
    match format {
        ListFormat::Table => {
            let mut writer = TabWriter::new(out);
            writeln!(writer, "INDICATOR\tLABEL")?;
            for entry in guide.entries() {
                writeln!(writer, "{}\t{}", entry.series_name, entry.translated_label)?;
            }
            writer.flush()?;
        }
        ListFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, guide.entries())?;
            writeln!(out)?;
        }
    }
    Ok(())
}
