use std::io::Write;

use anyhow::Result;
use mxtrend_cli::SourceArgs;
use mxtrend_core::{select_countries, select_indicator};
use mxtrend_io::table::{write_csv, write_table};
use tracing::info;

use super::{parse_countries, AppContext};

pub fn handle<W: Write>(
    ctx: &AppContext,
    source: &SourceArgs,
    indicator: Option<&str>,
    countries: &[String],
    csv: bool,
    out: &mut W,
) -> Result<()> {
    let mut dataset = (*ctx.load(&source.source)?).clone();
    if let Some(name) = indicator {
        dataset = select_indicator(&dataset, name);
    }
    if !countries.is_empty() {
        dataset = select_countries(&dataset, &parse_countries(countries));
    }
    info!("Writing {} rows from {}", dataset.len(), source.source);

    if csv {
        write_csv(&dataset, &mut *out)?;
    } else {
        write_table(&dataset, &mut *out)?;
    }
    Ok(())
}
