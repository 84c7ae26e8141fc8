use std::io::Write;

use anyhow::{bail, Result};
use mxtrend_cli::ListFormat;
use mxtrend_core::period::period_for_year;
use mxtrend_core::{periods_overlapping, AdministrationPeriod, Year, YearRange, ADMINISTRATIONS};
use tabwriter::TabWriter;
use tracing::warn;

/// Range covered by the administration table.
fn table_span() -> Option<YearRange> {
    let start = ADMINISTRATIONS.iter().map(|p| p.start_year).min()?;
    let end = ADMINISTRATIONS.iter().map(|p| p.end_year).max()?;
    Some(YearRange::new(start, end))
}

pub fn handle<W: Write>(
    from: Option<Year>,
    to: Option<Year>,
    format: ListFormat,
    out: &mut W,
) -> Result<()> {
    let Some(span) = table_span() else {
        bail!("administration table is empty");
    };
    let range = YearRange::new(from.unwrap_or(span.start), to.unwrap_or(span.end));
    let periods = periods_overlapping(&ADMINISTRATIONS, range);
    write_periods(&periods, format, out)
}

/// The administration governing `year`; nothing is listed outside the table.
pub fn handle_year<W: Write>(year: Year, format: ListFormat, out: &mut W) -> Result<()> {
    let periods: Vec<&AdministrationPeriod> =
        period_for_year(&ADMINISTRATIONS, year).into_iter().collect();
    if periods.is_empty() {
        warn!(year, "no administration period covers this year");
    }
    write_periods(&periods, format, out)
}

fn write_periods<W: Write>(
    periods: &[&AdministrationPeriod],
    format: ListFormat,
    out: &mut W,
) -> Result<()> {
    match format {
        ListFormat::Table => {
            let mut writer = TabWriter::new(out);
            writeln!(writer, "FROM\tTO\tPARTY\tLEADER\tCOLOR\tLABELED")?;
            for p in periods {
                writeln!(
                    writer,
                    "{}\t{}\t{}\t{}\t{}\t{}",
                    p.start_year,
                    p.end_year,
                    p.party_label,
                    p.leader_label,
                    p.color_hint,
                    if p.transition { "no" } else { "yes" }
                )?;
            }
            writer.flush()?;
        }
        ListFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, periods)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
