//! Raw table dump of a (filtered) dataset, indexed by country code.

use std::io::Write;

use mxtrend_core::{Dataset, TrendError, TrendResult};
use tabwriter::TabWriter;

fn header(dataset: &Dataset) -> Vec<String> {
    let mut columns = vec!["Country Code".to_string(), "Series Name".to_string()];
    columns.extend(dataset.years().iter().map(|y| y.to_string()));
    columns
}

fn row_cells(dataset: &Dataset) -> impl Iterator<Item = Vec<String>> + '_ {
    dataset.rows().iter().map(|row| {
        let mut cells = vec![row.country_code.to_string(), row.series_name.clone()];
        cells.extend(
            row.values_for(dataset.years())
                .map(|(_, value)| value.to_string()),
        );
        cells
    })
}

/// Aligned, tab-separated text table.
pub fn write_table<W: Write>(dataset: &Dataset, out: W) -> TrendResult<()> {
    let mut writer = TabWriter::new(out);
    writeln!(writer, "{}", header(dataset).join("\t"))?;
    for cells in row_cells(dataset) {
        writeln!(writer, "{}", cells.join("\t"))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_csv<W: Write>(dataset: &Dataset, out: W) -> TrendResult<()> {
    let csv_err = |e: csv::Error| TrendError::Other(format!("writing CSV: {e}"));
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(header(dataset)).map_err(csv_err)?;
    for cells in row_cells(dataset) {
        writer.write_record(&cells).map_err(csv_err)?;
    }
    writer.flush()?;
    Ok(())
}
