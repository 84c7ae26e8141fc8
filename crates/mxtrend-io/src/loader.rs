//! Wide-format snapshot loader.
//!
//! Snapshots follow the World Bank DataBank export layout:
//!
//! ```csv
//! Country Name,Country Code,Series Name,Series Code,2003 [YR2003],2004 [YR2004]
//! Mexico,MEX,GDP growth (annual %),NY.GDP.MKTP.KD.ZG,1.4,3.9
//! ```
//!
//! Headers lose their bracketed suffix, `Country Name` and `Series Code`
//! are dropped, and any row with a missing year value is discarded whole.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use mxtrend_core::{CountryCode, Dataset, IndicatorSeries, TrendError, TrendResult, Year};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::source::SourceId;

pub const COUNTRY_CODE: &str = "Country Code";
pub const SERIES_NAME: &str = "Series Name";
/// Accepted in the source but not carried into the dataset.
pub const DROPPED_COLUMNS: [&str; 2] = ["Country Name", "Series Code"];

static BRACKETED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\[.*?\]\s*").expect("bracket pattern is valid"));

/// Cell values that stand for "no observation".
const MISSING_MARKERS: [&str; 5] = ["..", "na", "n/a", "nan", "null"];

/// Counters collected while reading one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    pub rows_read: usize,
    pub rows_kept: usize,
    /// Rows with a missing or non-numeric year value
    pub incomplete_rows: usize,
    /// Rows without a country code or series name (export footers, blank lines)
    pub keyless_rows: usize,
    pub ignored_columns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub dataset: Dataset,
    pub stats: LoadStats,
}

/// Strip bracketed unit/year codes: `"2020 [YR2020]"` becomes `"2020"`.
pub fn normalize_header(raw: &str) -> String {
    let raw = raw.trim_start_matches('\u{feff}');
    BRACKETED.replace_all(raw, " ").trim().to_string()
}

fn parse_cell(cell: Option<&str>) -> Option<f64> {
    let cell = cell?.trim();
    if cell.is_empty() || MISSING_MARKERS.iter().any(|m| cell.eq_ignore_ascii_case(m)) {
        return None;
    }
    cell.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn key_cell(record: &StringRecord, idx: usize) -> Option<&str> {
    record.get(idx).map(str::trim).filter(|s| !s.is_empty())
}

struct Schema {
    country_code: usize,
    series_name: usize,
    /// (column index, year), sorted by year
    years: Vec<(usize, Year)>,
    ignored: Vec<String>,
}

fn resolve_schema(source_id: &str, headers: &StringRecord) -> TrendResult<Schema> {
    let normalized: Vec<String> = headers.iter().map(normalize_header).collect();

    let position = |name: &str| {
        normalized.iter().position(|h| h == name).ok_or_else(|| {
            TrendError::data_load(source_id, format!("missing required column '{name}'"))
        })
    };
    let country_code = position(COUNTRY_CODE)?;
    let series_name = position(SERIES_NAME)?;

    let mut by_year: BTreeMap<Year, usize> = BTreeMap::new();
    let mut ignored = Vec::new();
    for (idx, header) in normalized.iter().enumerate() {
        if idx == country_code || idx == series_name {
            continue;
        }
        if DROPPED_COLUMNS.contains(&header.as_str()) {
            continue;
        }
        match header.parse::<Year>() {
            Ok(year) => {
                if by_year.insert(year, idx).is_some() {
                    return Err(TrendError::data_load(
                        source_id,
                        format!("year {year} appears in more than one column"),
                    ));
                }
            }
            Err(_) => {
                debug!(source = source_id, column = %header, "ignoring non-year column");
                ignored.push(header.clone());
            }
        }
    }

    Ok(Schema {
        country_code,
        series_name,
        years: by_year.into_iter().map(|(year, idx)| (idx, year)).collect(),
        ignored,
    })
}

/// Read a snapshot from any CSV reader, returning the dataset and the
/// row counters.
pub fn read_snapshot<R: Read>(source_id: &str, reader: R) -> TrendResult<Snapshot> {
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| TrendError::data_load(source_id, format!("reading header: {e}")))?
        .clone();
    let schema = resolve_schema(source_id, &headers)?;

    let mut stats = LoadStats {
        ignored_columns: schema.ignored.clone(),
        ..LoadStats::default()
    };
    let mut rows = Vec::new();
    for (line, result) in rdr.records().enumerate() {
        let record = result.map_err(|e| {
            TrendError::data_load(source_id, format!("reading record {}: {e}", line + 1))
        })?;
        stats.rows_read += 1;

        let (Some(code), Some(name)) = (
            key_cell(&record, schema.country_code),
            key_cell(&record, schema.series_name),
        ) else {
            stats.keyless_rows += 1;
            continue;
        };

        let values: Option<BTreeMap<Year, f64>> = schema
            .years
            .iter()
            .map(|(idx, year)| parse_cell(record.get(*idx)).map(|v| (*year, v)))
            .collect();
        match values {
            Some(values) => rows.push(IndicatorSeries::new(name, CountryCode::new(code), values)),
            None => {
                debug!(source = source_id, country = code, series = name, "dropping incomplete row");
                stats.incomplete_rows += 1;
            }
        }
    }
    stats.rows_kept = rows.len();

    if stats.incomplete_rows > 0 {
        warn!(
            source = source_id,
            dropped = stats.incomplete_rows,
            "rows with missing year values were dropped"
        );
    }
    let years = schema.years.iter().map(|(_, year)| *year).collect();
    let dataset = Dataset::new(years, rows)
        .map_err(|e| TrendError::data_load(source_id, e.to_string()))?;
    info!(
        source = source_id,
        rows = stats.rows_kept,
        years = dataset.years().len(),
        indicators = dataset.indicators().len(),
        "loaded snapshot"
    );
    Ok(Snapshot { dataset, stats })
}

pub fn load_reader<R: Read>(source_id: &str, reader: R) -> TrendResult<Dataset> {
    read_snapshot(source_id, reader).map(|snapshot| snapshot.dataset)
}

pub fn load_path_with_stats(path: &Path) -> TrendResult<Snapshot> {
    let source_id = path.display().to_string();
    let file = File::open(path)
        .map_err(|e| TrendError::data_load(&source_id, format!("opening snapshot: {e}")))?;
    read_snapshot(&source_id, file)
}

pub fn load_path(path: &Path) -> TrendResult<Dataset> {
    load_path_with_stats(path).map(|snapshot| snapshot.dataset)
}

/// Load the snapshot named by `source`, resolving categories under `data_dir`.
pub fn load(source: &SourceId, data_dir: &Path) -> TrendResult<Dataset> {
    load_path(&source.resolve(data_dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SNAPSHOT: &str = "\
Country Name,Country Code,Series Name,Series Code,2021 [YR2021],2022 [YR2022],2023 [YR2023]
Mexico,MEX,GDP growth (annual %),NY.GDP.MKTP.KD.ZG,6.0,3.7,3.2
United States,USA,GDP growth (annual %),NY.GDP.MKTP.KD.ZG,5.8,1.9,2.5
Mexico,MEX,Gini index,SI.POV.GINI,43.5,..,43.5
Brazil,BRA,Gini index,SI.POV.GINI,52.9,52.0,
,,,,,,
Data from database: World Development Indicators,,,,,,
Last Updated: 06/28/2024,,,,,,
";

    #[test]
    fn test_normalize_header_strips_bracket_suffix() {
        assert_eq!(normalize_header("2020 [YR2020]"), "2020");
        assert_eq!(normalize_header("  Series Name "), "Series Name");
        assert_eq!(normalize_header("\u{feff}Country Name"), "Country Name");
    }

    #[test]
    fn test_drops_identifier_columns_and_incomplete_rows() {
        let snapshot = read_snapshot("inline", SNAPSHOT.as_bytes()).unwrap();
        let dataset = &snapshot.dataset;
        assert_eq!(dataset.years(), &[2021, 2022, 2023]);
        assert_eq!(dataset.len(), 2);
        assert!(dataset.rows().iter().all(|r| r.series_name == "GDP growth (annual %)"));
        assert_eq!(snapshot.stats.incomplete_rows, 2);
        assert_eq!(snapshot.stats.keyless_rows, 3);
        assert!(snapshot.stats.ignored_columns.is_empty());
    }

    #[test]
    fn test_incomplete_row_is_absent() {
        let dataset = load_reader("inline", SNAPSHOT.as_bytes()).unwrap();
        assert!(!dataset
            .rows()
            .iter()
            .any(|r| r.country_code.as_str() == "MEX" && r.series_name == "Gini index"));
    }

    #[test]
    fn test_values_keep_year_keys() {
        let dataset = load_reader("inline", SNAPSHOT.as_bytes()).unwrap();
        let mex = &dataset.rows()[0];
        assert_eq!(mex.country_code.as_str(), "MEX");
        assert_eq!(mex.value(2022), Some(3.7));
        let years: Vec<Year> = mex.values.keys().copied().collect();
        assert_eq!(years, vec![2021, 2022, 2023]);
    }

    #[test]
    fn test_load_is_idempotent() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SNAPSHOT.as_bytes()).unwrap();
        let first = load_path(file.path()).unwrap();
        let second = load_path(file.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_key_column_is_data_load_error() {
        let csv = "Country Name,Series Name,2021 [YR2021]\nMexico,Gini index,43.5\n";
        let err = load_reader("no-code", csv.as_bytes()).unwrap_err();
        match err {
            TrendError::DataLoad { source_id, reason } => {
                assert_eq!(source_id, "no-code");
                assert!(reason.contains("Country Code"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unreadable_source_is_data_load_error() {
        let err = load_path(Path::new("/definitely/not/here/General.csv")).unwrap_err();
        assert!(matches!(err, TrendError::DataLoad { .. }));
    }

    #[test]
    fn test_duplicate_year_columns_rejected() {
        let csv = "Country Code,Series Name,2021 [YR2021],2021\nMEX,Gini index,1,2\n";
        let err = load_reader("dup", csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("2021"));
    }

    #[test]
    fn test_out_of_order_year_columns_are_sorted() {
        let csv = "Country Code,Series Name,2023,2021,2022\nMEX,Gini index,3,1,2\n";
        let dataset = load_reader("shuffled", csv.as_bytes()).unwrap();
        assert_eq!(dataset.years(), &[2021, 2022, 2023]);
        assert_eq!(dataset.rows()[0].value(2021), Some(1.0));
    }

    #[test]
    fn test_unknown_columns_are_reported() {
        let csv = "Country Code,Series Name,Unit,2021\nMEX,Gini index,pct,1\n";
        let snapshot = read_snapshot("extra", csv.as_bytes()).unwrap();
        assert_eq!(snapshot.stats.ignored_columns, vec!["Unit".to_string()]);
        assert_eq!(snapshot.dataset.len(), 1);
    }

    #[test]
    fn test_non_numeric_cell_drops_row() {
        assert_eq!(parse_cell(Some(" 1.5 ")), Some(1.5));
        assert_eq!(parse_cell(Some("..")), None);
        assert_eq!(parse_cell(Some("NaN")), None);
        assert_eq!(parse_cell(Some("n.d.")), None);
        assert_eq!(parse_cell(None), None);
    }

    mod laws {
        use super::*;
        use proptest::prelude::*;

        const POOL: [(&str, &str); 3] = [("Mexico", "MEX"), ("Chile", "CHL"), ("Spain", "ESP")];
        const NAMES: [&str; 3] = [
            "GDP growth (annual %)",
            "Gini index",
            "Literacy rate, adult total (% of people ages 15 and above)",
        ];

        type RawRow = (usize, usize, Vec<Option<f64>>);

        /// Shared year set plus rows whose cells may be missing (`None`).
        fn raw_snapshot() -> impl Strategy<Value = (Vec<Year>, Vec<RawRow>)> {
            proptest::sample::subsequence((2000..2012).collect::<Vec<Year>>(), 1..=6)
                .prop_flat_map(|years| {
                    let cell = proptest::option::weighted(0.85, -1.0e6f64..1.0e6);
                    let row = (
                        0..NAMES.len(),
                        0..POOL.len(),
                        proptest::collection::vec(cell, years.len()),
                    );
                    (Just(years), proptest::collection::vec(row, 0..12))
                })
        }

        fn write_snapshot(years: &[Year], rows: &[RawRow]) -> NamedTempFile {
            let mut file = NamedTempFile::new().unwrap();
            {
                let mut writer = csv::Writer::from_writer(&mut file);
                let mut header = vec![
                    "Country Name".to_string(),
                    COUNTRY_CODE.to_string(),
                    SERIES_NAME.to_string(),
                    "Series Code".to_string(),
                ];
                header.extend(years.iter().map(|y| format!("{y} [YR{y}]")));
                writer.write_record(&header).unwrap();
                for (name, country, cells) in rows {
                    let (country_name, code) = POOL[*country];
                    let mut record = vec![
                        country_name.to_string(),
                        code.to_string(),
                        NAMES[*name].to_string(),
                        format!("IND.{name}"),
                    ];
                    record.extend(cells.iter().map(|cell| match cell {
                        Some(v) => v.to_string(),
                        None => "..".to_string(),
                    }));
                    writer.write_record(&record).unwrap();
                }
                writer.flush().unwrap();
            }
            file
        }

        proptest! {
            #[test]
            fn load_is_idempotent_and_keeps_only_complete_rows(
                (years, rows) in raw_snapshot(),
            ) {
                let file = write_snapshot(&years, &rows);
                let first = load_path(file.path()).unwrap();
                let second = load_path(file.path()).unwrap();
                prop_assert_eq!(&first, &second);

                let complete: Vec<&RawRow> = rows
                    .iter()
                    .filter(|(_, _, cells)| cells.iter().all(Option::is_some))
                    .collect();
                prop_assert_eq!(first.years(), years.as_slice());
                prop_assert_eq!(first.len(), complete.len());
                for (row, (name, country, cells)) in first.rows().iter().zip(complete) {
                    prop_assert_eq!(row.series_name.as_str(), NAMES[*name]);
                    prop_assert_eq!(row.country_code.as_str(), POOL[*country].1);
                    let expected: Vec<f64> = cells.iter().flatten().copied().collect();
                    let actual: Vec<f64> = row.values.values().copied().collect();
                    prop_assert_eq!(actual, expected);
                }
            }
        }
    }
}
