//! # mxtrend-core: Indicator Data Model
//!
//! Core types for the indicator trend pipeline: one [`IndicatorSeries`] per
//! indicator x country pair, collected into an immutable [`Dataset`] that
//! shares a single year-column schema.
//!
//! ## Pipeline
//!
//! ```text
//! load (mxtrend-io) -> filter::select -> guide::lookup -> render/compose (mxtrend-viz)
//!                                     \-> period::periods_overlapping
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::{BTreeMap, BTreeSet};
//! use mxtrend_core::*;
//!
//! let row = IndicatorSeries::new(
//!     "GDP growth (annual %)",
//!     CountryCode::new("MEX"),
//!     BTreeMap::from([(2022, 3.7), (2023, 3.2)]),
//! );
//! let dataset = Dataset::new(vec![2022, 2023], vec![row]).unwrap();
//!
//! let countries = BTreeSet::from([CountryCode::new("MEX")]);
//! let selection = filter::select(&dataset, "GDP growth (annual %)", &countries);
//! assert_eq!(selection.dataset.len(), 1);
//!
//! let entry = guide::lookup(guide::catalog(Category::General), &selection.indicator).unwrap();
//! assert_eq!(entry.translated_label, "Crecimiento del PIB (anual %)");
//! ```
//!
//! ## Modules
//!
//! - [`guide`] - Static indicator guide catalogs (general, economic, social)
//! - [`filter`] - Indicator and country selection
//! - [`period`] - Administration periods used to annotate charts
//! - [`countries`] - Country code guide
//! - [`error`] - [`TrendError`] taxonomy

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

pub mod category;
pub mod countries;
pub mod error;
pub mod filter;
pub mod guide;
pub mod period;

pub use category::Category;
pub use error::{TrendError, TrendResult};
pub use filter::{select, select_countries, select_indicator, DefaultSelection, Selection};
pub use guide::{GuideCatalog, IndicatorGuideEntry};
pub use period::{periods_overlapping, AdministrationPeriod, YearRange, ADMINISTRATIONS};

/// Calendar year of an observation.
pub type Year = i32;

/// ISO-style three-letter country code (e.g. `MEX`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryCode(String);

impl CountryCode {
    #[inline]
    pub fn new(code: impl Into<String>) -> Self {
        CountryCode(code.into().trim().to_string())
    }
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CountryCode {
    fn from(code: &str) -> Self {
        CountryCode::new(code)
    }
}

/// One indicator observed for one country across the dataset's years.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSeries {
    /// Canonical (English) indicator name, e.g. `"GDP growth (annual %)"`
    pub series_name: String,
    pub country_code: CountryCode,
    /// Observations keyed by year, iterated in chronological order
    pub values: BTreeMap<Year, f64>,
}

impl IndicatorSeries {
    pub fn new(
        series_name: impl Into<String>,
        country_code: CountryCode,
        values: BTreeMap<Year, f64>,
    ) -> Self {
        Self {
            series_name: series_name.into(),
            country_code,
            values,
        }
    }

    pub fn value(&self, year: Year) -> Option<f64> {
        self.values.get(&year).copied()
    }

    /// Values for `years`, in the order given. Years without a sample are skipped.
    pub fn values_for<'a>(&'a self, years: &'a [Year]) -> impl Iterator<Item = (Year, f64)> + 'a {
        years
            .iter()
            .filter_map(move |year| self.value(*year).map(|v| (*year, v)))
    }
}

/// Immutable, ordered collection of indicator rows sharing one year schema.
///
/// Fields are private: a dataset is built once (by the loader or
/// [`Dataset::new`]) and every filter returns a new derived dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset {
    years: Vec<Year>,
    rows: Vec<IndicatorSeries>,
}

impl Dataset {
    /// Build a dataset, checking that `years` is strictly increasing and
    /// that every row carries exactly those years with non-empty keys.
    pub fn new(years: Vec<Year>, rows: Vec<IndicatorSeries>) -> TrendResult<Self> {
        if years.windows(2).any(|w| w[0] >= w[1]) {
            return Err(TrendError::Schema(
                "year columns must be strictly increasing".to_string(),
            ));
        }
        for (idx, row) in rows.iter().enumerate() {
            if row.series_name.trim().is_empty() || row.country_code.as_str().is_empty() {
                return Err(TrendError::Schema(format!(
                    "row {idx} is missing its series name or country code"
                )));
            }
            if row.values.len() != years.len() || !years.iter().all(|y| row.values.contains_key(y))
            {
                return Err(TrendError::Schema(format!(
                    "row {idx} ({} / {}) does not match the dataset year columns",
                    row.series_name, row.country_code
                )));
            }
        }
        Ok(Self { years, rows })
    }

    pub fn years(&self) -> &[Year] {
        &self.years
    }

    pub fn rows(&self) -> &[IndicatorSeries] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Inclusive span of the year columns, `None` when there are none.
    pub fn year_range(&self) -> Option<YearRange> {
        match (self.years.first(), self.years.last()) {
            (Some(first), Some(last)) => Some(YearRange::new(*first, *last)),
            _ => None,
        }
    }

    /// Distinct indicator names in first-appearance order.
    pub fn indicators(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        self.rows
            .iter()
            .map(|row| row.series_name.as_str())
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// Distinct country codes in first-appearance order.
    pub fn countries(&self) -> Vec<&CountryCode> {
        let mut seen = BTreeSet::new();
        self.rows
            .iter()
            .map(|row| &row.country_code)
            .filter(|code| seen.insert(*code))
            .collect()
    }

    /// Derived dataset with the same year schema holding the matching rows.
    pub fn filter_rows<F>(&self, mut keep: F) -> Dataset
    where
        F: FnMut(&IndicatorSeries) -> bool,
    {
        Dataset {
            years: self.years.clone(),
            rows: self.rows.iter().filter(|row| keep(row)).cloned().collect(),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub fn series(name: &str, code: &str, values: &[(Year, f64)]) -> IndicatorSeries {
        IndicatorSeries::new(name, CountryCode::new(code), values.iter().copied().collect())
    }

    /// Two indicators x three countries over 2021..=2023.
    pub fn sample_dataset() -> Dataset {
        let years = vec![2021, 2022, 2023];
        let rows = vec![
            series("GDP growth (annual %)", "MEX", &[(2021, 6.0), (2022, 3.7), (2023, 3.2)]),
            series("GDP growth (annual %)", "USA", &[(2021, 5.8), (2022, 1.9), (2023, 2.5)]),
            series("GDP growth (annual %)", "BRA", &[(2021, 4.8), (2022, 3.0), (2023, 2.9)]),
            series("Gini index", "MEX", &[(2021, 43.5), (2022, 43.5), (2023, 43.5)]),
            series("Gini index", "USA", &[(2021, 39.7), (2022, 41.3), (2023, 41.3)]),
            series("Gini index", "BRA", &[(2021, 52.9), (2022, 52.0), (2023, 52.0)]),
        ];
        Dataset::new(years, rows).unwrap()
    }
}
