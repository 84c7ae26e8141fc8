//! Indicator and country selection.
//!
//! Filters never fail and never mutate their input: they return a derived
//! [`Dataset`] with the same year schema, possibly empty.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{CountryCode, Dataset};

/// Rows whose `series_name` equals `series_name`.
pub fn select_indicator(dataset: &Dataset, series_name: &str) -> Dataset {
    dataset.filter_rows(|row| row.series_name == series_name)
}

/// Rows whose country code is a member of `countries`. An empty set
/// selects nothing.
pub fn select_countries(dataset: &Dataset, countries: &BTreeSet<CountryCode>) -> Dataset {
    dataset.filter_rows(|row| countries.contains(&row.country_code))
}

/// Filter output paired with the indicator it was resolved for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    pub indicator: String,
    pub countries: BTreeSet<CountryCode>,
    pub dataset: Dataset,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }
}

/// Narrow `dataset` to one indicator and a set of countries.
pub fn select(dataset: &Dataset, indicator: &str, countries: &BTreeSet<CountryCode>) -> Selection {
    let by_indicator = select_indicator(dataset, indicator);
    if by_indicator.is_empty() {
        debug!(indicator, "indicator not present in dataset");
    }
    let filtered = select_countries(&by_indicator, countries);
    debug!(
        indicator,
        countries = countries.len(),
        rows = filtered.len(),
        "selection resolved"
    );
    Selection {
        indicator: indicator.to_string(),
        countries: countries.clone(),
        dataset: filtered,
    }
}

/// Selection used for a fresh panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultSelection {
    /// Index into the dataset's indicators (first-appearance order)
    pub indicator_index: usize,
    pub home_country: CountryCode,
}

impl Default for DefaultSelection {
    fn default() -> Self {
        Self {
            indicator_index: 4,
            home_country: CountryCode::new("MEX"),
        }
    }
}

impl DefaultSelection {
    /// Indicator at `indicator_index`, or the first indicator when the
    /// dataset carries fewer. `None` only for an empty dataset.
    pub fn indicator<'a>(&self, dataset: &'a Dataset) -> Option<&'a str> {
        let indicators = dataset.indicators();
        match indicators.get(self.indicator_index) {
            Some(name) => Some(*name),
            None => {
                let first = indicators.first().copied();
                if let Some(name) = first {
                    warn!(
                        index = self.indicator_index,
                        available = indicators.len(),
                        fallback = name,
                        "default indicator index out of range"
                    );
                }
                first
            }
        }
    }

    pub fn countries(&self) -> BTreeSet<CountryCode> {
        BTreeSet::from([self.home_country.clone()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;

    fn codes(list: &[&str]) -> BTreeSet<CountryCode> {
        list.iter().map(|c| CountryCode::new(*c)).collect()
    }

    #[test]
    fn test_select_indicator_keeps_matching_rows() {
        let dataset = sample_dataset();
        let gini = select_indicator(&dataset, "Gini index");
        assert_eq!(gini.len(), 3);
        assert!(gini.rows().iter().all(|r| r.series_name == "Gini index"));
    }

    #[test]
    fn test_unknown_indicator_is_empty_not_error() {
        let dataset = sample_dataset();
        let none = select_indicator(&dataset, "Tractors per 100 sq. km");
        assert!(none.is_empty());
        assert_eq!(none.years(), dataset.years());
    }

    #[test]
    fn test_empty_country_set_selects_nothing() {
        let dataset = sample_dataset();
        assert!(select_countries(&dataset, &BTreeSet::new()).is_empty());
    }

    #[test]
    fn test_filter_does_not_mutate_source() {
        let dataset = sample_dataset();
        let before = dataset.clone();
        let _ = select(&dataset, "Gini index", &codes(&["MEX"]));
        assert_eq!(dataset, before);
    }

    #[test]
    fn test_composition_order_is_irrelevant() {
        let dataset = sample_dataset();
        let set = codes(&["USA", "MEX"]);
        let a = select_countries(&select_indicator(&dataset, "Gini index"), &set);
        let b = select_indicator(&select_countries(&dataset, &set), "Gini index");
        assert_eq!(a, b);
    }

    #[test]
    fn test_selection_carries_resolved_indicator() {
        let dataset = sample_dataset();
        let selection = select(&dataset, "GDP growth (annual %)", &codes(&["MEX"]));
        assert_eq!(selection.indicator, "GDP growth (annual %)");
        assert_eq!(selection.dataset.len(), 1);
        assert!(!selection.is_empty());
    }

    #[test]
    fn test_default_selection_falls_back_to_first_indicator() {
        let dataset = sample_dataset();
        let defaults = DefaultSelection::default();
        assert_eq!(defaults.indicator(&dataset), Some("GDP growth (annual %)"));
        assert_eq!(defaults.countries(), codes(&["MEX"]));
        assert_eq!(defaults.indicator(&Dataset::default()), None);
    }

    #[test]
    fn test_default_selection_uses_index() {
        let dataset = sample_dataset();
        let defaults = DefaultSelection {
            indicator_index: 1,
            ..DefaultSelection::default()
        };
        assert_eq!(defaults.indicator(&dataset), Some("Gini index"));
    }

    mod laws {
        use super::*;
        use crate::{IndicatorSeries, Year};
        use proptest::prelude::*;
        use std::collections::BTreeMap;

        const POOL: [&str; 4] = ["MEX", "USA", "BRA", "CHL"];
        const NAMES: [&str; 3] = ["GDP growth (annual %)", "Gini index", "Literacy"];

        fn code_set() -> impl Strategy<Value = BTreeSet<CountryCode>> {
            proptest::sample::subsequence(POOL.to_vec(), 0..=POOL.len())
                .prop_map(|v| v.into_iter().map(CountryCode::new).collect())
        }

        /// Rows drawn from NAMES x POOL over one shared year set; the same
        /// (indicator, country) pair may appear more than once.
        fn dataset() -> impl Strategy<Value = Dataset> {
            proptest::sample::subsequence((2000..2012).collect::<Vec<Year>>(), 1..=6)
                .prop_flat_map(|years| {
                    let row = (
                        0..NAMES.len(),
                        0..POOL.len(),
                        proptest::collection::vec(-100.0f64..100.0, years.len()),
                    );
                    (Just(years), proptest::collection::vec(row, 0..16))
                })
                .prop_map(|(years, rows)| {
                    let rows = rows
                        .into_iter()
                        .map(|(name, code, values)| {
                            let values: BTreeMap<Year, f64> =
                                years.iter().copied().zip(values).collect();
                            IndicatorSeries::new(NAMES[name], CountryCode::new(POOL[code]), values)
                        })
                        .collect();
                    Dataset::new(years, rows).unwrap()
                })
        }

        fn keys(dataset: &Dataset) -> Vec<(String, CountryCode)> {
            dataset
                .rows()
                .iter()
                .map(|r| (r.series_name.clone(), r.country_code.clone()))
                .collect()
        }

        proptest! {
            #[test]
            fn select_indicator_is_idempotent(dataset in dataset(), idx in 0usize..NAMES.len()) {
                let once = select_indicator(&dataset, NAMES[idx]);
                let twice = select_indicator(&once, NAMES[idx]);
                prop_assert!(once.rows().iter().all(|r| r.series_name == NAMES[idx]));
                prop_assert_eq!(once, twice);
            }

            #[test]
            fn select_countries_is_idempotent(dataset in dataset(), countries in code_set()) {
                let once = select_countries(&dataset, &countries);
                let twice = select_countries(&once, &countries);
                prop_assert_eq!(once, twice);
            }

            #[test]
            fn union_of_country_sets_distributes(
                dataset in dataset(),
                idx in 0usize..NAMES.len(),
                c1 in code_set(),
                c2 in code_set(),
            ) {
                let by_name = select_indicator(&dataset, NAMES[idx]);
                let union: BTreeSet<_> = c1.union(&c2).cloned().collect();
                let combined = select_countries(&by_name, &union);

                let left = select_countries(&by_name, &c1);
                let right = select_countries(&by_name, &c2);
                let expected: BTreeSet<(String, CountryCode)> =
                    keys(&left).into_iter().chain(keys(&right)).collect();
                let actual: BTreeSet<(String, CountryCode)> = keys(&combined).into_iter().collect();
                prop_assert_eq!(actual, expected);

                // Duplicate rows survive: every matching row is kept exactly once.
                let matching = by_name
                    .rows()
                    .iter()
                    .filter(|r| c1.contains(&r.country_code) || c2.contains(&r.country_code))
                    .count();
                prop_assert_eq!(combined.len(), matching);
                prop_assert_eq!(combined.years(), dataset.years());
            }
        }
    }
}
