//! Federal administration periods used to decorate trend charts.
//!
//! Periods are half-open on the year axis: a year `y` belongs to a period
//! when `start_year <= y < end_year`, and the period's band is drawn from
//! `start_year` to `end_year`. Years outside every period get no band.

use serde::Serialize;

use crate::Year;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdministrationPeriod {
    pub start_year: Year,
    pub end_year: Year,
    pub party_label: &'static str,
    pub leader_label: &'static str,
    /// Band fill color (`#rrggbb`)
    pub color_hint: &'static str,
    pub opacity: f64,
    /// Partial term at the edge of the window, drawn without a label
    pub transition: bool,
}

impl AdministrationPeriod {
    pub fn contains(&self, year: Year) -> bool {
        self.start_year <= year && year < self.end_year
    }

    /// True when the period's interval intersects the inclusive `range`.
    pub fn overlaps(&self, range: &YearRange) -> bool {
        self.start_year <= range.end && self.end_year > range.start
    }

    /// Band caption, `None` for transition periods.
    pub fn label(&self) -> Option<String> {
        if self.transition {
            None
        } else {
            Some(format!("{}<br>({})", self.party_label, self.leader_label))
        }
    }
}

/// Inclusive year range, typically a chart's x-axis extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearRange {
    pub start: Year,
    pub end: Year,
}

impl YearRange {
    /// Bounds are swapped when given in reverse.
    pub fn new(a: Year, b: Year) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    pub fn contains(&self, year: Year) -> bool {
        self.start <= year && year <= self.end
    }
}

/// The last three federal terms, preceded by the tail of the term before
/// them. Contiguous and chronological.
pub static ADMINISTRATIONS: [AdministrationPeriod; 4] = [
    AdministrationPeriod {
        start_year: 2005,
        end_year: 2006,
        party_label: "PAN",
        leader_label: "Fox",
        color_hint: "#297eef",
        opacity: 0.4,
        transition: true,
    },
    AdministrationPeriod {
        start_year: 2006,
        end_year: 2012,
        party_label: "PAN",
        leader_label: "Calderón",
        color_hint: "#2672d7",
        opacity: 0.3,
        transition: false,
    },
    AdministrationPeriod {
        start_year: 2012,
        end_year: 2018,
        party_label: "PRI",
        leader_label: "Peña Nieto",
        color_hint: "#497e49",
        opacity: 0.3,
        transition: false,
    },
    AdministrationPeriod {
        start_year: 2018,
        end_year: 2024,
        party_label: "MORENA",
        leader_label: "AMLO",
        color_hint: "#da2c24",
        opacity: 0.3,
        transition: false,
    },
];

/// Periods of `table` intersecting `range`, in chronological order.
pub fn periods_overlapping(
    table: &[AdministrationPeriod],
    range: YearRange,
) -> Vec<&AdministrationPeriod> {
    let mut hits: Vec<&AdministrationPeriod> =
        table.iter().filter(|p| p.overlaps(&range)).collect();
    hits.sort_by_key(|p| p.start_year);
    hits
}

/// Period governing `year`, if any.
pub fn period_for_year(
    table: &[AdministrationPeriod],
    year: Year,
) -> Option<&AdministrationPeriod> {
    table.iter().find(|p| p.contains(year))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_table_is_contiguous() {
        for pair in ADMINISTRATIONS.windows(2) {
            assert_eq!(pair[0].end_year, pair[1].start_year);
            assert!(pair[0].start_year < pair[0].end_year);
        }
    }

    #[test]
    fn test_full_window_returns_all_terms_in_order() {
        let hits = periods_overlapping(&ADMINISTRATIONS, YearRange::new(2000, 2024));
        let starts: Vec<Year> = hits.iter().map(|p| p.start_year).collect();
        assert_eq!(starts, vec![2005, 2006, 2012, 2018]);
        assert!(hits[0].label().is_none());

        let labeled: Vec<&AdministrationPeriod> =
            hits.iter().copied().filter(|p| !p.transition).collect();
        assert_eq!(labeled.len(), 3);
        assert_eq!(labeled[1].start_year, 2012);
        assert_eq!(labeled[2].start_year, 2018);
        assert_eq!(labeled[0].label().as_deref(), Some("PAN<br>(Calderón)"));
    }

    #[test]
    fn test_range_before_table_is_empty() {
        assert!(periods_overlapping(&ADMINISTRATIONS, YearRange::new(1990, 2004)).is_empty());
    }

    #[test]
    fn test_boundary_year_belongs_to_later_term() {
        assert_eq!(
            period_for_year(&ADMINISTRATIONS, 2012).map(|p| p.leader_label),
            Some("Peña Nieto")
        );
        assert!(period_for_year(&ADMINISTRATIONS, 2024).is_none());
    }

    #[test]
    fn test_range_touching_boundary() {
        let hits = periods_overlapping(&ADMINISTRATIONS, YearRange::new(2012, 2012));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].party_label, "PRI");
    }

    #[test]
    fn test_reversed_range_is_normalized() {
        assert_eq!(YearRange::new(2020, 2010), YearRange::new(2010, 2020));
    }

    proptest! {
        #[test]
        fn overlapping_periods_are_ordered_and_intersect(a in 1990i32..2035, b in 1990i32..2035) {
            let range = YearRange::new(a, b);
            let hits = periods_overlapping(&ADMINISTRATIONS, range);
            for pair in hits.windows(2) {
                prop_assert!(pair[0].start_year <= pair[1].start_year);
            }
            for period in ADMINISTRATIONS.iter() {
                let returned = hits.iter().any(|p| *p == period);
                let intersects = (range.start..=range.end).any(|y| period.contains(y));
                prop_assert_eq!(returned, intersects);
            }
        }
    }
}
