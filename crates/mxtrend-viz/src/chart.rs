//! Trend chart specification.
//!
//! [`ChartSpec`] serializes to the plotly figure schema (`data` + `layout`),
//! so the JSON can be handed to plotly.js unchanged. Field order is fixed
//! and no map types are used, which keeps the output byte-stable.

use mxtrend_core::period::{periods_overlapping, AdministrationPeriod, YearRange, ADMINISTRATIONS};
use mxtrend_core::{CountryCode, Dataset, IndicatorSeries, Year};
use serde::Serialize;
use tracing::debug;

/// Series colors, assigned by series position.
pub const PALETTE: [&str; 10] = [
    "#636efa", "#ef553b", "#00cc96", "#ab63fa", "#ffa15a", "#19d3f3", "#ff6692", "#b6e880",
    "#ff97ff", "#fecb52",
];

/// Paper-relative top of a labeled band; the label sits above the plot area.
const BAND_TOP: f64 = 1.2;
const TRANSITION_BAND_TOP: f64 = 1.1;
const LABEL_FONT_SIZE: u32 = 16;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub mode: &'static str,
    pub name: String,
    pub x: Vec<Year>,
    pub y: Vec<f64>,
    pub showlegend: bool,
    pub line: LineStyle,
    pub marker: MarkerStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineStyle {
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerStyle {
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub showlegend: bool,
    pub xaxis: Axis,
    pub shapes: Vec<Shape>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub tickmode: &'static str,
    pub tickvals: Vec<Year>,
}

/// Administration band drawn behind the series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub xref: &'static str,
    pub yref: &'static str,
    pub x0: Year,
    pub y0: f64,
    pub x1: Year,
    pub y1: f64,
    pub fillcolor: &'static str,
    pub opacity: f64,
    pub layer: &'static str,
    pub line: ShapeLine,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<ShapeLabel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeLine {
    pub width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeLabel {
    pub text: String,
    pub textposition: &'static str,
    pub font: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub color: &'static str,
    pub size: u32,
}

impl ChartSpec {
    pub fn series_names(&self) -> Vec<&str> {
        self.data.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// First row per country code, in first-appearance order.
fn series_by_country(dataset: &Dataset) -> Vec<&IndicatorSeries> {
    let codes: Vec<&CountryCode> = dataset.countries();
    codes
        .into_iter()
        .filter_map(|code| dataset.rows().iter().find(|row| &row.country_code == code))
        .collect()
}

fn trace(row: &IndicatorSeries, years: &[Year], position: usize) -> Trace {
    let color = PALETTE[position % PALETTE.len()];
    let (x, y): (Vec<Year>, Vec<f64>) = row.values_for(years).unzip();
    Trace {
        kind: "scatter",
        mode: "lines+markers",
        name: row.country_code.to_string(),
        x,
        y,
        showlegend: true,
        line: LineStyle { color },
        marker: MarkerStyle { color },
    }
}

/// Band over the year slots `period` governs inside `span`. Each plotted
/// year owns `[year, year + 1)`, so an overlapping period always keeps a
/// non-zero width.
fn band(period: &AdministrationPeriod, span: &YearRange) -> Shape {
    let x0 = period.start_year.max(span.start);
    let x1 = period.end_year.min(span.end + 1);
    let label = period.label().map(|text| ShapeLabel {
        text,
        textposition: "top center",
        font: Font {
            color: "black",
            size: LABEL_FONT_SIZE,
        },
    });
    Shape {
        kind: "rect",
        xref: "x",
        yref: "paper",
        x0,
        y0: 0.0,
        x1,
        y1: if period.transition {
            TRANSITION_BAND_TOP
        } else {
            BAND_TOP
        },
        fillcolor: period.color_hint,
        opacity: period.opacity,
        layer: "below",
        line: ShapeLine { width: 0 },
        label,
    }
}

/// Administration bands for the span covered by `years`.
pub fn administration_bands(years: &[Year]) -> Vec<Shape> {
    let (Some(first), Some(last)) = (years.iter().min(), years.iter().max()) else {
        return Vec::new();
    };
    let span = YearRange::new(*first, *last);
    periods_overlapping(&ADMINISTRATIONS, span)
        .into_iter()
        .map(|period| band(period, &span))
        .collect()
}

/// One line-plus-marker series per country, x-axis ticks at exactly `years`.
///
/// Callers are expected to skip rendering for an empty dataset; an empty
/// input still yields a chart with no series.
pub fn render(dataset: &Dataset, years: &[Year]) -> ChartSpec {
    let data: Vec<Trace> = series_by_country(dataset)
        .into_iter()
        .enumerate()
        .map(|(position, row)| trace(row, years, position))
        .collect();
    debug!(series = data.len(), ticks = years.len(), "rendered trend chart");
    ChartSpec {
        data,
        layout: Layout {
            showlegend: true,
            xaxis: Axis {
                tickmode: "array",
                tickvals: years.to_vec(),
            },
            shapes: administration_bands(years),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mxtrend_core::filter::select;
    use std::collections::{BTreeMap, BTreeSet};

    fn gdp_dataset() -> Dataset {
        let years: Vec<Year> = (2003..=2023).collect();
        let series = |code: &str, base: f64| {
            let values: BTreeMap<Year, f64> = years
                .iter()
                .map(|y| (*y, base + f64::from(*y - 2003) * 0.1))
                .collect();
            IndicatorSeries::new("GDP growth (annual %)", CountryCode::new(code), values)
        };
        Dataset::new(years.clone(), vec![series("MEX", 1.2), series("USA", 2.8)]).unwrap()
    }

    #[test]
    fn test_single_country_selection_renders_one_series() {
        let dataset = gdp_dataset();
        let countries = BTreeSet::from([CountryCode::new("MEX")]);
        let selection = select(&dataset, "GDP growth (annual %)", &countries);
        let chart = render(&selection.dataset, selection.dataset.years());

        assert_eq!(chart.series_names(), vec!["MEX"]);
        let expected: Vec<Year> = (2003..=2023).collect();
        assert_eq!(chart.layout.xaxis.tickvals, expected);
        assert_eq!(chart.data[0].x, expected);
        assert_eq!(chart.data[0].mode, "lines+markers");
        assert!(chart.layout.showlegend);
    }

    #[test]
    fn test_sparse_years_get_explicit_ticks() {
        let years = vec![2003, 2010, 2023];
        let values = years.iter().map(|y| (*y, 1.0)).collect();
        let row = IndicatorSeries::new("Gini index", CountryCode::new("MEX"), values);
        let dataset = Dataset::new(years.clone(), vec![row]).unwrap();
        let chart = render(&dataset, dataset.years());
        assert_eq!(chart.layout.xaxis.tickmode, "array");
        assert_eq!(chart.layout.xaxis.tickvals, years);
    }

    #[test]
    fn test_bands_are_clipped_and_transition_unlabeled() {
        let dataset = gdp_dataset();
        let chart = render(&dataset, dataset.years());
        let shapes = &chart.layout.shapes;
        assert_eq!(shapes.len(), 4);
        assert!(shapes.iter().all(|s| s.layer == "below"));

        assert!(shapes[0].label.is_none());
        assert_eq!((shapes[0].x0, shapes[0].x1), (2005, 2006));
        let labels: Vec<&str> = shapes[1..]
            .iter()
            .map(|s| s.label.as_ref().unwrap().text.as_str())
            .collect();
        assert_eq!(labels, vec!["PAN<br>(Calderón)", "PRI<br>(Peña Nieto)", "MORENA<br>(AMLO)"]);
        assert_eq!((shapes[3].x0, shapes[3].x1), (2018, 2024));
    }

    #[test]
    fn test_span_ending_on_period_start_keeps_that_band() {
        let years: Vec<Year> = (2003..=2018).collect();
        let bands = administration_bands(&years);
        let extents: Vec<(Year, Year)> = bands.iter().map(|s| (s.x0, s.x1)).collect();
        assert_eq!(extents, vec![(2005, 2006), (2006, 2012), (2012, 2018), (2018, 2019)]);
        assert_eq!(bands[3].label.as_ref().unwrap().text, "MORENA<br>(AMLO)");
    }

    #[test]
    fn test_single_year_chart_gets_its_band() {
        let values = BTreeMap::from([(2020, 1.0)]);
        let row = IndicatorSeries::new("Gini index", CountryCode::new("MEX"), values);
        let dataset = Dataset::new(vec![2020], vec![row]).unwrap();
        let chart = render(&dataset, dataset.years());
        let overlapping = periods_overlapping(&ADMINISTRATIONS, YearRange::new(2020, 2020));
        assert_eq!(chart.layout.shapes.len(), overlapping.len());
        assert_eq!((chart.layout.shapes[0].x0, chart.layout.shapes[0].x1), (2020, 2021));
    }

    #[test]
    fn test_every_overlapping_period_gets_a_band() {
        for last in 2004..=2024 {
            let years: Vec<Year> = (2003..=last).collect();
            let span = YearRange::new(2003, last);
            let bands = administration_bands(&years);
            assert_eq!(bands.len(), periods_overlapping(&ADMINISTRATIONS, span).len());
            assert!(bands.iter().all(|s| s.x0 < s.x1), "empty band for 2003..={last}");
        }
    }

    #[test]
    fn test_years_outside_all_periods_get_no_band() {
        assert!(administration_bands(&[1995, 1996, 1997]).is_empty());
        assert!(administration_bands(&[]).is_empty());
    }

    #[test]
    fn test_colors_follow_series_order() {
        let dataset = gdp_dataset();
        let chart = render(&dataset, dataset.years());
        assert_eq!(chart.data[0].line.color, PALETTE[0]);
        assert_eq!(chart.data[1].marker.color, PALETTE[1]);
    }

    #[test]
    fn test_render_is_byte_identical() {
        let dataset = gdp_dataset();
        let a = render(&dataset, dataset.years()).to_json().unwrap();
        let b = render(&dataset, dataset.years()).to_json().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_json_uses_plotly_field_names() {
        let dataset = gdp_dataset();
        let json: serde_json::Value =
            serde_json::from_str(&render(&dataset, dataset.years()).to_json().unwrap()).unwrap();
        assert_eq!(json["data"][0]["type"], "scatter");
        assert_eq!(json["layout"]["xaxis"]["tickmode"], "array");
        assert_eq!(json["layout"]["shapes"][1]["type"], "rect");
        assert_eq!(json["layout"]["shapes"][1]["yref"], "paper");
        assert!(json["layout"]["shapes"][0].get("label").is_none());
    }

    #[test]
    fn test_empty_dataset_renders_no_series() {
        let chart = render(&Dataset::default(), &[]);
        assert!(chart.data.is_empty());
        assert!(chart.layout.shapes.is_empty());
    }
}
