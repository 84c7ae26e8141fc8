//! # mxtrend-viz: Trend Charts and Panels
//!
//! - [`chart`] - plotly-compatible [`ChartSpec`] with administration bands
//! - [`panel`] - [`compose`] a chart with its guide text into a [`PanelView`]

pub mod chart;
pub mod panel;

pub use chart::{render, ChartSpec};
pub use panel::{compose, Panel, PanelView, EMPTY_SELECTION_NOTICE};
