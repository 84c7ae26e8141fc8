//! Chart plus descriptive text for one selection.

use std::fmt::Write as _;

use mxtrend_core::guide::{lookup, GuideCatalog};
use mxtrend_core::{Selection, TrendResult};
use serde::Serialize;
use tracing::info;

use crate::chart::{render, ChartSpec};

/// Shown instead of a chart when the selection matched no rows.
pub const EMPTY_SELECTION_NOTICE: &str = "Seleccione algún país para ver la tendencia.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Description {
    pub definition: String,
    pub purpose: String,
    pub importance: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    /// Canonical indicator name the panel was built for
    pub indicator: String,
    /// Translated label from the guide
    pub title: String,
    pub chart: ChartSpec,
    pub description: Description,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum PanelView {
    Ready(Panel),
    Empty { notice: String },
}

impl PanelView {
    pub fn is_empty(&self) -> bool {
        matches!(self, PanelView::Empty { .. })
    }

    pub fn to_markdown(&self) -> String {
        match self {
            PanelView::Ready(panel) => panel.to_markdown(),
            PanelView::Empty { notice } => format!("> {notice}\n"),
        }
    }
}

impl Panel {
    /// Side panel text; guide fields are copied without modification.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "### {}\n", self.title);
        let _ = writeln!(out, "#### Definición\n{}\n", self.description.definition);
        let _ = writeln!(out, "#### Propósito\n{}\n", self.description.purpose);
        let _ = writeln!(out, "#### Importancia\n{}", self.description.importance);
        out
    }
}

/// Build the panel for `selection`.
///
/// An empty selection yields [`PanelView::Empty`] without touching the
/// guide. Otherwise the selection's indicator must exist in `catalog`.
pub fn compose(selection: &Selection, catalog: &GuideCatalog) -> TrendResult<PanelView> {
    if selection.is_empty() {
        return Ok(PanelView::Empty {
            notice: EMPTY_SELECTION_NOTICE.to_string(),
        });
    }

    let entry = lookup(catalog, &selection.indicator)?;
    let chart = render(&selection.dataset, selection.dataset.years());
    info!(
        indicator = %selection.indicator,
        series = chart.data.len(),
        "composed panel"
    );
    Ok(PanelView::Ready(Panel {
        indicator: selection.indicator.clone(),
        title: entry.translated_label.to_string(),
        chart,
        description: Description {
            definition: entry.definition.to_string(),
            purpose: entry.purpose.to_string(),
            importance: entry.importance.to_string(),
        },
    }))
}
