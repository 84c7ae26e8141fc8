use std::collections::BTreeSet;
use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use mxtrend_cli::{PanelFormat, SelectionArgs, SourceArgs};
use mxtrend_core::guide::catalog;
use mxtrend_core::{select, CountryCode, Dataset};
use mxtrend_io::table::write_table;
use mxtrend_viz::{compose, PanelView};
use serde::Serialize;
use tracing::{info, warn};

use super::{parse_countries, AppContext};

pub struct PanelRequest<'a> {
    pub source: &'a SourceArgs,
    pub selection: &'a SelectionArgs,
    pub format: PanelFormat,
    pub chart_out: Option<&'a Path>,
    pub show_data: bool,
}

#[derive(Serialize)]
struct PanelOutput<'a> {
    panel: &'a PanelView,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a Dataset>,
}

fn requested_countries(selection: &SelectionArgs, ctx: &AppContext) -> BTreeSet<CountryCode> {
    if selection.no_countries {
        BTreeSet::new()
    } else if selection.countries.is_empty() {
        ctx.defaults.countries()
    } else {
        parse_countries(&selection.countries)
    }
}

pub fn handle<W: Write>(ctx: &AppContext, req: &PanelRequest<'_>, out: &mut W) -> Result<()> {
    let dataset = ctx.load(&req.source.source)?;

    let indicator = match &req.selection.indicator {
        Some(name) => name.clone(),
        None => match ctx.defaults.indicator(&dataset) {
            Some(name) => name.to_string(),
            None => {
                warn!("snapshot '{}' has no complete rows", req.source.source);
                String::new()
            }
        },
    };
    let countries = requested_countries(req.selection, ctx);
    info!(
        "Composing panel for '{}' ({} countries) from {}",
        indicator,
        countries.len(),
        req.source.source
    );

    let selection = select(&dataset, &indicator, &countries);
    let guide = catalog(req.source.catalog_category());
    let view = compose(&selection, guide)
        .with_context(|| format!("composing panel for '{indicator}'"))?;

    match req.format {
        PanelFormat::Markdown => {
            write!(out, "{}", view.to_markdown())?;
            if req.show_data {
                writeln!(out, "\n### Datos\n")?;
                write_table(&selection.dataset, &mut *out)?;
            }
        }
        PanelFormat::Json => {
            let output = PanelOutput {
                panel: &view,
                data: req.show_data.then_some(&selection.dataset),
            };
            serde_json::to_writer_pretty(&mut *out, &output)?;
            writeln!(out)?;
        }
    }

    if let Some(path) = req.chart_out {
        match &view {
            PanelView::Ready(panel) => {
                fs::write(path, panel.chart.to_json_pretty()?)
                    .with_context(|| format!("writing chart to {}", path.display()))?;
                info!("Chart written to {}", path.display());
            }
            PanelView::Empty { .. } => info!("Empty selection; no chart written"),
        }
    }
    Ok(())
}
