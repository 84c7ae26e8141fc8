use std::collections::BTreeSet;
use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};
use mxtrend_cli::Commands;
use mxtrend_core::{CountryCode, Dataset, DefaultSelection};
use mxtrend_io::{SnapshotStore, SourceId};

pub mod countries;
pub mod data;
pub mod guide;
pub mod indicators;
pub mod panel;
pub mod periods;
pub mod validate;

/// Shared state for one invocation.
pub struct AppContext {
    pub store: SnapshotStore,
    pub defaults: DefaultSelection,
}

impl AppContext {
    pub fn load(&self, source: &SourceId) -> Result<Arc<Dataset>> {
        self.store
            .load(source)
            .with_context(|| format!("loading snapshot '{source}'"))
    }
}

/// Country codes as typed on the command line; blanks are dropped.
pub fn parse_countries(raw: &[String]) -> BTreeSet<CountryCode> {
    raw.iter()
        .map(|code| code.trim())
        .filter(|code| !code.is_empty())
        .map(|code| CountryCode::new(code.to_ascii_uppercase()))
        .collect()
}

pub fn run<W: Write>(command: &Commands, ctx: &AppContext, out: &mut W) -> Result<()> {
    match command {
        Commands::Panel {
            source,
            selection,
            format,
            chart_out,
            show_data,
        } => panel::handle(
            ctx,
            &panel::PanelRequest {
                source,
                selection,
                format: *format,
                chart_out: chart_out.as_deref(),
                show_data: *show_data,
            },
            out,
        ),
        Commands::Indicators { source } => indicators::handle(ctx, source, out),
        Commands::Guide { category, format } => guide::handle(*category, *format, out),
        Commands::Countries { codes } => countries::handle(codes, out),
        Commands::Periods {
            from,
            to,
            year,
            format,
        } => match year {
            Some(year) => periods::handle_year(*year, *format, out),
            None => periods::handle(*from, *to, *format, out),
        },
        Commands::Data {
            source,
            indicator,
            countries,
            csv,
        } => data::handle(ctx, source, indicator.as_deref(), countries, *csv, out),
        Commands::Validate { source } => validate::handle(ctx, source, out),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::AppContext;
    use mxtrend_core::DefaultSelection;
    use mxtrend_io::SnapshotStore;
    use std::path::PathBuf;

    pub fn snapshot_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../test_data/snapshots")
    }

    pub fn context() -> AppContext {
        AppContext {
            store: SnapshotStore::new(snapshot_dir()),
            defaults: DefaultSelection::default(),
        }
    }

    pub fn output(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }
}
