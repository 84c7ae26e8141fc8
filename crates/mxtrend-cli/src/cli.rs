use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum, ValueHint};
use mxtrend_core::{Category, Year};
use mxtrend_io::SourceId;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "mxtrend",
    author,
    version,
    about = "Indicator trends across the last federal administrations",
    long_about = None
)]
pub struct Cli {
    /// Set the logging level (overrides the config file)
    #[arg(long, global = true)]
    pub log_level: Option<tracing::Level>,

    /// Directory holding General.csv, PIB.csv and Social.csv
    #[arg(long, global = true, value_hint = ValueHint::DirPath)]
    pub data_dir: Option<PathBuf>,

    /// Configuration file (default: ~/.mxtrend/config/mxtrend.toml)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compose the chart and guide text for one indicator
    Panel {
        #[command(flatten)]
        source: SourceArgs,
        #[command(flatten)]
        selection: SelectionArgs,
        /// Output format for stdout
        #[arg(long, value_enum, default_value_t = PanelFormat::Markdown)]
        format: PanelFormat,
        /// Write the plotly figure JSON to this file
        #[arg(long, value_hint = ValueHint::FilePath)]
        chart_out: Option<PathBuf>,
        /// Also print the selected rows
        #[arg(long)]
        show_data: bool,
    },
    /// List the indicators present in a snapshot
    Indicators {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Print an indicator guide catalog
    Guide {
        /// Catalog to print
        #[arg(long, default_value = "general")]
        category: Category,
        #[arg(long, value_enum, default_value_t = ListFormat::Table)]
        format: ListFormat,
    },
    /// Print the country code guide
    Countries {
        /// Only these codes (default: the whole guide)
        #[arg(value_delimiter = ',')]
        codes: Vec<String>,
    },
    /// Print the administration periods overlapping a year range
    Periods {
        /// First year of the range (default: start of the period table)
        #[arg(long)]
        from: Option<Year>,
        /// Last year of the range (default: end of the period table)
        #[arg(long)]
        to: Option<Year>,
        /// Only the administration governing this year
        #[arg(long, conflicts_with_all = ["from", "to"])]
        year: Option<Year>,
        #[arg(long, value_enum, default_value_t = ListFormat::Table)]
        format: ListFormat,
    },
    /// Dump the (filtered) snapshot rows
    Data {
        #[command(flatten)]
        source: SourceArgs,
        /// Keep only this indicator
        #[arg(long, short)]
        indicator: Option<String>,
        /// Keep only these countries (repeat or comma-separate)
        #[arg(long = "country", short = 'c', value_delimiter = ',')]
        countries: Vec<String>,
        /// Write CSV instead of an aligned table
        #[arg(long)]
        csv: bool,
    },
    /// Check that every indicator in a snapshot has a guide entry
    Validate {
        #[command(flatten)]
        source: SourceArgs,
    },
}

#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Snapshot: a category (general, economic, social) or a CSV path
    #[arg(long, short, default_value = "general")]
    pub source: SourceId,

    /// Guide catalog (default: the source's category, general for paths)
    #[arg(long, short = 'g')]
    pub guide: Option<Category>,
}

impl SourceArgs {
    pub fn catalog_category(&self) -> Category {
        self.guide
            .or_else(|| self.source.category())
            .unwrap_or(Category::General)
    }
}

#[derive(Args, Debug, Clone)]
pub struct SelectionArgs {
    /// Canonical (English) indicator name (default: the configured index)
    #[arg(long, short)]
    pub indicator: Option<String>,

    /// Country codes to plot (default: the home country)
    #[arg(long = "country", short = 'c', value_delimiter = ',')]
    pub countries: Vec<String>,

    /// Select no countries at all
    #[arg(long, conflicts_with = "countries")]
    pub no_countries: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelFormat {
    Markdown,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListFormat {
    Table,
    Json,
}

pub fn build_cli_command() -> clap::Command {
    Cli::command()
}
