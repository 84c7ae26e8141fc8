use clap::Parser;
use mxtrend_cli::{load_config, Cli};
use mxtrend_io::SnapshotStore;
use std::io::{self, Write};
use std::process;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

mod commands;

use commands::AppContext;

fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err:#}");
            process::exit(2);
        }
    };

    let level = match cli.log_level {
        Some(level) => level,
        None => config.logging.level().unwrap_or_else(|err| {
            eprintln!("warning: {err:#}; using info");
            tracing::Level::INFO
        }),
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let data_dir = cli.data_dir.clone().unwrap_or_else(|| config.data.dir.clone());
    info!("Reading snapshots from {}", data_dir.display());

    let ctx = AppContext {
        store: SnapshotStore::new(data_dir),
        defaults: config.selection.to_default_selection(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = commands::run(&cli.command, &ctx, &mut out).and_then(|()| {
        out.flush()?;
        Ok(())
    });

    if let Err(err) = result {
        error!("{err:#}");
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}
