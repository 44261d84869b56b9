//! Interactive text menu for the task tracker.
//!
//! Logs go to stderr so the menu on stdout stays readable.

use clap::Parser;
use std::{io, path::PathBuf};
use task_tracker::{menu::MenuSession, DeadlineOrder, ExportFormat, TrackerConfig};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Single-user in-memory task tracker
#[derive(Parser)]
#[command(name = "task-tracker", about, version)]
struct Cli {
    /// Default export destination used when the export prompt is left blank
    #[arg(long)]
    export_path: Option<PathBuf>,

    /// Deadline ordering: lexicographic (raw DD-MM-YYYY text) or chronological
    #[arg(long)]
    deadline_order: Option<DeadlineOrder>,

    /// Export format: csv or json
    #[arg(long)]
    format: Option<ExportFormat>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "task_tracker=debug"
    } else {
        "task_tracker=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut config = TrackerConfig::from_env()?;
    if let Some(path) = cli.export_path {
        config.export_path = path;
    }
    if let Some(order) = cli.deadline_order {
        config.deadline_order = order;
    }
    if let Some(format) = cli.format {
        config.export_format = format;
    }
    info!(?config, "starting task tracker");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let stdin = io::stdin();
    let mut session = MenuSession::new(stdin.lock(), io::stdout(), config);
    runtime.block_on(session.run())?;

    Ok(())
}
