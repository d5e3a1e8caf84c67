//! `ddnsly-tui` — Terminal dashboard for managing DDNS client links.
//!
//! Built on [ratatui](https://ratatui.rs) over the `ddnsly-core` registry.
//! One dashboard screen: stat cards above the client table, with the
//! add/edit form, delete confirmation, and help rendered as overlays.
//!
//! Logs are written to a file (default `/tmp/ddnsly-tui.log`) to avoid
//! corrupting the terminal UI.
//!
//! Entry point: CLI argument parsing, tracing setup, panic hooks, and
//! app launch.

mod action;
mod app;
mod component;
mod event;
mod screens;
mod theme;
mod tui;
mod widgets;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use ddnsly_config::seed_registry;

use crate::app::App;

/// Terminal dashboard for managing DDNS client links.
#[derive(Parser, Debug)]
#[command(name = "ddnsly-tui", version, about)]
struct Cli {
    /// Config file path (defaults to the platform config directory)
    #[arg(long, env = "DDNSLY_CONFIG")]
    config: Option<PathBuf>,

    /// Log file path (defaults to /tmp/ddnsly-tui.log)
    #[arg(long, default_value = "/tmp/ddnsly-tui.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Set up file-based tracing. We MUST NOT log to stdout/stderr — that would
/// corrupt the TUI output. Returns a guard that must be held for the
/// lifetime of the application to ensure logs are flushed.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ddnsly_tui={log_level}")));

    let log_dir = cli
        .log_file
        .parent()
        .unwrap_or(std::path::Path::new("/tmp"));
    let log_filename = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("ddnsly-tui.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Install panic/error hooks BEFORE entering the terminal
    tui::install_hooks()?;

    // Tracing to file — hold the guard so logs flush on exit
    let _log_guard = setup_tracing(&cli);

    let cfg = match &cli.config {
        Some(path) => ddnsly_config::load_config_at(path)?,
        None => ddnsly_config::load_config_or_default(),
    };
    let registry = seed_registry(&cfg);

    info!(clients = registry.len(), "starting ddnsly-tui");

    let mut app = App::new(registry);
    app.run().await?;

    Ok(())
}
