//! matrix-screen - full-screen Matrix-style digital rain for the terminal.
//!
//! One alternate-screen surface, one recurring timer: every tick appends a
//! line of random characters sized to the terminal and scrolls it into view.

mod config;
mod core;
mod frontend;
mod rain;
mod stats;
mod theme;
mod widgets;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::core::AppCore;
use crate::frontend::{Frontend, TuiFrontend};

#[derive(Parser)]
#[command(name = "matrix-screen")]
#[command(about = "Matrix-style digital rain for the terminal", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Custom data directory (default: ~/.matrix-screen)
    /// Can also be set via MATRIX_SCREEN_DIR environment variable
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Milliseconds between appended lines (overrides the config value)
    #[arg(short, long)]
    interval: Option<u64>,
}

fn main() -> Result<()> {
    // Initialize logging to file (use RUST_LOG env var to control level)
    // A TUI owns stdout, so we write to a file
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("matrix-screen.log")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false) // No color codes in log file
        .init();

    let cli = Cli::parse();

    // Set custom data directory if specified
    if let Some(data_dir) = &cli.data_dir {
        std::env::set_var("MATRIX_SCREEN_DIR", data_dir);
        tracing::info!("Using custom data directory: {:?}", data_dir);
    }

    // Load configuration
    let mut config = if let Some(config_path) = &cli.config {
        Config::load_from_path(config_path)?
    } else {
        Config::load()?
    };
    if let Some(interval) = cli.interval {
        config.animation.update_interval_ms = interval;
    }

    run_tui(config)
}

/// Run the terminal frontend on a tokio runtime.
fn run_tui(config: Config) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async_run_tui(config))
}

/// Async main loop: drain input, repaint when dirty, and let the interval
/// timer drive one tick per period.
async fn async_run_tui(config: Config) -> Result<()> {
    let mut frontend = TuiFrontend::new().context("Failed to initialize terminal frontend")?;
    let (width, height) = frontend.size();
    let mut app_core = AppCore::new(config, width, height);

    // The recurring schedule: the first tick completes immediately, so the
    // first line lands as soon as the loop starts.
    let mut ticker = tokio::time::interval(app_core.update_interval());
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    let poll_interval = Duration::from_millis(app_core.config.ui.poll_timeout_ms.max(1));

    while app_core.running {
        for event in frontend.poll_events()? {
            app_core.handle_event(&event);
        }

        if app_core.needs_render {
            let started = Instant::now();
            frontend.render(&mut app_core)?;
            app_core.stats.record_render(started.elapsed());
            app_core.needs_render = false;
        }

        tokio::select! {
            _ = ticker.tick(), if !app_core.paused => {
                let started = Instant::now();
                app_core.tick();
                app_core.stats.record_tick(started.elapsed());
            }
            _ = tokio::time::sleep(poll_interval) => {}
        }
    }

    frontend.cleanup()?;
    tracing::info!(
        lines = app_core.stats.lines_appended(),
        avg_tick_us = app_core.stats.avg_tick_time().as_micros() as u64,
        avg_render_us = app_core.stats.avg_render_time().as_micros() as u64,
        uptime_s = app_core.stats.uptime().as_secs(),
        "Session ended"
    );

    Ok(())
}
