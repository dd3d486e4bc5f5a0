//! Tracing setup.
//!
//! The terminal belongs to the UI, so records go to a daily-rotating file
//! under the local data directory (`~/.local/share/componentkit/logs/` on
//! Linux). `RUST_LOG` overrides the filter, e.g.
//! `RUST_LOG=componentkit::table=debug` to trace sort and selection events.

use std::path::PathBuf;

use anyhow::{anyhow, Context};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

const APP_DIR: &str = "componentkit";
const FALLBACK_FILTER: &str = "componentkit=info,warn";

/// Install the global subscriber.
///
/// Fails when the log directory cannot be resolved or created, or when a
/// subscriber is already installed. Callers treat that as non-fatal.
pub fn init() -> anyhow::Result<()> {
    let dir = log_dir()?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("creating log directory {}", dir.display()))?;

    let writer = RollingFileAppender::new(Rotation::DAILY, &dir, format!("{APP_DIR}.log"));
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .try_init()
        .context("installing tracing subscriber")?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), log_dir = %dir.display(), "starting");
    Ok(())
}

fn log_dir() -> anyhow::Result<PathBuf> {
    dirs::data_local_dir()
        .map(|base| base.join(APP_DIR).join("logs"))
        .ok_or_else(|| anyhow!("no local data directory on this platform"))
}

/// Where log files are written, if the platform has a data directory.
pub fn log_directory() -> Option<PathBuf> {
    log_dir().ok()
}

pub fn shutdown() {
    tracing::info!("exiting");
}
