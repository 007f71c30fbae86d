//! Tracing setup.
//!
//! The browser owns the terminal, so log output goes to
//! `~/.local/share/bootup/bootup.log` rather than stderr. The filter comes
//! from `BOOTUP_LOG` (same syntax as `RUST_LOG`) and defaults to
//! `bootup=info`.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_ENV: &str = "BOOTUP_LOG";
const DEFAULT_FILTER: &str = "bootup=info";

/// Path of the log file.
pub fn log_path() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "bootup")
        .context("Could not determine data directory")?;
    Ok(dirs.data_local_dir().join("bootup.log"))
}

fn log_writer() -> Result<BoxMakeWriter> {
    let path = log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;
    Ok(BoxMakeWriter::new(Mutex::new(file)))
}

/// Install the global subscriber. If the log file cannot be opened, events
/// are discarded rather than written over the UI.
pub fn init() {
    let writer = log_writer().unwrap_or_else(|_| BoxMakeWriter::new(std::io::sink));

    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A second init (tests, embedding) is harmless
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .try_init();
}
