//! Tracing setup for the desktop app.
//!
//! Events from this crate are written at `info` and above to stderr and to
//! one daily file, `customer_desk.<date>.log`, under the platform data
//! directory. Other crates (eframe, winit, polars) only get through at `warn`.
//! `RUST_LOG` replaces the whole filter when set.

use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_DIRECTIVES: &str = "warn,customer_desk=info";

const LOG_FILE_PREFIX: &str = "customer_desk";
const KEEP_LOG_FILES: usize = 7;

/// `<data dir>/customer_desk/logs`, created if missing.
///
/// # Errors
///
/// Fails when the platform has no data directory or it cannot be created.
pub fn log_dir() -> Result<PathBuf> {
    let dir = dirs::data_dir()
        .context("Failed to determine data directory")?
        .join("customer_desk")
        .join("logs");
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
    Ok(dir)
}

fn file_appender(dir: &Path) -> Result<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .max_log_files(KEEP_LOG_FILES)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .build(dir)
        .context("Failed to create log file appender")
}

fn filter_from(directives: Option<&str>) -> Result<EnvFilter> {
    let directives = directives.unwrap_or(DEFAULT_DIRECTIVES);
    EnvFilter::try_new(directives).with_context(|| format!("Invalid log filter '{directives}'"))
}

/// Installs the global subscriber and returns the directory logs go to.
///
/// # Errors
///
/// Fails if the log directory or file cannot be set up, if `RUST_LOG` does not
/// parse, or if a subscriber is already installed.
pub fn init() -> Result<PathBuf> {
    let dir = log_dir()?;
    let appender = file_appender(&dir)?;
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = filter_from(from_env.as_deref())?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .with(fmt::layer().with_ansi(false).with_writer(appender))
        .try_init()
        .context("A global subscriber is already installed")?;

    Ok(dir)
}
