//! File logging
//!
//! The TUI owns stdout, so logs go to `<cache_dir>/dcol/dcol.log` and only
//! when `DCOL_LOG` holds a filter directive such as `debug` or `dcol=trace`.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "DCOL_LOG";

pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join("dcol").join("dcol.log"))
}

/// Install the global subscriber if logging was requested
pub fn init() -> Result<()> {
    let Ok(directive) = std::env::var(LOG_ENV) else {
        return Ok(());
    };
    let Some(path) = log_path() else {
        return Ok(());
    };

    let filter = EnvFilter::try_new(&directive).map_err(|e| Error::Logging(e.to_string()))?;

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging started");
    Ok(())
}
