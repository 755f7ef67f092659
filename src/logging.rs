//! File-based tracing setup.
//!
//! The TUI owns stdout, so logs go to `~/.genz/genz.log` instead.
//! Logging is off unless the `GENZ_LOG` environment variable holds a
//! tracing filter (e.g. `GENZ_LOG=debug` or `GENZ_LOG=genz=trace`).

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{GenzError, GenzResult};

/// Environment variable holding the tracing filter.
const LOG_ENV: &str = "GENZ_LOG";

/// Initialize file logging when `GENZ_LOG` is set.
///
/// Returns the log file path when logging was enabled, `None` when the
/// variable is unset. Must be called before the terminal enters raw
/// mode so early failures still print normally.
pub fn init() -> GenzResult<Option<PathBuf>> {
    let Ok(filter) = std::env::var(LOG_ENV) else {
        return Ok(None);
    };

    let path = log_file_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| GenzError::LogFile {
            path: path.clone(),
            source,
        })?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| GenzError::LogFile {
            path: path.clone(),
            source,
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    tracing::info!("logging initialized");
    Ok(Some(path))
}

/// `~/.genz/genz.log`, falling back to the working directory when no
/// home directory is known.
fn log_file_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".genz")
        .join("genz.log")
}
