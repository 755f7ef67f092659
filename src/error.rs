//! Error types for the process edges.
//!
//! The feed itself has no failure modes: bad submissions are silently
//! dropped and unknown routes render a not-found screen. The only
//! operations that can genuinely fail are the ones touching the outside
//! world - terminal mode switching, the log file, and handing a link to
//! the OS browser - and those are collected here.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias for fallible setup and I/O paths.
pub type GenzResult<T> = Result<T, GenzError>;

/// Failures at the boundary between the app and its host environment.
#[derive(Debug, Error)]
pub enum GenzError {
    /// Raw-mode or alternate-screen switching failed.
    #[error("terminal setup failed: {0}")]
    Terminal(#[from] std::io::Error),

    /// The log file could not be created or opened.
    #[error("could not open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The OS refused to open an external link.
    #[error("could not open {url} in the system browser: {source}")]
    Browser {
        url: String,
        #[source]
        source: std::io::Error,
    },
}
