//! GenZ - a tiny social feed as a terminal app
//!
//! This library exposes modules for use in integration tests.

pub mod app;
pub mod cli;
pub mod error;
pub mod history;
pub mod logging;
pub mod models;
pub mod router;
pub mod state;
pub mod terminal;
pub mod ui;
