//! Terminal setup and teardown functions.
//!
//! Low-level functions for entering and leaving TUI mode. Teardown is
//! written to be safe to call multiple times and never panics.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Enter TUI mode.
///
/// Enters the alternate screen (preserving the caller's terminal
/// content) and enables mouse capture for click and hover events.
///
/// # Errors
///
/// Returns an error if any terminal command fails.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, EnableMouseCapture)
}

/// Leave TUI mode and restore the terminal to its normal state.
///
/// Cleanup order: raw mode off first so the terminal accepts normal
/// output, then mouse capture off, alternate screen off, and finally
/// the cursor back on. Errors are ignored; this runs on every exit
/// path including panics.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();

    let _ = execute!(writer, DisableMouseCapture, LeaveAlternateScreen);
    let _ = writer.flush();

    let _ = execute!(writer, Show);
}

/// Restore the terminal after a panic or error.
///
/// A more aggressive cleanup that combines all steps and ignores all
/// errors, for use when the terminal state is unknown.
pub fn emergency_restore() {
    let mut stdout = io::stdout();
    leave_tui_mode(&mut stdout);
}
