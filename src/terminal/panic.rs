//! Panic hook for terminal restoration.
//!
//! Restores the terminal to a usable state when the application
//! panics, so the user's shell is not left in raw mode with the
//! alternate screen active.

use super::setup::emergency_restore;
use std::panic;

/// Install a panic hook that restores the terminal.
///
/// Call this early in `main()`, before entering TUI mode. The hook
/// restores the terminal first, then chains to the original hook so
/// the panic message still prints readably.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        original_hook(panic_info);
    }));
}
