//! Common test utilities for integration tests.
//!
//! Helpers for driving the app the way the event loop does: render a
//! frame into a test backend, click registered hit areas, and type
//! keys.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use genz::app::App;
use genz::ui;
use genz::ui::interaction::ClickAction;

/// Render a frame at the given size and return the buffer as a string.
/// Also repopulates the app's hit registry, so clicks can follow.
pub fn draw(app: &mut App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    app.update_terminal_dimensions(width, height);

    terminal
        .draw(|f| {
            ui::render(f, &mut *app);
        })
        .expect("draw frame");
    app.needs_redraw = false;

    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

/// Click the first registered hit area whose action satisfies the
/// predicate, going through the same hit test the event loop uses.
/// Returns false when no such area is on screen.
pub fn click_where(app: &mut App, pred: impl Fn(&ClickAction) -> bool) -> bool {
    let target = app
        .hit_registry
        .areas()
        .iter()
        .find(|area| pred(&area.action))
        .map(|area| (area.rect.x, area.rect.y));

    let Some((x, y)) = target else {
        return false;
    };
    let Some(action) = app.hit_registry.hit_test(x, y) else {
        return false;
    };
    ui::handle_click_action(app, action);
    true
}

/// Press a single key with no modifiers.
pub fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

/// Type a string character by character.
pub fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        press(app, KeyCode::Char(c));
    }
}
