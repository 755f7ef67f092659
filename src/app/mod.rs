//! Application state and logic.
//!
//! The [`App`] struct is the application root: it owns the feed store,
//! the navigation history, the derived route, and the per-screen view
//! state. Everything the event loop and the renderer touch hangs off
//! this one value.

mod handlers;
mod navigation;
mod types;

pub use types::{DetailMode, DetailState, Focus, FormField, HomeForm, UsersState};

use crate::history::History;
use crate::router::{match_route, Route};
use crate::state::FeedStore;
use crate::ui::interaction::HitAreaRegistry;

/// Main application state.
pub struct App {
    /// In-memory feed data; all mutation goes through its named ops
    pub store: FeedStore,
    /// Navigation history stack
    pub history: History,
    /// Route derived from the current history entry
    pub route: Route,
    /// What keyboard input currently targets
    pub focus: Focus,
    /// Create-post form drafts (home screen)
    pub home_form: HomeForm,
    /// View/edit state of the post detail screen
    pub detail: DetailState,
    /// Cursor and selection on the users screen
    pub users_state: UsersState,
    /// Clickable regions registered by the last render
    pub hit_registry: HitAreaRegistry,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Dirty flag: when true, the UI needs to be redrawn.
    /// Set on state mutations, cleared after each draw.
    pub needs_redraw: bool,
    /// Tick counter for animations
    pub tick_count: u64,
    /// Current terminal width in columns
    pub terminal_width: u16,
    /// Current terminal height in rows
    pub terminal_height: u16,
}

impl App {
    /// Create an app starting at the feed root.
    pub fn new() -> Self {
        Self::at_path("/")
    }

    /// Create an app starting at an arbitrary path. Unknown paths land
    /// on the not-found screen, same as navigating there would.
    pub fn at_path(path: &str) -> Self {
        let history = History::new(path);
        let route = match_route(path);
        Self {
            store: FeedStore::seeded(),
            history,
            route,
            focus: Focus::default(),
            home_form: HomeForm::default(),
            detail: DetailState::default(),
            users_state: UsersState::default(),
            hit_registry: HitAreaRegistry::new(),
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            terminal_width: 0,
            terminal_height: 0,
        }
    }

    /// Increment the animation tick counter.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
    }

    /// Request a redraw on the next loop iteration.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Mark the app to quit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Record new terminal dimensions after a resize event.
    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.mark_dirty();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
