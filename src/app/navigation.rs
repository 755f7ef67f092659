//! Navigation methods for the App.
//!
//! Links resolve through [`classify_href`]: in-app paths push onto the
//! history stack and re-derive the route, external and mailto links go
//! to the OS, anchors do nothing. Back/forward move the history cursor
//! and re-derive the same way.

use super::{App, DetailState, Focus, HomeForm, UsersState};
use crate::error::GenzError;
use crate::router::match_route;
use crate::ui::interaction::{classify_href, LinkKind};

impl App {
    /// Follow a link by href, the way a click on it would.
    pub fn follow_link(&mut self, href: &str) {
        match classify_href(href) {
            None | Some(LinkKind::Anchor) => {}
            Some(LinkKind::External) | Some(LinkKind::Mailto) => {
                if let Err(err) = open::that_detached(href).map_err(|source| GenzError::Browser {
                    url: href.to_string(),
                    source,
                }) {
                    tracing::warn!("{err}");
                }
            }
            Some(LinkKind::InApp) => self.navigate(href),
        }
    }

    /// Navigate to an in-app path: push it onto history and re-derive
    /// the route. Navigating to the current path is a no-op, leaving
    /// screen state untouched.
    pub fn navigate(&mut self, path: &str) {
        if path == self.history.current() {
            return;
        }
        self.history.push(path);
        self.apply_route();
    }

    /// Move one entry back in history, re-deriving the route.
    pub fn history_back(&mut self) {
        if self.history.back() {
            self.apply_route();
        }
    }

    /// Move one entry forward in history, re-deriving the route.
    pub fn history_forward(&mut self) {
        if self.history.forward() {
            self.apply_route();
        }
    }

    /// Re-derive the route from the current history entry and reset
    /// all per-screen view state. Form drafts, the edit toggle, and
    /// the selected member never survive a route change.
    fn apply_route(&mut self) {
        self.route = match_route(self.history.current());
        self.home_form = HomeForm::default();
        self.detail = DetailState::default();
        self.users_state = UsersState::default();
        self.focus = Focus::Page;
        self.mark_dirty();
        tracing::debug!(path = self.history.current(), route = ?self.route, "route changed");
    }

    /// Show a member's posts on the users screen.
    pub fn select_user(&mut self, user_id: String) {
        if let Some(pos) = self.store.users().iter().position(|u| u.id == user_id) {
            self.users_state.cursor = pos;
        }
        self.users_state.selected = Some(user_id);
    }

    /// Move the users-screen cursor up one row.
    pub fn move_user_cursor_up(&mut self) {
        if self.users_state.cursor > 0 {
            self.users_state.cursor -= 1;
        }
    }

    /// Move the users-screen cursor down one row.
    pub fn move_user_cursor_down(&mut self) {
        let max = self.store.users().len();
        if max > 0 && self.users_state.cursor < max - 1 {
            self.users_state.cursor += 1;
        }
    }

    /// Select the member under the cursor.
    pub fn select_user_under_cursor(&mut self) {
        if let Some(user) = self.store.users().get(self.users_state.cursor) {
            let id = user.id.clone();
            self.select_user(id);
        }
    }
}
