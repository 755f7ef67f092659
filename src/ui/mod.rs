//! UI rendering for the GenZ feed.
//!
//! One render entry point dispatching on the current route:
//! - Home: create-post form + posts feed
//! - Post detail: view/edit toggle
//! - Users: member list + selected member's posts
//! - Notifications: refresh button + notification lines
//! - Not found: everything else
//!
//! Every screen renders the shared header/nav block itself. Rendering
//! is a pure mapping from (route, store, view state) to a frame; the
//! only side effect is repopulating the hit area registry.

mod components;
mod header;
mod home;
pub mod interaction;
mod layout;
mod not_found;
mod notifications;
mod post_detail;
mod theme;
mod users;

pub use header::HEADER_HEIGHT;
pub use interaction::handle_click_action;
pub use layout::{breakpoints, LayoutContext};
pub use theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_BUTTON, COLOR_DIM, COLOR_HEADER, COLOR_INPUT_BG, COLOR_LINK,
};

use ratatui::layout::Rect;
use ratatui::Frame;

use crate::app::App;
use crate::router::Route;

/// Render the UI for the current route.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Split borrows: the registry is written while the rest is read
    let App {
        ref store,
        ref route,
        ref home_form,
        ref detail,
        ref users_state,
        ref focus,
        ref mut hit_registry,
        ..
    } = *app;

    hit_registry.clear();
    if area.height == 0 || area.width == 0 {
        return;
    }

    let ctx = LayoutContext::new(area.width, area.height);

    let header_height = HEADER_HEIGHT.min(area.height);
    let header_area = Rect::new(area.x, area.y, area.width, header_height);
    header::render_header(frame, header_area, route, hit_registry);

    let body = Rect::new(
        area.x,
        area.y + header_height,
        area.width,
        area.height.saturating_sub(header_height),
    );

    match route {
        Route::Home => {
            home::render_home(frame, body, store, home_form, *focus, &ctx, hit_registry);
        }
        Route::Post { id } => {
            post_detail::render_post_detail(frame, body, store, detail, *focus, hit_registry, id);
        }
        Route::Users => {
            users::render_users(frame, body, store, users_state, hit_registry);
        }
        Route::Notifications => {
            notifications::render_notifications(frame, body, store, hit_registry);
        }
        Route::NotFound => {
            not_found::render_not_found(frame, body);
        }
    }
}
