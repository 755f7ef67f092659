//! Click interaction system.
//!
//! Screens register clickable regions while rendering; the event loop
//! queries the registry on mouse events and dispatches the resulting
//! action. Link hrefs are classified here so only in-app links drive
//! the router.

mod click_handler;
mod hit_area;
mod link;

pub use click_handler::handle_click_action;
pub use hit_area::{ClickAction, HitArea, HitAreaRegistry};
pub use link::{classify_href, is_plain_left_click, LinkKind};
