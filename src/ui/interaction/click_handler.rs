//! Click action handler.
//!
//! Translates actions dispatched from the hit area registry into app
//! state mutations. This runs synchronously inside the event loop, so
//! every mutation completes before the next event is processed.

use super::hit_area::ClickAction;
use crate::app::App;

/// Handle a click action by updating app state.
pub fn handle_click_action(app: &mut App, action: ClickAction) {
    app.mark_dirty();

    match action {
        ClickAction::Navigate(href) => {
            tracing::debug!(href = %href, "click: link");
            app.follow_link(&href);
        }
        ClickAction::FocusField(field) => {
            tracing::debug!(?field, "click: focus field");
            app.focus_field(field);
        }
        ClickAction::AuthorPrev => {
            app.cycle_author(-1);
        }
        ClickAction::AuthorNext => {
            app.cycle_author(1);
        }
        ClickAction::SubmitPost => {
            tracing::debug!("click: submit post");
            app.submit_post();
        }
        ClickAction::React { post_id, kind } => {
            tracing::debug!(post_id = %post_id, kind = kind.as_str(), "click: react");
            app.store.react_to_post(&post_id, kind);
        }
        ClickAction::EditPost => {
            tracing::debug!("click: edit post");
            app.start_edit();
        }
        ClickAction::SavePost => {
            tracing::debug!("click: save post");
            app.save_edit();
        }
        ClickAction::SelectUser(user_id) => {
            tracing::debug!(user_id = %user_id, "click: select user");
            app.select_user(user_id);
        }
        ClickAction::RefreshNotifications => {
            tracing::debug!("click: refresh notifications");
            app.store.refresh_notifications();
        }
    }
}
