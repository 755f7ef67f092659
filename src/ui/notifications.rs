//! Notifications screen.
//!
//! A refresh button and the current notification lines. Refreshing
//! replaces the whole list; nothing accumulates.

use ratatui::{
    layout::Rect,
    style::Style,
    text::Span,
    widgets::Paragraph,
    Frame,
};

use crate::state::FeedStore;
use crate::ui::home::render_button;
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM};

/// Render the notifications screen.
pub fn render_notifications(
    frame: &mut Frame,
    area: Rect,
    store: &FeedStore,
    registry: &mut HitAreaRegistry,
) {
    if area.height < 2 || area.width < 10 {
        return;
    }

    render_button(
        frame,
        Rect::new(area.x, area.y, area.width, 1),
        "[ Refresh Notifications ]",
        ClickAction::RefreshNotifications,
        registry,
    );

    let list_y = area.y + 2;
    if list_y >= area.bottom() {
        return;
    }

    let notifications = store.notifications();
    if notifications.is_empty() {
        let hint = Paragraph::new(Span::styled(
            "No notifications yet",
            Style::default().fg(COLOR_DIM),
        ));
        frame.render_widget(hint, Rect::new(area.x, list_y, area.width, 1));
        return;
    }

    for (i, notification) in notifications.iter().enumerate() {
        let y = list_y + i as u16;
        if y >= area.bottom() {
            break;
        }
        let line = Paragraph::new(Span::styled(
            format!("\u{2022} {}", notification.text),
            Style::default().fg(COLOR_ACCENT),
        ));
        frame.render_widget(line, Rect::new(area.x, y, area.width, 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_screen(store: &FeedStore) -> (HitAreaRegistry, String) {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut registry = HitAreaRegistry::new();

        terminal
            .draw(|f| {
                render_notifications(f, Rect::new(0, 0, 80, 24), store, &mut registry);
            })
            .unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        (registry, content)
    }

    #[test]
    fn test_refresh_button_is_clickable() {
        let store = FeedStore::seeded();
        let (registry, content) = render_screen(&store);
        assert!(content.contains("[ Refresh Notifications ]"));
        assert!(registry
            .areas()
            .iter()
            .any(|a| a.action == ClickAction::RefreshNotifications));
    }

    #[test]
    fn test_empty_list_shows_hint() {
        let store = FeedStore::seeded();
        let (_, content) = render_screen(&store);
        assert!(content.contains("No notifications yet"));
    }

    #[test]
    fn test_refreshed_list_shows_both_lines() {
        let mut store = FeedStore::seeded();
        store.refresh_notifications();
        let (_, content) = render_screen(&store);
        assert!(content.contains("New content available ("));
        assert!(content.contains("Don't miss trending posts ("));
        assert!(!content.contains("No notifications yet"));
    }
}
