//! Post detail screen with its view/edit toggle.
//!
//! Viewing shows the post and an Edit button. Editing shows the title
//! and content drafts, a Back link, and a Save button. There is no
//! cancel action; leaving the screen is the only way to abandon
//! drafts.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{DetailMode, DetailState, Focus, FormField};
use crate::state::FeedStore;
use crate::ui::components::{render_input_field, InputFieldConfig, INPUT_FIELD_HEIGHT};
use crate::ui::home::{render_button, render_link};
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER};

/// Render the post detail screen for the given post id.
pub fn render_post_detail(
    frame: &mut Frame,
    area: Rect,
    store: &FeedStore,
    detail: &DetailState,
    focus: Focus,
    registry: &mut HitAreaRegistry,
    post_id: &str,
) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let Some(post) = store.post(post_id) else {
        let missing = Paragraph::new(Span::styled(
            "Post not found",
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(missing, Rect::new(area.x, area.y, area.width, 1));
        return;
    };

    match detail.mode {
        DetailMode::Viewing => render_viewing(frame, area, &post.title, &post.content, registry),
        DetailMode::Editing => render_editing(frame, area, detail, focus, registry),
    }
}

fn render_viewing(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    content: &str,
    registry: &mut HitAreaRegistry,
) {
    if area.height < 5 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(" Post ", Style::default().fg(COLOR_ACCENT)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let heading = Paragraph::new(Span::styled(
        title.to_string(),
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(heading, Rect::new(inner.x, inner.y, inner.width, 1));

    let body_height = inner.height.saturating_sub(3);
    if body_height > 0 {
        let body = Paragraph::new(content.to_string()).wrap(Wrap { trim: false });
        frame.render_widget(
            body,
            Rect::new(inner.x, inner.y + 2, inner.width, body_height),
        );
    }

    render_button(
        frame,
        Rect::new(inner.x, inner.bottom().saturating_sub(1), inner.width, 1),
        "[ Edit ]",
        ClickAction::EditPost,
        registry,
    );
}

fn render_editing(
    frame: &mut Frame,
    area: Rect,
    detail: &DetailState,
    focus: Focus,
    registry: &mut HitAreaRegistry,
) {
    if area.height < INPUT_FIELD_HEIGHT * 2 + 1 {
        return;
    }

    let mut y = area.y;

    let title_area = Rect::new(area.x, y, area.width, INPUT_FIELD_HEIGHT);
    let title_config = InputFieldConfig::new("Title", &detail.draft_title)
        .focused(focus == Focus::Field(FormField::EditTitle));
    render_input_field(frame, title_area, &title_config);
    registry.register(title_area, ClickAction::FocusField(FormField::EditTitle));
    y += INPUT_FIELD_HEIGHT;

    let content_area = Rect::new(area.x, y, area.width, INPUT_FIELD_HEIGHT);
    let content_config = InputFieldConfig::new("Content", &detail.draft_content)
        .focused(focus == Focus::Field(FormField::EditContent));
    render_input_field(frame, content_area, &content_config);
    registry.register(
        content_area,
        ClickAction::FocusField(FormField::EditContent),
    );
    y += INPUT_FIELD_HEIGHT;

    // Back is an ordinary link to the feed; Save commits the drafts
    render_link(
        frame,
        Rect::new(area.x, y, area.width, 1),
        "Back",
        "/".to_string(),
        registry,
    );
    let save_x = area.x + 6;
    if save_x < area.right() {
        render_button(
            frame,
            Rect::new(save_x, y, area.width.saturating_sub(6), 1),
            "[ Save ]",
            ClickAction::SavePost,
            registry,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_detail(
        post_id: &str,
        detail: &DetailState,
    ) -> (HitAreaRegistry, String) {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut registry = HitAreaRegistry::new();
        let store = FeedStore::seeded();

        terminal
            .draw(|f| {
                render_post_detail(
                    f,
                    Rect::new(0, 0, 80, 24),
                    &store,
                    detail,
                    Focus::Page,
                    &mut registry,
                    post_id,
                );
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
    fn test_viewing_shows_post_and_edit_button() {
        let (registry, content) = render_detail("p1", &DetailState::default());
        assert!(content.contains("Welcome to GenZ"));
        assert!(content.contains("First post here!"));
        assert!(content.contains("[ Edit ]"));
        assert!(registry
            .areas()
            .iter()
            .any(|a| a.action == ClickAction::EditPost));
    }

    #[test]
    fn test_editing_shows_back_link_and_save_button() {
        let detail = DetailState {
            mode: DetailMode::Editing,
            draft_title: "Draft".to_string(),
            draft_content: "Body".to_string(),
        };
        let (registry, content) = render_detail("p1", &detail);
        assert!(content.contains("Back"));
        assert!(content.contains("[ Save ]"));
        assert!(registry
            .areas()
            .iter()
            .any(|a| a.action == ClickAction::SavePost));
        assert!(registry
            .areas()
            .iter()
            .any(|a| a.action == ClickAction::Navigate("/".to_string())));
        // No cancel control exists anywhere on the screen
        assert!(!content.contains("Cancel"));
    }

    #[test]
    fn test_unknown_post_renders_not_found_message() {
        let (registry, content) = render_detail("p99", &DetailState::default());
        assert!(content.contains("Post not found"));
        assert!(registry.areas().is_empty());
    }
}
