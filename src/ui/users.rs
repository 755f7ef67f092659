//! Users screen: the member list and the selected member's posts.
//!
//! The list renders exactly one row per user - the element count is
//! guaranteed structurally, not patched afterwards. Selecting a member
//! (click or cursor keys) shows their posts below.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::UsersState;
use crate::state::FeedStore;
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_LINK};

/// Rows per post card in the selected member's section.
const CARD_HEIGHT: u16 = 3;

/// Render the users screen.
pub fn render_users(
    frame: &mut Frame,
    area: Rect,
    store: &FeedStore,
    users_state: &UsersState,
    registry: &mut HitAreaRegistry,
) {
    let list_height = store.users().len() as u16 + 2;
    if area.height < list_height || area.width < 10 {
        return;
    }

    let list_area = Rect::new(area.x, area.y, area.width, list_height);
    render_user_list(frame, list_area, store, users_state, registry);

    if let Some(selected_id) = &users_state.selected {
        let posts_area = Rect::new(
            area.x,
            area.y + list_height,
            area.width,
            area.height.saturating_sub(list_height),
        );
        render_user_posts(frame, posts_area, store, selected_id);
    }
}

fn render_user_list(
    frame: &mut Frame,
    area: Rect,
    store: &FeedStore,
    users_state: &UsersState,
    registry: &mut HitAreaRegistry,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(" Users ", Style::default().fg(COLOR_ACCENT)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    for (i, user) in store.users().iter().enumerate() {
        let row = Rect::new(inner.x, inner.y + i as u16, inner.width, 1);
        let at_cursor = users_state.cursor == i;
        let selected = users_state.selected.as_deref() == Some(user.id.as_str());

        let marker = if at_cursor { "\u{25B8} " } else { "  " };
        let mut style = if selected {
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_LINK)
        };
        if registry.is_hovered(row) {
            style = style.add_modifier(Modifier::UNDERLINED);
        }

        let line = Paragraph::new(Span::styled(format!("{marker}{}", user.name), style));
        frame.render_widget(line, row);
        registry.register(row, ClickAction::SelectUser(user.id.clone()));
    }
}

fn render_user_posts(frame: &mut Frame, area: Rect, store: &FeedStore, user_id: &str) {
    if area.height < 3 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            format!(" Posts by {} ", store.user_name(user_id)),
            Style::default().fg(COLOR_ACCENT),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let posts = store.posts_by_user(user_id);
    if posts.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No posts yet",
            Style::default().fg(COLOR_DIM),
        ));
        frame.render_widget(empty, Rect::new(inner.x, inner.y, inner.width, 1));
        return;
    }

    let fit = (inner.height / CARD_HEIGHT) as usize;
    for (i, post) in posts.iter().take(fit).enumerate() {
        let y = inner.y + (i as u16) * CARD_HEIGHT;

        let title = Paragraph::new(Span::styled(
            post.title.clone(),
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(title, Rect::new(inner.x, y, inner.width, 1));

        let content = Paragraph::new(Span::raw(post.content.clone()));
        frame.render_widget(content, Rect::new(inner.x, y + 1, inner.width, 1));
    }

    if posts.len() > fit {
        let y = inner.y + (fit as u16) * CARD_HEIGHT;
        if y < inner.bottom() {
            let more = Paragraph::new(Span::styled(
                format!("+ {} more", posts.len() - fit),
                Style::default().fg(COLOR_DIM),
            ));
            frame.render_widget(more, Rect::new(inner.x, y, inner.width, 1));
        }
    }
}
