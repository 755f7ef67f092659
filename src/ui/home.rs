//! Home screen: the create-post form and the posts feed.
//!
//! Wide terminals put the form beside the feed; narrow ones stack it
//! on top. Each post card carries its reaction buttons and a View link
//! as hit areas.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{Focus, FormField, HomeForm};
use crate::models::{Post, ReactionKind};
use crate::state::FeedStore;
use crate::ui::components::{
    render_input_field, render_select_field, InputFieldConfig, SelectFieldConfig,
    INPUT_FIELD_HEIGHT, SELECT_FIELD_HEIGHT,
};
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_BUTTON, COLOR_DIM, COLOR_LINK};

/// Columns the form panel takes in the side-by-side layout.
const FORM_WIDTH: u16 = 34;

/// Rows the form panel needs: three fields, the button row, borders.
const FORM_HEIGHT: u16 =
    INPUT_FIELD_HEIGHT + SELECT_FIELD_HEIGHT + INPUT_FIELD_HEIGHT + 1 + 2;

/// Rows per post card: title, content, byline, reactions, link, gap.
const CARD_HEIGHT: u16 = 6;

/// Render the home screen.
pub fn render_home(
    frame: &mut Frame,
    area: Rect,
    store: &FeedStore,
    form: &HomeForm,
    focus: Focus,
    ctx: &LayoutContext,
    registry: &mut HitAreaRegistry,
) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let (form_area, posts_area) = if ctx.is_narrow() {
        let form_height = FORM_HEIGHT.min(area.height);
        (
            Rect::new(area.x, area.y, area.width, form_height),
            Rect::new(
                area.x,
                area.y + form_height,
                area.width,
                area.height.saturating_sub(form_height),
            ),
        )
    } else {
        let form_width = FORM_WIDTH.min(area.width);
        (
            Rect::new(area.x, area.y, form_width, area.height),
            Rect::new(
                area.x + form_width + 1,
                area.y,
                area.width.saturating_sub(form_width + 1),
                area.height,
            ),
        )
    };

    render_create_form(frame, form_area, store, form, focus, registry);
    render_posts_list(frame, posts_area, store, registry);
}

fn render_create_form(
    frame: &mut Frame,
    area: Rect,
    store: &FeedStore,
    form: &HomeForm,
    focus: Focus,
    registry: &mut HitAreaRegistry,
) {
    if area.height < FORM_HEIGHT || area.width < 12 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(" New Post ", Style::default().fg(COLOR_ACCENT)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut y = inner.y;

    let title_area = Rect::new(inner.x, y, inner.width, INPUT_FIELD_HEIGHT);
    let title_config = InputFieldConfig::new("Title", &form.title)
        .focused(focus == Focus::Field(FormField::Title))
        .placeholder("Post title");
    render_input_field(frame, title_area, &title_config);
    registry.register(title_area, ClickAction::FocusField(FormField::Title));
    y += INPUT_FIELD_HEIGHT;

    let author_name = store
        .users()
        .get(form.author_index)
        .map(|u| u.name.as_str())
        .unwrap_or("Unknown");
    let author_area = Rect::new(inner.x, y, inner.width, SELECT_FIELD_HEIGHT);
    let author_config = SelectFieldConfig {
        label: "Author",
        value: author_name,
        focused: focus == Focus::Field(FormField::Author),
    };
    render_select_field(
        frame,
        author_area,
        &author_config,
        registry,
        ClickAction::AuthorPrev,
        ClickAction::AuthorNext,
        ClickAction::FocusField(FormField::Author),
    );
    y += SELECT_FIELD_HEIGHT;

    let content_area = Rect::new(inner.x, y, inner.width, INPUT_FIELD_HEIGHT);
    let content_config = InputFieldConfig::new("Content", &form.content)
        .focused(focus == Focus::Field(FormField::Content))
        .placeholder("Post content...");
    render_input_field(frame, content_area, &content_config);
    registry.register(content_area, ClickAction::FocusField(FormField::Content));
    y += INPUT_FIELD_HEIGHT;

    render_button(
        frame,
        Rect::new(inner.x, y, inner.width, 1),
        "[ Add Post ]",
        ClickAction::SubmitPost,
        registry,
    );
}

fn render_posts_list(
    frame: &mut Frame,
    area: Rect,
    store: &FeedStore,
    registry: &mut HitAreaRegistry,
) {
    if area.height < 3 || area.width < 10 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(" Posts ", Style::default().fg(COLOR_ACCENT)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let posts = store.posts();
    let fit = (inner.height / CARD_HEIGHT) as usize;

    for (i, post) in posts.iter().take(fit).enumerate() {
        let card = Rect::new(
            inner.x,
            inner.y + (i as u16) * CARD_HEIGHT,
            inner.width,
            CARD_HEIGHT,
        );
        render_post_card(frame, card, store, post, registry);
    }

    // Overflow indicator when the feed outgrows the panel
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

fn render_post_card(
    frame: &mut Frame,
    area: Rect,
    store: &FeedStore,
    post: &Post,
    registry: &mut HitAreaRegistry,
) {
    let title = Paragraph::new(Span::styled(
        post.title.clone(),
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(title, Rect::new(area.x, area.y, area.width, 1));

    let content = Paragraph::new(Span::raw(post.content.clone()));
    frame.render_widget(content, Rect::new(area.x, area.y + 1, area.width, 1));

    let byline = Paragraph::new(Span::styled(
        format!("by {}", store.user_name(&post.user_id)),
        Style::default()
            .fg(COLOR_DIM)
            .add_modifier(Modifier::ITALIC),
    ));
    frame.render_widget(byline, Rect::new(area.x, area.y + 2, area.width, 1));

    render_reaction_row(frame, Rect::new(area.x, area.y + 3, area.width, 1), post, registry);

    render_link(
        frame,
        Rect::new(area.x, area.y + 4, area.width, 1),
        "View",
        format!("/posts/{}", post.id),
        registry,
    );
}

/// One row of reaction buttons. The lock button renders dim and gets
/// no hit area; its counter cannot move.
fn render_reaction_row(
    frame: &mut Frame,
    area: Rect,
    post: &Post,
    registry: &mut HitAreaRegistry,
) {
    let mut x = area.x;
    for kind in ReactionKind::ALL {
        let label = format!("{} {}", kind.emoji(), post.reactions.count(kind));
        let width = (label.width() as u16).max(1);
        if x + width > area.right() {
            break;
        }
        let rect = Rect::new(x, area.y, width, 1);

        let mut style = if kind == ReactionKind::Lock {
            Style::default().fg(COLOR_DIM)
        } else {
            Style::default().fg(COLOR_ACCENT)
        };
        if kind != ReactionKind::Lock && registry.is_hovered(rect) {
            style = style.add_modifier(Modifier::UNDERLINED);
        }

        frame.render_widget(Paragraph::new(Span::styled(label, style)), rect);
        if kind != ReactionKind::Lock {
            registry.register(
                rect,
                ClickAction::React {
                    post_id: post.id.clone(),
                    kind,
                },
            );
        }

        x += width + 2;
    }
}

/// Render a labeled in-app link and register its href.
pub(super) fn render_link(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    href: String,
    registry: &mut HitAreaRegistry,
) {
    let width = (label.width() as u16).min(area.width);
    if width == 0 {
        return;
    }
    let rect = Rect::new(area.x, area.y, width, 1);

    let mut style = Style::default().fg(COLOR_LINK);
    if registry.is_hovered(rect) {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    frame.render_widget(Paragraph::new(Span::styled(label, style)), rect);
    registry.register(rect, ClickAction::Navigate(href));
}

/// Render an action button and register its click action.
pub(super) fn render_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    action: ClickAction,
    registry: &mut HitAreaRegistry,
) {
    let width = (label.width() as u16).min(area.width);
    if width == 0 {
        return;
    }
    let rect = Rect::new(area.x, area.y, width, 1);

    let mut style = Style::default()
        .fg(COLOR_BUTTON)
        .add_modifier(Modifier::BOLD);
    if registry.is_hovered(rect) {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    frame.render_widget(Paragraph::new(Span::styled(label, style)), rect);
    registry.register(rect, action);
}
