//! Selector field component.
//!
//! A left/right cycling selector (`◂ value ▸`) used for the post
//! author. The arrows are individually clickable; the caller supplies
//! the actions so the component stays generic.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_INPUT_BG};

/// Rows a selector field occupies (content plus borders).
pub const SELECT_FIELD_HEIGHT: u16 = 3;

/// Configuration for rendering a selector field.
#[derive(Debug, Clone)]
pub struct SelectFieldConfig<'a> {
    /// Label shown in the border title
    pub label: &'a str,
    /// Currently selected value
    pub value: &'a str,
    /// Whether the selector is focused
    pub focused: bool,
}

/// Render a selector field and register its hit areas: `on_prev` and
/// `on_next` on the arrows, `on_focus` on the rest of the field.
pub fn render_select_field(
    frame: &mut Frame,
    area: Rect,
    config: &SelectFieldConfig,
    registry: &mut HitAreaRegistry,
    on_prev: ClickAction,
    on_next: ClickAction,
    on_focus: ClickAction,
) {
    if area.height < SELECT_FIELD_HEIGHT || area.width < 7 {
        return;
    }

    let border_color = if config.focused {
        COLOR_ACCENT
    } else {
        COLOR_BORDER
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(
            format!(" {} ", config.label),
            Style::default().fg(border_color),
        ))
        .style(Style::default().bg(COLOR_INPUT_BG));

    let value_style = if config.focused {
        Style::default().fg(COLOR_ACCENT)
    } else {
        Style::default().fg(COLOR_DIM)
    };

    let line = Line::from(vec![
        Span::styled("\u{25C2}", Style::default().fg(border_color)),
        Span::raw(" "),
        Span::styled(config.value.to_string(), value_style),
        Span::raw(" "),
        Span::styled("\u{25B8}", Style::default().fg(border_color)),
    ]);
    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);

    // The whole field focuses; the arrows (one column each, inside the
    // border) sit on top and cycle the selection.
    registry.register(area, on_focus);
    let row = area.y + 1;
    registry.register(Rect::new(area.x + 1, row, 1, 1), on_prev);
    let value_width = config.value.chars().count() as u16;
    let next_x = (area.x + 1 + 2 + value_width + 1).min(area.right().saturating_sub(2));
    registry.register(Rect::new(next_x, row, 1, 1), on_next);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_registers_focus_and_arrow_areas() {
        let backend = TestBackend::new(30, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut registry = HitAreaRegistry::new();

        terminal
            .draw(|f| {
                let config = SelectFieldConfig {
                    label: "Author",
                    value: "Alice",
                    focused: false,
                };
                render_select_field(
                    f,
                    Rect::new(0, 0, 20, 3),
                    &config,
                    &mut registry,
                    ClickAction::AuthorPrev,
                    ClickAction::AuthorNext,
                    ClickAction::FocusField(crate::app::FormField::Author),
                );
            })
            .unwrap();

        assert_eq!(registry.areas().len(), 3);
        // The left arrow wins over the underlying focus area
        assert_eq!(registry.hit_test(1, 1), Some(ClickAction::AuthorPrev));
        // A click on the value itself focuses the field
        assert_eq!(
            registry.hit_test(4, 1),
            Some(ClickAction::FocusField(crate::app::FormField::Author))
        );
    }

    #[test]
    fn test_skips_areas_too_small() {
        let backend = TestBackend::new(10, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut registry = HitAreaRegistry::new();

        terminal
            .draw(|f| {
                let config = SelectFieldConfig {
                    label: "Author",
                    value: "Alice",
                    focused: false,
                };
                render_select_field(
                    f,
                    Rect::new(0, 0, 10, 2),
                    &config,
                    &mut registry,
                    ClickAction::AuthorPrev,
                    ClickAction::AuthorNext,
                    ClickAction::FocusField(crate::app::FormField::Author),
                );
            })
            .unwrap();

        assert!(registry.areas().is_empty());
    }
}
