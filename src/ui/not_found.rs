//! Not-found screen for paths no route matches.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};

use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM};

/// Render the not-found screen.
pub fn render_not_found(frame: &mut Frame, area: Rect) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let heading = Paragraph::new(Span::styled(
        "Not found",
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(heading, Rect::new(area.x, area.y, area.width, 1));

    if area.height >= 2 {
        let hint = Paragraph::new(Span::styled(
            "Nothing lives at this path.",
            Style::default().fg(COLOR_DIM),
        ));
        frame.render_widget(hint, Rect::new(area.x, area.y + 1, area.width, 1));
    }
}
