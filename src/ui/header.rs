//! Shared header and navigation block.
//!
//! Every screen renders this independently: the app title, the three
//! nav links, and a divider. Links are hit areas carrying their href;
//! the one matching the current route is highlighted.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::router::{match_route, Route};
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER, COLOR_LINK};

/// Rows the header occupies: title, nav, divider.
pub const HEADER_HEIGHT: u16 = 3;

/// Nav labels and the hrefs their hit areas carry.
const NAV_LINKS: [(&str, &str); 3] = [
    ("Posts", "/"),
    ("Users", "/users"),
    ("Notifications", "/notifications"),
];

/// Render the header block and register the nav link hit areas.
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    route: &Route,
    registry: &mut HitAreaRegistry,
) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let title = Paragraph::new(Span::styled(
        "GenZ",
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(title, Rect::new(area.x, area.y, area.width, 1));

    if area.height >= 2 {
        render_nav(frame, area, route, registry);
    }

    if area.height >= 3 {
        let divider = Paragraph::new(Span::styled(
            "\u{2500}".repeat(area.width as usize),
            Style::default().fg(COLOR_DIM),
        ));
        frame.render_widget(divider, Rect::new(area.x, area.y + 2, area.width, 1));
    }
}

fn render_nav(frame: &mut Frame, area: Rect, route: &Route, registry: &mut HitAreaRegistry) {
    let row = area.y + 1;
    let mut x = area.x;

    for (label, href) in NAV_LINKS {
        let width = label.width() as u16;
        if x + width > area.right() {
            break;
        }
        let rect = Rect::new(x, row, width, 1);

        let active = match_route(href) == *route;
        let mut style = if active {
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_LINK)
        };
        if registry.is_hovered(rect) {
            style = style.add_modifier(Modifier::UNDERLINED);
        }

        frame.render_widget(Paragraph::new(Span::styled(label, style)), rect);
        registry.register(rect, ClickAction::Navigate(href.to_string()));

        x += width + 2;
    }
}
