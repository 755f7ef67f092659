//! Text input field component.
//!
//! A single-line input with a labeled border, focus highlighting, a
//! block cursor, and placeholder text. Long values scroll so the tail
//! (where the cursor sits) stays visible.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_INPUT_BG};

/// Rows an input field occupies (content plus borders).
pub const INPUT_FIELD_HEIGHT: u16 = 3;

/// Configuration for rendering an input field.
#[derive(Debug, Clone)]
pub struct InputFieldConfig<'a> {
    /// Label shown in the border title
    pub label: &'a str,
    /// Current value of the input
    pub value: &'a str,
    /// Whether the input is currently focused
    pub focused: bool,
    /// Placeholder text shown dim when the value is empty
    pub placeholder: Option<&'a str>,
}

impl<'a> InputFieldConfig<'a> {
    /// Create a new input field configuration.
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            placeholder: None,
        }
    }

    /// Set whether the input is focused.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set placeholder text.
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

/// Render an input field into `area`. The caller registers the hit
/// area; this only draws.
pub fn render_input_field(frame: &mut Frame, area: Rect, config: &InputFieldConfig) {
    if area.height < INPUT_FIELD_HEIGHT {
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

    // Cursor takes one cell when focused
    let inner_width = area.width.saturating_sub(2) as usize;
    let text_width = inner_width.saturating_sub(if config.focused { 1 } else { 0 });

    let (content, text_style) = if config.value.is_empty() {
        let placeholder = config.placeholder.unwrap_or_default();
        (placeholder.to_string(), Style::default().fg(COLOR_DIM))
    } else {
        let style = if config.focused {
            Style::default().fg(COLOR_ACCENT)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        (visible_tail(config.value, text_width), style)
    };

    let mut spans = vec![Span::styled(content, text_style)];
    if config.focused {
        spans.push(Span::styled("\u{2588}", Style::default().fg(COLOR_ACCENT)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

/// The longest suffix of `value` fitting in `max_width` display
/// columns, so the end of the text stays visible while typing.
fn visible_tail(value: &str, max_width: usize) -> String {
    if value.width() <= max_width {
        return value.to_string();
    }

    let mut tail = String::new();
    let mut width = 0;
    for c in value.chars().rev() {
        let char_width = c.to_string().width();
        if width + char_width > max_width {
            break;
        }
        width += char_width;
        tail.insert(0, c);
    }
    tail
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = InputFieldConfig::new("Title", "hello")
            .focused(true)
            .placeholder("Post title");
        assert_eq!(config.label, "Title");
        assert_eq!(config.value, "hello");
        assert!(config.focused);
        assert_eq!(config.placeholder, Some("Post title"));
    }

    #[test]
    fn test_visible_tail_keeps_short_values() {
        assert_eq!(visible_tail("short", 20), "short");
    }

    #[test]
    fn test_visible_tail_truncates_from_the_front() {
        assert_eq!(visible_tail("abcdefgh", 3), "fgh");
    }

    #[test]
    fn test_visible_tail_respects_wide_chars() {
        // Full-width characters occupy two columns each
        let tail = visible_tail("ab\u{ff21}\u{ff22}", 3); // "abＡＢ"
        assert_eq!(tail, "\u{ff22}");
    }

    #[test]
    fn test_render_skips_tiny_areas() {
        // Must not panic when the area cannot hold a field
        let backend = ratatui::backend::TestBackend::new(10, 2);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let config = InputFieldConfig::new("X", "y");
                render_input_field(f, Rect::new(0, 0, 10, 2), &config);
            })
            .unwrap();
    }
}
