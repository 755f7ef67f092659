//! Link classification and click gating.
//!
//! Every rendered link carries an href. Before a click drives the
//! router, two gates apply: the click itself must be a plain primary
//! button press (no modifier keys held), and the href must actually be
//! an in-app path. Absolute URLs and `mailto:` links belong to the OS;
//! bare anchors never navigate at all.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// What kind of destination an href points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// A path handled by the in-app router
    InApp,
    /// An absolute `http(s)` URL, handed to the system browser
    External,
    /// An in-page anchor (`#...`); selection only, never navigation
    Anchor,
    /// A `mailto:` link, handed to the OS
    Mailto,
}

/// Classify an href. Returns `None` for an empty href, which is
/// ignored entirely.
pub fn classify_href(href: &str) -> Option<LinkKind> {
    if href.is_empty() {
        return None;
    }
    if href.starts_with("http") {
        return Some(LinkKind::External);
    }
    if href.starts_with('#') {
        return Some(LinkKind::Anchor);
    }
    if href.starts_with("mailto:") {
        return Some(LinkKind::Mailto);
    }
    Some(LinkKind::InApp)
}

/// Whether a mouse event is a plain primary-button press.
///
/// Clicks with any modifier held are left to the terminal (the same
/// way a modified click on a link is left to the browser).
pub fn is_plain_left_click(event: &MouseEvent) -> bool {
    event.kind == MouseEventKind::Down(MouseButton::Left) && event.modifiers.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, modifiers: KeyModifiers) -> MouseEvent {
        MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers,
        }
    }

    #[test]
    fn test_empty_href_is_ignored() {
        assert_eq!(classify_href(""), None);
    }

    #[test]
    fn test_absolute_urls_are_external() {
        assert_eq!(
            classify_href("https://example.com"),
            Some(LinkKind::External)
        );
        assert_eq!(classify_href("http://example.com"), Some(LinkKind::External));
    }

    #[test]
    fn test_anchors_never_navigate() {
        assert_eq!(classify_href("#"), Some(LinkKind::Anchor));
        assert_eq!(classify_href("#top"), Some(LinkKind::Anchor));
    }

    #[test]
    fn test_mailto_goes_to_the_os() {
        assert_eq!(
            classify_href("mailto:hi@example.com"),
            Some(LinkKind::Mailto)
        );
    }

    #[test]
    fn test_paths_are_in_app() {
        assert_eq!(classify_href("/"), Some(LinkKind::InApp));
        assert_eq!(classify_href("/users"), Some(LinkKind::InApp));
        assert_eq!(classify_href("/posts/p2"), Some(LinkKind::InApp));
        // Unknown paths are still in-app; they route to not-found
        assert_eq!(classify_href("/nope"), Some(LinkKind::InApp));
    }

    #[test]
    fn test_plain_left_click_passes_the_gate() {
        let event = mouse(
            MouseEventKind::Down(MouseButton::Left),
            KeyModifiers::empty(),
        );
        assert!(is_plain_left_click(&event));
    }

    #[test]
    fn test_modified_clicks_are_left_alone() {
        for modifiers in [
            KeyModifiers::CONTROL,
            KeyModifiers::SHIFT,
            KeyModifiers::ALT,
        ] {
            let event = mouse(MouseEventKind::Down(MouseButton::Left), modifiers);
            assert!(!is_plain_left_click(&event));
        }
    }

    #[test]
    fn test_non_left_buttons_are_left_alone() {
        let event = mouse(
            MouseEventKind::Down(MouseButton::Right),
            KeyModifiers::empty(),
        );
        assert!(!is_plain_left_click(&event));

        let event = mouse(MouseEventKind::Up(MouseButton::Left), KeyModifiers::empty());
        assert!(!is_plain_left_click(&event));
    }
}
