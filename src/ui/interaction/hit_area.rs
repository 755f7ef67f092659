//! Hit area registry for mouse interactions.
//!
//! The registry is the single dispatch point for clicks: components
//! register hit areas during rendering, and the event loop queries the
//! registry to decide what a click means. A click landing on no area
//! falls through to the terminal (text selection).

use ratatui::layout::Rect;

use crate::app::FormField;
use crate::models::ReactionKind;

/// An action triggered by clicking a registered region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// Follow a link. The href decides whether this navigates in-app,
    /// opens externally, or does nothing (anchor).
    Navigate(String),
    /// Focus a form field for typing
    FocusField(FormField),
    /// Move the author selector to the previous user
    AuthorPrev,
    /// Move the author selector to the next user
    AuthorNext,
    /// Submit the create-post form
    SubmitPost,
    /// Bump a reaction counter on a post
    React { post_id: String, kind: ReactionKind },
    /// Enter edit mode on the post detail screen
    EditPost,
    /// Commit the edit drafts and return to viewing
    SavePost,
    /// Show a member's posts on the users screen
    SelectUser(String),
    /// Replace the notification list
    RefreshNotifications,
}

/// A clickable region with an associated action.
#[derive(Debug, Clone)]
pub struct HitArea {
    /// The rectangular region that responds to clicks
    pub rect: Rect,
    /// The action to trigger when this area is clicked
    pub action: ClickAction,
}

impl HitArea {
    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x + self.rect.width
            && y >= self.rect.y
            && y < self.rect.y + self.rect.height
    }
}

/// Registry of the clickable regions on the current frame.
///
/// Cleared at the start of each render cycle and repopulated by the
/// screen being drawn. The last registered area wins for overlapping
/// regions (z-order: later = on top).
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
    /// Last known mouse position; survives clears so hover styling
    /// stays stable across redraws.
    mouse: Option<(u16, u16)>,
}

impl HitAreaRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all registered areas. Call at the start of each render
    /// cycle; the hover position is kept.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    /// Register a new hit area.
    pub fn register(&mut self, rect: Rect, action: ClickAction) {
        self.areas.push(HitArea { rect, action });
    }

    /// Find the action for a click at the given position.
    ///
    /// Areas are checked in reverse registration order so the topmost
    /// area consumes the click and anything underneath stays inert.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.contains(x, y))
            .map(|area| area.action.clone())
    }

    /// Record a mouse move. Returns true when the hovered area changed
    /// and the UI needs a redraw.
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        let before = self.hovered_index();
        self.mouse = Some((x, y));
        before != self.hovered_index()
    }

    /// Whether the mouse currently sits inside the given rect. Used by
    /// screens to underline the link under the cursor.
    pub fn is_hovered(&self, rect: Rect) -> bool {
        self.mouse.is_some_and(|(x, y)| {
            x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
        })
    }

    /// Registered areas in registration order. Exposed for tests that
    /// drive clicks through rendered frames.
    pub fn areas(&self) -> &[HitArea] {
        &self.areas
    }

    fn hovered_index(&self) -> Option<usize> {
        let (x, y) = self.mouse?;
        self.areas
            .iter()
            .enumerate()
            .rev()
            .find(|(_, area)| area.contains(x, y))
            .map(|(i, _)| i)
    }
}
