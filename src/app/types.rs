//! Type definitions for per-screen view state.
//!
//! Everything here is local, ephemeral UI state - form drafts, the
//! view/edit toggle, the selected member - and resets whenever the
//! route changes.

/// A focusable text or selector field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    /// Create-post form: title input
    Title,
    /// Create-post form: author selector
    Author,
    /// Create-post form: content input
    Content,
    /// Post detail edit: title draft
    EditTitle,
    /// Post detail edit: content draft
    EditContent,
}

/// What keyboard input currently targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// No field focused; keys drive screen-level shortcuts
    #[default]
    Page,
    /// A form field is focused and receives typed characters
    Field(FormField),
}

/// Draft state of the create-post form on the home screen.
///
/// The author selector starts on the first seeded user. Submitting
/// clears title and content but keeps the author selection.
#[derive(Debug, Clone, Default)]
pub struct HomeForm {
    pub title: String,
    pub content: String,
    pub author_index: usize,
}

/// The post detail screen's view/edit toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailMode {
    #[default]
    Viewing,
    Editing,
}

/// View state of the post detail screen. Drafts are seeded from the
/// post when editing starts and committed on save. There is no cancel
/// transition; leaving the screen is the only way out of editing
/// without saving.
#[derive(Debug, Clone, Default)]
pub struct DetailState {
    pub mode: DetailMode,
    pub draft_title: String,
    pub draft_content: String,
}

/// View state of the users screen: the cursor row and the member whose
/// posts are shown.
#[derive(Debug, Clone, Default)]
pub struct UsersState {
    pub cursor: usize,
    pub selected: Option<String>,
}
