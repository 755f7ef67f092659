//! Keyboard handling and form operations.
//!
//! Key events arrive here after the event loop has taken its global
//! shortcuts (quit). History keys work everywhere; the rest dispatches
//! on the current route.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, DetailMode, Focus, FormField};
use crate::router::Route;

impl App {
    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // History navigation works on every screen
        match key.code {
            KeyCode::Left if key.modifiers.contains(KeyModifiers::ALT) => {
                self.history_back();
                return;
            }
            KeyCode::Right if key.modifiers.contains(KeyModifiers::ALT) => {
                self.history_forward();
                return;
            }
            _ => {}
        }

        match self.route {
            Route::Home => self.handle_home_key(key),
            Route::Post { .. } => self.handle_detail_key(key),
            Route::Users => self.handle_users_key(key),
            Route::Notifications => self.handle_notifications_key(key),
            Route::NotFound => {}
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => self.focus = next_home_field(self.focus),
            KeyCode::BackTab => self.focus = prev_home_field(self.focus),
            KeyCode::Esc => self.focus = Focus::Page,
            KeyCode::Enter if self.focus != Focus::Page => self.submit_post(),
            KeyCode::Left if self.focus == Focus::Field(FormField::Author) => {
                self.cycle_author(-1);
            }
            KeyCode::Right if self.focus == Focus::Field(FormField::Author) => {
                self.cycle_author(1);
            }
            KeyCode::Backspace => self.delete_char(),
            KeyCode::Char(c) => self.insert_char(c),
            _ => {}
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) {
        match self.detail.mode {
            DetailMode::Viewing => match key.code {
                KeyCode::Char('e') | KeyCode::Enter => self.start_edit(),
                _ => {}
            },
            DetailMode::Editing => match key.code {
                KeyCode::Tab | KeyCode::BackTab => {
                    self.focus = match self.focus {
                        Focus::Field(FormField::EditTitle) => {
                            Focus::Field(FormField::EditContent)
                        }
                        _ => Focus::Field(FormField::EditTitle),
                    };
                }
                // Esc drops field focus only. Edit mode and drafts stay;
                // there is no cancel transition.
                KeyCode::Esc => self.focus = Focus::Page,
                KeyCode::Enter => self.save_edit(),
                KeyCode::Backspace => self.delete_char(),
                KeyCode::Char(c) => self.insert_char(c),
                _ => {}
            },
        }
    }

    fn handle_users_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.move_user_cursor_up(),
            KeyCode::Down => self.move_user_cursor_down(),
            KeyCode::Enter => self.select_user_under_cursor(),
            _ => {}
        }
    }

    fn handle_notifications_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('r') | KeyCode::Enter => self.store.refresh_notifications(),
            _ => {}
        }
    }

    /// Focus a form field (clicked or tabbed into).
    pub fn focus_field(&mut self, field: FormField) {
        self.focus = Focus::Field(field);
    }

    /// Move the author selector by `delta` users, wrapping around.
    pub fn cycle_author(&mut self, delta: isize) {
        let count = self.store.users().len();
        if count == 0 {
            return;
        }
        let current = self.home_form.author_index as isize;
        self.home_form.author_index = (current + delta).rem_euclid(count as isize) as usize;
        self.focus = Focus::Field(FormField::Author);
    }

    /// Submit the create-post form.
    ///
    /// On success the title and content drafts clear; the author
    /// selection stays put. A rejected submission (blank fields)
    /// leaves the drafts for the user to fix.
    pub fn submit_post(&mut self) {
        let Some(author_id) = self
            .store
            .users()
            .get(self.home_form.author_index)
            .map(|u| u.id.clone())
        else {
            return;
        };

        let title = self.home_form.title.clone();
        let content = self.home_form.content.clone();
        if self.store.add_post(&title, &content, &author_id) {
            self.home_form.title.clear();
            self.home_form.content.clear();
        }
    }

    /// Enter edit mode on the post detail screen, seeding the drafts
    /// from the post.
    pub fn start_edit(&mut self) {
        let Route::Post { id } = &self.route else {
            return;
        };
        if let Some(post) = self.store.post(id) {
            self.detail.draft_title = post.title.clone();
            self.detail.draft_content = post.content.clone();
            self.detail.mode = DetailMode::Editing;
            self.focus = Focus::Field(FormField::EditTitle);
        }
    }

    /// Commit the edit drafts into the post and return to viewing.
    pub fn save_edit(&mut self) {
        if self.detail.mode != DetailMode::Editing {
            return;
        }
        let Route::Post { id } = self.route.clone() else {
            return;
        };
        let title = self.detail.draft_title.clone();
        let content = self.detail.draft_content.clone();
        self.store.edit_post(&id, &title, &content);
        self.detail.mode = DetailMode::Viewing;
        self.focus = Focus::Page;
    }

    fn insert_char(&mut self, c: char) {
        if let Some(text) = self.focused_text_mut() {
            text.push(c);
        }
    }

    fn delete_char(&mut self) {
        if let Some(text) = self.focused_text_mut() {
            text.pop();
        }
    }

    /// The string the focused field edits, if the focused field holds
    /// text (the author selector does not).
    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Field(FormField::Title) => Some(&mut self.home_form.title),
            Focus::Field(FormField::Content) => Some(&mut self.home_form.content),
            Focus::Field(FormField::EditTitle) => Some(&mut self.detail.draft_title),
            Focus::Field(FormField::EditContent) => Some(&mut self.detail.draft_content),
            _ => None,
        }
    }
}

/// Tab order on the home screen: page, then the three form fields.
fn next_home_field(focus: Focus) -> Focus {
    match focus {
        Focus::Page => Focus::Field(FormField::Title),
        Focus::Field(FormField::Title) => Focus::Field(FormField::Author),
        Focus::Field(FormField::Author) => Focus::Field(FormField::Content),
        Focus::Field(FormField::Content) => Focus::Page,
        // Edit fields do not occur on the home screen
        other => other,
    }
}

fn prev_home_field(focus: Focus) -> Focus {
    match focus {
        Focus::Page => Focus::Field(FormField::Content),
        Focus::Field(FormField::Title) => Focus::Page,
        Focus::Field(FormField::Author) => Focus::Field(FormField::Title),
        Focus::Field(FormField::Content) => Focus::Field(FormField::Author),
        other => other,
    }
}
