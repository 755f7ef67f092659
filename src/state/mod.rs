//! Application state management.
//!
//! [`FeedStore`] owns everything the screens render: the seeded user
//! list, the mutable post list, and the mock notifications. All
//! mutation goes through the named operations here; screens read the
//! collections but never write them directly.

use chrono::Local;
use once_cell::sync::Lazy;

use crate::models::{Notification, Post, ReactionKind, User};

/// Members seeded at startup. The user list never changes afterwards.
static SEED_USERS: Lazy<Vec<User>> = Lazy::new(|| {
    vec![
        User {
            id: "u1".to_string(),
            name: "Alice".to_string(),
        },
        User {
            id: "u2".to_string(),
            name: "Bob".to_string(),
        },
        User {
            id: "u3".to_string(),
            name: "Charlie".to_string(),
        },
    ]
});

/// Posts seeded at startup so the feed never opens empty.
static SEED_POSTS: Lazy<Vec<Post>> = Lazy::new(|| {
    vec![
        Post::new("p1", "Welcome to GenZ", "First post here!", "u2"),
        Post::new(
            "p2",
            "Getting started",
            "Create, react and edit posts!",
            "u1",
        ),
    ]
});

/// In-memory state store for the whole app.
///
/// Owned by the application root and passed down to screens; nothing is
/// persisted and everything resets on restart.
#[derive(Debug, Clone)]
pub struct FeedStore {
    users: Vec<User>,
    posts: Vec<Post>,
    notifications: Vec<Notification>,
}

impl FeedStore {
    /// Create a store with the seed users and posts and no
    /// notifications.
    pub fn seeded() -> Self {
        Self {
            users: SEED_USERS.clone(),
            posts: SEED_POSTS.clone(),
            notifications: Vec::new(),
        }
    }

    /// Create an empty store (no seed posts). Used by tests that need
    /// full control over the post list.
    pub fn empty() -> Self {
        Self {
            users: SEED_USERS.clone(),
            posts: Vec::new(),
            notifications: Vec::new(),
        }
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Look up a post by id.
    pub fn post(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Posts authored by the given user, in feed order.
    pub fn posts_by_user(&self, user_id: &str) -> Vec<&Post> {
        self.posts.iter().filter(|p| p.user_id == user_id).collect()
    }

    /// Display name for a user id, or "Unknown" when the reference
    /// dangles.
    pub fn user_name(&self, user_id: &str) -> &str {
        self.users
            .iter()
            .find(|u| u.id == user_id)
            .map(|u| u.name.as_str())
            .unwrap_or("Unknown")
    }

    /// Add a post to the feed.
    ///
    /// Title, content, and author must all be non-empty after trimming;
    /// otherwise the submission is silently dropped and false is
    /// returned. The new post is inserted immediately after the first
    /// existing post, keeping the first entry pinned and the newest
    /// entry second (appended when the feed is empty). Its id is
    /// `"p" + (count + 1)`.
    pub fn add_post(&mut self, title: &str, content: &str, user_id: &str) -> bool {
        let title = title.trim();
        let content = content.trim();
        if title.is_empty() || content.is_empty() || user_id.is_empty() {
            tracing::debug!("add_post rejected: empty field after trim");
            return false;
        }

        let id = format!("p{}", self.posts.len() + 1);
        let post = Post::new(id.clone(), title, content, user_id);
        let index = 1.min(self.posts.len());
        self.posts.insert(index, post);
        tracing::debug!(post_id = %id, author = %user_id, "post added");
        true
    }

    /// Bump one reaction counter on one post.
    ///
    /// `Lock` never changes anything, for any id. An unknown post id is
    /// a no-op.
    pub fn react_to_post(&mut self, post_id: &str, kind: ReactionKind) {
        if kind == ReactionKind::Lock {
            return;
        }
        if let Some(post) = self.posts.iter_mut().find(|p| p.id == post_id) {
            post.reactions.bump(kind);
            tracing::debug!(post_id = %post_id, kind = kind.as_str(), "reaction added");
        }
    }

    /// Replace a post's title and content (trimmed).
    ///
    /// Unlike creation there is no emptiness validation; saving blank
    /// drafts blanks the post. Author and reactions are untouched. An
    /// unknown id is a no-op.
    pub fn edit_post(&mut self, post_id: &str, title: &str, content: &str) {
        if let Some(post) = self.posts.iter_mut().find(|p| p.id == post_id) {
            post.title = title.trim().to_string();
            post.content = content.trim().to_string();
            tracing::debug!(post_id = %post_id, "post edited");
        }
    }

    /// Replace the notification list wholesale with the two standing
    /// entries, stamped with the current local wall-clock time.
    pub fn refresh_notifications(&mut self) {
        let time = Local::now().format("%H:%M:%S");
        self.notifications = vec![
            Notification {
                id: "n1".to_string(),
                text: format!("New content available ({time})"),
            },
            Notification {
                id: "n2".to_string(),
                text: format!("Don't miss trending posts ({time})"),
            },
        ];
        tracing::debug!("notifications refreshed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Reactions;

    #[test]
    fn test_seeded_store_shape() {
        let store = FeedStore::seeded();
        assert_eq!(store.users().len(), 3);
        assert_eq!(store.posts().len(), 2);
        assert!(store.notifications().is_empty());
        assert_eq!(store.posts()[0].id, "p1");
        assert_eq!(store.posts()[1].id, "p2");
    }

    #[test]
    fn test_add_post_grows_feed_by_one() {
        let mut store = FeedStore::seeded();
        let before = store.posts().len();
        assert!(store.add_post("Hello", "World", "u1"));
        assert_eq!(store.posts().len(), before + 1);
    }

    #[test]
    fn test_add_post_new_post_has_zero_reactions() {
        let mut store = FeedStore::seeded();
        store.add_post("Hello", "World", "u1");
        let post = store.post("p3").expect("new post should exist");
        assert_eq!(post.reactions, Reactions::default());
    }

    #[test]
    fn test_add_post_inserts_after_first() {
        let mut store = FeedStore::seeded();
        store.add_post("Newest", "Body", "u3");
        assert_eq!(store.posts()[0].id, "p1");
        assert_eq!(store.posts()[1].title, "Newest");
        assert_eq!(store.posts()[2].id, "p2");
    }

    #[test]
    fn test_add_post_appends_when_empty() {
        let mut store = FeedStore::empty();
        assert!(store.add_post("Only", "Post", "u1"));
        assert_eq!(store.posts().len(), 1);
        assert_eq!(store.posts()[0].id, "p1");
    }

    #[test]
    fn test_add_post_trims_fields() {
        let mut store = FeedStore::seeded();
        store.add_post("  Spaced  ", "  out  ", "u2");
        let post = &store.posts()[1];
        assert_eq!(post.title, "Spaced");
        assert_eq!(post.content, "out");
    }

    #[test]
    fn test_add_post_rejects_blank_fields() {
        let mut store = FeedStore::seeded();
        let before = store.posts().len();
        assert!(!store.add_post("   ", "Content", "u1"));
        assert!(!store.add_post("Title", "  ", "u1"));
        assert!(!store.add_post("Title", "Content", ""));
        assert_eq!(store.posts().len(), before);
    }

    #[test]
    fn test_react_increments_only_that_counter() {
        let mut store = FeedStore::seeded();
        for kind in [
            ReactionKind::Like,
            ReactionKind::Love,
            ReactionKind::Wow,
            ReactionKind::Haha,
        ] {
            store.react_to_post("p1", kind);
        }
        let p1 = store.post("p1").unwrap();
        assert_eq!(p1.reactions.like, 1);
        assert_eq!(p1.reactions.love, 1);
        assert_eq!(p1.reactions.wow, 1);
        assert_eq!(p1.reactions.haha, 1);
        assert_eq!(p1.reactions.lock, 0);

        // The other post is untouched
        let p2 = store.post("p2").unwrap();
        assert_eq!(p2.reactions, Reactions::default());
    }

    #[test]
    fn test_react_lock_never_changes_anything() {
        let mut store = FeedStore::seeded();
        store.react_to_post("p1", ReactionKind::Lock);
        store.react_to_post("does-not-exist", ReactionKind::Lock);
        assert_eq!(store.post("p1").unwrap().reactions, Reactions::default());
    }

    #[test]
    fn test_react_unknown_post_is_noop() {
        let mut store = FeedStore::seeded();
        store.react_to_post("p99", ReactionKind::Like);
        assert_eq!(store.post("p1").unwrap().reactions.like, 0);
        assert_eq!(store.post("p2").unwrap().reactions.like, 0);
    }

    #[test]
    fn test_edit_post_replaces_title_and_content_only() {
        let mut store = FeedStore::seeded();
        store.react_to_post("p2", ReactionKind::Haha);
        store.edit_post("p2", "  New title ", " New content ");

        let post = store.post("p2").unwrap();
        assert_eq!(post.title, "New title");
        assert_eq!(post.content, "New content");
        assert_eq!(post.user_id, "u1");
        assert_eq!(post.reactions.haha, 1);

        // The other post is untouched
        assert_eq!(store.post("p1").unwrap().title, "Welcome to GenZ");
    }

    #[test]
    fn test_edit_post_allows_blank_values() {
        let mut store = FeedStore::seeded();
        store.edit_post("p1", "", "");
        let post = store.post("p1").unwrap();
        assert!(post.title.is_empty());
        assert!(post.content.is_empty());
    }

    #[test]
    fn test_refresh_replaces_with_exactly_two_entries() {
        let mut store = FeedStore::seeded();
        store.refresh_notifications();
        assert_eq!(store.notifications().len(), 2);

        // Refreshing again replaces rather than appends
        store.refresh_notifications();
        assert_eq!(store.notifications().len(), 2);
        assert_eq!(store.notifications()[0].id, "n1");
        assert_eq!(store.notifications()[1].id, "n2");
        assert!(store.notifications()[0]
            .text
            .starts_with("New content available ("));
        assert!(store.notifications()[1]
            .text
            .starts_with("Don't miss trending posts ("));
    }

    #[test]
    fn test_user_name_falls_back_to_unknown() {
        let store = FeedStore::seeded();
        assert_eq!(store.user_name("u1"), "Alice");
        assert_eq!(store.user_name("u9"), "Unknown");
    }

    #[test]
    fn test_posts_by_user_filters_in_feed_order() {
        let mut store = FeedStore::seeded();
        store.add_post("Another", "From Bob", "u2");
        let bobs: Vec<&str> = store
            .posts_by_user("u2")
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(bobs, vec!["Welcome to GenZ", "Another"]);
        assert!(store.posts_by_user("u3").is_empty());
    }
}
