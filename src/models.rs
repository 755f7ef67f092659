//! Core data types for the feed.
//!
//! These are plain value types shared between the store and the UI:
//! - [`User`] - A feed member (seeded at startup, never mutated)
//! - [`Post`] - A feed entry with per-emoji reaction counters
//! - [`Reactions`] / [`ReactionKind`] - The counter block on each post
//! - [`Notification`] - A mock notification line

use serde::{Deserialize, Serialize};

/// A member of the feed. Users are seeded once and immutable for the
/// life of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
}

/// The reaction kinds a post carries.
///
/// `Lock` is display-only: its counter stays at zero because no code
/// path increments it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReactionKind {
    Like,
    Love,
    Wow,
    Haha,
    Lock,
}

impl ReactionKind {
    /// All kinds in display order (the lock button renders last).
    pub const ALL: [ReactionKind; 5] = [
        ReactionKind::Like,
        ReactionKind::Love,
        ReactionKind::Wow,
        ReactionKind::Haha,
        ReactionKind::Lock,
    ];

    /// Stable identifier used in logs and serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReactionKind::Like => "like",
            ReactionKind::Love => "love",
            ReactionKind::Wow => "wow",
            ReactionKind::Haha => "haha",
            ReactionKind::Lock => "lock",
        }
    }

    /// Emoji shown on the reaction button.
    pub fn emoji(&self) -> &'static str {
        match self {
            ReactionKind::Like => "\u{1F44D}",
            ReactionKind::Love => "\u{2764}\u{FE0F}",
            ReactionKind::Wow => "\u{1F62E}",
            ReactionKind::Haha => "\u{1F602}",
            ReactionKind::Lock => "\u{1F512}",
        }
    }
}

/// Per-post reaction counters. All counters start at zero; every counter
/// except `lock` is monotonically non-decreasing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reactions {
    pub like: u32,
    pub love: u32,
    pub wow: u32,
    pub haha: u32,
    pub lock: u32,
}

impl Reactions {
    /// Read the counter for a kind.
    pub fn count(&self, kind: ReactionKind) -> u32 {
        match kind {
            ReactionKind::Like => self.like,
            ReactionKind::Love => self.love,
            ReactionKind::Wow => self.wow,
            ReactionKind::Haha => self.haha,
            ReactionKind::Lock => self.lock,
        }
    }

    /// Increment the counter for a kind. `Lock` is a guaranteed no-op;
    /// the counter is frozen at zero by contract.
    pub fn bump(&mut self, kind: ReactionKind) {
        match kind {
            ReactionKind::Like => self.like += 1,
            ReactionKind::Love => self.love += 1,
            ReactionKind::Wow => self.wow += 1,
            ReactionKind::Haha => self.haha += 1,
            ReactionKind::Lock => {}
        }
    }
}

/// A feed entry.
///
/// `user_id` references [`User::id`] but is not enforced; a dangling
/// reference renders as "Unknown".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub user_id: String,
    pub reactions: Reactions,
}

impl Post {
    /// Create a post with all-zero reaction counters.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            user_id: user_id.into(),
            reactions: Reactions::default(),
        }
    }
}

/// A mock notification line. The whole collection is replaced (never
/// merged) on refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub text: String,
}
