//! Post entity.
//!
//! Persisted as part of the `posts` collection in local storage. Three
//! shapes share this one struct:
//! - top-level post: `reply_to_id` and `repost_of_id` both `None`
//! - reply: `reply_to_id` set
//! - repost: `repost_of_id` set, `text` empty
//!
//! Empty text is only valid for reposts; the store enforces that on write.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents a post, reply, or repost marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Snowflake ID (seed posts keep small fixed IDs)
    pub id: i64,

    /// Author user ID
    pub author_id: i64,

    /// Post body (empty for reposts)
    pub text: String,

    /// Timestamp when the post was created
    pub created_at: DateTime<Utc>,

    /// IDs of users who liked this post
    #[serde(default)]
    pub like_user_ids: Vec<i64>,

    /// ID of the post being replied to (if this is a reply)
    #[serde(default)]
    pub reply_to_id: Option<i64>,

    /// ID of the post being reposted (if this is a repost marker)
    #[serde(default)]
    pub repost_of_id: Option<i64>,
}

impl Post {
    /// Check if this is a reply.
    pub fn is_reply(&self) -> bool {
        self.reply_to_id.is_some()
    }

    /// Check if this is a repost marker.
    pub fn is_repost(&self) -> bool {
        self.repost_of_id.is_some()
    }

    /// Number of likes on this post.
    pub fn like_count(&self) -> usize {
        self.like_user_ids.len()
    }

    /// Check whether the given user has liked this post.
    pub fn is_liked_by(&self, user_id: i64) -> bool {
        self.like_user_ids.contains(&user_id)
    }

    /// Case-insensitive match of the body against a lowercased search term.
    pub fn matches_term(&self, term: &str) -> bool {
        self.text.to_lowercase().contains(term)
    }
}

impl Default for Post {
    fn default() -> Self {
        Self {
            id: 0,
            author_id: 0,
            text: String::new(),
            created_at: Utc::now(),
            like_user_ids: Vec::new(),
            reply_to_id: None,
            repost_of_id: None,
        }
    }
}
