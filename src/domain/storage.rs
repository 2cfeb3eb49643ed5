//! Storage contract.
//!
//! A minimal string key-value interface over which all state persists.
//! Implementations live in the infrastructure layer, following the
//! dependency inversion principle.

use crate::shared::error::AppError;

/// The fixed set of storage keys.
///
/// Every piece of application state lives under exactly one of these keys,
/// each holding one JSON document. No other keys are ever read or written.
pub mod keys {
    /// All posts, replies, and repost markers (newest first)
    pub const POSTS: &str = "posts";
    /// IDs of bookmarked posts (most recently bookmarked first)
    pub const BOOKMARKS: &str = "bookmarks";
    /// Notifications for the local account
    pub const NOTIFICATIONS: &str = "notifications";
    /// All user accounts
    pub const USERS: &str = "users";
    /// The color theme setting
    pub const THEME: &str = "theme";
    /// The cached top trends
    pub const TRENDS: &str = "trends";
}

/// Key-value storage for serialized application state.
///
/// `read` distinguishes "key absent" (`Ok(None)`) from a failing backend
/// (`Err`); the store treats both as "use the fallback" but logs the
/// latter. Writes are full-document replacements.
pub trait Storage {
    /// Read the document stored under `key`, if any.
    fn read(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Replace the document stored under `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<(), AppError>;
}
