//! Notification entity.
//!
//! Persisted as part of the `notifications` collection in local storage.
//! Notifications are display-only records; nothing in the store generates
//! them after the seed, and there is no read/unread state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Notification kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Like,
    Reply,
    Follow,
}

impl NotificationKind {
    /// Convert to storage string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Reply => "reply",
            Self::Follow => "follow",
        }
    }

    /// Single-character marker shown in front of the notification text.
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Like => "♥",
            Self::Reply => "↩",
            Self::Follow => "+",
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents a notification shown to the local account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Snowflake ID (seed notifications keep small fixed IDs)
    pub id: i64,

    /// What happened
    pub kind: NotificationKind,

    /// Human-readable description
    pub text: String,

    /// Timestamp when the event happened
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&NotificationKind::Follow)
            .expect("Failed to serialize kind");
        assert_eq!(json, "\"follow\"");
    }

    #[test]
    fn test_kind_deserializes_lowercase() {
        let kind: NotificationKind =
            serde_json::from_str("\"like\"").expect("Failed to deserialize kind");
        assert_eq!(kind, NotificationKind::Like);
    }

    #[test]
    fn test_kind_as_str_values() {
        assert_eq!(NotificationKind::Like.as_str(), "like");
        assert_eq!(NotificationKind::Reply.as_str(), "reply");
        assert_eq!(NotificationKind::Follow.as_str(), "follow");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(format!("{}", NotificationKind::Reply), "reply");
    }

    #[test]
    fn test_each_kind_has_a_distinct_glyph() {
        let glyphs = [
            NotificationKind::Like.glyph(),
            NotificationKind::Reply.glyph(),
            NotificationKind::Follow.glyph(),
        ];
        assert_ne!(glyphs[0], glyphs[1]);
        assert_ne!(glyphs[1], glyphs[2]);
        assert_ne!(glyphs[0], glyphs[2]);
    }

    #[test]
    fn test_notification_serialization_roundtrip() {
        let notification = Notification {
            id: 1,
            kind: NotificationKind::Like,
            text: "Ashley liked your post".to_string(),
            created_at: Utc::now(),
        };

        let json =
            serde_json::to_string(&notification).expect("Failed to serialize notification");
        let parsed: Notification =
            serde_json::from_str(&json).expect("Failed to deserialize notification");

        assert_eq!(parsed, notification);
    }
}
