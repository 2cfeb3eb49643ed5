//! User entity.
//!
//! Persisted as part of the `users` collection in local storage.

use serde::{Deserialize, Serialize};

/// Represents a user account.
///
/// There is no authentication layer; users exist so that posts have authors
/// and so the profile view has something to show. The local account is
/// identified by a well-known ID owned by the application layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Snowflake ID (seed users keep small fixed IDs)
    pub id: i64,

    /// Handle without the leading `@` (unique, lowercase)
    pub handle: String,

    /// Display name
    pub name: String,

    /// URL to the user's avatar image
    pub avatar_url: Option<String>,

    /// Short bio text
    pub bio: Option<String>,
}

impl User {
    /// Case-insensitive match against a lowercased search term.
    ///
    /// The caller is expected to lowercase the term once; this lowercases
    /// the user fields per call.
    pub fn matches_term(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(term) || self.handle.to_lowercase().contains(term)
    }
}

impl Default for User {
    fn default() -> Self {
        Self {
            id: 0,
            handle: String::new(),
            name: String::new(),
            avatar_url: None,
            bio: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_user() -> User {
        User {
            id: 7,
            handle: "sarah".to_string(),
            name: "Sarah Clark".to_string(),
            avatar_url: None,
            bio: Some("Frontend + Sec".to_string()),
        }
    }

    #[test]
    fn test_user_default() {
        let user = User::default();

        assert_eq!(user.id, 0);
        assert!(user.handle.is_empty());
        assert!(user.name.is_empty());
        assert!(user.avatar_url.is_none());
        assert!(user.bio.is_none());
    }

    #[test]
    fn test_matches_term_on_name() {
        let user = create_test_user();
        assert!(user.matches_term("clark"));
        assert!(user.matches_term("sarah c"));
    }

    #[test]
    fn test_matches_term_on_handle() {
        let user = create_test_user();
        assert!(user.matches_term("sar"));
    }

    #[test]
    fn test_matches_term_rejects_unrelated() {
        let user = create_test_user();
        assert!(!user.matches_term("ashley"));
    }

    #[test]
    fn test_matches_term_is_case_insensitive_on_fields() {
        let mut user = create_test_user();
        user.name = "SARAH Clark".to_string();

        // The term arrives pre-lowercased; the fields may not be.
        assert!(user.matches_term("sarah"));
    }

    #[test]
    fn test_user_serialization_roundtrip() {
        let user = create_test_user();

        let json = serde_json::to_string(&user).expect("Failed to serialize user");
        let parsed: User = serde_json::from_str(&json).expect("Failed to deserialize user");

        assert_eq!(parsed, user);
    }
}
