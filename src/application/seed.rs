//! First-run fixtures.
//!
//! Served whenever a storage key is absent or unreadable. Seed records
//! keep small fixed IDs so they are easy to address from the CLI, and
//! timestamps are offsets from the current time so a fresh feed always
//! looks recent.

use chrono::{DateTime, Duration, Utc};

use crate::domain::{Notification, NotificationKind, Post, User};

/// The two seed accounts. The first is the local account.
pub fn users() -> Vec<User> {
    vec![
        User {
            id: 1,
            handle: "sarah".to_string(),
            name: "Sarah Clark".to_string(),
            avatar_url: Some("https://api.dicebear.com/9.x/thumbs/png?seed=One".to_string()),
            bio: Some("Frontend + Sec".to_string()),
        },
        User {
            id: 2,
            handle: "ashley".to_string(),
            name: "Ashley Moon".to_string(),
            avatar_url: Some("https://api.dicebear.com/9.x/thumbs/png?seed=Two".to_string()),
            bio: Some("Pilot & SAR".to_string()),
        },
    ]
}

/// One post per seed account.
pub fn posts(now: DateTime<Utc>) -> Vec<Post> {
    vec![
        Post {
            id: 101,
            author_id: 1,
            text: "Hello TinyChirp 👋 #angular".to_string(),
            created_at: now - Duration::hours(1),
            like_user_ids: vec![2],
            reply_to_id: None,
            repost_of_id: None,
        },
        Post {
            id: 102,
            author_id: 2,
            text: "Angular + Tailwind, tiny but complete. #tailwind #angular".to_string(),
            created_at: now - Duration::minutes(3),
            like_user_ids: vec![],
            reply_to_id: None,
            repost_of_id: None,
        },
    ]
}

/// Two notifications addressed to the local account.
pub fn notifications(now: DateTime<Utc>) -> Vec<Notification> {
    vec![
        Notification {
            id: 1,
            kind: NotificationKind::Like,
            text: "Ashley liked your post".to_string(),
            created_at: now - Duration::minutes(10),
        },
        Notification {
            id: 2,
            kind: NotificationKind::Follow,
            text: "Ashley followed you".to_string(),
            created_at: now - Duration::days(1),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_posts_reference_seed_users() {
        let users = users();
        let posts = posts(Utc::now());

        for post in &posts {
            assert!(users.iter().any(|u| u.id == post.author_id));
        }
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let posts = posts(Utc::now());
        let users = users();

        assert_ne!(posts[0].id, posts[1].id);
        assert_ne!(users[0].id, users[1].id);
    }

    #[test]
    fn test_seed_posts_are_top_level() {
        for post in posts(Utc::now()) {
            assert!(!post.is_reply());
            assert!(!post.is_repost());
        }
    }

    #[test]
    fn test_seed_timestamps_are_in_the_past() {
        let now = Utc::now();

        for post in posts(now) {
            assert!(post.created_at < now);
        }
        for notification in notifications(now) {
            assert!(notification.created_at < now);
        }
    }
}
