//! Terminal rendering.
//!
//! View structs implement `Display` and write ANSI-colored lines; post
//! bodies stay uncolored so output is easy to grep and pipe.

use std::fmt;

use chrono::{DateTime, Utc};
use owo_colors::OwoColorize;

use crate::application::Store;
use crate::domain::{Post, Theme};

/// One rendered post.
///
/// Repost markers resolve to the post they point at: the card carries the
/// underlying post's ID, text, and like count plus a repost line, so IDs
/// shown on screen are always valid targets for `like`, `reply`, and
/// friends. A card resolves to `None` when its author or repost target is
/// missing from the store, and the caller renders nothing.
pub struct PostCard<'a> {
    pub id: i64,
    pub author_name: &'a str,
    pub author_handle: &'a str,
    pub text: &'a str,
    pub created_at: DateTime<Utc>,
    pub likes: usize,
    pub reposted: bool,
    pub bookmarked: bool,
    pub reply_to: Option<i64>,
}

impl<'a> PostCard<'a> {
    /// Resolve `post` against the store, following repost indirection.
    pub fn resolve(store: &'a Store, post: &'a Post) -> Option<Self> {
        let author = store.user(post.author_id)?;
        let display = match post.repost_of_id {
            Some(target_id) => store.post(target_id)?,
            None => post,
        };

        Some(Self {
            id: display.id,
            author_name: &author.name,
            author_handle: &author.handle,
            text: &display.text,
            created_at: post.created_at,
            likes: display.like_count(),
            reposted: post.is_repost(),
            bookmarked: store.is_bookmarked(display.id),
            reply_to: post.reply_to_id,
        })
    }
}

impl fmt::Display for PostCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}  {} {}  {}",
            self.id.yellow(),
            self.author_name,
            format!("@{}", self.author_handle).bright_black(),
            relative_time(self.created_at).bright_black(),
        )?;
        if self.reposted {
            writeln!(f, "{}", "↻ Reposted".bright_black())?;
        }
        if let Some(parent_id) = self.reply_to {
            writeln!(f, "{}", format!("↩ Replying to {parent_id}").bright_black())?;
        }
        if !self.text.is_empty() {
            writeln!(f, "{}", self.text)?;
        }
        write!(f, "♥ {}", self.likes)?;
        if self.bookmarked {
            write!(f, "  {}", "🔖 bookmarked".bright_black())?;
        }
        Ok(())
    }
}

/// Section heading, accented by the active theme.
pub fn heading(title: &str, theme: Theme) -> String {
    match theme {
        Theme::Light => format!("{}", title.blue().bold()),
        Theme::Dark => format!("{}", title.magenta().bold()),
    }
}

/// Format a timestamp as relative time (e.g., "2 hours ago", "yesterday").
pub fn relative_time(ts: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(ts);

    let seconds = duration.num_seconds();
    let minutes = duration.num_minutes();
    let hours = duration.num_hours();
    let days = duration.num_days();

    if seconds < 60 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{} min ago", minutes)
    } else if hours < 24 {
        format!("{} hours ago", hours)
    } else if days == 1 {
        "yesterday".to_string()
    } else if days < 7 {
        format!("{} days ago", days)
    } else if days < 30 {
        format!("{} weeks ago", days / 7)
    } else if days < 365 {
        format!("{} months ago", days / 30)
    } else {
        format!("{} years ago", days / 365)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::MemoryStorage;
    use chrono::Duration;
    use test_case::test_case;

    fn seeded_store() -> Store {
        Store::open(Box::new(MemoryStorage::new())).expect("store should open")
    }

    // ===== PostCard Resolution Tests =====

    #[test]
    fn test_resolve_plain_post() {
        let store = seeded_store();
        let post = store.post(101).unwrap();

        let card = PostCard::resolve(&store, post).unwrap();

        assert_eq!(card.id, 101);
        assert_eq!(card.author_name, "Sarah Clark");
        assert_eq!(card.author_handle, "sarah");
        assert_eq!(card.likes, 1);
        assert!(!card.reposted);
        assert!(card.reply_to.is_none());
    }

    #[test]
    fn test_resolve_repost_shows_target_body_under_reposter() {
        let mut store = seeded_store();
        store.toggle_repost(102).unwrap();
        let marker = store
            .list_posts_by_user(crate::application::ME_USER_ID)
            .into_iter()
            .find(|p| p.is_repost())
            .unwrap();

        let card = PostCard::resolve(&store, marker).unwrap();

        // The reposter's byline over the target's id, text, and likes.
        assert_eq!(card.author_handle, "sarah");
        assert_eq!(card.id, 102);
        assert!(card.text.contains("Tailwind"));
        assert!(card.reposted);
    }

    #[test]
    fn test_resolve_missing_author_renders_nothing() {
        let store = seeded_store();
        let orphan = Post {
            id: 900,
            author_id: 999,
            text: "ghost".to_string(),
            ..Post::default()
        };

        assert!(PostCard::resolve(&store, &orphan).is_none());
    }

    #[test]
    fn test_resolve_missing_repost_target_renders_nothing() {
        let store = seeded_store();
        let dangling = Post {
            id: 901,
            author_id: 1,
            text: String::new(),
            repost_of_id: Some(12345),
            ..Post::default()
        };

        assert!(PostCard::resolve(&store, &dangling).is_none());
    }

    #[test]
    fn test_card_display_contains_body_and_likes() {
        let store = seeded_store();
        let card = PostCard::resolve(&store, store.post(101).unwrap()).unwrap();

        let rendered = card.to_string();

        assert!(rendered.contains("Hello TinyChirp"));
        assert!(rendered.contains("♥ 1"));
    }

    #[test]
    fn test_bookmarked_card_shows_marker() {
        let mut store = seeded_store();
        store.toggle_bookmark(101).unwrap();

        let card = PostCard::resolve(&store, store.post(101).unwrap()).unwrap();

        assert!(card.to_string().contains("bookmarked"));
    }

    // ===== Relative Time Tests =====

    #[test_case(Duration::seconds(5), "just now" ; "under a minute")]
    #[test_case(Duration::minutes(3), "3 min ago" ; "minutes")]
    #[test_case(Duration::hours(2), "2 hours ago" ; "hours")]
    #[test_case(Duration::days(1), "yesterday" ; "one day")]
    #[test_case(Duration::days(3), "3 days ago" ; "days")]
    #[test_case(Duration::days(14), "2 weeks ago" ; "weeks")]
    #[test_case(Duration::days(90), "3 months ago" ; "months")]
    #[test_case(Duration::days(800), "2 years ago" ; "years")]
    fn test_relative_time_buckets(age: Duration, expected: &str) {
        assert_eq!(relative_time(Utc::now() - age), expected);
    }

    // ===== Heading Tests =====

    #[test]
    fn test_heading_contains_title_for_both_themes() {
        assert!(heading("Feed", Theme::Light).contains("Feed"));
        assert!(heading("Feed", Theme::Dark).contains("Feed"));
    }

    #[test]
    fn test_theme_changes_heading_accent() {
        assert_ne!(heading("Feed", Theme::Light), heading("Feed", Theme::Dark));
    }
}
