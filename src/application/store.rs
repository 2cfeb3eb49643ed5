//! The store.
//!
//! Owns every collection and is the single write surface: all mutations go
//! through it, and each mutation persists the collections it touched
//! before returning. Reads are derived on demand from owned state, so a
//! loaded store never re-reads the backend.

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::application::{seed, trends};
use crate::domain::storage::{keys, Storage};
use crate::domain::{Notification, Post, Theme, Trend, User};
use crate::shared::error::AppError;
use crate::shared::snowflake::SnowflakeGenerator;

/// ID of the local account. Mutations always act as this user.
pub const ME_USER_ID: i64 = 1;

/// Dashboard counters over the raw collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub posts: usize,
    pub likes: usize,
    pub bookmarks: usize,
    pub notifications: usize,
}

/// All application state plus the storage backend it persists to.
pub struct Store {
    storage: Box<dyn Storage>,
    ids: SnowflakeGenerator,
    users: Vec<User>,
    posts: Vec<Post>,
    bookmarks: Vec<i64>,
    notifications: Vec<Notification>,
    theme: Theme,
    trends: Vec<Trend>,
}

impl Store {
    /// Open the store over `storage`.
    ///
    /// Each collection loads from its key, falling back to the seed (or an
    /// empty collection) when the key is absent or unreadable. The trend
    /// cache is recomputed and persisted immediately so it reflects the
    /// loaded posts rather than whatever a previous run left behind.
    pub fn open(storage: Box<dyn Storage>) -> Result<Self, AppError> {
        let now = Utc::now();
        let users = load_or(storage.as_ref(), keys::USERS, seed::users);
        let posts = load_or(storage.as_ref(), keys::POSTS, || seed::posts(now));
        let bookmarks = load_or(storage.as_ref(), keys::BOOKMARKS, Vec::new);
        let notifications = load_or(storage.as_ref(), keys::NOTIFICATIONS, || {
            seed::notifications(now)
        });
        let theme = load_or(storage.as_ref(), keys::THEME, Theme::default);

        let mut store = Self {
            storage,
            ids: SnowflakeGenerator::new(1, 1),
            users,
            posts,
            bookmarks,
            notifications,
            theme,
            trends: Vec::new(),
        };
        store.recompute_trends()?;
        Ok(store)
    }

    // ===== Lookups =====

    /// Look up a user by ID.
    pub fn user(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Look up a user by handle (without the leading `@`).
    pub fn user_by_handle(&self, handle: &str) -> Option<&User> {
        self.users.iter().find(|u| u.handle == handle)
    }

    /// Look up a post by ID.
    pub fn post(&self, id: i64) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// The local account, if present in the users collection.
    pub fn me(&self) -> Option<&User> {
        self.user(ME_USER_ID)
    }

    // ===== Timelines & Search =====

    /// The home timeline: top-level posts and repost markers, newest
    /// first. Replies are excluded here; they still show on the author's
    /// profile, which is an activity page.
    pub fn list_feed(&self) -> Vec<&Post> {
        let mut feed: Vec<&Post> = self.posts.iter().filter(|p| !p.is_reply()).collect();
        sort_newest_first(&mut feed);
        feed
    }

    /// Everything a user authored, newest first: posts, replies, and
    /// repost markers alike.
    pub fn list_posts_by_user(&self, user_id: i64) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self
            .posts
            .iter()
            .filter(|p| p.author_id == user_id)
            .collect();
        sort_newest_first(&mut posts);
        posts
    }

    /// Search every stored post (replies included) by body text or author
    /// name/handle, case-insensitively. A blank term falls back to the
    /// home timeline.
    pub fn search(&self, term: &str) -> Vec<&Post> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return self.list_feed();
        }

        let mut results: Vec<&Post> = self
            .posts
            .iter()
            .filter(|p| {
                p.matches_term(&term)
                    || self.user(p.author_id).is_some_and(|u| u.matches_term(&term))
            })
            .collect();
        sort_newest_first(&mut results);
        results
    }

    /// Bookmarked posts, newest first. Bookmark IDs that no longer
    /// resolve to a stored post are skipped.
    pub fn list_bookmarks(&self) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self
            .bookmarks
            .iter()
            .filter_map(|&id| self.post(id))
            .collect();
        sort_newest_first(&mut posts);
        posts
    }

    /// Whether a post is currently bookmarked.
    pub fn is_bookmarked(&self, post_id: i64) -> bool {
        self.bookmarks.contains(&post_id)
    }

    /// Notifications for the local account, newest first.
    pub fn list_notifications(&self) -> Vec<&Notification> {
        let mut items: Vec<&Notification> = self.notifications.iter().collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        items
    }

    /// The cached top trends, most used first.
    pub fn trends(&self) -> &[Trend] {
        &self.trends
    }

    /// The persisted theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Dashboard counters.
    pub fn stats(&self) -> Stats {
        Stats {
            posts: self.posts.len(),
            likes: self.posts.iter().map(Post::like_count).sum(),
            bookmarks: self.bookmarks.len(),
            notifications: self.notifications.len(),
        }
    }

    // ===== Mutations =====

    /// Create a top-level post authored by the local account.
    ///
    /// Text is trimmed and must be non-empty after trimming, so only
    /// repost markers ever carry an empty body.
    pub fn create_post(&mut self, text: &str) -> Result<Post, AppError> {
        let text = validated_text(text)?;
        let post = Post {
            id: self.ids.generate(),
            author_id: ME_USER_ID,
            text,
            created_at: Utc::now(),
            like_user_ids: Vec::new(),
            reply_to_id: None,
            repost_of_id: None,
        };
        self.insert_post(post.clone())?;
        Ok(post)
    }

    /// Create a reply to an existing post.
    pub fn create_reply(&mut self, parent_id: i64, text: &str) -> Result<Post, AppError> {
        self.ensure_post(parent_id)?;
        let text = validated_text(text)?;
        let post = Post {
            id: self.ids.generate(),
            author_id: ME_USER_ID,
            text,
            created_at: Utc::now(),
            like_user_ids: Vec::new(),
            reply_to_id: Some(parent_id),
            repost_of_id: None,
        };
        self.insert_post(post.clone())?;
        Ok(post)
    }

    /// Repost or un-repost a post as the local account.
    ///
    /// Acts on the underlying post: reposting a repost marker targets the
    /// post it points at, so chains collapse to one level. Returns `true`
    /// when a marker now exists, `false` when one was removed.
    pub fn toggle_repost(&mut self, post_id: i64) -> Result<bool, AppError> {
        let target = self.post(post_id).ok_or_else(|| post_not_found(post_id))?;
        let target_id = target.repost_of_id.unwrap_or(target.id);

        if let Some(index) = self
            .posts
            .iter()
            .position(|p| p.author_id == ME_USER_ID && p.repost_of_id == Some(target_id))
        {
            self.posts.remove(index);
            persist(self.storage.as_mut(), keys::POSTS, &self.posts)?;
            self.recompute_trends()?;
            return Ok(false);
        }

        let marker = Post {
            id: self.ids.generate(),
            author_id: ME_USER_ID,
            text: String::new(),
            created_at: Utc::now(),
            like_user_ids: Vec::new(),
            reply_to_id: None,
            repost_of_id: Some(target_id),
        };
        self.insert_post(marker)?;
        Ok(true)
    }

    /// Like or unlike a post as the local account. Returns `true` when
    /// the post is now liked.
    pub fn toggle_like(&mut self, post_id: i64) -> Result<bool, AppError> {
        let index = self
            .posts
            .iter()
            .position(|p| p.id == post_id)
            .ok_or_else(|| post_not_found(post_id))?;

        let likes = &mut self.posts[index].like_user_ids;
        let liked = if let Some(at) = likes.iter().position(|&id| id == ME_USER_ID) {
            likes.remove(at);
            false
        } else {
            likes.push(ME_USER_ID);
            true
        };

        persist(self.storage.as_mut(), keys::POSTS, &self.posts)?;
        Ok(liked)
    }

    /// Bookmark or un-bookmark a post. Returns `true` when the post is
    /// now bookmarked.
    pub fn toggle_bookmark(&mut self, post_id: i64) -> Result<bool, AppError> {
        self.ensure_post(post_id)?;

        let bookmarked = if let Some(at) = self.bookmarks.iter().position(|&id| id == post_id) {
            self.bookmarks.remove(at);
            false
        } else {
            self.bookmarks.insert(0, post_id);
            true
        };

        persist(self.storage.as_mut(), keys::BOOKMARKS, &self.bookmarks)?;
        Ok(bookmarked)
    }

    /// Set and persist the theme.
    pub fn set_theme(&mut self, theme: Theme) -> Result<(), AppError> {
        self.theme = theme;
        persist(self.storage.as_mut(), keys::THEME, &self.theme)
    }

    /// Update the local account's profile.
    ///
    /// `name` is trimmed and an empty result keeps the current name; an
    /// empty `bio` clears it. `None` leaves a field untouched.
    pub fn update_profile(
        &mut self,
        name: Option<&str>,
        bio: Option<&str>,
    ) -> Result<(), AppError> {
        let index = self
            .users
            .iter()
            .position(|u| u.id == ME_USER_ID)
            .ok_or_else(|| AppError::NotFound(format!("User {ME_USER_ID}")))?;

        if let Some(name) = name {
            let name = name.trim();
            if !name.is_empty() {
                self.users[index].name = name.to_string();
            }
        }
        if let Some(bio) = bio {
            let bio = bio.trim();
            self.users[index].bio = if bio.is_empty() {
                None
            } else {
                Some(bio.to_string())
            };
        }

        persist(self.storage.as_mut(), keys::USERS, &self.users)
    }

    /// Rescan all post text and persist the refreshed trend cache.
    pub fn recompute_trends(&mut self) -> Result<(), AppError> {
        self.trends = trends::compute(&self.posts);
        persist(self.storage.as_mut(), keys::TRENDS, &self.trends)
    }

    /// Prepend a post and persist.
    ///
    /// New entries go to the front: trend scan order and the stable sort
    /// tie-break both rely on stored order being newest first.
    fn insert_post(&mut self, post: Post) -> Result<(), AppError> {
        self.posts.insert(0, post);
        persist(self.storage.as_mut(), keys::POSTS, &self.posts)?;
        self.recompute_trends()
    }

    fn ensure_post(&self, post_id: i64) -> Result<(), AppError> {
        if self.post(post_id).is_none() {
            return Err(post_not_found(post_id));
        }
        Ok(())
    }
}

fn post_not_found(post_id: i64) -> AppError {
    AppError::NotFound(format!("Post {post_id}"))
}

/// Stable newest-first order; equal timestamps keep stored order.
fn sort_newest_first(posts: &mut [&Post]) {
    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// Trim post text, rejecting text that trims to nothing.
fn validated_text(text: &str) -> Result<String, AppError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::Validation("Post text cannot be empty".to_string()));
    }
    Ok(text.to_string())
}

/// Load one collection, falling back when the key is absent, the backend
/// fails, or the stored document does not parse. Failures are demoted to
/// a warning so a broken state file behaves like a first run.
fn load_or<T, F>(storage: &dyn Storage, key: &str, fallback: F) -> T
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    match storage.read(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "Discarding unreadable state, using fallback");
                fallback()
            }
        },
        Ok(None) => fallback(),
        Err(e) => {
            tracing::warn!(key, error = %e, "Storage read failed, using fallback");
            fallback()
        }
    }
}

/// Serialize one collection and replace its document.
///
/// Free function rather than a method so callers can persist one field
/// while holding borrows of others.
fn persist<T: Serialize>(storage: &mut dyn Storage, key: &str, value: &T) -> Result<(), AppError> {
    let json = serde_json::to_string(value)?;
    storage.write(key, &json)
}
