//! # Domain Entities
//!
//! Core domain entities for the feed. All entities serialize to JSON and
//! map to one of the fixed local-storage keys.
//!
//! ## Core Entities
//!
//! - **User**: An account; posts reference their author by ID
//! - **Post**: A post, reply, or repost marker (one struct, three shapes)
//! - **Notification**: A display-only event record for the local account
//!
//! ## Supporting Entities
//!
//! - **Trend**: A derived hashtag aggregate, cached between recomputes
//! - **Theme**: The persisted color theme setting

mod notification;
mod post;
mod theme;
mod trend;
mod user;

// Re-export User entity
pub use user::User;

// Re-export Post entity
pub use post::Post;

// Re-export Notification entity and related types
pub use notification::{Notification, NotificationKind};

// Re-export Trend entity
pub use trend::Trend;

// Re-export Theme setting
pub use theme::Theme;
