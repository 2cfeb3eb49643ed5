//! Command handlers.
//!
//! One module per command group; view handlers read the store, the post
//! module mutates it.

pub mod bookmarks;
pub mod dashboard;
pub mod explore;
pub mod feed;
pub mod notifications;
pub mod post;
pub mod profile;
pub mod settings;
