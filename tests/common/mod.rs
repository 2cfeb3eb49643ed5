//! Common Test Utilities
//!
//! Shared fixtures for integration tests.

#![allow(dead_code)]

use tinychirp::application::Store;
use tinychirp::infrastructure::storage::MemoryStorage;

/// ID of the seeded post authored by the local account.
pub const SARAH_POST_ID: i64 = 101;

/// ID of the seeded post authored by the other demo user.
pub const ASHLEY_POST_ID: i64 = 102;

/// Open a store over fresh in-memory storage, populated with seed data.
pub fn seeded_store() -> Store {
    Store::open(Box::new(MemoryStorage::new())).expect("open over empty storage succeeds")
}

/// IDs of `posts`, in the order given.
pub fn post_ids(posts: &[&tinychirp::domain::Post]) -> Vec<i64> {
    posts.iter().map(|p| p.id).collect()
}
