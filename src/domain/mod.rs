//! # Domain Layer
//!
//! The domain layer contains the core types of the feed. It is independent
//! of any storage backend or presentation concerns.
//!
//! ## Structure
//!
//! - **entities**: Core domain entities (User, Post, Notification, Trend, Theme)
//! - **storage**: The key-value storage contract and the fixed key set
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - The storage trait defines the persistence contract; backends live in
//!   the infrastructure layer

pub mod entities;
pub mod storage;

// Re-export commonly used types
pub use entities::*;
