//! # TinyChirp Library
//!
//! This crate provides a tiny single-user social feed with:
//! - Posts, replies, reposts, likes and bookmarks
//! - Hashtag trend tracking recomputed on the fly
//! - Per-key JSON persistence to a local data directory
//! - A colorized terminal presentation of every view
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: Core entities and the storage trait
//! - **Application Layer**: The store, seed data and trend computation
//! - **Infrastructure Layer**: File-backed and in-memory storage
//! - **Presentation Layer**: CLI parsing, command handlers and rendering
//!
//! ## Module Structure
//!
//! ```text
//! tinychirp/
//! +-- config/        Configuration management
//! +-- domain/        Domain entities and the storage trait
//! +-- application/   Store, seed data and trend computation
//! +-- infrastructure/ Storage backend implementations
//! +-- presentation/  CLI definition, handlers and rendering
//! +-- shared/        Common utilities (errors, snowflake IDs)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Store and feed logic
pub mod application;

// Infrastructure layer - Storage implementations
pub mod infrastructure;

// Presentation layer - CLI and rendering
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
