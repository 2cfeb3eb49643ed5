//! Infrastructure Layer
//!
//! Contains implementations of the domain storage contract:
//! - File-backed storage (one JSON file per key under the data directory)
//! - In-memory storage (tests)

pub mod storage;
