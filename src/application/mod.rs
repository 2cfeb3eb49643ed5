//! Application Layer
//!
//! Contains the store (the single write surface for all state), the
//! first-run seed fixtures, and the trends computation. This layer
//! orchestrates the flow of data between the presentation layer and the
//! domain.

pub mod seed;
pub mod store;
pub mod trends;

pub use store::{Stats, Store, ME_USER_ID};
