//! Trend entity.
//!
//! A derived aggregate: hashtag plus occurrence count. The cached top list
//! is persisted under its own storage key and recomputed by the store
//! whenever the scanned text set changes.

use serde::{Deserialize, Serialize};

/// A trending hashtag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trend {
    /// Hashtag without the leading `#` (lowercase)
    pub tag: String,

    /// Number of posts mentioning the tag
    pub count: u32,
}

impl Trend {
    /// The tag as rendered, with the leading `#`.
    pub fn label(&self) -> String {
        format!("#{}", self.tag)
    }
}
