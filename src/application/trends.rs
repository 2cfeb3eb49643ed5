//! Hashtag trends.
//!
//! Scans stored post text for hashtags and keeps the top tags by count.
//! The store persists the result as a cache and triggers recomputes.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::{Post, Trend};

/// Maximum number of trends kept.
pub const TREND_LIMIT: usize = 5;

/// `#tag` occurrences: ASCII letters, digits, and underscores.
static HASHTAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)#([a-z0-9_]+)").expect("hashtag pattern is valid"));

/// Tally hashtags across `posts` and return the top tags, most used first.
///
/// Counts are per occurrence, not per post, and tags fold to lowercase.
/// The sort is stable over first-encountered order in scan order, so for a
/// given post list the result is deterministic, ties included.
pub fn compute(posts: &[Post]) -> Vec<Trend> {
    let mut tallies: Vec<Trend> = Vec::new();

    for post in posts {
        for capture in HASHTAG.captures_iter(&post.text) {
            let tag = capture[1].to_lowercase();
            match tallies.iter_mut().find(|t| t.tag == tag) {
                Some(trend) => trend.count += 1,
                None => tallies.push(Trend { tag, count: 1 }),
            }
        }
    }

    tallies.sort_by(|a, b| b.count.cmp(&a.count));
    tallies.truncate(TREND_LIMIT);
    tallies
}
