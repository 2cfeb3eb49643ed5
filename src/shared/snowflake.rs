//! Snowflake ID Generator
//!
//! Twitter-style time-ordered unique ID generation. IDs sort by creation
//! time, which the store relies on for tie-breaking equal timestamps.

use std::time::{SystemTime, UNIX_EPOCH};

/// TinyChirp epoch (2024-01-01T00:00:00.000Z)
const TINYCHIRP_EPOCH: u64 = 1704067200000;

/// Snowflake ID generator
///
/// Single-actor variant: the store owns exactly one generator and mutates
/// it through `&mut self`, so no atomics are needed.
pub struct SnowflakeGenerator {
    machine_id: u64,
    node_id: u64,
    sequence: u64,
    last_timestamp: u64,
}

impl SnowflakeGenerator {
    /// Create a new snowflake generator
    pub fn new(machine_id: u64, node_id: u64) -> Self {
        Self {
            machine_id: machine_id & 0x1F, // 5 bits
            node_id: node_id & 0x1F,       // 5 bits
            sequence: 0,
            last_timestamp: 0,
        }
    }

    /// Generate a new snowflake ID
    pub fn generate(&mut self) -> i64 {
        let timestamp = current_timestamp();

        if timestamp == self.last_timestamp {
            self.sequence = (self.sequence + 1) & 0xFFF;
        } else {
            self.last_timestamp = timestamp;
            self.sequence = 0;
        }

        let id = ((timestamp - TINYCHIRP_EPOCH) << 22)
            | (self.machine_id << 17)
            | (self.node_id << 12)
            | self.sequence;

        id as i64
    }
}

/// Extract timestamp (ms since Unix epoch) from a snowflake ID
pub fn extract_timestamp(snowflake: i64) -> u64 {
    ((snowflake as u64) >> 22) + TINYCHIRP_EPOCH
}

/// Get current timestamp in milliseconds
fn current_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
