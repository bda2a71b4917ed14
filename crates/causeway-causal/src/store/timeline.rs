//! Timestamp ordering key for the store's timeline index.

use std::cmp::Ordering;

/// Orders events by timestamp, then by insertion sequence.
///
/// Timestamps are compared with `f64::total_cmp`, so the key is a total order
/// even for non-finite input.
#[derive(Debug, Clone, Copy)]
pub struct TimelineKey {
    pub timestamp: f64,
    pub seq: u64,
}

impl TimelineKey {
    /// Key sorting after every event stamped `timestamp` or earlier.
    pub fn after(timestamp: f64) -> Self {
        Self {
            timestamp,
            seq: u64::MAX,
        }
    }
}

impl PartialEq for TimelineKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for TimelineKey {}

impl PartialOrd for TimelineKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimelineKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.timestamp
            .total_cmp(&other.timestamp)
            .then(self.seq.cmp(&other.seq))
    }
}
