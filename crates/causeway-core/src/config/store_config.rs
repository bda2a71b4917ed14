use serde::{Deserialize, Serialize};

use super::defaults;

/// Event store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Samples retained per metric name before the oldest is evicted.
    pub metric_history_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            metric_history_capacity: defaults::DEFAULT_METRIC_HISTORY_CAPACITY,
        }
    }
}
