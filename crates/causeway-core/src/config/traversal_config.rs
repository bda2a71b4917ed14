use serde::{Deserialize, Serialize};

use super::defaults;

/// Query-side defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalConfig {
    pub default_max_depth: usize,
    /// Links listed in `stats().strongest_links`.
    pub strongest_links: usize,
    /// Neighbours listed per side in an event summary.
    pub summary_neighbors: usize,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            default_max_depth: defaults::DEFAULT_MAX_DEPTH,
            strongest_links: defaults::DEFAULT_STRONGEST_LINKS,
            summary_neighbors: defaults::DEFAULT_SUMMARY_NEIGHBORS,
        }
    }
}
