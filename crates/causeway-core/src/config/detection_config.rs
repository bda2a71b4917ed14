use serde::{Deserialize, Serialize};

use super::defaults;

/// Causation detector tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Most recent events (by timestamp) considered as causes of a new event.
    pub candidate_window: usize,
    /// Relative change above which a metric counts as significant.
    pub correlation_min_change: f64,
    /// Significant metrics needed for a correlation link.
    pub correlation_min_metrics: usize,
    /// Significant metrics named in a correlation explanation.
    pub correlation_max_named: usize,
    /// Direct-mapping links require the effect within this many seconds.
    pub direct_max_elapsed_secs: f64,
    pub threshold_strength: f64,
    pub correlation_strength: f64,
    pub direct_strength: f64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            candidate_window: defaults::DEFAULT_CANDIDATE_WINDOW,
            correlation_min_change: defaults::DEFAULT_CORRELATION_MIN_CHANGE,
            correlation_min_metrics: defaults::DEFAULT_CORRELATION_MIN_METRICS,
            correlation_max_named: defaults::DEFAULT_CORRELATION_MAX_NAMED,
            direct_max_elapsed_secs: defaults::DEFAULT_DIRECT_MAX_ELAPSED_SECS,
            threshold_strength: defaults::DEFAULT_THRESHOLD_STRENGTH,
            correlation_strength: defaults::DEFAULT_CORRELATION_STRENGTH,
            direct_strength: defaults::DEFAULT_DIRECT_STRENGTH,
        }
    }
}
