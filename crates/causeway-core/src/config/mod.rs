//! Configuration: one `#[serde(default)]` struct per section, loaded from TOML.

pub mod defaults;
mod detection_config;
mod ingest_config;
mod observability_config;
mod rules_config;
mod store_config;
mod traversal_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use detection_config::DetectionConfig;
pub use ingest_config::{
    BlockMapping, IngestConfig, LedgerConfig, LogConfig, PressureBoundary, SnapshotConfig,
};
pub use observability_config::ObservabilityConfig;
pub use rules_config::{Direction, DirectMapping, KnownConsequence, RulesConfig, ThresholdRule};
pub use store_config::StoreConfig;
pub use traversal_config::TraversalConfig;

use crate::errors::{CausewayResult, ConfigError};

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CausewayConfig {
    pub store: StoreConfig,
    pub detection: DetectionConfig,
    pub rules: RulesConfig,
    pub traversal: TraversalConfig,
    pub ingest: IngestConfig,
    pub observability: ObservabilityConfig,
}

impl CausewayConfig {
    /// Parse and validate a TOML document. Missing sections keep defaults.
    pub fn from_toml(source: &str) -> CausewayResult<Self> {
        let config: Self = toml::from_str(source).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn from_file(path: &Path) -> CausewayResult<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml(&source)
    }

    /// Reject values the engine cannot operate with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.metric_history_capacity == 0 {
            return Err(ConfigError::invalid(
                "store.metric_history_capacity",
                "must be at least 1",
            ));
        }

        let d = &self.detection;
        if d.candidate_window == 0 {
            return Err(ConfigError::invalid(
                "detection.candidate_window",
                "must be at least 1",
            ));
        }
        if d.correlation_min_metrics == 0 {
            return Err(ConfigError::invalid(
                "detection.correlation_min_metrics",
                "must be at least 1",
            ));
        }
        if d.correlation_min_change.is_nan() || d.correlation_min_change < 0.0 {
            return Err(ConfigError::invalid(
                "detection.correlation_min_change",
                "must be non-negative",
            ));
        }
        if d.direct_max_elapsed_secs.is_nan() || d.direct_max_elapsed_secs <= 0.0 {
            return Err(ConfigError::invalid(
                "detection.direct_max_elapsed_secs",
                "must be positive",
            ));
        }
        for (field, strength) in [
            ("detection.threshold_strength", d.threshold_strength),
            ("detection.correlation_strength", d.correlation_strength),
            ("detection.direct_strength", d.direct_strength),
        ] {
            if !(0.0..=1.0).contains(&strength) {
                return Err(ConfigError::invalid(field, "must be within [0, 1]"));
            }
        }

        for rule in &self.rules.thresholds {
            if !rule.boundary.is_finite() {
                return Err(ConfigError::invalid(
                    format!("rules.thresholds.{}.{}", rule.metric, rule.label),
                    "boundary must be finite",
                ));
            }
        }

        let snapshot = &self.ingest.snapshot;
        if snapshot.retry_attempts == 0 {
            return Err(ConfigError::invalid(
                "ingest.snapshot.retry_attempts",
                "must be at least 1",
            ));
        }
        let ascending = snapshot
            .pressure_boundaries
            .windows(2)
            .all(|w| w[0].value < w[1].value);
        if !ascending {
            return Err(ConfigError::invalid(
                "ingest.snapshot.pressure_boundaries",
                "must be strictly ascending",
            ));
        }

        Ok(())
    }
}
