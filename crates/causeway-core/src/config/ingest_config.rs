use serde::{Deserialize, Serialize};

use super::defaults;

/// Source adapter configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    pub snapshot: SnapshotConfig,
    pub log: LogConfig,
    pub ledger: LedgerConfig,
}

/// Maps a subsystem block in the snapshot document to a component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockMapping {
    pub block: String,
    pub component: String,
}

/// A classification cut-point on the pressure scalar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressureBoundary {
    pub label: String,
    pub value: f64,
}

/// Snapshot document adapter settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    /// Parse attempts before a call gives up on a mid-write document.
    pub retry_attempts: u32,
    /// Fixed sleep between attempts.
    pub retry_backoff_ms: u64,
    /// Documents shorter than this are treated as still being written.
    pub min_document_bytes: usize,
    /// Recognized subsystem blocks.
    pub blocks: Vec<BlockMapping>,
    pub phase_block: String,
    pub phase_field: String,
    pub pressure_block: String,
    pub pressure_field: String,
    /// Ascending classification boundaries on the pressure scalar.
    pub pressure_boundaries: Vec<PressureBoundary>,
}

impl SnapshotConfig {
    /// Component for a block name, if the block is recognized.
    pub fn component_for(&self, block: &str) -> Option<&str> {
        self.blocks
            .iter()
            .find(|b| b.block == block)
            .map(|b| b.component.as_str())
    }
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            retry_attempts: defaults::DEFAULT_SNAPSHOT_RETRY_ATTEMPTS,
            retry_backoff_ms: defaults::DEFAULT_SNAPSHOT_RETRY_BACKOFF_MS,
            min_document_bytes: defaults::DEFAULT_MIN_DOCUMENT_BYTES,
            blocks: defaults::DEFAULT_SNAPSHOT_BLOCKS
                .iter()
                .map(|(block, component)| BlockMapping {
                    block: block.to_string(),
                    component: component.to_string(),
                })
                .collect(),
            phase_block: defaults::DEFAULT_PHASE_BLOCK.to_string(),
            phase_field: defaults::DEFAULT_PHASE_FIELD.to_string(),
            pressure_block: defaults::DEFAULT_PRESSURE_BLOCK.to_string(),
            pressure_field: defaults::DEFAULT_PRESSURE_FIELD.to_string(),
            pressure_boundaries: defaults::DEFAULT_PRESSURE_BOUNDARIES
                .iter()
                .map(|(label, value)| PressureBoundary {
                    label: label.to_string(),
                    value: *value,
                })
                .collect(),
        }
    }
}

/// Log directory adapter settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Only files with this extension are read.
    pub extension: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            extension: defaults::DEFAULT_LOG_EXTENSION.to_string(),
        }
    }
}

/// Ledger replay settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Component stamped on every replayed record.
    pub component: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            component: defaults::DEFAULT_LEDGER_COMPONENT.to_string(),
        }
    }
}
