//! The snapshot document and its tolerant reader.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::thread;
use std::time::Duration;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

use causeway_core::config::SnapshotConfig;
use causeway_core::errors::IngestError;
use causeway_core::event::now_secs;

/// Top-level shape written by the simulation each frame.
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotDocument {
    /// Any whole JSON number, including `12.0` and negatives.
    #[serde(deserialize_with = "whole_number")]
    pub frame_count: i64,
    #[serde(default)]
    pub simulation_time: Option<f64>,
    #[serde(default)]
    pub timestamp: Option<f64>,
    /// Subsystem blocks, each a flat map of named scalars.
    #[serde(default)]
    pub data: BTreeMap<String, serde_json::Value>,
}

impl SnapshotDocument {
    /// `simulation_time`, else `timestamp`, else now.
    pub fn event_timestamp(&self) -> f64 {
        self.simulation_time
            .or(self.timestamp)
            .unwrap_or_else(now_secs)
    }

    /// A recognized block as a JSON object, if present.
    pub fn block(&self, name: &str) -> Option<&serde_json::Map<String, serde_json::Value>> {
        self.data.get(name)?.as_object()
    }
}

fn whole_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let number = serde_json::Number::deserialize(deserializer)?;
    if let Some(n) = number.as_i64() {
        return Ok(n);
    }
    if number.as_u64().is_some() {
        return Ok(i64::MAX);
    }
    match number.as_f64() {
        // `as` saturates out-of-range floats.
        Some(f) if f.is_finite() && f.fract() == 0.0 => Ok(f as i64),
        _ => Err(D::Error::custom(format!("frame_count {number} is not a whole number"))),
    }
}

/// Read and parse the document, retrying while it looks mid-write.
///
/// A missing file fails immediately. Short, empty or unparsable content is
/// retried `retry_attempts` times with a fixed sleep in between.
pub fn read(path: &Path, config: &SnapshotConfig) -> Result<SnapshotDocument, IngestError> {
    let source_name = path.display().to_string();
    let attempts = config.retry_attempts.max(1);

    for attempt in 1..=attempts {
        match fs::read_to_string(path) {
            Ok(text) if text.trim().len() >= config.min_document_bytes => {
                match serde_json::from_str::<SnapshotDocument>(&text) {
                    Ok(document) => return Ok(document),
                    Err(e) => tracing::trace!(attempt, error = %e, "snapshot not parseable yet"),
                }
            }
            Ok(_) => tracing::trace!(attempt, "snapshot too short"),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(IngestError::SourceUnavailable {
                    source_name,
                    reason: e.to_string(),
                });
            }
            Err(e) => tracing::trace!(attempt, error = %e, "snapshot read failed"),
        }
        if attempt < attempts {
            thread::sleep(Duration::from_millis(config.retry_backoff_ms));
        }
    }

    Err(IngestError::TransientContention {
        source_name,
        attempts,
    })
}
