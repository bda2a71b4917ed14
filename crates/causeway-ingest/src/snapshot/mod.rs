//! Snapshot adapter: polls a state document written by the simulation.
//!
//! Each new frame yields one `state_change` event per recognized block, plus
//! derived `phase_transition` and `threshold_crossed` events computed against
//! the previous frame this adapter saw.

pub mod derived;
pub mod document;

use std::path::{Path, PathBuf};

use causeway_causal::CausationEngine;
use causeway_core::config::SnapshotConfig;
use causeway_core::constants::{
    EVENT_PHASE_TRANSITION, EVENT_STATE_CHANGE, EVENT_THRESHOLD_CROSSED,
};
use causeway_core::errors::IngestError;
use causeway_core::event::{Event, EventData, Value};
use causeway_observability::snapshot_span;

use document::SnapshotDocument;

pub struct SnapshotAdapter {
    path: PathBuf,
    config: SnapshotConfig,
    last_loaded_frame: Option<i64>,
    prev_phase: Option<String>,
    prev_pressure: Option<f64>,
}

impl SnapshotAdapter {
    pub fn new(path: impl AsRef<Path>, config: SnapshotConfig) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            config,
            last_loaded_frame: None,
            prev_phase: None,
            prev_pressure: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn last_loaded_frame(&self) -> Option<i64> {
        self.last_loaded_frame
    }

    /// Load the current frame into `engine`.
    ///
    /// Frames at or below the last one loaded are skipped unless `force` is
    /// set. Returns the number of events inserted; every source failure
    /// counts as zero.
    pub fn ingest(&mut self, engine: &CausationEngine, force: bool) -> usize {
        let span = snapshot_span!(self.path.display(), force);
        let _guard = span.enter();

        let document = match document::read(&self.path, &self.config) {
            Ok(document) => document,
            Err(e @ IngestError::SourceUnavailable { .. }) => {
                tracing::debug!(error = %e, "no snapshot");
                return 0;
            }
            Err(e) => {
                tracing::warn!(error = %e, "snapshot skipped");
                return 0;
            }
        };

        if !force
            && self
                .last_loaded_frame
                .is_some_and(|last| document.frame_count <= last)
        {
            return 0;
        }
        self.last_loaded_frame = Some(document.frame_count);

        let events = self.events_for(&document);
        let count = events.len();
        for event in events {
            engine.insert(event);
        }
        tracing::debug!(frame = document.frame_count, events = count, "snapshot loaded");
        count
    }

    /// Build every event for one frame and advance the phase/pressure memory.
    fn events_for(&mut self, document: &SnapshotDocument) -> Vec<Event> {
        let timestamp = document.event_timestamp();
        let frame = document.frame_count;
        let mut events = Vec::new();

        for mapping in &self.config.blocks {
            let Some(block) = document.block(&mapping.block) else {
                continue;
            };
            let mut data: EventData = block
                .iter()
                .filter_map(|(key, value)| Some((key.clone(), Value::from_json(value)?)))
                .collect();
            data.insert("frame_count".to_string(), derived::frame_value(frame));
            events.push(Event::new(timestamp, &mapping.component, EVENT_STATE_CHANGE, data));
        }

        if let Some(phase) = self.read_phase(document) {
            if let Some(old) = self.prev_phase.as_deref().filter(|old| *old != phase) {
                events.push(Event::new(
                    timestamp,
                    self.component_of(&self.config.phase_block),
                    EVENT_PHASE_TRANSITION,
                    derived::phase_data(old, &phase, frame),
                ));
            }
            self.prev_phase = Some(phase);
        }

        if let Some(pressure) = self.read_pressure(document) {
            if let Some(prev) = self.prev_pressure {
                for crossing in derived::crossings(&self.config.pressure_boundaries, prev, pressure)
                {
                    events.push(Event::new(
                        timestamp,
                        self.component_of(&self.config.pressure_block),
                        EVENT_THRESHOLD_CROSSED,
                        derived::threshold_data(
                            &self.config.pressure_field,
                            &crossing,
                            prev,
                            pressure,
                            frame,
                        ),
                    ));
                }
            }
            self.prev_pressure = Some(pressure);
        }

        events
    }

    fn component_of<'a>(&'a self, block: &'a str) -> &'a str {
        self.config.component_for(block).unwrap_or(block)
    }

    fn read_phase(&self, document: &SnapshotDocument) -> Option<String> {
        let value = document
            .block(&self.config.phase_block)?
            .get(&self.config.phase_field)?;
        Value::from_json(value).map(|v| match v {
            Value::Str(s) => s,
            other => other.to_string(),
        })
    }

    fn read_pressure(&self, document: &SnapshotDocument) -> Option<f64> {
        document
            .block(&self.config.pressure_block)?
            .get(&self.config.pressure_field)?
            .as_f64()
    }
}
