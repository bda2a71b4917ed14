//! Ledger replay: one `tape_cell` event per stored record.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use causeway_causal::CausationEngine;
use causeway_core::config::LedgerConfig;
use causeway_core::constants::EVENT_TAPE_CELL;
use causeway_core::errors::{CausewayResult, IngestError};
use causeway_core::event::{Event, EventData, Value};
use causeway_core::traits::{ILedgerSource, LedgerRecord};
use causeway_observability::ingest_span;

/// Replays a ledger source, resuming from the first position it has not read.
#[derive(Debug, Clone)]
pub struct LedgerAdapter {
    component: String,
    next_position: u64,
}

impl LedgerAdapter {
    pub fn new(config: &LedgerConfig) -> Self {
        Self {
            component: config.component.clone(),
            next_position: 0,
        }
    }

    /// Position the next replay starts from.
    pub fn cursor(&self) -> u64 {
        self.next_position
    }

    /// Insert an event for every present record past the cursor.
    ///
    /// Returns the number of events inserted. Source failures end the call
    /// early and are logged; records read before the failure are kept.
    pub fn replay(&mut self, engine: &CausationEngine, source: &dyn ILedgerSource) -> usize {
        let span = ingest_span!("ledger", self.component);
        let _guard = span.enter();

        let count = match source.count() {
            Ok(count) => count,
            Err(e) => {
                tracing::warn!(error = %e, "ledger unavailable");
                return 0;
            }
        };

        let mut inserted = 0;
        while self.next_position < count {
            match source.read(self.next_position) {
                Ok(Some(record)) => {
                    engine.insert(self.to_event(record));
                    inserted += 1;
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(position = self.next_position, error = %e, "ledger read failed");
                    break;
                }
            }
            self.next_position += 1;
        }

        tracing::debug!(inserted, cursor = self.next_position, "ledger replayed");
        inserted
    }

    fn to_event(&self, record: LedgerRecord) -> Event {
        let mut data: EventData = record
            .content
            .iter()
            .filter_map(|(key, value)| Some((key.clone(), Value::from_json(value)?)))
            .collect();
        data.insert("tape_position".to_string(), Value::Int(record.position as i64));
        data.insert("symbol".to_string(), Value::Str(record.symbol));
        data.insert("agent_id".to_string(), Value::Str(record.agent_id));
        Event::new(record.timestamp, &self.component, EVENT_TAPE_CELL, data)
    }
}

/// File-backed ledger: one JSON record per line, position = line number.
///
/// Only newline-terminated lines count as written; a trailing partial line
/// is still being appended and stays invisible until its newline lands.
/// Blank or unparsable complete lines read as empty slots. `count` parses
/// the file once and `read` serves from that parse.
#[derive(Debug)]
pub struct JsonLinesLedger {
    path: PathBuf,
    slots: Mutex<Vec<Option<LedgerRecord>>>,
}

impl JsonLinesLedger {
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            slots: Mutex::new(Vec::new()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn slots(&self) -> MutexGuard<'_, Vec<Option<LedgerRecord>>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Re-read the file and replace the cached slots.
    fn reload(&self) -> CausewayResult<usize> {
        let contents = fs::read_to_string(&self.path).map_err(|e| IngestError::SourceUnavailable {
            source_name: self.path.display().to_string(),
            reason: e.to_string(),
        })?;
        let complete = contents.rfind('\n').map_or("", |end| &contents[..end]);

        let parsed: Vec<Option<LedgerRecord>> = if contents.contains('\n') {
            complete
                .split('\n')
                .enumerate()
                .map(|(index, line)| self.parse_line(index, line))
                .collect()
        } else {
            Vec::new()
        };

        let len = parsed.len();
        *self.slots() = parsed;
        Ok(len)
    }

    fn parse_line(&self, index: usize, line: &str) -> Option<LedgerRecord> {
        if line.trim().is_empty() {
            return None;
        }
        match serde_json::from_str::<LedgerRecord>(line) {
            Ok(record) => Some(record),
            Err(e) => {
                let err = IngestError::MalformedRecord {
                    source_name: self.path.display().to_string(),
                    location: format!("line {}", index + 1),
                    reason: e.to_string(),
                };
                tracing::debug!(error = %err, "skipping ledger line");
                None
            }
        }
    }

    fn cached(&self, position: u64) -> Option<Option<LedgerRecord>> {
        let index = usize::try_from(position).ok()?;
        self.slots().get(index).cloned()
    }
}

impl ILedgerSource for JsonLinesLedger {
    fn count(&self) -> CausewayResult<u64> {
        Ok(self.reload()? as u64)
    }

    fn read(&self, position: u64) -> CausewayResult<Option<LedgerRecord>> {
        if let Some(slot) = self.cached(position) {
            return Ok(slot);
        }
        self.reload()?;
        Ok(self.cached(position).flatten())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn record_fields_land_in_event_data() {
        let adapter = LedgerAdapter::new(&LedgerConfig::default());
        let mut content = BTreeMap::new();
        content.insert("vp".to_string(), serde_json::json!(0.4));
        content.insert("note".to_string(), serde_json::Value::Null);
        let event = adapter.to_event(LedgerRecord {
            timestamp: 12.5,
            content,
            position: 7,
            symbol: "ONE".to_string(),
            agent_id: "agent-3".to_string(),
        });

        assert_eq!(event.component, "djinn_kernel");
        assert_eq!(event.event_type, "tape_cell");
        assert_eq!(event.timestamp, 12.5);
        assert_eq!(event.data.get("vp"), Some(&Value::Float(0.4)));
        assert_eq!(event.data.get("tape_position"), Some(&Value::Int(7)));
        assert_eq!(event.data.get("symbol"), Some(&Value::from("ONE")));
        assert_eq!(event.data.get("agent_id"), Some(&Value::from("agent-3")));
        assert!(!event.data.contains_key("note"));
    }
}
