//! Pipe-delimited log lines: `timestamp|level|component|key:value|...`.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use chrono::{NaiveTime, Utc};

use causeway_causal::CausationEngine;
use causeway_core::config::LogConfig;
use causeway_core::constants::EVENT_STATE_CHANGE;
use causeway_core::errors::IngestError;
use causeway_core::event::{now_secs, Event, EventData, Value};
use causeway_observability::ingest_span;

const FIELD_DELIMITER: char = '|';
const PAIR_DELIMITER: char = ':';
const MIN_FIELDS: usize = 4;

/// Parse one line into a `state_change` event.
///
/// Lines with fewer than four fields yield `None`. An empty component field
/// falls back to `fallback_component`. Fields without a `:` are ignored.
pub fn parse_line(line: &str, fallback_component: &str) -> Option<Event> {
    let fields: Vec<&str> = line.trim().split(FIELD_DELIMITER).collect();
    if fields.len() < MIN_FIELDS {
        return None;
    }

    let component = match fields[2].trim() {
        "" => fallback_component,
        named => named,
    };

    let data: EventData = fields[3..]
        .iter()
        .filter_map(|pair| {
            let (key, value) = pair.split_once(PAIR_DELIMITER)?;
            let key = key.trim();
            (!key.is_empty()).then(|| (key.to_string(), Value::coerce(value.trim())))
        })
        .collect();

    Some(Event::new(
        parse_timestamp(fields[0]),
        component,
        EVENT_STATE_CHANGE,
        data,
    ))
}

/// Epoch seconds, else `HH:MM:SS[.fff]` on today's UTC date, else now.
pub fn parse_timestamp(raw: &str) -> f64 {
    let raw = raw.trim();
    if let Ok(secs) = raw.parse::<f64>() {
        if secs.is_finite() {
            return secs;
        }
    }
    NaiveTime::parse_from_str(raw, "%H:%M:%S%.f")
        .map(|time| {
            let stamped = Utc::now().date_naive().and_time(time).and_utc();
            stamped.timestamp_micros() as f64 / 1_000_000.0
        })
        .unwrap_or_else(|_| now_secs())
}

/// Tails every log file in a directory, one byte cursor per file.
///
/// Only complete (newline-terminated) lines are consumed; a partial last
/// line is read again on the next call. A file that shrank is re-read from
/// the start.
#[derive(Debug)]
pub struct LogDirAdapter {
    dir: PathBuf,
    extension: String,
    cursors: HashMap<PathBuf, u64>,
}

impl LogDirAdapter {
    pub fn new(dir: impl AsRef<Path>, config: &LogConfig) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            extension: config.extension.clone(),
            cursors: HashMap::new(),
        }
    }

    /// Byte offset already consumed for `file`.
    pub fn cursor(&self, file: &Path) -> u64 {
        self.cursors.get(file).copied().unwrap_or(0)
    }

    /// Insert an event for every new complete line. Returns the count.
    pub fn ingest(&mut self, engine: &CausationEngine) -> usize {
        let span = ingest_span!("log_dir", self.dir.display());
        let _guard = span.enter();

        let files = match self.log_files() {
            Ok(files) => files,
            Err(e) => {
                tracing::debug!(error = %e, "log directory unavailable");
                return 0;
            }
        };

        let mut inserted = 0;
        for file in files {
            match self.read_new_lines(&file) {
                Ok(events) => {
                    inserted += events.len();
                    for event in events {
                        engine.insert(event);
                    }
                }
                Err(e) => tracing::warn!(error = %e, "log file skipped"),
            }
        }
        tracing::debug!(inserted, "log directory ingested");
        inserted
    }

    fn log_files(&self) -> Result<Vec<PathBuf>, IngestError> {
        let entries = fs::read_dir(&self.dir).map_err(|e| self.unavailable(&self.dir, e))?;
        let mut files: Vec<PathBuf> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path
                        .extension()
                        .is_some_and(|ext| ext == self.extension.as_str())
            })
            .collect();
        files.sort();
        Ok(files)
    }

    fn read_new_lines(&mut self, file: &Path) -> Result<Vec<Event>, IngestError> {
        let mut handle = File::open(file).map_err(|e| self.unavailable(file, e))?;
        let len = handle
            .metadata()
            .map_err(|e| self.unavailable(file, e))?
            .len();

        let mut start = self.cursor(file);
        if len < start {
            tracing::debug!(file = %file.display(), "log file truncated, rereading");
            start = 0;
        }

        handle
            .seek(SeekFrom::Start(start))
            .map_err(|e| self.unavailable(file, e))?;
        let mut buf = Vec::new();
        handle
            .read_to_end(&mut buf)
            .map_err(|e| self.unavailable(file, e))?;

        let consumed = buf.iter().rposition(|&b| b == b'\n').map_or(0, |i| i + 1);
        let fallback = file
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default();

        let events = String::from_utf8_lossy(&buf[..consumed])
            .lines()
            .filter_map(|line| parse_line(line, fallback))
            .collect();

        self.cursors.insert(file.to_path_buf(), start + consumed as u64);
        Ok(events)
    }

    fn unavailable(&self, path: &Path, e: std::io::Error) -> IngestError {
        IngestError::SourceUnavailable {
            source_name: path.display().to_string(),
            reason: e.to_string(),
        }
    }
}
