use serde::{Deserialize, Serialize};

use crate::event::{Event, EventId};

/// One step of a backward or forward trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrailEntry {
    pub event: Event,
    /// Hops from the queried event (0 for the event itself).
    pub depth: usize,
    /// Backward: no known causes (root cause). Forward: no known effects.
    pub is_terminal: bool,
    /// Backward: the events that caused this one. Forward: the events it caused.
    pub neighbors: Vec<Event>,
}

/// Shortest directed path between two events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CausalPath {
    pub ids: Vec<EventId>,
    pub events: Vec<Event>,
}

impl CausalPath {
    /// Number of edges along the path.
    pub fn hops(&self) -> usize {
        self.ids.len().saturating_sub(1)
    }
}
