//! CausationEngine: the event store and causal graph behind one lock.
//!
//! Every mutation and every read of shared state goes through `state`.
//! Exports copy what they need while holding it and do the projection
//! after it is released.

use std::sync::{Mutex, MutexGuard, PoisonError};

use causeway_core::config::{CausewayConfig, TraversalConfig};
use causeway_core::event::{Event, EventId};
use causeway_core::link::CausationLink;
use causeway_core::models::{
    CausalPath, CausationStats, EventSummary, GraphSnapshot, MetricSample, TrailEntry,
};

use crate::detection::CausationDetector;
use crate::graph::IndexedGraph;
use crate::query::{self, StateCopy};
use crate::store::EventStore;
use crate::traversal::{shortest_path, trace_effects, trace_origins};

struct EngineState {
    store: EventStore,
    graph: IndexedGraph,
}

/// Thread-safe causal event graph.
pub struct CausationEngine {
    state: Mutex<EngineState>,
    detector: CausationDetector,
    traversal: TraversalConfig,
}

impl CausationEngine {
    /// Engine with default rule tables and limits.
    pub fn new() -> Self {
        Self::with_config(&CausewayConfig::default())
    }

    pub fn with_config(config: &CausewayConfig) -> Self {
        Self {
            state: Mutex::new(EngineState {
                store: EventStore::new(config.store.metric_history_capacity),
                graph: IndexedGraph::new(),
            }),
            detector: CausationDetector::new(config.rules.clone(), config.detection.clone()),
            traversal: config.traversal.clone(),
        }
    }

    // A panic mid-insert leaves at worst a stored event without its links.
    fn lock(&self) -> MutexGuard<'_, EngineState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ── Mutation ─────────────────────────────────────────────────────────

    /// Store `event`, run detection against recent events, and add the
    /// resulting links. Returns the links created.
    ///
    /// An event whose id is already stored is ignored.
    pub fn insert(&self, event: Event) -> Vec<CausationLink> {
        let mut guard = self.lock();
        let EngineState { store, graph } = &mut *guard;

        let id = event.id.clone();
        if !store.insert(event) {
            tracing::debug!(event_id = %id, "duplicate event id ignored");
            return Vec::new();
        }
        graph.ensure_node(&id);

        let Some(stored) = store.get(&id) else {
            return Vec::new();
        };
        let mut links = self.detector.detect(store, stored);
        links.retain(|link| graph.add_link(link));
        links
    }

    // ── Lookups ──────────────────────────────────────────────────────────

    pub fn get(&self, id: &EventId) -> Option<Event> {
        self.lock().store.get(id).cloned()
    }

    pub fn contains(&self, id: &EventId) -> bool {
        self.lock().store.contains(id)
    }

    pub fn len(&self) -> usize {
        self.lock().store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().store.is_empty()
    }

    pub fn search(&self, query: &str) -> Vec<Event> {
        query::search::search(&self.lock().store, query)
    }

    /// Events with a link into `id`, oldest link first.
    pub fn predecessors(&self, id: &EventId) -> Vec<EventId> {
        self.lock().graph.predecessors(id)
    }

    /// Events `id` links to, oldest link first.
    pub fn successors(&self, id: &EventId) -> Vec<EventId> {
        self.lock().graph.successors(id)
    }

    pub fn links(&self) -> Vec<CausationLink> {
        self.lock().graph.links()
    }

    pub fn link(&self, from: &EventId, to: &EventId) -> Option<CausationLink> {
        self.lock()
            .graph
            .edge(from, to)
            .map(|weight| weight.to_link(from, to))
    }

    // ── Traversal ────────────────────────────────────────────────────────

    /// Causes of `id`, deepest first. `max_depth` defaults to the configured
    /// traversal depth.
    pub fn explore_backwards(&self, id: &EventId, max_depth: Option<usize>) -> Vec<TrailEntry> {
        let depth = max_depth.unwrap_or(self.traversal.default_max_depth);
        let state = self.lock();
        trace_origins::trace(&state.graph, &state.store, id, depth)
    }

    /// Effects of `id`, shallowest first.
    pub fn explore_forwards(&self, id: &EventId, max_depth: Option<usize>) -> Vec<TrailEntry> {
        let depth = max_depth.unwrap_or(self.traversal.default_max_depth);
        let state = self.lock();
        trace_effects::trace(&state.graph, &state.store, id, depth)
    }

    /// Fewest-hop directed path, or `None` when unreachable or unknown.
    pub fn shortest_path(&self, from: &EventId, to: &EventId) -> Option<CausalPath> {
        let state = self.lock();
        let ids = shortest_path::find(&state.graph, from, to)?;
        let events = ids
            .iter()
            .filter_map(|id| state.store.get(id).cloned())
            .collect();
        Some(CausalPath { ids, events })
    }

    // ── Exports ──────────────────────────────────────────────────────────

    fn capture(&self) -> StateCopy {
        let state = self.lock();
        StateCopy::capture(&state.store, &state.graph)
    }

    /// Node/edge lists for external rendering.
    pub fn graph_snapshot(&self) -> GraphSnapshot {
        query::export::project(self.capture())
    }

    pub fn stats(&self) -> CausationStats {
        query::stats::compute(self.capture(), self.traversal.strongest_links)
    }

    pub fn event_summary(&self, id: &EventId) -> Option<EventSummary> {
        let state = self.lock();
        query::summary::summarize(
            &state.store,
            &state.graph,
            id,
            self.traversal.summary_neighbors,
        )
    }

    /// Events stamped strictly after `timestamp`, oldest first.
    pub fn events_since(&self, timestamp: f64) -> Vec<Event> {
        self.lock().store.since(timestamp).cloned().collect()
    }

    pub fn latest_timestamp(&self) -> Option<f64> {
        self.lock().store.latest_timestamp()
    }

    /// Retained samples for `metric`, oldest first.
    pub fn metric_history(&self, metric: &str) -> Vec<MetricSample> {
        self.lock()
            .store
            .metrics()
            .samples(metric)
            .map(|samples| samples.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// `(component index refs, type index refs)`; both equal `len()`.
    pub fn index_sizes(&self) -> (usize, usize) {
        self.lock().store.index_sizes()
    }
}

impl Default for CausationEngine {
    fn default() -> Self {
        Self::new()
    }
}
