//! Backward traversal ("what caused this?") along incoming edges.

use causeway_core::event::EventId;
use causeway_core::models::TrailEntry;

use super::{walk, TrailDirection};
use crate::graph::IndexedGraph;
use crate::store::EventStore;

/// Trail of causes, deepest first so root causes lead.
pub fn trace(
    graph: &IndexedGraph,
    store: &EventStore,
    event_id: &EventId,
    max_depth: usize,
) -> Vec<TrailEntry> {
    let mut trail = walk(graph, store, event_id, max_depth, TrailDirection::Backward);
    trail.sort_by(|a, b| b.depth.cmp(&a.depth));
    trail
}
