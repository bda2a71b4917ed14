//! Forward traversal ("what did this cause?") along outgoing edges.

use causeway_core::event::EventId;
use causeway_core::models::TrailEntry;

use super::{walk, TrailDirection};
use crate::graph::IndexedGraph;
use crate::store::EventStore;

/// Trail of effects, shallowest first so immediate effects lead.
pub fn trace(
    graph: &IndexedGraph,
    store: &EventStore,
    event_id: &EventId,
    max_depth: usize,
) -> Vec<TrailEntry> {
    let mut trail = walk(graph, store, event_id, max_depth, TrailDirection::Forward);
    trail.sort_by_key(|entry| entry.depth);
    trail
}
