//! Trail exploration and shortest paths over the causal graph.

pub mod shortest_path;
pub mod trace_effects;
pub mod trace_origins;

use std::collections::HashSet;
use std::fmt;

use petgraph::Direction;

use causeway_core::event::EventId;
use causeway_core::models::TrailEntry;
use causeway_observability::traversal_span;

use crate::graph::IndexedGraph;
use crate::store::EventStore;

/// Which way a trail walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailDirection {
    /// Along predecessor edges: "what caused this?"
    Backward,
    /// Along successor edges: "what did this cause?"
    Forward,
}

impl TrailDirection {
    fn edge_direction(self) -> Direction {
        match self {
            Self::Backward => Direction::Incoming,
            Self::Forward => Direction::Outgoing,
        }
    }
}

impl fmt::Display for TrailDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Backward => "backward",
            Self::Forward => "forward",
        })
    }
}

/// Depth-first walk from `start`, visiting each event at most once.
///
/// Events up to `max_depth` hops away are included; an event at exactly
/// `max_depth` is listed but not expanded. Entries come back in visit order.
pub fn walk(
    graph: &IndexedGraph,
    store: &EventStore,
    start: &EventId,
    max_depth: usize,
    direction: TrailDirection,
) -> Vec<TrailEntry> {
    let span = traversal_span!(direction, start, max_depth);
    let _guard = span.enter();

    if !store.contains(start) {
        return Vec::new();
    }

    let mut visited: HashSet<EventId> = HashSet::new();
    let mut trail = Vec::new();
    let mut stack = vec![(start.clone(), 0_usize)];

    while let Some((current, depth)) = stack.pop() {
        if depth > max_depth || !visited.insert(current.clone()) {
            continue;
        }
        let Some(event) = store.get(&current) else {
            continue;
        };

        let neighbors = graph.neighbors(&current, direction.edge_direction());
        trail.push(TrailEntry {
            event: event.clone(),
            depth,
            is_terminal: neighbors.is_empty(),
            neighbors: neighbors
                .iter()
                .filter_map(|id| store.get(id).cloned())
                .collect(),
        });

        // Reverse so the first neighbour is explored first.
        for next in neighbors.into_iter().rev() {
            stack.push((next, depth + 1));
        }
    }

    tracing::debug!(%direction, event_id = %start, visited = trail.len(), "trail walked");
    trail
}
