//! Unweighted shortest path (breadth-first) over directed edges.

use std::collections::{HashMap, HashSet, VecDeque};

use petgraph::stable_graph::NodeIndex;
use petgraph::Direction;

use causeway_core::event::EventId;

use crate::graph::IndexedGraph;

/// Fewest-edge path `from → … → to`, endpoints included.
///
/// A path from an event to itself is just that event. Returns `None` when
/// either id is unknown or `to` is unreachable.
pub fn find(graph: &IndexedGraph, from: &EventId, to: &EventId) -> Option<Vec<EventId>> {
    let start = graph.get_node(from)?;
    let goal = graph.get_node(to)?;
    if start == goal {
        return Some(vec![from.clone()]);
    }

    let mut parent: HashMap<NodeIndex, NodeIndex> = HashMap::new();
    let mut visited: HashSet<NodeIndex> = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        for next in graph.graph.neighbors_directed(current, Direction::Outgoing) {
            if !visited.insert(next) {
                continue;
            }
            parent.insert(next, current);
            if next == goal {
                return Some(reconstruct(graph, &parent, start, goal));
            }
            queue.push_back(next);
        }
    }
    None
}

fn reconstruct(
    graph: &IndexedGraph,
    parent: &HashMap<NodeIndex, NodeIndex>,
    start: NodeIndex,
    goal: NodeIndex,
) -> Vec<EventId> {
    let mut nodes = vec![goal];
    let mut current = goal;
    while current != start {
        match parent.get(&current) {
            Some(&prev) => {
                nodes.push(prev);
                current = prev;
            }
            None => break,
        }
    }
    nodes
        .into_iter()
        .rev()
        .filter_map(|idx| graph.event_id(idx).cloned())
        .collect()
}
