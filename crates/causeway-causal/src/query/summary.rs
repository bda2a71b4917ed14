//! One event with its immediate causal neighbourhood.

use causeway_core::event::EventId;
use causeway_core::models::{EventSummary, InboundLink};

use crate::graph::IndexedGraph;
use crate::store::EventStore;

/// `None` when the event is unknown. At most `neighbors` events are listed
/// on each side, and at most `neighbors` inbound links; the counts are
/// always complete.
pub fn summarize(
    store: &EventStore,
    graph: &IndexedGraph,
    id: &EventId,
    neighbors: usize,
) -> Option<EventSummary> {
    let event = store.get(id)?.clone();
    let predecessors = graph.predecessors(id);
    let successors = graph.successors(id);

    let inbound_links = graph
        .inbound_links(id)
        .into_iter()
        .take(neighbors)
        .filter_map(|link| {
            Some(InboundLink {
                from: store.get(&link.from)?.clone(),
                link_type: link.link_type,
                strength: link.strength,
                explanation: link.explanation,
            })
        })
        .collect();

    Some(EventSummary {
        event,
        caused_by: predecessors.len(),
        caused: successors.len(),
        predecessor_events: predecessors
            .iter()
            .take(neighbors)
            .filter_map(|p| store.get(p).cloned())
            .collect(),
        successor_events: successors
            .iter()
            .take(neighbors)
            .filter_map(|s| store.get(s).cloned())
            .collect(),
        inbound_links,
    })
}
