use std::collections::HashSet;

use causeway_causal::graph::IndexedGraph;
use causeway_causal::store::EventStore;
use causeway_causal::traversal::{shortest_path, trace_effects, trace_origins};
use causeway_causal::CausationEngine;
use causeway_core::event::{Event, EventData, EventId, Value};
use causeway_core::link::{CausationLink, LinkType};
use proptest::prelude::*;

fn node_id(i: usize) -> EventId {
    EventId::new(format!("n{i}"))
}

/// Arbitrary directed graph (cycles allowed) over `n` stored events.
fn build(n: usize, edges: &[(usize, usize)]) -> (EventStore, IndexedGraph) {
    let mut store = EventStore::new(16);
    let mut graph = IndexedGraph::new();
    for i in 0..n {
        store.insert(Event::with_id(node_id(i), i as f64, "sensor", "state_change", EventData::new()));
        graph.ensure_node(&node_id(i));
    }
    for &(from, to) in edges {
        graph.add_link(&CausationLink {
            from: node_id(from % n),
            to: node_id(to % n),
            link_type: LinkType::Correlation,
            strength: 0.7,
            explanation: String::new(),
            metrics_involved: Vec::new(),
        });
    }
    (store, graph)
}

fn edges_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (2usize..20).prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..60)))
}

proptest! {
    #[test]
    fn trails_never_revisit_and_respect_depth(
        (n, edges) in edges_strategy(),
        start in 0usize..20,
        max_depth in 0usize..8,
    ) {
        let (store, graph) = build(n, &edges);
        let start = node_id(start % n);

        for trail in [
            trace_origins::trace(&graph, &store, &start, max_depth),
            trace_effects::trace(&graph, &store, &start, max_depth),
        ] {
            let ids: HashSet<_> = trail.iter().map(|t| t.event.id.clone()).collect();
            prop_assert_eq!(ids.len(), trail.len());
            prop_assert!(trail.iter().all(|t| t.depth <= max_depth));
            prop_assert!(trail.len() <= n);
        }
    }

    #[test]
    fn shortest_path_follows_edges(
        (n, edges) in edges_strategy(),
        from in 0usize..20,
        to in 0usize..20,
    ) {
        let (_, graph) = build(n, &edges);
        if let Some(path) = shortest_path::find(&graph, &node_id(from % n), &node_id(to % n)) {
            prop_assert_eq!(path.first(), Some(&node_id(from % n)));
            prop_assert_eq!(path.last(), Some(&node_id(to % n)));
            for pair in path.windows(2) {
                prop_assert!(graph.edge(&pair[0], &pair[1]).is_some());
            }
            let unique: HashSet<_> = path.iter().collect();
            prop_assert_eq!(unique.len(), path.len());
        }
    }

    #[test]
    fn engine_links_are_unique_and_time_ordered(
        values in prop::collection::vec((0.0f64..100.0, 1.0f64..50.0, 1.0f64..50.0, 0usize..4), 1..40),
    ) {
        let components = ["breath", "reality_sim", "djinn_kernel", "explorer"];
        let engine = CausationEngine::new();
        for (i, (ts, a, b, c)) in values.iter().enumerate() {
            let mut data = EventData::new();
            data.insert("a".to_string(), Value::Float(*a));
            data.insert("b".to_string(), Value::Float(*b));
            engine.insert(Event::with_id(format!("e{i}"), *ts, components[*c], "state_change", data));
        }

        let links = engine.links();
        let pairs: HashSet<_> = links.iter().map(|l| (l.from.clone(), l.to.clone())).collect();
        prop_assert_eq!(pairs.len(), links.len());
        for link in &links {
            let from = engine.get(&link.from).map(|e| e.timestamp);
            let to = engine.get(&link.to).map(|e| e.timestamp);
            prop_assert!(from < to);
        }
    }
}
