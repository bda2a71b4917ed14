//! Read-side queries: search, exports, statistics, summaries.
//!
//! Exports work on a [`StateCopy`] taken under the engine lock so the
//! projection itself never holds it.

pub mod export;
pub mod search;
pub mod stats;
pub mod summary;

use causeway_core::event::Event;
use causeway_core::link::CausationLink;

use crate::graph::IndexedGraph;
use crate::store::EventStore;

/// Owned copy of the store and graph contents.
#[derive(Debug, Clone, Default)]
pub struct StateCopy {
    /// Events in insertion order.
    pub events: Vec<Event>,
    /// Links in creation order.
    pub links: Vec<CausationLink>,
    pub components: Vec<String>,
    pub event_types: Vec<String>,
    pub metrics_tracked: Vec<String>,
}

impl StateCopy {
    pub fn capture(store: &EventStore, graph: &IndexedGraph) -> Self {
        Self {
            events: store.iter().cloned().collect(),
            links: graph.links(),
            components: store.components().to_vec(),
            event_types: store.event_types().to_vec(),
            metrics_tracked: store.metrics().metric_names().map(str::to_owned).collect(),
        }
    }
}
