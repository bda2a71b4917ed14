//! petgraph `StableGraph` wrapper indexed by event id.

use std::collections::HashMap;

use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::{Deserialize, Serialize};

use causeway_core::event::EventId;
use causeway_core::link::{CausationLink, LinkType};

/// Node weight: the event an index stands for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CausalNode {
    pub event_id: EventId,
}

/// Edge weight: everything a link carries except its endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CausalEdgeWeight {
    pub link_type: LinkType,
    pub strength: f64,
    pub explanation: String,
    pub metrics_involved: Vec<String>,
}

impl CausalEdgeWeight {
    fn from_link(link: &CausationLink) -> Self {
        Self {
            link_type: link.link_type,
            strength: link.strength,
            explanation: link.explanation.clone(),
            metrics_involved: link.metrics_involved.clone(),
        }
    }

    pub fn to_link(&self, from: &EventId, to: &EventId) -> CausationLink {
        CausationLink {
            from: from.clone(),
            to: to.clone(),
            link_type: self.link_type,
            strength: self.strength,
            explanation: self.explanation.clone(),
            metrics_involved: self.metrics_involved.clone(),
        }
    }
}

/// Directed graph over event ids with an id → node index lookup.
#[derive(Debug, Clone, Default)]
pub struct IndexedGraph {
    pub graph: StableGraph<CausalNode, CausalEdgeWeight>,
    index: HashMap<EventId, NodeIndex>,
}

impl IndexedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Node for an event, created on first use.
    pub fn ensure_node(&mut self, id: &EventId) -> NodeIndex {
        if let Some(&idx) = self.index.get(id) {
            return idx;
        }
        let idx = self.graph.add_node(CausalNode {
            event_id: id.clone(),
        });
        self.index.insert(id.clone(), idx);
        idx
    }

    pub fn get_node(&self, id: &EventId) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    pub fn event_id(&self, idx: NodeIndex) -> Option<&EventId> {
        self.graph.node_weight(idx).map(|n| &n.event_id)
    }

    /// Insert a link unless one already exists for its ordered pair.
    ///
    /// Returns whether the edge was added. The first link for a pair wins.
    pub fn add_link(&mut self, link: &CausationLink) -> bool {
        let from = self.ensure_node(&link.from);
        let to = self.ensure_node(&link.to);
        if self.graph.find_edge(from, to).is_some() {
            return false;
        }
        self.graph
            .add_edge(from, to, CausalEdgeWeight::from_link(link));
        true
    }

    /// Weight of the `from → to` edge.
    pub fn edge(&self, from: &EventId, to: &EventId) -> Option<&CausalEdgeWeight> {
        let edge = self.graph.find_edge(self.get_node(from)?, self.get_node(to)?)?;
        self.graph.edge_weight(edge)
    }

    /// Events with an edge into `id`, oldest edge first.
    pub fn predecessors(&self, id: &EventId) -> Vec<EventId> {
        self.neighbors(id, Direction::Incoming)
    }

    /// Events `id` has an edge to, oldest edge first.
    pub fn successors(&self, id: &EventId) -> Vec<EventId> {
        self.neighbors(id, Direction::Outgoing)
    }

    pub fn neighbors(&self, id: &EventId, direction: Direction) -> Vec<EventId> {
        let Some(idx) = self.get_node(id) else {
            return Vec::new();
        };
        // petgraph yields the most recently added edge first.
        let mut ids: Vec<EventId> = self
            .graph
            .neighbors_directed(idx, direction)
            .filter_map(|n| self.event_id(n).cloned())
            .collect();
        ids.reverse();
        ids
    }

    /// Links into `id`, oldest first.
    pub fn inbound_links(&self, id: &EventId) -> Vec<CausationLink> {
        let Some(idx) = self.get_node(id) else {
            return Vec::new();
        };
        let mut links: Vec<CausationLink> = self
            .graph
            .edges_directed(idx, Direction::Incoming)
            .filter_map(|e| {
                let from = self.event_id(e.source())?;
                Some(e.weight().to_link(from, id))
            })
            .collect();
        links.reverse();
        links
    }

    /// Every edge as an owned link, in edge creation order.
    pub fn links(&self) -> Vec<CausationLink> {
        self.graph
            .edge_indices()
            .filter_map(|e| {
                let (source, target) = self.graph.edge_endpoints(e)?;
                let weight = self.graph.edge_weight(e)?;
                Some(weight.to_link(self.event_id(source)?, self.event_id(target)?))
            })
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
