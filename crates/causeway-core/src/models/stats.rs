use serde::{Deserialize, Serialize};

use crate::event::Event;
use crate::link::LinkType;

/// Aggregate statistics over the event corpus and causal graph.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CausationStats {
    pub total_events: usize,
    pub total_links: usize,
    /// Distinct components in first-seen order.
    pub components: Vec<String>,
    /// Distinct event types in first-seen order.
    pub event_types: Vec<String>,
    pub metrics_tracked: Vec<String>,
    /// `E / (N * (N - 1))` over the N events that take part in a link, zero
    /// below two.
    pub graph_density: f64,
    pub strongest_links: Vec<StrongLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrongLink {
    pub from: Event,
    pub to: Event,
    pub link_type: LinkType,
    pub strength: f64,
    pub explanation: String,
}
