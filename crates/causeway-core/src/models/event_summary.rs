use serde::{Deserialize, Serialize};

use crate::event::Event;
use crate::link::LinkType;

/// An event with its immediate causal neighbourhood.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventSummary {
    pub event: Event,
    pub caused_by: usize,
    pub caused: usize,
    pub predecessor_events: Vec<Event>,
    pub successor_events: Vec<Event>,
    pub inbound_links: Vec<InboundLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundLink {
    pub from: Event,
    pub link_type: LinkType,
    pub strength: f64,
    pub explanation: String,
}
