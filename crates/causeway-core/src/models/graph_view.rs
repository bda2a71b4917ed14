use serde::{Deserialize, Serialize};

use crate::event::{EventData, EventId};
use crate::link::LinkType;

/// Node/edge lists ready for external rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<NodeView>,
    pub links: Vec<EdgeView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeView {
    pub id: EventId,
    pub component: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: EventData,
    pub timestamp: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeView {
    pub source: EventId,
    pub target: EventId,
    #[serde(rename = "type")]
    pub link_type: LinkType,
    pub strength: f64,
    pub explanation: String,
}
