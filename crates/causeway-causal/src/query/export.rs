//! Node/edge projection for external renderers.

use causeway_core::models::{EdgeView, GraphSnapshot, NodeView};

use super::StateCopy;

pub fn project(copy: StateCopy) -> GraphSnapshot {
    let nodes = copy
        .events
        .into_iter()
        .map(|event| NodeView {
            id: event.id,
            component: event.component,
            event_type: event.event_type,
            data: event.data,
            timestamp: event.timestamp,
        })
        .collect();

    let links = copy
        .links
        .into_iter()
        .map(|link| EdgeView {
            source: link.from,
            target: link.to,
            link_type: link.link_type,
            strength: link.strength,
            explanation: link.explanation,
        })
        .collect();

    GraphSnapshot { nodes, links }
}
