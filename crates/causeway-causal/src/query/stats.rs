//! Aggregate statistics over a copied state.

use std::collections::{HashMap, HashSet};

use causeway_core::event::{Event, EventId};
use causeway_core::models::{CausationStats, StrongLink};

use super::StateCopy;

/// Counts, distinct labels, density over linked events, and the `top_n`
/// strongest links.
///
/// Ties on strength keep link creation order.
pub fn compute(copy: StateCopy, top_n: usize) -> CausationStats {
    let total_events = copy.events.len();
    let total_links = copy.links.len();

    // Only events that take part in a link are graph nodes.
    let linked: HashSet<&EventId> = copy
        .links
        .iter()
        .flat_map(|link| [&link.from, &link.to])
        .collect();
    let graph_density = if linked.len() > 1 {
        let n = linked.len() as f64;
        total_links as f64 / (n * (n - 1.0))
    } else {
        0.0
    };

    let by_id: HashMap<&EventId, &Event> = copy.events.iter().map(|e| (&e.id, e)).collect();

    let mut ranked: Vec<_> = copy.links.iter().collect();
    ranked.sort_by(|a, b| b.strength.total_cmp(&a.strength));
    let strongest_links = ranked
        .into_iter()
        .filter_map(|link| {
            Some(StrongLink {
                from: (*by_id.get(&link.from)?).clone(),
                to: (*by_id.get(&link.to)?).clone(),
                link_type: link.link_type,
                strength: link.strength,
                explanation: link.explanation.clone(),
            })
        })
        .take(top_n)
        .collect();

    CausationStats {
        total_events,
        total_links,
        components: copy.components,
        event_types: copy.event_types,
        metrics_tracked: copy.metrics_tracked,
        graph_density,
        strongest_links,
    }
}
