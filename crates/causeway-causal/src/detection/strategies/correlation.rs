//! Correlation strategy (strength 0.7 by default).
//! Several shared metrics changed significantly between the two events.

use causeway_core::config::DetectionConfig;
use causeway_core::event::Event;
use causeway_core::link::{CausationLink, LinkType};

/// Shared numeric metrics whose relative change exceeds the configured
/// minimum. A zero previous value has no relative change and is skipped.
pub fn significant_changes(prev: &Event, new: &Event, min_change: f64) -> Vec<String> {
    new.numeric_metrics()
        .filter_map(|(metric, after)| {
            let before = prev.numeric(metric)?;
            if before == 0.0 {
                return None;
            }
            let change = ((after - before) / before).abs();
            (change > min_change).then(|| metric.to_string())
        })
        .collect()
}

pub fn detect(prev: &Event, new: &Event, config: &DetectionConfig) -> Option<CausationLink> {
    let significant = significant_changes(prev, new, config.correlation_min_change);
    if significant.len() < config.correlation_min_metrics {
        return None;
    }

    let named = significant
        .iter()
        .take(config.correlation_max_named)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    Some(CausationLink {
        from: prev.id.clone(),
        to: new.id.clone(),
        link_type: LinkType::Correlation,
        strength: config.correlation_strength,
        explanation: format!("Correlated changes in {named}"),
        metrics_involved: significant,
    })
}
