//! Threshold strategy (strength 0.9 by default).
//! A configured boundary crossed between the two events, with the effect
//! mentioning one of the crossing's known consequences.

use causeway_core::config::{DetectionConfig, RulesConfig};
use causeway_core::event::Event;
use causeway_core::link::{CausationLink, LinkType};

/// Check every threshold rule in table order; the first qualifying
/// crossing wins.
pub fn detect(
    prev: &Event,
    new: &Event,
    rules: &RulesConfig,
    config: &DetectionConfig,
) -> Option<CausationLink> {
    for rule in &rules.thresholds {
        let (Some(before), Some(after)) = (prev.numeric(&rule.metric), new.numeric(&rule.metric))
        else {
            continue;
        };
        if !rule.direction.crossed(before, after, rule.boundary) {
            continue;
        }
        if !is_known_consequence(new, &rule.metric, &rule.label, rules) {
            continue;
        }
        return Some(CausationLink {
            from: prev.id.clone(),
            to: new.id.clone(),
            link_type: LinkType::Threshold,
            strength: config.threshold_strength,
            explanation: format!(
                "{} crossed {} threshold ({})",
                rule.metric, rule.label, rule.boundary
            ),
            metrics_involved: vec![rule.metric.clone()],
        });
    }
    None
}

/// Case-insensitive substring match of the configured keywords against the
/// event type and every stringified data value.
pub fn is_known_consequence(event: &Event, metric: &str, label: &str, rules: &RulesConfig) -> bool {
    let Some(keywords) = rules.consequence_keywords(metric, label) else {
        return false;
    };
    let event_type = event.event_type.to_lowercase();
    let values: Vec<String> = event
        .data
        .values()
        .map(|v| v.to_string().to_lowercase())
        .collect();

    keywords.iter().any(|keyword| {
        let keyword = keyword.to_lowercase();
        event_type.contains(&keyword) || values.iter().any(|v| v.contains(&keyword))
    })
}
