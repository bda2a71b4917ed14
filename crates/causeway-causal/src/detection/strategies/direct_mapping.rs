//! Direct-mapping strategy (strength 0.8 by default).
//! A configured component pair observed in quick succession.

use std::collections::BTreeSet;

use causeway_core::config::{DetectionConfig, RulesConfig};
use causeway_core::event::Event;
use causeway_core::link::{CausationLink, LinkType};

pub fn detect(
    prev: &Event,
    new: &Event,
    rules: &RulesConfig,
    config: &DetectionConfig,
) -> Option<CausationLink> {
    let explanation = rules.direct_explanation(&prev.component, &new.component)?;
    let elapsed = new.timestamp - prev.timestamp;
    if elapsed >= config.direct_max_elapsed_secs {
        return None;
    }

    let metrics: BTreeSet<&str> = prev
        .data
        .keys()
        .chain(new.data.keys())
        .map(String::as_str)
        .collect();

    Some(CausationLink {
        from: prev.id.clone(),
        to: new.id.clone(),
        link_type: LinkType::Direct,
        strength: config.direct_strength,
        explanation: explanation.to_string(),
        metrics_involved: metrics.into_iter().map(str::to_string).collect(),
    })
}
