//! Causation detector: proposes links from recent events to a new event.
//!
//! Each candidate predecessor is run through a fixed cascade (threshold,
//! then correlation, then direct mapping). The first rule that matches
//! produces the pair's only link.

pub mod strategies;

use causeway_core::config::{DetectionConfig, RulesConfig};
use causeway_core::event::Event;
use causeway_core::link::CausationLink;
use causeway_observability::detection_span;

use crate::store::EventStore;

/// Rule cascade plus the immutable rule tables it reads.
#[derive(Debug, Clone)]
pub struct CausationDetector {
    rules: RulesConfig,
    config: DetectionConfig,
}

impl CausationDetector {
    pub fn new(rules: RulesConfig, config: DetectionConfig) -> Self {
        Self { rules, config }
    }

    /// Links from the most recent stored events into `new`.
    ///
    /// Candidates are the `candidate_window` latest events by timestamp
    /// (excluding `new`); only those strictly earlier than `new` can match.
    pub fn detect(&self, store: &EventStore, new: &Event) -> Vec<CausationLink> {
        let span = detection_span!(new.id, self.config.candidate_window);
        let _guard = span.enter();

        let links: Vec<CausationLink> = store
            .recent(&new.id, self.config.candidate_window)
            .filter(|prev| prev.timestamp < new.timestamp)
            .filter_map(|prev| self.evaluate(prev, new))
            .collect();

        if !links.is_empty() {
            tracing::trace!(event_id = %new.id, links = links.len(), "causation detected");
        }
        links
    }

    /// Run the cascade for one `(prev, new)` pair.
    pub fn evaluate(&self, prev: &Event, new: &Event) -> Option<CausationLink> {
        strategies::threshold::detect(prev, new, &self.rules, &self.config)
            .or_else(|| strategies::correlation::detect(prev, new, &self.config))
            .or_else(|| strategies::direct_mapping::detect(prev, new, &self.rules, &self.config))
    }

    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }
}

impl Default for CausationDetector {
    fn default() -> Self {
        Self::new(RulesConfig::default(), DetectionConfig::default())
    }
}
