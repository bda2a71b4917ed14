//! Event store: immutable events indexed by id, component, type, and time.
//!
//! Nothing is ever deleted. Only the per-metric sample history is bounded.

mod metric_history;
mod timeline;

use std::collections::{BTreeMap, HashMap};
use std::ops::Bound;

use causeway_core::event::{Event, EventId};

pub use metric_history::MetricHistory;
pub use timeline::TimelineKey;

/// In-memory event store. Not synchronized; the engine guards it.
#[derive(Debug, Clone)]
pub struct EventStore {
    events: HashMap<EventId, Event>,
    insertion_order: Vec<EventId>,
    by_component: HashMap<String, Vec<EventId>>,
    component_order: Vec<String>,
    by_type: HashMap<String, Vec<EventId>>,
    type_order: Vec<String>,
    timeline: BTreeMap<TimelineKey, EventId>,
    metrics: MetricHistory,
    next_seq: u64,
}

impl EventStore {
    pub fn new(metric_history_capacity: usize) -> Self {
        Self {
            events: HashMap::new(),
            insertion_order: Vec::new(),
            by_component: HashMap::new(),
            component_order: Vec::new(),
            by_type: HashMap::new(),
            type_order: Vec::new(),
            timeline: BTreeMap::new(),
            metrics: MetricHistory::new(metric_history_capacity),
            next_seq: 0,
        }
    }

    /// Index an event and record its numeric metrics.
    ///
    /// Returns `false` without touching any index when the id is already
    /// stored; stored events never change.
    pub fn insert(&mut self, event: Event) -> bool {
        if self.events.contains_key(&event.id) {
            return false;
        }

        let id = event.id.clone();
        push_indexed(
            &mut self.by_component,
            &mut self.component_order,
            &event.component,
            &id,
        );
        push_indexed(&mut self.by_type, &mut self.type_order, &event.event_type, &id);

        let key = TimelineKey {
            timestamp: event.timestamp,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.timeline.insert(key, id.clone());

        self.metrics.record(&event);
        self.insertion_order.push(id.clone());
        self.events.insert(id, event);
        true
    }

    pub fn get(&self, id: &EventId) -> Option<&Event> {
        self.events.get(id)
    }

    pub fn contains(&self, id: &EventId) -> bool {
        self.events.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.insertion_order
            .iter()
            .filter_map(|id| self.events.get(id))
    }

    /// Up to `limit` events with the latest timestamps, latest first,
    /// skipping `exclude`.
    pub fn recent<'a>(
        &'a self,
        exclude: &'a EventId,
        limit: usize,
    ) -> impl Iterator<Item = &'a Event> + 'a {
        self.timeline
            .values()
            .rev()
            .filter(move |id| *id != exclude)
            .take(limit)
            .filter_map(|id| self.events.get(id))
    }

    /// Events stamped strictly after `timestamp`, oldest first.
    pub fn since(&self, timestamp: f64) -> impl Iterator<Item = &Event> {
        self.timeline
            .range((Bound::Excluded(TimelineKey::after(timestamp)), Bound::Unbounded))
            .filter_map(|(_, id)| self.events.get(id))
    }

    /// Latest timestamp stored.
    pub fn latest_timestamp(&self) -> Option<f64> {
        self.timeline.keys().next_back().map(|k| k.timestamp)
    }

    pub fn ids_by_component(&self, component: &str) -> &[EventId] {
        self.by_component
            .get(component)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn ids_by_type(&self, event_type: &str) -> &[EventId] {
        self.by_type
            .get(event_type)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Distinct components in first-seen order.
    pub fn components(&self) -> &[String] {
        &self.component_order
    }

    /// Distinct event types in first-seen order.
    pub fn event_types(&self) -> &[String] {
        &self.type_order
    }

    /// Total references held by the component and type indices.
    pub fn index_sizes(&self) -> (usize, usize) {
        (
            self.by_component.values().map(Vec::len).sum(),
            self.by_type.values().map(Vec::len).sum(),
        )
    }

    pub fn metrics(&self) -> &MetricHistory {
        &self.metrics
    }
}

fn push_indexed(
    index: &mut HashMap<String, Vec<EventId>>,
    order: &mut Vec<String>,
    key: &str,
    id: &EventId,
) {
    match index.get_mut(key) {
        Some(ids) => ids.push(id.clone()),
        None => {
            order.push(key.to_string());
            index.insert(key.to_string(), vec![id.clone()]);
        }
    }
}
