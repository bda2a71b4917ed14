//! Bounded per-metric sample history.

use std::collections::{BTreeMap, VecDeque};

use causeway_core::event::Event;
use causeway_core::models::MetricSample;

/// FIFO sample buffers keyed by metric name.
#[derive(Debug, Clone)]
pub struct MetricHistory {
    capacity: usize,
    series: BTreeMap<String, VecDeque<MetricSample>>,
}

impl MetricHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            series: BTreeMap::new(),
        }
    }

    /// Append every numeric value the event carries, evicting the oldest
    /// sample of a full series.
    pub fn record(&mut self, event: &Event) {
        let capacity = self.capacity;
        for (metric, value) in event.numeric_metrics() {
            let series = self
                .series
                .entry(metric.to_string())
                .or_insert_with(|| VecDeque::with_capacity(capacity.min(64)));
            if series.len() == capacity {
                series.pop_front();
            }
            series.push_back(MetricSample {
                timestamp: event.timestamp,
                value,
                event_id: event.id.clone(),
            });
        }
    }

    /// Samples for one metric, oldest first.
    pub fn samples(&self, metric: &str) -> Option<&VecDeque<MetricSample>> {
        self.series.get(metric)
    }

    /// Tracked metric names, sorted.
    pub fn metric_names(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use causeway_core::event::{EventData, Value};

    use super::*;

    fn event(id: &str, value: f64) -> Event {
        let mut data = EventData::new();
        data.insert("load".into(), Value::Float(value));
        data.insert("label".into(), Value::from("x"));
        Event::with_id(id, value, "system", "state_change", data)
    }

    #[test]
    fn evicts_oldest_beyond_capacity() {
        let mut history = MetricHistory::new(3);
        for i in 0..5 {
            history.record(&event(&format!("e{i}"), i as f64));
        }
        let samples = history.samples("load").unwrap();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples.front().unwrap().event_id.as_str(), "e2");
        assert_eq!(samples.back().unwrap().event_id.as_str(), "e4");
    }

    #[test]
    fn text_fields_are_not_tracked() {
        let mut history = MetricHistory::new(10);
        history.record(&event("e0", 1.0));
        assert!(history.samples("label").is_none());
        assert_eq!(history.metric_names().collect::<Vec<_>>(), vec!["load"]);
    }
}
