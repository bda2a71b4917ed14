//! Events: immutable observations of one component's state at one time.

mod id;
mod value;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use id::EventId;
pub use value::Value;

use crate::component;

/// Metric/field name → scalar, ordered by name.
pub type EventData = BTreeMap<String, Value>;

/// An immutable fact about system state at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier.
    pub id: EventId,
    /// Seconds since the Unix epoch.
    pub timestamp: f64,
    /// Originating component, normalized where a canonical name exists.
    pub component: String,
    /// Free-text event kind, e.g. `state_change`.
    pub event_type: String,
    /// Metrics and fields observed.
    pub data: EventData,
}

impl Event {
    /// Create an event with a freshly generated id.
    pub fn new(
        timestamp: f64,
        component: &str,
        event_type: impl Into<String>,
        data: EventData,
    ) -> Self {
        Self::with_id(EventId::generate(), timestamp, component, event_type, data)
    }

    /// Create an event with a caller-chosen id.
    pub fn with_id(
        id: impl Into<EventId>,
        timestamp: f64,
        component: &str,
        event_type: impl Into<String>,
        data: EventData,
    ) -> Self {
        Self {
            id: id.into(),
            timestamp,
            component: component::normalize(component),
            event_type: event_type.into(),
            data,
        }
    }

    /// Numeric value of a metric, if present and numeric.
    pub fn numeric(&self, metric: &str) -> Option<f64> {
        self.data.get(metric).and_then(Value::as_f64)
    }

    /// Numeric metrics carried by this event.
    pub fn numeric_metrics(&self) -> impl Iterator<Item = (&str, f64)> {
        self.data
            .iter()
            .filter_map(|(k, v)| v.as_f64().map(|f| (k.as_str(), f)))
    }
}

/// Current wall-clock time as fractional epoch seconds.
pub fn now_secs() -> f64 {
    chrono::Utc::now().timestamp_micros() as f64 / 1_000_000.0
}
