use serde::{Deserialize, Serialize};

use crate::event::EventId;

/// One observation of a numeric metric, kept for detection context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSample {
    pub timestamp: f64,
    pub value: f64,
    pub event_id: EventId,
}
