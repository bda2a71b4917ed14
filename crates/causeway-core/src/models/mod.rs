//! Plain query results handed to presentation layers.
//!
//! Nothing in here references engine internals; every type is owned data
//! that serializes straight to JSON.

mod event_summary;
mod graph_view;
mod metric_sample;
mod stats;
mod trail;

pub use event_summary::{EventSummary, InboundLink};
pub use graph_view::{EdgeView, GraphSnapshot, NodeView};
pub use metric_sample::MetricSample;
pub use stats::{CausationStats, StrongLink};
pub use trail::{CausalPath, TrailEntry};
