//! # causeway-causal
//!
//! Causal event graph engine.
//! Event store with component/type/timeline indices, heuristic causation
//! detection (threshold crossing, correlation, direct mapping), bounded
//! trails, shortest paths, and snapshot-consistent exports.

pub mod detection;
pub mod engine;
pub mod graph;
pub mod query;
pub mod store;
pub mod traversal;

pub use detection::CausationDetector;
pub use engine::CausationEngine;
pub use graph::IndexedGraph;
pub use store::EventStore;
pub use traversal::TrailDirection;
