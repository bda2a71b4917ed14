//! Causal graph: directed, at most one edge per ordered pair, append-only.
//!
//! Detection is heuristic, so the graph may contain cycles. Traversals carry
//! their own visited sets.

pub mod stable_graph;

pub use stable_graph::{CausalEdgeWeight, CausalNode, IndexedGraph};
