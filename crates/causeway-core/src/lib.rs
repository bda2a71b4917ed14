//! # causeway-core
//!
//! Foundation crate for the Causeway causal event graph.
//! Defines events, causation links, rule tables, query models, errors, config,
//! and constants. Every other crate in the workspace depends on this.

pub mod component;
pub mod config;
pub mod constants;
pub mod errors;
pub mod event;
pub mod link;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CausewayConfig;
pub use errors::{CausewayError, CausewayResult};
pub use event::{Event, EventData, EventId, Value};
pub use link::{CausationLink, LinkType};
