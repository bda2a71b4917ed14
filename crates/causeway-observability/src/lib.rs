//! # causeway-observability
//!
//! Subscriber initialisation and span macros shared by the engine and the
//! source adapters.

pub mod tracing_setup;

pub use tracing_setup::init;
