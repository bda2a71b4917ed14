//! # causeway-ingest
//!
//! Adapters that turn foreign state into events on a [`CausationEngine`].
//! Every adapter call is repeatable and absorbs its own failures: a missing,
//! malformed or mid-write source means zero new events, never an error.
//!
//! [`CausationEngine`]: causeway_causal::CausationEngine

pub mod ledger;
pub mod log_line;
pub mod snapshot;

pub use ledger::{JsonLinesLedger, LedgerAdapter};
pub use log_line::{parse_line, LogDirAdapter};
pub use snapshot::SnapshotAdapter;
