use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::CausewayResult;

/// One record of an append-only, position-indexed ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerRecord {
    /// Epoch seconds at which the record was written.
    pub timestamp: f64,
    /// Record payload.
    #[serde(default)]
    pub content: BTreeMap<String, serde_json::Value>,
    pub position: u64,
    pub symbol: String,
    pub agent_id: String,
}

/// Read-only sequential record store replayed by the ledger adapter.
pub trait ILedgerSource: Send + Sync {
    /// Number of positions written so far.
    fn count(&self) -> CausewayResult<u64>;
    /// Record at a position, or `None` when the slot is empty.
    fn read(&self, position: u64) -> CausewayResult<Option<LedgerRecord>>;
}
