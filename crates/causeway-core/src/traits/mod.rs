mod ledger;

pub use ledger::{ILedgerSource, LedgerRecord};
