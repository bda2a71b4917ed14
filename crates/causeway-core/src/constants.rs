/// Causeway version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Event type emitted for plain state observations.
pub const EVENT_STATE_CHANGE: &str = "state_change";

/// Event type emitted when a phase/mode label changes between snapshots.
pub const EVENT_PHASE_TRANSITION: &str = "phase_transition";

/// Event type emitted when a pressure scalar crosses a classification boundary.
pub const EVENT_THRESHOLD_CROSSED: &str = "threshold_crossed";

/// Event type emitted for every ledger record replayed.
pub const EVENT_TAPE_CELL: &str = "tape_cell";
