//! Default values for every configuration section.

// Store
pub const DEFAULT_METRIC_HISTORY_CAPACITY: usize = 1000;

// Detection
pub const DEFAULT_CANDIDATE_WINDOW: usize = 100;
pub const DEFAULT_CORRELATION_MIN_CHANGE: f64 = 0.1;
pub const DEFAULT_CORRELATION_MIN_METRICS: usize = 2;
pub const DEFAULT_CORRELATION_MAX_NAMED: usize = 3;
pub const DEFAULT_DIRECT_MAX_ELAPSED_SECS: f64 = 1.0;
pub const DEFAULT_THRESHOLD_STRENGTH: f64 = 0.9;
pub const DEFAULT_CORRELATION_STRENGTH: f64 = 0.7;
pub const DEFAULT_DIRECT_STRENGTH: f64 = 0.8;

// Traversal
pub const DEFAULT_MAX_DEPTH: usize = 10;
pub const DEFAULT_STRONGEST_LINKS: usize = 10;
pub const DEFAULT_SUMMARY_NEIGHBORS: usize = 5;

// Ingest
pub const DEFAULT_SNAPSHOT_RETRY_ATTEMPTS: u32 = 5;
pub const DEFAULT_SNAPSHOT_RETRY_BACKOFF_MS: u64 = 50;
pub const DEFAULT_MIN_DOCUMENT_BYTES: usize = 2;
pub const DEFAULT_PHASE_BLOCK: &str = "explorer";
pub const DEFAULT_PHASE_FIELD: &str = "phase";
pub const DEFAULT_PRESSURE_BLOCK: &str = "kernel";
pub const DEFAULT_PRESSURE_FIELD: &str = "violation_pressure";
pub const DEFAULT_PRESSURE_BOUNDARIES: [(&str, f64); 4] =
    [("vp0", 0.25), ("vp1", 0.50), ("vp2", 0.75), ("vp3", 0.99)];
pub const DEFAULT_SNAPSHOT_BLOCKS: [(&str, &str); 7] = [
    ("breath", "breath"),
    ("network", "reality_sim"),
    ("evolution", "reality_sim"),
    ("quantum", "reality_sim"),
    ("explorer", "explorer"),
    ("kernel", "djinn_kernel"),
    ("vm", "djinn_kernel"),
];
pub const DEFAULT_LOG_EXTENSION: &str = "log";
pub const DEFAULT_LEDGER_COMPONENT: &str = "djinn_kernel";

// Observability
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = false;
