//! Span definitions per operation: ingest, snapshot, detection, traversal.

/// Create an ingest span for one adapter call.
#[macro_export]
macro_rules! ingest_span {
    ($adapter:expr, $source:expr) => {
        tracing::info_span!("causeway.ingest", adapter = %$adapter, source = %$source)
    };
}

/// Create a snapshot-poll span.
#[macro_export]
macro_rules! snapshot_span {
    ($path:expr, $force:expr) => {
        tracing::debug_span!("causeway.snapshot", path = %$path, force = $force)
    };
}

/// Create a detection span for one inserted event.
#[macro_export]
macro_rules! detection_span {
    ($event_id:expr, $candidates:expr) => {
        tracing::trace_span!("causeway.detection", event_id = %$event_id, candidates = $candidates)
    };
}

/// Create a traversal span.
#[macro_export]
macro_rules! traversal_span {
    ($direction:expr, $event_id:expr, $max_depth:expr) => {
        tracing::debug_span!(
            "causeway.traversal",
            direction = %$direction,
            event_id = %$event_id,
            max_depth = $max_depth
        )
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const INGEST: &str = "causeway.ingest";
    pub const SNAPSHOT: &str = "causeway.snapshot";
    pub const DETECTION: &str = "causeway.detection";
    pub const TRAVERSAL: &str = "causeway.traversal";
}
