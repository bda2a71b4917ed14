/// Failures raised inside a source adapter.
///
/// None of these escape an adapter's public ingest call; they are logged and
/// the call reports zero new events.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("source unavailable: {source_name}: {reason}")]
    SourceUnavailable { source_name: String, reason: String },

    #[error("malformed record in {source_name} at {location}: {reason}")]
    MalformedRecord {
        source_name: String,
        location: String,
        reason: String,
    },

    #[error("source {source_name} still mid-write after {attempts} attempts")]
    TransientContention { source_name: String, attempts: u32 },
}
