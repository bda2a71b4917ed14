use causeway_core::errors::*;

#[test]
fn ingest_error_converts_to_causeway_error() {
    let ingest = IngestError::TransientContention {
        source_name: "state.json".into(),
        attempts: 5,
    };
    let err: CausewayError = ingest.into();
    let msg = err.to_string();
    assert!(msg.contains("state.json"));
    assert!(msg.contains('5'));
}

#[test]
fn malformed_record_carries_location() {
    let err = IngestError::MalformedRecord {
        source_name: "tape.jsonl".into(),
        location: "line 7".into(),
        reason: "expected value".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("tape.jsonl"));
    assert!(msg.contains("line 7"));
}

#[test]
fn config_error_invalid_carries_field() {
    let err: CausewayError = ConfigError::invalid("store.metric_history_capacity", "zero").into();
    assert!(err.to_string().contains("store.metric_history_capacity"));
}

#[test]
fn io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err: CausewayError = io.into();
    assert!(matches!(err, CausewayError::Io(_)));
}
