//! Snapshot adapter against the golden frames.

use std::fs;

use causeway_causal::CausationEngine;
use causeway_core::config::SnapshotConfig;
use causeway_core::event::Value;
use causeway_core::link::LinkType;
use causeway_ingest::SnapshotAdapter;
use tempfile::TempDir;

fn fast_config() -> SnapshotConfig {
    SnapshotConfig {
        retry_attempts: 3,
        retry_backoff_ms: 1,
        ..SnapshotConfig::default()
    }
}

fn write_frame(dir: &TempDir, frame: &str) {
    test_fixtures::copy_fixture(&format!("golden/snapshots/{frame}"), dir.path(), "state.json");
}

#[test]
fn first_frame_emits_one_event_per_recognized_block() {
    let dir = TempDir::new().unwrap();
    write_frame(&dir, "frame_001.json");
    let engine = CausationEngine::new();
    let mut adapter = SnapshotAdapter::new(dir.path().join("state.json"), fast_config());

    assert_eq!(adapter.ingest(&engine, false), 4);
    assert_eq!(adapter.last_loaded_frame(), Some(1));

    let stats = engine.stats();
    assert_eq!(stats.event_types, vec!["state_change"]);
    assert_eq!(
        stats.components,
        vec!["breath", "reality_sim", "explorer", "djinn_kernel"]
    );
    let kernel = engine.search("VP0");
    assert_eq!(kernel.len(), 1);
    assert_eq!(kernel[0].timestamp, 1000.0);
    assert_eq!(kernel[0].data.get("frame_count"), Some(&Value::Int(1)));
}

#[test]
fn stale_frames_are_skipped_unless_forced() {
    let dir = TempDir::new().unwrap();
    write_frame(&dir, "frame_001.json");
    let engine = CausationEngine::new();
    let mut adapter = SnapshotAdapter::new(dir.path().join("state.json"), fast_config());

    assert_eq!(adapter.ingest(&engine, false), 4);
    assert_eq!(adapter.ingest(&engine, false), 0);
    assert_eq!(engine.len(), 4);

    assert_eq!(adapter.ingest(&engine, true), 4);
    assert_eq!(engine.len(), 8);
}

#[test]
fn frame_changes_derive_phase_and_threshold_events() {
    let dir = TempDir::new().unwrap();
    let engine = CausationEngine::new();
    let mut adapter = SnapshotAdapter::new(dir.path().join("state.json"), fast_config());

    write_frame(&dir, "frame_001.json");
    adapter.ingest(&engine, false);
    write_frame(&dir, "frame_002.json");
    // 4 blocks + genesis→sovereign + vp0 and vp1 crossed upward.
    assert_eq!(adapter.ingest(&engine, false), 7);

    let transitions = engine.search("phase_transition");
    assert_eq!(transitions.len(), 1);
    let transition = &transitions[0];
    assert_eq!(transition.component, "explorer");
    assert_eq!(transition.data.get("old_phase"), Some(&Value::from("genesis")));
    assert_eq!(transition.data.get("new_phase"), Some(&Value::from("sovereign")));
    assert_eq!(transition.data.get("frame_count"), Some(&Value::Int(2)));

    let crossings = engine.search("threshold_crossed");
    let labels: Vec<_> = crossings
        .iter()
        .filter_map(|e| e.data.get("boundary").cloned())
        .collect();
    assert_eq!(labels, vec![Value::from("vp0"), Value::from("vp1")]);
    assert!(crossings.iter().all(|e| e.component == "djinn_kernel"));
    assert_eq!(
        crossings[0].data.get("violation_pressure"),
        Some(&Value::Float(0.6))
    );
    assert_eq!(crossings[0].data.get("previous_value"), Some(&Value::Float(0.2)));
    assert_eq!(crossings[0].data.get("direction"), Some(&Value::from("above")));

    write_frame(&dir, "frame_003.json");
    // explorer + kernel blocks, phase unchanged, vp1 crossed downward.
    assert_eq!(adapter.ingest(&engine, false), 3);
    let falling: Vec<_> = engine
        .search("threshold_crossed")
        .into_iter()
        .filter(|e| e.data.get("direction") == Some(&Value::from("below")))
        .collect();
    assert_eq!(falling.len(), 1);
    assert_eq!(falling[0].timestamp, 1001.0);
}

#[test]
fn consecutive_frames_are_linked_by_detection() {
    let dir = TempDir::new().unwrap();
    let engine = CausationEngine::new();
    let mut adapter = SnapshotAdapter::new(dir.path().join("state.json"), fast_config());

    write_frame(&dir, "frame_001.json");
    adapter.ingest(&engine, false);
    write_frame(&dir, "frame_002.json");
    adapter.ingest(&engine, false);

    let links = engine.links();
    let collapse = links
        .iter()
        .find(|l| l.explanation == "modularity crossed collapse threshold (0.3)");
    assert!(collapse.is_some_and(|l| l.link_type == LinkType::Threshold));
    assert!(links
        .iter()
        .any(|l| l.explanation == "Breath cycle drives network update"));
}

#[test]
fn missing_file_is_a_silent_no_op() {
    let dir = TempDir::new().unwrap();
    let engine = CausationEngine::new();
    let mut adapter = SnapshotAdapter::new(dir.path().join("absent.json"), fast_config());
    assert_eq!(adapter.ingest(&engine, false), 0);
    assert!(adapter.last_loaded_frame().is_none());
}

#[test]
fn partial_or_empty_documents_give_up_after_retries() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");
    let engine = CausationEngine::new();
    let mut adapter = SnapshotAdapter::new(&path, fast_config());

    fs::write(&path, "").unwrap();
    assert_eq!(adapter.ingest(&engine, false), 0);

    fs::write(&path, r#"{"frame_count": 4, "data": {"breath": {"pha"#).unwrap();
    assert_eq!(adapter.ingest(&engine, false), 0);
    assert!(adapter.last_loaded_frame().is_none());
    assert!(engine.is_empty());

    write_frame(&dir, "frame_001.json");
    assert_eq!(adapter.ingest(&engine, false), 4);
}

#[test]
fn frame_counter_accepts_any_whole_number() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");
    let engine = CausationEngine::new();
    let mut adapter = SnapshotAdapter::new(&path, fast_config());

    fs::write(&path, r#"{"frame_count": -3, "simulation_time": 1.0, "data": {"breath": {"rate": 1}}}"#).unwrap();
    assert_eq!(adapter.ingest(&engine, false), 1);
    assert_eq!(adapter.last_loaded_frame(), Some(-3));

    fs::write(&path, r#"{"frame_count": 12.0, "simulation_time": 2.0, "data": {"breath": {"rate": 2}}}"#).unwrap();
    assert_eq!(adapter.ingest(&engine, false), 1);
    assert_eq!(adapter.last_loaded_frame(), Some(12));
    let latest = engine.events_since(1.5);
    assert_eq!(latest[0].data.get("frame_count"), Some(&Value::Int(12)));

    fs::write(&path, r#"{"frame_count": 12.5, "data": {"breath": {"rate": 3}}}"#).unwrap();
    assert_eq!(adapter.ingest(&engine, false), 0);
    assert_eq!(adapter.last_loaded_frame(), Some(12));
}
