use causeway_core::config::*;
use causeway_core::errors::ConfigError;
use causeway_core::CausewayError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = CausewayConfig::from_toml("").unwrap();

    // Store defaults
    assert_eq!(config.store.metric_history_capacity, 1000);

    // Detection defaults
    assert_eq!(config.detection.candidate_window, 100);
    assert_eq!(config.detection.correlation_min_change, 0.1);
    assert_eq!(config.detection.correlation_min_metrics, 2);
    assert_eq!(config.detection.correlation_max_named, 3);
    assert_eq!(config.detection.direct_max_elapsed_secs, 1.0);
    assert_eq!(config.detection.threshold_strength, 0.9);
    assert_eq!(config.detection.correlation_strength, 0.7);
    assert_eq!(config.detection.direct_strength, 0.8);

    // Rule defaults
    assert_eq!(config.rules.thresholds.len(), 8);
    assert_eq!(config.rules.consequences.len(), 4);
    assert_eq!(config.rules.direct_mappings.len(), 4);

    // Traversal defaults
    assert_eq!(config.traversal.default_max_depth, 10);
    assert_eq!(config.traversal.strongest_links, 10);

    // Ingest defaults
    assert_eq!(config.ingest.snapshot.retry_attempts, 5);
    assert_eq!(config.ingest.snapshot.pressure_boundaries.len(), 4);
    assert_eq!(config.ingest.snapshot.component_for("network"), Some("reality_sim"));
    assert_eq!(config.ingest.log.extension, "log");
    assert_eq!(config.ingest.ledger.component, "djinn_kernel");

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[detection]
candidate_window = 20
direct_max_elapsed_secs = 2.5

[ingest.snapshot]
retry_attempts = 2
"#;
    let config = CausewayConfig::from_toml(toml).unwrap();
    assert_eq!(config.detection.candidate_window, 20);
    assert_eq!(config.detection.direct_max_elapsed_secs, 2.5);
    // Non-overridden fields keep defaults
    assert_eq!(config.detection.correlation_min_metrics, 2);
    assert_eq!(config.ingest.snapshot.retry_attempts, 2);
    assert_eq!(config.ingest.snapshot.retry_backoff_ms, 50);
    assert_eq!(config.rules.thresholds.len(), 8);
}

#[test]
fn config_rule_tables_replace_defaults_when_given() {
    let toml = r#"
[[rules.thresholds]]
metric = "load"
label = "overload"
boundary = 0.8

[[rules.thresholds]]
metric = "free_mem"
label = "starved"
boundary = 10.0
direction = "below"

[[rules.consequences]]
metric = "load"
label = "overload"
keywords = ["throttle"]

[[rules.direct_mappings]]
from = "scheduler"
to = "worker"
explanation = "Scheduler dispatches work"
"#;
    let config = CausewayConfig::from_toml(toml).unwrap();
    let rules = &config.rules;
    assert_eq!(rules.thresholds.len(), 2);
    assert_eq!(rules.thresholds[0].direction, Direction::Above);
    assert_eq!(rules.thresholds[1].direction, Direction::Below);
    assert_eq!(
        rules.consequence_keywords("load", "overload"),
        Some(&["throttle".to_string()][..])
    );
    assert_eq!(
        rules.direct_explanation("scheduler", "worker"),
        Some("Scheduler dispatches work")
    );
}

#[test]
fn config_rejects_zero_candidate_window() {
    let err = CausewayConfig::from_toml("[detection]\ncandidate_window = 0\n").unwrap_err();
    assert!(matches!(err, CausewayError::ConfigError(_)));
    assert!(err.to_string().contains("candidate_window"));
}

#[test]
fn config_rejects_strength_out_of_range() {
    let err = CausewayConfig::from_toml("[detection]\ndirect_strength = 1.5\n").unwrap_err();
    assert!(err.to_string().contains("direct_strength"));
}

#[test]
fn config_rejects_unordered_pressure_boundaries() {
    let toml = r#"
[[ingest.snapshot.pressure_boundaries]]
label = "high"
value = 0.9

[[ingest.snapshot.pressure_boundaries]]
label = "low"
value = 0.1
"#;
    let err = CausewayConfig::from_toml(toml).unwrap_err();
    assert!(err.to_string().contains("pressure_boundaries"));
}

#[test]
fn config_reports_malformed_toml() {
    let err = CausewayConfig::from_toml("[detection\n").unwrap_err();
    assert!(matches!(err, CausewayError::ConfigError(ConfigError::Parse(_))));
}

#[test]
fn config_loads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("causeway.toml");
    std::fs::write(&path, "[store]\nmetric_history_capacity = 16\n").unwrap();
    let config = CausewayConfig::from_file(&path).unwrap();
    assert_eq!(config.store.metric_history_capacity, 16);

    let missing = CausewayConfig::from_file(&dir.path().join("absent.toml"));
    assert!(matches!(missing, Err(CausewayError::Io(_))));
}
