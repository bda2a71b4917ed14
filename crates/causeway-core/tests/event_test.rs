use causeway_core::event::{now_secs, Event, EventData, EventId, Value};
use causeway_core::link::LinkType;

fn data(pairs: &[(&str, Value)]) -> EventData {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[test]
fn new_event_normalizes_component() {
    let event = Event::new(1.0, "Reality_Simulator", "state_change", EventData::new());
    assert_eq!(event.component, "reality_sim");

    let passthrough = Event::new(1.0, "hydraulics", "state_change", EventData::new());
    assert_eq!(passthrough.component, "hydraulics");
}

#[test]
fn generated_ids_are_unique() {
    let ids: std::collections::HashSet<EventId> =
        (0..1000).map(|_| EventId::generate()).collect();
    assert_eq!(ids.len(), 1000);
}

#[test]
fn numeric_view_skips_text_and_bools() {
    let event = Event::with_id(
        "e1",
        10.0,
        "explorer",
        "state_change",
        data(&[
            ("phase", Value::from("mapping")),
            ("vp_calcs", Value::Int(12)),
            ("math_cap", Value::Bool(true)),
            ("depth", Value::Float(0.5)),
        ]),
    );
    assert_eq!(event.numeric("vp_calcs"), Some(12.0));
    assert_eq!(event.numeric("phase"), None);
    assert_eq!(event.numeric("math_cap"), None);
    let metrics: Vec<_> = event.numeric_metrics().map(|(k, _)| k).collect();
    assert_eq!(metrics, vec!["depth", "vp_calcs"]);
}

#[test]
fn event_json_uses_plain_scalars() {
    let event = Event::with_id(
        "e2",
        5.5,
        "breath",
        "state_change",
        data(&[("cycle", Value::Int(3)), ("pulse", Value::Float(0.25))]),
    );
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["id"], "e2");
    assert_eq!(json["data"]["cycle"], 3);
    assert_eq!(json["data"]["pulse"], 0.25);

    let back: Event = serde_json::from_value(json).unwrap();
    assert_eq!(back, event);
}

#[test]
fn value_from_json_narrows_to_scalars() {
    use serde_json::json;
    assert_eq!(Value::from_json(&json!(2)), Some(Value::Int(2)));
    assert_eq!(Value::from_json(&json!(2.5)), Some(Value::Float(2.5)));
    assert_eq!(Value::from_json(&json!(null)), None);
    assert_eq!(
        Value::from_json(&json!([1, 2])),
        Some(Value::Str("[1,2]".into()))
    );
}

#[test]
fn link_type_names_round_trip() {
    for lt in LinkType::ALL {
        assert_eq!(LinkType::from_str_name(lt.as_str()), Some(lt));
    }
    assert_eq!(LinkType::from_str_name("temporal"), None);
}

#[test]
fn now_secs_is_epoch_seconds() {
    // 2020-01-01T00:00:00Z
    assert!(now_secs() > 1_577_836_800.0);
}
