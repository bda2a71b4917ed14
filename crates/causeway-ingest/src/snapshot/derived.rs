//! Events derived from changes between consecutive snapshots.

use causeway_core::config::{Direction, PressureBoundary};
use causeway_core::event::{EventData, Value};

/// One boundary crossed between two pressure readings.
#[derive(Debug, Clone, PartialEq)]
pub struct Crossing<'a> {
    pub boundary: &'a PressureBoundary,
    pub direction: Direction,
}

/// Every boundary crossed moving from `prev` to `current`, in table order.
pub fn crossings(boundaries: &[PressureBoundary], prev: f64, current: f64) -> Vec<Crossing<'_>> {
    boundaries
        .iter()
        .filter_map(|boundary| {
            [Direction::Above, Direction::Below]
                .into_iter()
                .find(|d| d.crossed(prev, current, boundary.value))
                .map(|direction| Crossing {
                    boundary,
                    direction,
                })
        })
        .collect()
}

pub fn threshold_data(
    metric: &str,
    crossing: &Crossing<'_>,
    prev: f64,
    current: f64,
    frame: i64,
) -> EventData {
    let mut data = EventData::new();
    data.insert(metric.to_string(), Value::Float(current));
    data.insert("previous_value".to_string(), Value::Float(prev));
    data.insert("boundary".to_string(), Value::from(crossing.boundary.label.as_str()));
    data.insert("boundary_value".to_string(), Value::Float(crossing.boundary.value));
    data.insert("direction".to_string(), Value::from(crossing.direction.as_str()));
    data.insert("frame_count".to_string(), frame_value(frame));
    data
}

pub fn phase_data(old: &str, new: &str, frame: i64) -> EventData {
    let mut data = EventData::new();
    data.insert("old_phase".to_string(), Value::from(old));
    data.insert("new_phase".to_string(), Value::from(new));
    data.insert("frame_count".to_string(), frame_value(frame));
    data
}

pub fn frame_value(frame: i64) -> Value {
    Value::Int(frame)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boundaries() -> Vec<PressureBoundary> {
        [("vp0", 0.25), ("vp1", 0.5), ("vp2", 0.75), ("vp3", 0.99)]
            .into_iter()
            .map(|(label, value)| PressureBoundary {
                label: label.to_string(),
                value,
            })
            .collect()
    }

    #[test]
    fn rising_pressure_crosses_each_boundary_passed() {
        let b = boundaries();
        let hits = crossings(&b, 0.2, 0.8);
        let labels: Vec<&str> = hits.iter().map(|c| c.boundary.label.as_str()).collect();
        assert_eq!(labels, vec!["vp0", "vp1", "vp2"]);
        assert!(hits.iter().all(|c| c.direction == Direction::Above));
    }

    #[test]
    fn falling_pressure_reports_below() {
        let b = boundaries();
        let hits = crossings(&b, 0.6, 0.4);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].boundary.label, "vp1");
        assert_eq!(hits[0].direction, Direction::Below);
    }

    #[test]
    fn unchanged_pressure_crosses_nothing() {
        assert!(crossings(&boundaries(), 0.5, 0.5).is_empty());
    }
}
