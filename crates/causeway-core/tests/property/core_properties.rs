use causeway_core::component;
use causeway_core::config::Direction;
use causeway_core::event::Value;
use proptest::prelude::*;

proptest! {
    #[test]
    fn integers_coerce_to_int(n in any::<i64>()) {
        prop_assert_eq!(Value::coerce(&n.to_string()), Value::Int(n));
    }

    #[test]
    fn decimals_coerce_to_float(x in -1.0e9f64..1.0e9) {
        let raw = format!("{x:.3}");
        let coerced = Value::coerce(&raw);
        prop_assert!(coerced.as_f64().is_some());
        prop_assert!((coerced.as_f64().unwrap_or(f64::NAN) - x).abs() < 1e-3);
    }

    #[test]
    fn non_numeric_text_stays_text(s in "[a-z_]{1,12}") {
        prop_assert_eq!(Value::coerce(&s), Value::Str(s.clone()));
    }

    #[test]
    fn normalization_is_idempotent(raw in "[A-Za-z_ ]{0,20}") {
        let once = component::normalize(&raw);
        prop_assert_eq!(component::normalize(&once), once);
    }

    #[test]
    fn crossing_directions_are_exclusive(
        prev in -10.0f64..10.0,
        new in -10.0f64..10.0,
        boundary in -10.0f64..10.0,
    ) {
        let above = Direction::Above.crossed(prev, new, boundary);
        let below = Direction::Below.crossed(prev, new, boundary);
        prop_assert!(!(above && below));
        if above || below {
            prop_assert!(prev != new);
        }
    }
}
