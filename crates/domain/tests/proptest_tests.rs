//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::value_objects::{ConditionTag, Coordinate, Severity};
use domain::Warning;
use proptest::prelude::*;

fn any_tag() -> impl Strategy<Value = ConditionTag> {
    prop_oneof![
        Just(ConditionTag::ExtremeCold),
        Just(ConditionTag::ExtremeHeat),
        Just(ConditionTag::StrongWind),
        Just(ConditionTag::ExtremeWind),
        Just(ConditionTag::HeavyRain),
        Just(ConditionTag::ExtremeRain),
        Just(ConditionTag::HeavySnow),
        Just(ConditionTag::ExtremeSnow),
        Just(ConditionTag::PoorVisibility),
    ]
}

fn any_severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Normal),
        Just(Severity::Severe),
        Just(Severity::Extreme),
    ]
}

// ============================================================================
// Coordinate Property Tests
// ============================================================================

mod coordinate_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_coordinates_accepted(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let c = Coordinate::new(lat, lon);
            prop_assert!(c.is_ok());
            let c = c.unwrap();
            prop_assert!((c.latitude() - lat).abs() < f64::EPSILON);
            prop_assert!((c.longitude() - lon).abs() < f64::EPSILON);
        }

        #[test]
        fn invalid_latitude_rejected(
            lat in prop_oneof![(-1000.0f64..-90.1f64), (90.1f64..1000.0f64)],
            lon in -180.0f64..=180.0f64
        ) {
            prop_assert!(Coordinate::new(lat, lon).is_err());
        }
    }
}

// ============================================================================
// Severity / Warning Property Tests
// ============================================================================

mod severity_tests {
    use super::*;

    proptest! {
        #[test]
        fn max_of_is_an_upper_bound(values in prop::collection::vec(any_severity(), 0..10)) {
            let max = Severity::max_of(values.iter().copied());
            for v in &values {
                prop_assert!(*v <= max);
            }
            if values.is_empty() {
                prop_assert_eq!(max, Severity::Normal);
            } else {
                prop_assert!(values.contains(&max));
            }
        }

        #[test]
        fn order_agrees_with_rank(a in any_severity(), b in any_severity()) {
            prop_assert_eq!(a.cmp(&b), a.rank().cmp(&b.rank()));
        }

        #[test]
        fn warning_severity_is_max_of_tags(tags in prop::collection::vec(any_tag(), 0..6)) {
            let expected = Severity::max_of(tags.iter().map(|t| t.severity()));
            let warning = Warning::from_conditions(tags.clone());
            prop_assert_eq!(warning.severity(), expected);
            prop_assert_eq!(warning.conditions(), tags.as_slice());
        }

        #[test]
        fn description_mentions_every_tag(tags in prop::collection::vec(any_tag(), 1..6)) {
            let warning = Warning::from_conditions(tags.clone());
            for tag in &tags {
                prop_assert!(warning.description().contains(tag.phrase()));
            }
            prop_assert!(warning.description().starts_with(warning.severity().headline()));
        }
    }
}
