//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::value_objects::{DateRange, EmployeeId, UsdAmount};
use proptest::prelude::*;

// ============================================================================
// UsdAmount Property Tests
// ============================================================================

mod usd_amount_tests {
    use super::*;

    proptest! {
        #[test]
        fn always_has_two_fraction_digits(value in -1_000_000.0f64..1_000_000.0f64) {
            let formatted = UsdAmount::new(value).to_string();
            let (_, fraction) = formatted.rsplit_once('.').unwrap();
            prop_assert_eq!(fraction.len(), 2);
            prop_assert!(fraction.chars().all(|c| c.is_ascii_digit()));
        }

        #[test]
        fn non_negative_values_start_with_dollar(value in 0.0f64..1_000_000.0f64) {
            let formatted = UsdAmount::new(value).to_string();
            prop_assert!(formatted.starts_with('$'));
        }

        #[test]
        fn groups_are_at_most_three_digits(value in 0.0f64..1_000_000_000.0f64) {
            let formatted = UsdAmount::new(value).to_string();
            let dollars = formatted
                .trim_start_matches('$')
                .rsplit_once('.')
                .map(|(d, _)| d)
                .unwrap();
            for (i, group) in dollars.split(',').enumerate() {
                prop_assert!(group.len() <= 3);
                if i > 0 {
                    prop_assert_eq!(group.len(), 3);
                }
            }
        }

        #[test]
        fn times_one_is_identity(value in -10_000.0f64..10_000.0f64) {
            let amount = UsdAmount::new(value);
            prop_assert_eq!(amount.times(1).to_string(), amount.to_string());
        }
    }
}

// ============================================================================
// EmployeeId Property Tests
// ============================================================================

mod employee_id_tests {
    use super::*;

    proptest! {
        #[test]
        fn positive_ids_accepted(id in 1i64..=i64::MAX) {
            let result = EmployeeId::new(id);
            prop_assert!(result.is_ok());
            prop_assert_eq!(result.unwrap().as_i64(), id);
        }

        #[test]
        fn non_positive_ids_rejected(id in i64::MIN..=0i64) {
            prop_assert!(EmployeeId::new(id).is_err());
        }

        #[test]
        fn display_round_trips_through_from_str(id in 1i64..=i64::MAX) {
            let original = EmployeeId::new(id).unwrap();
            let parsed: EmployeeId = original.to_string().parse().unwrap();
            prop_assert_eq!(parsed, original);
        }
    }
}

// ============================================================================
// DateRange Property Tests
// ============================================================================

mod date_range_tests {
    use super::*;
    use chrono::NaiveDate;

    proptest! {
        #[test]
        fn display_day_is_never_zero_padded(
            year in 2000i32..2100i32,
            month in 1u32..=12u32,
            day in 1u32..=9u32,
        ) {
            let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
            let range = DateRange::new(date, date);
            prop_assert!(!range.start_display().contains(" 0"));
            prop_assert_eq!(range.start_display(), range.end_display());
        }

        #[test]
        fn iso_parses_back_to_the_same_date(
            year in 2000i32..2100i32,
            month in 1u32..=12u32,
            day in 1u32..=28u32,
        ) {
            let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
            let range = DateRange::new(date, date);
            let parsed = NaiveDate::parse_from_str(&range.start_iso(), "%Y-%m-%d").unwrap();
            prop_assert_eq!(parsed, date);
        }
    }
}
