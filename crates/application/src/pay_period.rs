//! Pay-period arithmetic
//!
//! The HR billing cycle is a fixed 14-day (biweekly) period. Year-to-date
//! projections multiply per-period costs by the number of whole periods
//! elapsed since January 1 of the reference year - no calendar or holiday
//! adjustment.

use chrono::{Datelike, NaiveDate};

/// Days per pay period (biweekly)
const PAY_PERIOD_DAYS: i64 = 14;

/// Whole pay periods elapsed since January 1 of the reference date's year
pub fn elapsed_pay_periods(today: NaiveDate) -> i64 {
    #[allow(clippy::expect_used)] // Jan 1 exists in every year
    let year_start =
        NaiveDate::from_ymd_opt(today.year(), 1, 1).expect("Jan 1 is a valid date");
    let days_since_year_start = (today - year_start).num_days();
    days_since_year_start / PAY_PERIOD_DAYS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn january_first_is_zero_periods() {
        assert_eq!(elapsed_pay_periods(date(2026, 1, 1)), 0);
    }

    #[test]
    fn thirteen_days_in_is_still_zero() {
        assert_eq!(elapsed_pay_periods(date(2026, 1, 14)), 0);
    }

    #[test]
    fn fourteen_days_in_is_one_period() {
        assert_eq!(elapsed_pay_periods(date(2026, 1, 15)), 1);
    }

    #[test]
    fn mid_year_period_count() {
        // May 21 2026 is day 140 of the year (Jan 1 + 140 days)
        assert_eq!(elapsed_pay_periods(date(2026, 5, 21)), 10);
    }

    #[test]
    fn year_end_is_26_periods() {
        assert_eq!(elapsed_pay_periods(date(2026, 12, 31)), 26);
    }
}
