//! Date-range extraction from free text
//!
//! Matches `<month> <day> (through|to|-) [<month>] <day>` in a user message
//! and resolves it against the injected reference date. The year is always the
//! reference date's year; cross-year ranges are not supported (known
//! limitation). `start <= end` is NOT enforced here - ordering is a caller
//! responsibility.

use std::sync::LazyLock;

use chrono::{Datelike, Duration, NaiveDate};
use domain::DateRange;
use regex::Regex;
use tracing::debug;

/// Matches "Dec 8 through Dec 11", "dec 8 to 11", "march 3 - april 2"
static THROUGH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)] // Infallible with a valid static pattern
    Regex::new(r"(\w+)\s+(\d+)\s+(?:through|to|-)\s+(?:(\w+)\s+)?(\d+)")
        .expect("Failed to compile date range pattern")
});

/// Extract a date range from free text
///
/// Returns `None` when the pattern does not match, a month name is not
/// recognized, or a day number does not parse. When the second month is
/// omitted the first is reused. Day values outside the month roll over via
/// calendar arithmetic ("Feb 30" resolves into early March), mirroring the
/// portal's historical behavior.
pub fn parse_date_range(text: &str, today: NaiveDate) -> Option<DateRange> {
    let lower = text.to_lowercase();
    let caps = THROUGH_PATTERN.captures(&lower)?;

    let start_month = month_number(&caps[1])?;
    let start_day: i64 = caps[2].parse().ok()?;
    let end_month = match caps.get(3) {
        Some(name) => month_number(name.as_str())?,
        None => start_month,
    };
    let end_day: i64 = caps[4].parse().ok()?;

    let year = today.year();
    let start = resolve_day(year, start_month, start_day)?;
    let end = resolve_day(year, end_month, end_day)?;

    debug!(input = %text, start = %start, end = %end, "Parsed date range");
    Some(DateRange::new(start, end))
}

/// Fixed month-name table: full names and 3-letter abbreviations
fn month_number(name: &str) -> Option<u32> {
    match name {
        "jan" | "january" => Some(1),
        "feb" | "february" => Some(2),
        "mar" | "march" => Some(3),
        "apr" | "april" => Some(4),
        "may" => Some(5),
        "jun" | "june" => Some(6),
        "jul" | "july" => Some(7),
        "aug" | "august" => Some(8),
        "sep" | "september" => Some(9),
        "oct" | "october" => Some(10),
        "nov" | "november" => Some(11),
        "dec" | "december" => Some(12),
        _ => None,
    }
}

/// Resolve a day-of-month with rollover semantics
///
/// Day 0 lands on the last day of the previous month; day 30 in February
/// lands in March. Matches constructing a date as first-of-month plus an
/// offset rather than validating bounds.
fn resolve_day(year: i32, month: u32, day: i64) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    first.checked_add_signed(Duration::days(day - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2026, 8, 6)
    }

    #[test]
    fn parses_through_with_both_months() {
        let range = parse_date_range("book Dec 8 through Dec 11", today()).unwrap();
        assert_eq!(range.start, date(2026, 12, 8));
        assert_eq!(range.end, date(2026, 12, 11));
        assert_eq!(range.start_display(), "Dec 8");
        assert_eq!(range.end_display(), "Dec 11");
    }

    #[test]
    fn reuses_first_month_when_second_is_omitted() {
        let range = parse_date_range("book dec 8 to 11", today()).unwrap();
        assert_eq!(range.start, date(2026, 12, 8));
        assert_eq!(range.end, date(2026, 12, 11));
    }

    #[test]
    fn accepts_full_month_names_and_dash_separator() {
        let range = parse_date_range("off from March 3 - April 2 please", today()).unwrap();
        assert_eq!(range.start, date(2026, 3, 3));
        assert_eq!(range.end, date(2026, 4, 2));
    }

    #[test]
    fn is_case_insensitive() {
        let range = parse_date_range("BOOK JAN 5 THROUGH JAN 9", today()).unwrap();
        assert_eq!(range.start, date(2026, 1, 5));
    }

    #[test]
    fn year_comes_from_the_reference_date() {
        let range = parse_date_range("jan 5 to 7", date(2031, 6, 1)).unwrap();
        assert_eq!(range.start, date(2031, 1, 5));
        assert_eq!(range.end, date(2031, 1, 7));
    }

    #[test]
    fn no_day_number_pair_returns_none() {
        assert!(parse_date_range("schedule a meeting", today()).is_none());
    }

    #[test]
    fn unrecognized_month_returns_none() {
        assert!(parse_date_range("book foo 8 through 11", today()).is_none());
        assert!(parse_date_range("book dec 8 through bar 11", today()).is_none());
    }

    // Existing behavior, not a bug to silently fix: out-of-range days roll
    // over into the next month via calendar arithmetic.
    #[test]
    fn out_of_range_day_rolls_over() {
        let range = parse_date_range("book feb 30 through mar 2", today()).unwrap();
        // 2026 is not a leap year: Feb 1 + 29 days = Mar 2
        assert_eq!(range.start, date(2026, 3, 2));
        assert_eq!(range.end, date(2026, 3, 2));
    }

    #[test]
    fn day_zero_rolls_back_to_previous_month() {
        let range = parse_date_range("book feb 0 through feb 1", today()).unwrap();
        assert_eq!(range.start, date(2026, 1, 31));
        assert_eq!(range.end, date(2026, 2, 1));
    }

    #[test]
    fn reversed_range_is_returned_unvalidated() {
        let range = parse_date_range("book dec 11 through dec 8", today()).unwrap();
        assert!(!range.is_ordered());
    }

    #[test]
    fn hyphenated_days_without_spaces_do_not_match() {
        // The separator requires surrounding whitespace, as in the portal
        assert!(parse_date_range("book december 8-11", today()).is_none());
    }

    #[test]
    fn absurd_day_number_returns_none() {
        assert!(parse_date_range("book dec 99999999999999999999 to 3", today()).is_none());
    }

    mod properties {
        use proptest::prelude::*;

        use super::*;

        /// Every accepted month spelling with its month number
        const MONTHS: [(&str, u32); 23] = [
            ("jan", 1),
            ("january", 1),
            ("feb", 2),
            ("february", 2),
            ("mar", 3),
            ("march", 3),
            ("apr", 4),
            ("april", 4),
            ("may", 5),
            ("jun", 6),
            ("june", 6),
            ("jul", 7),
            ("july", 7),
            ("aug", 8),
            ("august", 8),
            ("sep", 9),
            ("september", 9),
            ("oct", 10),
            ("october", 10),
            ("nov", 11),
            ("november", 11),
            ("dec", 12),
            ("december", 12),
        ];

        proptest! {
            #[test]
            fn resolvable_months_with_valid_days_always_parse(
                m1 in 0usize..MONTHS.len(),
                m2 in 0usize..MONTHS.len(),
                d1 in 1u32..=28u32,
                d2 in 1u32..=28u32,
            ) {
                let (name1, month1) = MONTHS[m1];
                let (name2, month2) = MONTHS[m2];
                let text = format!("book {name1} {d1} through {name2} {d2}");

                let range = parse_date_range(&text, today());
                prop_assert!(range.is_some());

                let range = range.unwrap();
                if month1 < month2 || (month1 == month2 && d1 <= d2) {
                    prop_assert!(range.is_ordered());
                }
            }
        }
    }
}
