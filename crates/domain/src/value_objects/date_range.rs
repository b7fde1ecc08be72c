//! Calendar date range value object

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive calendar date range
///
/// The parser that produces ranges does NOT enforce `start <= end`;
/// validating order is a caller responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the range
    pub start: NaiveDate,
    /// Last day of the range
    pub end: NaiveDate,
}

impl DateRange {
    /// Create a range without ordering checks
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Whether the range is chronologically ordered
    pub fn is_ordered(&self) -> bool {
        self.start <= self.end
    }

    /// Start date for display, e.g. "Dec 8"
    pub fn start_display(&self) -> String {
        self.start.format("%b %-d").to_string()
    }

    /// End date for display, e.g. "Dec 11"
    pub fn end_display(&self) -> String {
        self.end.format("%b %-d").to_string()
    }

    /// Start date in the `YYYY-MM-DD` wire format
    pub fn start_iso(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    /// End date in the `YYYY-MM-DD` wire format
    pub fn end_iso(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn display_uses_short_month_and_unpadded_day() {
        let range = DateRange::new(date(2026, 12, 8), date(2026, 12, 11));
        assert_eq!(range.start_display(), "Dec 8");
        assert_eq!(range.end_display(), "Dec 11");
    }

    #[test]
    fn iso_uses_zero_padded_fields() {
        let range = DateRange::new(date(2026, 1, 5), date(2026, 1, 7));
        assert_eq!(range.start_iso(), "2026-01-05");
        assert_eq!(range.end_iso(), "2026-01-07");
    }

    #[test]
    fn reversed_range_is_representable_but_unordered() {
        let range = DateRange::new(date(2026, 12, 11), date(2026, 12, 8));
        assert!(!range.is_ordered());
    }
}
