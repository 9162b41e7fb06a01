//! Partition walking
//!
//! Both granularities share one day-by-day walk; the monthly sequence is the
//! daily walk collapsed to first-of-month dates.

use super::types::{DateInterval, Granularity};
use chrono::{Datelike, Duration, NaiveDate};

/// Every date from `oldest` to `latest` inclusive, ascending
///
/// The upper bound is appended explicitly instead of being produced by the
/// stepping loop, so it is present even if the step arithmetic were ever to
/// change. `oldest == latest` yields a single entry.
pub fn continuous_days(interval: &DateInterval) -> Vec<NaiveDate> {
    let span = (interval.latest() - interval.oldest()).num_days();

    let mut days: Vec<NaiveDate> = (0..span)
        .map(|i| interval.oldest() + Duration::days(i))
        .collect();
    days.push(interval.latest());

    days
}

/// First-of-month dates for every month the interval touches, ascending, unique
///
/// Materializes the full daily walk and collapses it, so both granularities
/// walk the same routine and both endpoints' months are always present.
pub fn continuous_months(interval: &DateInterval) -> Vec<NaiveDate> {
    let mut months: Vec<NaiveDate> = continuous_days(interval)
        .into_iter()
        .map(month_floor)
        .collect();

    months.sort_unstable();
    months.dedup();

    months
}

/// Partition sequence for an interval at the given granularity
pub fn partitions(interval: &DateInterval, granularity: Granularity) -> Vec<NaiveDate> {
    match granularity {
        Granularity::Daily => continuous_days(interval),
        Granularity::Monthly => continuous_months(interval),
    }
}

/// Truncate a date to the first day of its month
fn month_floor(date: NaiveDate) -> NaiveDate {
    // Day 1 exists in every month, so this never actually falls back
    date.with_day(1).unwrap_or(date)
}

#[cfg(test)]
mod walker_tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_month_floor() {
        assert_eq!(month_floor(d(2024, 9, 17)), d(2024, 9, 1));
        assert_eq!(month_floor(d(2024, 9, 1)), d(2024, 9, 1));
        assert_eq!(month_floor(d(2024, 12, 31)), d(2024, 12, 1));
    }
}
