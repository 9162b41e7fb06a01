//! Partition types
//!
//! Defines the validated date interval and the granularity switch.

use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format accepted for export parameters
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Whether a table is partitioned by day or by month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    /// One partition per calendar date
    Daily,
    /// One partition per calendar month, keyed by its first day
    Monthly,
}

/// An inclusive calendar date interval with `oldest <= latest`
///
/// Construction is the single validation point: an inverted interval is
/// rejected here, before any partition is computed or any collaborator
/// is invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateInterval {
    oldest: NaiveDate,
    latest: NaiveDate,
}

impl DateInterval {
    /// Create an interval, rejecting `oldest > latest`
    pub fn new(oldest: NaiveDate, latest: NaiveDate) -> Result<Self> {
        if oldest > latest {
            return Err(Error::invalid_range(oldest, latest));
        }
        Ok(Self { oldest, latest })
    }

    /// Parse an interval from two `YYYY-MM-DD` strings
    pub fn parse(date_from: &str, date_to: &str) -> Result<Self> {
        let oldest = parse_date(date_from)?;
        let latest = parse_date(date_to)?;
        Self::new(oldest, latest)
    }

    /// The inclusive lower bound
    pub fn oldest(&self) -> NaiveDate {
        self.oldest
    }

    /// The inclusive upper bound
    pub fn latest(&self) -> NaiveDate {
        self.latest
    }

    /// True if `date` falls within the interval, bounds included
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.oldest <= date && date <= self.latest
    }
}

/// Parse a `YYYY-MM-DD` date string
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| Error::invalid_date(value, "YYYY-MM-DD"))
}
