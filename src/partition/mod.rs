//! Date-range partitioning
//!
//! Turns an inclusive `[oldest, latest]` calendar interval into the ordered,
//! duplicate-free sequence of partitions an export covers. A partition is a
//! single day, or the first day of a month for monthly tables.

mod types;
mod walker;

pub use types::{parse_date, DateInterval, Granularity, DATE_FORMAT};
pub use walker::{continuous_days, continuous_months, partitions};
