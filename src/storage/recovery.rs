//! Recovery overwrite
//!
//! Before an export range is (re)written, any output a prior run left inside
//! that range is removed. Output keys are deterministic per partition, so a
//! retried run lands on exactly the keys the cleanup just cleared and the
//! store never holds more than one valid copy per partition.

use super::client::StorageClient;
use super::delete::ChunkedDeleter;
use crate::error::Result;
use crate::partition::{parse_date, DateInterval};
use chrono::NaiveDate;

/// Deterministic output key for one partition of a table
///
/// Layout: `{table}/{YYYY-MM-DD}`. Monthly partitions use their
/// first-of-month date, so the same parse covers both granularities.
pub fn output_key(table: &str, partition: NaiveDate) -> String {
    format!("{table}/{}", partition.format("%Y-%m-%d"))
}

/// Parse the partition date embedded in an output key
///
/// Returns `None` for keys that do not follow the output layout; recovery
/// leaves such keys alone rather than guessing.
pub fn partition_from_key(key: &str) -> Option<NaiveDate> {
    let tail = key.rsplit('/').next()?;
    parse_date(tail).ok()
}

/// Clears prior outputs for a table's date range before a re-export
#[derive(Debug, Clone, Copy)]
pub struct RecoveryOverwriter<'a> {
    client: &'a StorageClient,
}

impl<'a> RecoveryOverwriter<'a> {
    /// Create an overwriter against the output destination
    pub fn new(client: &'a StorageClient) -> Self {
        Self { client }
    }

    /// Delete every existing output for `table` whose partition falls inside
    /// `interval`, returning how many stale keys were removed
    ///
    /// Zero matching keys means the range was never exported; that is a
    /// no-op, not an error. Running this twice with no writes in between
    /// deletes nothing the second time.
    pub async fn clear_range(&self, table: &str, interval: &DateInterval) -> Result<usize> {
        let listed = self.client.list_object_keys(table).await?;

        let stale: Vec<String> = listed
            .into_iter()
            .filter(|key| partition_from_key(key).is_some_and(|date| interval.contains(date)))
            .collect();

        if !stale.is_empty() {
            tracing::info!(
                table,
                stale = stale.len(),
                "removing prior outputs before re-export"
            );
        }

        ChunkedDeleter::new(self.client).delete_all(&stale).await?;

        Ok(stale.len())
    }
}
