//! The export orchestrator

use super::{serialize, tables};
use crate::database::RelationalSource;
use crate::error::Result;
use crate::partition::{self, DateInterval, DATE_FORMAT};
use crate::storage::{output_key, RecoveryOverwriter, StorageClient};
use crate::types::ExportSummary;

/// Exports one table's date range as one object per partition
///
/// Partitions are processed sequentially in ascending order, and recovery
/// cleanup runs before the first write, so a retried invocation overwrites
/// rather than duplicates. A partition failure aborts the remaining loop;
/// a partial export must not look like a complete one.
pub struct TableExporter<'a, S: RelationalSource> {
    source: &'a S,
    storage: &'a StorageClient,
}

impl<'a, S: RelationalSource> TableExporter<'a, S> {
    /// Create an exporter over a relational source and an output destination
    pub fn new(source: &'a S, storage: &'a StorageClient) -> Self {
        Self { source, storage }
    }

    /// Export `table_name` for the inclusive `[date_from, date_to]` range
    ///
    /// Input validation (date format, range order, table identifier) happens
    /// before any database or storage call. Returns how many partitions were
    /// written and the total row count.
    pub async fn export(
        &self,
        table_name: &str,
        date_from: &str,
        date_to: &str,
    ) -> Result<ExportSummary> {
        let interval = DateInterval::parse(date_from, date_to)?;
        let table = tables::lookup(table_name)?;

        let partitions = partition::partitions(&interval, table.granularity);
        tracing::info!(
            table = table.name,
            date_from,
            date_to,
            partitions = partitions.len(),
            granularity = ?table.granularity,
            "starting export"
        );

        RecoveryOverwriter::new(self.storage)
            .clear_range(table.name, &interval)
            .await?;

        let mut total_rows = 0;
        for date in &partitions {
            let param = date.format(DATE_FORMAT).to_string();
            let rows = self.source.fetch_all(table.query, &[param])?;
            total_rows += rows.len();

            let key = output_key(table.name, *date);
            let body = serialize::to_csv(&rows);
            self.storage.put_text_object(&key, &body).await?;

            tracing::info!(key, rows = rows.len(), "exported partition");
        }

        Ok(ExportSummary::new(table.name, partitions.len(), total_rows))
    }
}
