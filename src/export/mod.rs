//! Table export orchestration
//!
//! Wires the partitioner, recovery overwriter, relational source and storage
//! client into one sequential export invocation per table and date range.

mod exporter;
mod serialize;
mod tables;

pub use exporter::TableExporter;
pub use serialize::to_csv;
pub use tables::{lookup, table_names, TableDef, TABLES};

use crate::error::Result;
use std::future::Future;

/// Run an orchestration entry point with guaranteed logging
///
/// Logs a start event, runs the future, logs a structured error event on
/// failure, and always logs an end event. The original error propagates
/// unchanged, so the invocation still finishes with a failure outcome.
pub async fn run_logged<T, F>(process: &str, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    tracing::info!(process, "start");
    let result = fut.await;
    if let Err(e) = &result {
        tracing::error!(process, error = %e, "failed");
    }
    tracing::info!(process, "end");
    result
}
