//! Common types used throughout tablesnap

use serde::{Deserialize, Serialize};

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// One row returned by a relational query, columns in select order
pub type Record = Vec<JsonValue>;

/// Summary of a completed export invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSummary {
    /// Table identifier that was exported
    pub table: String,
    /// Number of partitions written
    pub partitions: usize,
    /// Total rows across all partitions
    pub rows: usize,
}

impl ExportSummary {
    /// Create a new summary
    pub fn new(table: impl Into<String>, partitions: usize, rows: usize) -> Self {
        Self {
            table: table.into(),
            partitions,
            rows,
        }
    }
}
