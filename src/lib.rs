//! # tablesnap
//!
//! Exports snapshots of relational-database tables into an object store,
//! partitioned by calendar date, for downstream batch consumption.
//!
//! An export takes a table identifier and an inclusive date range, expands
//! the range into daily or monthly partitions, clears any output a prior run
//! left inside the range, then writes one object per partition. Output keys
//! are deterministic (`{table}/{YYYY-MM-DD}`), which is what makes a retried
//! run overwrite instead of duplicate.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tablesnap::database::DuckDbSource;
//! use tablesnap::export::TableExporter;
//! use tablesnap::storage::StorageClient;
//!
//! #[tokio::main]
//! async fn main() -> tablesnap::Result<()> {
//!     let source = DuckDbSource::open("/data/snapshot.db")?;
//!     let storage = StorageClient::parse("s3://exports/prod")?;
//!
//!     let exporter = TableExporter::new(&source, &storage);
//!     let summary = exporter.export("glzanmst", "2024-09-01", "2024-09-03").await?;
//!
//!     println!("{} partitions, {} rows", summary.partitions, summary.rows);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! TableExporter
//!   ├── partition   - [from, to] -> ordered, unique partition dates
//!   ├── storage     - recovery overwrite, chunked delete, object I/O
//!   ├── database    - parameterized snapshot queries (DuckDB)
//!   └── export      - serialize rows, write one object per partition
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// Runtime settings
pub mod config;

/// Date-range partitioning
pub mod partition;

/// Object storage client, chunked deletion, recovery overwrite
pub mod storage;

/// Relational source (DuckDB)
pub mod database;

/// Export orchestration
pub mod export;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
