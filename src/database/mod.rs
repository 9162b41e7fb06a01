//! Relational source
//!
//! Parameterized query execution against the snapshot database. The trait is
//! the seam the exporter depends on; DuckDB provides the real implementation.

mod engine;
mod source;

pub use engine::DuckDbSource;
pub use source::RelationalSource;
