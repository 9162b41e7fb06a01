//! The relational source seam

use crate::error::Result;
use crate::types::Record;

/// Executes parameterized queries and returns zero, one, or many rows
///
/// Query text and parameter binding are owned by the caller; implementations
/// only run what they are given. Parameters bind positionally to `?`
/// placeholders.
pub trait RelationalSource {
    /// Fetch a single row, or `None` when the query matches nothing
    fn fetch_one(&self, query: &str, params: &[String]) -> Result<Option<Record>>;

    /// Fetch every matching row in result order
    fn fetch_all(&self, query: &str, params: &[String]) -> Result<Vec<Record>>;
}
