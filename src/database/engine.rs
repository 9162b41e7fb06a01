//! DuckDB-backed relational source

use super::source::RelationalSource;
use crate::error::Result;
use crate::types::{JsonValue, Record};
use duckdb::Connection;

/// Relational source over a DuckDB database file
pub struct DuckDbSource {
    conn: Connection,
}

impl DuckDbSource {
    /// Open a database file
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (tests and local experiments)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Run a batch of statements with no result (schema/data setup)
    pub fn execute_batch(&self, sql: &str) -> Result<()> {
        self.conn.execute_batch(sql)?;
        Ok(())
    }

    fn query(&self, query: &str, params: &[String], limit: Option<usize>) -> Result<Vec<Record>> {
        tracing::debug!(query, params = ?params, "executing query");

        let mut stmt = self.conn.prepare(query)?;
        let mut rows = stmt.query(duckdb::params_from_iter(params.iter()))?;

        // Column metadata is only available once the query has executed
        let column_count = rows.as_ref().map_or(0, |r| r.column_count());

        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            let mut record = Record::with_capacity(column_count);
            for i in 0..column_count {
                let value: duckdb::types::Value = row.get(i)?;
                record.push(value_to_json(value));
            }
            records.push(record);

            if limit.is_some_and(|max| records.len() >= max) {
                break;
            }
        }

        Ok(records)
    }
}

impl RelationalSource for DuckDbSource {
    fn fetch_one(&self, query: &str, params: &[String]) -> Result<Option<Record>> {
        Ok(self.query(query, params, Some(1))?.into_iter().next())
    }

    fn fetch_all(&self, query: &str, params: &[String]) -> Result<Vec<Record>> {
        self.query(query, params, None)
    }
}

/// Convert a DuckDB value to a JSON value
fn value_to_json(value: duckdb::types::Value) -> JsonValue {
    use duckdb::types::Value;

    match value {
        Value::Null => JsonValue::Null,
        Value::Boolean(b) => JsonValue::Bool(b),
        Value::TinyInt(i) => JsonValue::Number(i.into()),
        Value::SmallInt(i) => JsonValue::Number(i.into()),
        Value::Int(i) => JsonValue::Number(i.into()),
        Value::BigInt(i) => JsonValue::Number(i.into()),
        Value::HugeInt(i) => JsonValue::String(i.to_string()),
        Value::UTinyInt(i) => JsonValue::Number(i.into()),
        Value::USmallInt(i) => JsonValue::Number(i.into()),
        Value::UInt(i) => JsonValue::Number(i.into()),
        Value::UBigInt(i) => JsonValue::Number(i.into()),
        Value::Float(f) => {
            serde_json::Number::from_f64(f64::from(f)).map_or(JsonValue::Null, JsonValue::Number)
        }
        Value::Double(f) => {
            serde_json::Number::from_f64(f).map_or(JsonValue::Null, JsonValue::Number)
        }
        Value::Text(s) => JsonValue::String(s),
        Value::Blob(b) => JsonValue::String(base64::Engine::encode(
            &base64::engine::general_purpose::STANDARD,
            b,
        )),
        Value::Timestamp(_, i) => {
            let secs = i / 1_000_000;
            let nsecs = ((i % 1_000_000) * 1000) as u32;
            chrono::DateTime::from_timestamp(secs, nsecs)
                .map(|dt| JsonValue::String(dt.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()))
                .unwrap_or(JsonValue::Number(i.into()))
        }
        Value::Date32(d) => {
            // Days since epoch (719163 is the number of days from 1 CE to 1970-01-01)
            chrono::NaiveDate::from_num_days_from_ce_opt(d + 719_163)
                .map(|date| JsonValue::String(date.format("%Y-%m-%d").to_string()))
                .unwrap_or(JsonValue::Number(d.into()))
        }
        Value::Time64(_, t) => {
            // Microseconds since midnight
            let secs = t / 1_000_000;
            let micros = t % 1_000_000;
            JsonValue::String(format!(
                "{:02}:{:02}:{:02}.{:06}",
                secs / 3600,
                (secs % 3600) / 60,
                secs % 60,
                micros
            ))
        }
        _ => JsonValue::String(format!("{value:?}")),
    }
}
