//! Record serialization to delimited text
//!
//! One partition's rows become one CSV body, no header, columns in select
//! order. The schema is table-specific and not part of the output contract.

use crate::types::{JsonValue, Record};

/// Serialize rows to CSV text, one line per row, trailing newline per line
pub fn to_csv(rows: &[Record]) -> String {
    let mut out = String::new();
    for row in rows {
        let line: Vec<String> = row.iter().map(format_field).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    out
}

/// Render one value as a CSV field
fn format_field(value: &JsonValue) -> String {
    match value {
        JsonValue::Null => String::new(),
        JsonValue::Bool(b) => b.to_string(),
        JsonValue::Number(n) => n.to_string(),
        JsonValue::String(s) => quote_if_needed(s),
        // Nested values survive as their JSON text
        other => quote_if_needed(&other.to_string()),
    }
}

/// Quote a field when it contains the delimiter, a quote, or a line break
fn quote_if_needed(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
