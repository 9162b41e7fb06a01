//! Exportable table registry
//!
//! Granularity and snapshot query are static properties of a table
//! identifier. Anything not registered here is rejected before a database or
//! storage call is made.

use crate::error::{Error, Result};
use crate::partition::Granularity;

/// One exportable table
#[derive(Debug, Clone, Copy)]
pub struct TableDef {
    /// Table identifier as supplied by the caller
    pub name: &'static str,
    /// Daily or monthly partitioning
    pub granularity: Granularity,
    /// Snapshot query with the partition date as its single `?` parameter
    pub query: &'static str,
}

/// Every table this exporter knows about
pub static TABLES: &[TableDef] = &[
    TableDef {
        name: "glzanmst",
        granularity: Granularity::Daily,
        query: "SELECT item_code, warehouse_code, stock_qty, target_date \
                FROM glzanmst \
                WHERE target_date = CAST(? AS DATE) \
                ORDER BY item_code, warehouse_code",
    },
    TableDef {
        name: "glswmtrn",
        granularity: Granularity::Daily,
        query: "SELECT slip_no, line_no, account_code, amount, posted_on \
                FROM glswmtrn \
                WHERE posted_on = CAST(? AS DATE) \
                ORDER BY slip_no, line_no",
    },
    TableDef {
        name: "glysnmst",
        granularity: Granularity::Monthly,
        query: "SELECT account_code, budget_amount, budget_month \
                FROM glysnmst \
                WHERE budget_month = CAST(? AS DATE) \
                ORDER BY account_code",
    },
    TableDef {
        name: "ackmkmst",
        granularity: Granularity::Monthly,
        query: "SELECT customer_code, closing_code, target_month \
                FROM ackmkmst \
                WHERE target_month = CAST(? AS DATE) \
                ORDER BY customer_code",
    },
];

/// Resolve a table identifier, rejecting unknown names
pub fn lookup(name: &str) -> Result<&'static TableDef> {
    TABLES
        .iter()
        .find(|table| table.name == name)
        .ok_or_else(|| Error::unknown_table(name))
}

/// Registered table identifiers, in registry order
pub fn table_names() -> Vec<&'static str> {
    TABLES.iter().map(|table| table.name).collect()
}
