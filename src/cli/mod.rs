//! CLI module
//!
//! # Commands
//!
//! - `export` - Export one table's date range to the output destination
//! - `tables` - List registered tables and their granularity

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
