//! CLI commands and argument parsing

use clap::{Parser, Subcommand};

/// tablesnap CLI
#[derive(Parser, Debug)]
#[command(name = "tablesnap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output destination URL (overrides OUTPUT_URL)
    /// Supports: /path, s3://bucket/path, gs://bucket/path, az://container/path
    #[arg(short, long, global = true)]
    pub output: Option<String>,

    /// Snapshot database file (overrides DATABASE_PATH)
    #[arg(short, long, global = true)]
    pub database: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export one table's date range, one object per date partition
    Export {
        /// Table identifier to export
        #[arg(long)]
        table: String,

        /// First date of the range, inclusive (YYYY-MM-DD)
        #[arg(long)]
        date_from: String,

        /// Last date of the range, inclusive (YYYY-MM-DD)
        #[arg(long)]
        date_to: String,
    },

    /// List registered tables and their granularity
    Tables,
}
