//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::Settings;
use crate::database::DuckDbSource;
use crate::error::Result;
use crate::export::{run_logged, TableExporter, TABLES};
use crate::storage::StorageClient;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Export {
                table,
                date_from,
                date_to,
            } => self.export(table, date_from, date_to).await,
            Commands::Tables => self.tables(),
        }
    }

    /// Execute an export invocation end to end
    async fn export(&self, table: &str, date_from: &str, date_to: &str) -> Result<()> {
        let settings = self.settings()?;
        let uid = run_id();
        tracing::info!(
            sys_code = %settings.sys_code,
            uid = %uid,
            table,
            date_from,
            date_to,
            "export requested"
        );

        let source = DuckDbSource::open(&settings.database_path)?;
        let storage = StorageClient::parse(&settings.output_url)?;
        let exporter = TableExporter::new(&source, &storage);

        let summary = run_logged(
            "export_table_data",
            exporter.export(table, date_from, date_to),
        )
        .await?;

        println!("{}", serde_json::to_string(&summary)?);
        Ok(())
    }

    /// Print the table registry
    fn tables(&self) -> Result<()> {
        for table in TABLES {
            println!("{}\t{:?}", table.name, table.granularity);
        }
        Ok(())
    }

    /// Resolve settings, letting CLI flags override the environment
    fn settings(&self) -> Result<Settings> {
        Settings::from_lookup(|name| match name {
            "OUTPUT_URL" if self.cli.output.is_some() => self.cli.output.clone(),
            "DATABASE_PATH" if self.cli.database.is_some() => self.cli.database.clone(),
            _ => std::env::var(name).ok(),
        })
    }
}

/// Unique id for one invocation (timestamp-based, log correlation only)
fn run_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    format!("{timestamp:x}")
}
