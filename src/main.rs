//! tablesnap CLI
//!
//! Command-line interface for running date-partitioned table exports

use clap::Parser;
use tablesnap::cli::{Cli, Runner};

#[tokio::main]
async fn main() {
    // Initialize logging; LOG_LEVEL takes precedence over the compiled default
    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_new(&level)
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let runner = Runner::new(cli);

    if let Err(e) = runner.run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
