//! Chronos CLI
//!
//! Command-line access to the job SDK operations, for checking a job's
//! credentials and endpoints by hand.

mod commands;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use chronos_client::ChronosClient;
use chronos_core::domain::config::Config;
use clap::Parser;
use commands::{Commands, handle_command};

#[derive(Parser)]
#[command(name = "chronos")]
#[command(about = "Chronos job SDK CLI", long_about = None)]
struct Cli {
    /// Path to the job's config.json
    #[arg(long, env = "CHRONOS_CONFIG", default_value = "config.json")]
    config: PathBuf,

    /// Request timeout in milliseconds
    #[arg(long, default_value_t = 2000)]
    timeout_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;

    let client = ChronosClient::new().with_timeout(Duration::from_millis(cli.timeout_ms));

    handle_command(cli.command, &client, &config).await
}
