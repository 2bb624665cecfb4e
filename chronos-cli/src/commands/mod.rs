//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod auth;
mod job;

use anyhow::Result;
use chronos_client::ChronosClient;
use chronos_core::domain::config::Config;
use clap::Subcommand;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Check that the credentials are accepted by the auth service
    Login,
    /// Print the arguments the job instance was launched with
    Args,
    /// Publish a custom status for the job instance
    Status {
        /// Status text, sent verbatim
        text: String,
    },
}

/// Handle a CLI command
pub async fn handle_command(command: Commands, client: &ChronosClient, config: &Config) -> Result<()> {
    match command {
        Commands::Login => auth::login(client, config).await,
        Commands::Args => job::print_args(client, config).await,
        Commands::Status { text } => job::update_status(client, config, &text).await,
    }
}
