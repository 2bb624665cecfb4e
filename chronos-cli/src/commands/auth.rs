//! Login command handler

use anyhow::{Context, Result};
use chronos_client::ChronosClient;
use chronos_core::domain::config::Config;
use colored::*;

/// Authenticate and report the outcome; the token itself is never shown
pub async fn login(client: &ChronosClient, config: &Config) -> Result<()> {
    client
        .authenticate(config)
        .await
        .context("Login failed")?;

    println!(
        "{} Authenticated as {} against {}",
        "✓".green(),
        config.credentials.appkey.bold(),
        config.auth_manager_url.dimmed()
    );

    Ok(())
}
