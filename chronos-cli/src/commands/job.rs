//! Job command handlers

use anyhow::{Context, Result};
use chronos_client::ChronosClient;
use chronos_core::domain::config::Config;
use colored::*;

/// Print the job arguments, pretty-printed when they are JSON
pub async fn print_args(client: &ChronosClient, config: &Config) -> Result<()> {
    let args = client
        .fetch_job_args(config)
        .await
        .with_context(|| format!("Failed to fetch args for instance {}", config.instance_id))?;

    println!(
        "{}",
        format!("Args for instance {}:", config.instance_id).bold()
    );
    println!("{}", format_args_text(&args));

    Ok(())
}

/// Publish a custom status
pub async fn update_status(client: &ChronosClient, config: &Config, text: &str) -> Result<()> {
    client
        .update_job_status(config, text)
        .await
        .with_context(|| format!("Failed to update status of instance {}", config.instance_id))?;

    println!(
        "{} Status of {} set to {}",
        "✓".green(),
        config.instance_id.cyan(),
        text.bold()
    );

    Ok(())
}

fn format_args_text(args: &str) -> String {
    if args.is_empty() {
        return "(empty)".dimmed().to_string();
    }

    serde_json::from_str::<serde_json::Value>(args)
        .ok()
        .and_then(|value| serde_json::to_string_pretty(&value).ok())
        .unwrap_or_else(|| args.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_json_args() {
        assert_eq!(
            format_args_text(r#"{"counterInit":5}"#),
            "{\n  \"counterInit\": 5\n}"
        );
    }

    #[test]
    fn test_format_plain_args() {
        assert_eq!(format_args_text("--verbose"), "--verbose");
    }
}
