// MIT License - Copyright (c) 2026 Peter Wright
// Tapo bulb group control

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use bulbctl::credentials::{self, PasswordSource};
use bulbctl::{Bulb, BulbAction, GroupTable};

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

#[derive(Parser)]
#[command(name = "bulbctl")]
#[command(about = "Switch a named group of Tapo bulbs on or off")]
struct Cli {
    /// Tapo account user name (e-mail address)
    username: String,

    /// Name of the bulb group to control
    group: String,

    /// Action applied to every bulb in the group
    #[arg(value_enum)]
    action: BulbAction,

    /// TOML file overriding the built-in group table
    #[arg(long)]
    groups: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<()> {
    // RUST_LOG controls verbosity (e.g. RUST_LOG=debug or RUST_LOG=bulbctl=trace).
    // Default: info.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // systemd journal already adds timestamps, so omit them when running under systemd
    if std::env::var_os("JOURNAL_STREAM").is_some() {
        tracing_subscriber::fmt().without_time().with_env_filter(env_filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let cli = Cli::parse();

    // Group table: built-in, unless a file override was given
    let table = match &cli.groups {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read groups file {}", path.display()))?;
            GroupTable::from_toml_str(&text)
                .with_context(|| format!("Failed to parse groups file {}", path.display()))?
        }
        None => GroupTable::builtin(),
    };
    let hosts = table.hosts_for(&cli.group)?;

    let (creds, source) = credentials::obtain(&cli.username)?;
    match source {
        PasswordSource::Keyring => debug!("Password loaded from the secret store"),
        PasswordSource::Prompt => {
            info!("No stored password for {}, prompted interactively", cli.username)
        }
    }

    // Connect to each bulb in order and apply the action. The first
    // connection failure aborts the remaining hosts; bulbs already switched
    // stay switched.
    for host in hosts {
        info!("Connecting to bulb at {host}");
        let bulb = Bulb::connect(&creds, host)
            .await
            .with_context(|| format!("Failed to connect to bulb at {host}"))?;
        info!(
            "{} ({host}) is {}",
            bulb.nickname(),
            if bulb.is_on() { "on" } else { "off" }
        );
        bulb.apply(cli.action)
            .await
            .with_context(|| format!("Failed to apply '{}' to bulb at {host}", cli.action))?;
        debug!("Applied '{}' to {host}", cli.action);
    }

    // Refresh the stored password only after the whole run succeeded
    credentials::store(&creds).context("Failed to update the stored password")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_positional_args() {
        let cli =
            Cli::try_parse_from(["bulbctl", "user@example.com", "decke", "toggle"]).unwrap();
        assert_eq!(cli.username, "user@example.com");
        assert_eq!(cli.group, "decke");
        assert_eq!(cli.action, BulbAction::Toggle);
        assert!(cli.groups.is_none());
    }

    #[test]
    fn test_cli_rejects_unknown_action() {
        assert!(Cli::try_parse_from(["bulbctl", "user", "decke", "dim"]).is_err());
    }

    #[test]
    fn test_cli_requires_all_positional_args() {
        assert!(Cli::try_parse_from(["bulbctl", "user", "decke"]).is_err());
    }

    #[test]
    fn test_cli_groups_override() {
        let cli =
            Cli::try_parse_from(["bulbctl", "--groups", "my.toml", "user", "decke", "on"])
                .unwrap();
        assert_eq!(cli.groups.as_deref(), Some(std::path::Path::new("my.toml")));
        assert_eq!(cli.action, BulbAction::On);
    }
}
