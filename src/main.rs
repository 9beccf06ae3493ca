//! ARL_TE configuration check
//!
//! Loads the configuration the same way the trading engine does at startup
//! and reports it, so a deployment can be verified before going live.
//!
//! # Usage
//! ```sh
//! cargo run -- --json
//! cargo run -- --env-file live.env --strict
//! ```

use anyhow::{Context, Result, bail};
use arlte::config::ArlteConfig;
use clap::Parser;
use std::path::PathBuf;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about = "Load and check ARL_TE configuration", long_about = None)]
struct Cli {
    /// Load this file instead of `.env`
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Print the effective configuration as JSON (credentials omitted)
    #[arg(long)]
    json: bool,

    /// Fail if any configuration warning is present
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load environment variables
    match &cli.env_file {
        Some(path) => {
            dotenvy::from_path(path)
                .with_context(|| format!("Failed to load env file {}", path.display()))?;
        }
        None => {
            dotenvy::dotenv().ok();
        }
    }

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("ARL_TE config check {}", env!("CARGO_PKG_VERSION"));

    let config = ArlteConfig::from_env()?;

    for exchange in config.exchanges.values() {
        info!(
            "Exchange {}: sandbox={}, credentials={}, rate_limit={}, timeout={}ms",
            exchange.name,
            exchange.sandbox,
            exchange.has_credentials(),
            exchange.rate_limit,
            exchange.timeout_ms
        );
    }

    if cli.json {
        println!("{}", render_json(&config)?);
    }

    check_warnings(&config.validate(), cli.strict)
}

/// Effective configuration as pretty JSON. Credentials are never serialized.
fn render_json(config: &ArlteConfig) -> Result<String> {
    serde_json::to_string_pretty(config).context("Failed to serialize configuration")
}

/// Soft warnings only fail the run in strict mode.
fn check_warnings(warnings: &[String], strict: bool) -> Result<()> {
    if warnings.is_empty() {
        info!("Configuration OK");
    } else if strict {
        bail!("{} configuration warning(s) in strict mode", warnings.len());
    } else {
        info!("Configuration loaded with {} warning(s)", warnings.len());
    }

    Ok(())
}
