//! huddled - multi-client channel chat daemon.
//!
//! Clients speak a length-prefixed text protocol over TCP: `/connect`,
//! `/nickname`, `/join`, then chat. Channel owners moderate with `/kick`,
//! `/mute`, `/unmute` and `/whois`.

mod config;
mod error;
mod handlers;
mod network;
mod state;
mod telemetry;

use crate::config::{Config, validate};
use crate::handlers::Registry;
use crate::network::Gateway;
use crate::state::Hub;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Config file picked up from the working directory when no path is given.
const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let config = load_config()?;

    if let Err(errors) = validate(&config) {
        for e in &errors {
            error!(error = %e, "Invalid configuration");
        }
        anyhow::bail!("configuration has {} error(s)", errors.len());
    }

    info!(
        server = %config.server.name,
        address = %config.listen.address,
        max_frame_len = config.limits.max_frame_len,
        unique_nicknames = config.policy.unique_nicknames,
        "Starting huddled"
    );

    let hub = Arc::new(Hub::new(config.policy.clone()));
    let registry = Arc::new(Registry::new());
    let gateway = Gateway::bind(
        config.listen.address,
        Arc::clone(&hub),
        Arc::clone(&registry),
        config.limits.clone(),
    )
    .await?;

    tokio::select! {
        result = gateway.run() => {
            if let Err(e) = result {
                error!(error = %e, "Gateway stopped");
                return Err(e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupt received, shutting down");
        }
    }

    info!(
        clients = hub.client_count(),
        channels = hub.channel_count(),
        "Shutdown complete"
    );
    for (command, count) in registry.command_stats() {
        if count > 0 {
            info!(command, count, "Command usage");
        }
    }

    Ok(())
}

/// Load the file named on the command line, else `config.toml` if present,
/// else built-in defaults.
fn load_config() -> anyhow::Result<Config> {
    let path = match std::env::args().nth(1) {
        Some(path) => path,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => DEFAULT_CONFIG_PATH.to_string(),
        None => {
            info!("No config file, using defaults");
            return Ok(Config::default());
        }
    };

    let config = Config::load(&path).map_err(|e| {
        error!(path = %path, error = %e, "Failed to load config");
        e
    })?;
    info!(path = %path, "Configuration loaded");
    Ok(config)
}
