//! Server initialization
//!
//! Loads configuration, installs logging, builds the application context,
//! starts the refresh token purge task and launches Rocket.

use crate::catchers;
use crate::routes::{api_routes, auth_routes};
use rocket::config::{Config as RocketConfig, LogLevel};
use rocket::{Build, Rocket};
use std::net::IpAddr;
use std::path::Path;
use taskhub_domain::error::{Error, Result};
use taskhub_infrastructure::config::{AppConfig, ConfigLoader, ServerConfig};
use taskhub_infrastructure::logging::init_logging;
use taskhub_infrastructure::maintenance::spawn_refresh_purge;
use taskhub_infrastructure::{AppContext, init_app};
use tracing::info;

/// Rocket configuration for the configured bind address
pub fn rocket_config(server: &ServerConfig) -> Result<RocketConfig> {
    let address: IpAddr = server.host.parse().map_err(|e| {
        Error::configuration(format!("Invalid server host '{}': {}", server.host, e))
    })?;
    Ok(RocketConfig {
        address,
        port: server.port,
        log_level: LogLevel::Critical,
        ..RocketConfig::default()
    })
}

/// Build the Rocket instance serving `context`
pub fn build_rocket(context: AppContext) -> Result<Rocket<Build>> {
    let config = rocket_config(&context.config.server)?;
    Ok(rocket::custom(config)
        .manage(context)
        .mount("/auth", auth_routes())
        .mount("/", api_routes())
        .register("/", catchers::all()))
}

/// Load configuration from an optional path
fn load_config(config_path: Option<&Path>) -> Result<AppConfig> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    loader.load()
}

/// Run the TaskHub server until shutdown
pub async fn run(config_path: Option<&Path>) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    init_logging(&config.logging)?;

    info!(
        host = %config.server.host,
        port = config.server.port,
        "Starting TaskHub server"
    );

    let purge_interval = config.auth.refresh_purge_interval_secs;
    let context = init_app(config).await?;
    let purge = spawn_refresh_purge(context.refresh_tokens(), purge_interval);

    let launched = build_rocket(context)?.launch().await;

    if let Some(handle) = purge {
        handle.abort();
    }
    launched.map_err(|e| format!("Rocket launch failed: {e}"))?;

    info!("TaskHub server stopped");
    Ok(())
}
