//! Main application configuration

use super::{AuthConfig, LoggingConfig, SeedConfig, ServerConfig};
use serde::{Deserialize, Serialize};

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP listener
    #[serde(default)]
    pub server: ServerConfig,

    /// Tokens and password hashing
    #[serde(default)]
    pub auth: AuthConfig,

    /// Logging output
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Startup seeding
    #[serde(default)]
    pub seed: SeedConfig,
}
