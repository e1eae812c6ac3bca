//! Configuration loader
//!
//! Loads configuration from compiled defaults, a TOML file and environment
//! variables, then validates the result before anything is started.

use crate::config::{AppConfig, AuthConfig, LoggingConfig, PasswordAlgorithm};
use crate::constants::*;
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::env;
use std::path::{Path, PathBuf};
use taskhub_domain::error::{Error, Result};

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (explicit path, else the first default location found)
    /// 3. Environment variables with prefix (e.g., `TASKHUB__AUTH__JWT__SECRET`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        // Double underscore separates nested keys: TASKHUB__AUTH__JWT__SECRET
        figment = figment.merge(
            Env::prefixed(&format!("{}{}", self.env_prefix, CONFIG_ENV_SEPARATOR))
                .split(CONFIG_ENV_SEPARATOR),
        );

        let app_config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find default configuration file paths to try
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(USER_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
///
/// Fails on the first section that is out of range.
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_server_config(config)?;
    validate_auth_config(&config.auth)?;
    validate_logging_config(&config.logging)?;
    validate_seed_config(config)?;
    Ok(())
}

fn validate_server_config(config: &AppConfig) -> Result<()> {
    if config.server.port == 0 {
        return Err(Error::configuration("Server port cannot be 0"));
    }
    if config.server.host.trim().is_empty() {
        return Err(Error::configuration("Server host cannot be empty"));
    }
    Ok(())
}

fn validate_auth_config(auth: &AuthConfig) -> Result<()> {
    if auth.jwt.secret.is_empty() {
        return Err(Error::configuration(
            "JWT secret is required (set TASKHUB__AUTH__JWT__SECRET)",
        ));
    }
    if auth.jwt.secret.len() < JWT_MIN_SECRET_LENGTH {
        return Err(Error::configuration(format!(
            "JWT secret should be at least {JWT_MIN_SECRET_LENGTH} characters long"
        )));
    }
    if auth.jwt.issuer.trim().is_empty() {
        return Err(Error::configuration("JWT issuer cannot be empty"));
    }
    if auth.jwt.expiration_secs == 0 {
        return Err(Error::configuration("JWT expiration cannot be 0"));
    }
    if auth.jwt.refresh_expiration_secs == 0 {
        return Err(Error::configuration("Refresh token expiration cannot be 0"));
    }
    if !(BCRYPT_MIN_COST..=BCRYPT_MAX_COST).contains(&auth.bcrypt_cost) {
        return Err(Error::configuration(format!(
            "bcrypt cost must be between {BCRYPT_MIN_COST} and {BCRYPT_MAX_COST}"
        )));
    }
    Ok(())
}

fn validate_logging_config(logging: &LoggingConfig) -> Result<()> {
    parse_log_level(&logging.level).map(|_| ())
}

fn validate_seed_config(config: &AppConfig) -> Result<()> {
    if config.seed.demo_users && config.seed.password.is_empty() {
        return Err(Error::configuration(
            "Seed password cannot be empty when demo users are enabled",
        ));
    }
    Ok(())
}

/// Configuration builder for programmatic configuration
pub struct ConfigBuilder {
    config: AppConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Set the JWT signing secret
    pub fn with_jwt_secret<S: Into<String>>(mut self, secret: S) -> Self {
        self.config.auth.jwt.secret = secret.into();
        self
    }

    /// Set access and refresh token lifetimes
    pub fn with_token_ttls(mut self, access_secs: u64, refresh_secs: u64) -> Self {
        self.config.auth.jwt.expiration_secs = access_secs;
        self.config.auth.jwt.refresh_expiration_secs = refresh_secs;
        self
    }

    /// Set the password hashing algorithm and bcrypt cost
    pub fn with_password_algorithm(mut self, algorithm: PasswordAlgorithm, bcrypt_cost: u32) -> Self {
        self.config.auth.password_algorithm = algorithm;
        self.config.auth.bcrypt_cost = bcrypt_cost;
        self
    }

    /// Set authentication configuration
    pub fn with_auth(mut self, auth: AuthConfig) -> Self {
        self.config.auth = auth;
        self
    }

    /// Set logging configuration
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Enable demo account seeding with `password`
    pub fn with_demo_users<S: Into<String>>(mut self, password: S) -> Self {
        self.config.seed.demo_users = true;
        self.config.seed.password = password.into();
        self
    }

    /// Build the configuration
    pub fn build(self) -> AppConfig {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
