//! Infrastructure layer constants
//!
//! Domain-specific constants are defined in `taskhub_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "taskhub.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "config";

/// Directory under the user config dir holding `taskhub.toml`
pub const USER_CONFIG_DIR: &str = "taskhub";

/// Environment variable prefix for configuration (`TASKHUB__AUTH__JWT__SECRET`)
pub const CONFIG_ENV_PREFIX: &str = "TASKHUB";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// AUTHENTICATION CONSTANTS
// ============================================================================

/// Minimum accepted JWT secret length
pub const JWT_MIN_SECRET_LENGTH: usize = 32;

/// Default `iss` claim
pub const JWT_DEFAULT_ISSUER: &str = "taskhub";

/// Default bcrypt cost for password hashing
pub const BCRYPT_DEFAULT_COST: u32 = 12;

/// Lowest bcrypt cost accepted by the bcrypt crate
pub const BCRYPT_MIN_COST: u32 = 4;

/// Highest bcrypt cost accepted by the bcrypt crate
pub const BCRYPT_MAX_COST: u32 = 31;

/// Default interval between expired refresh token purges (1 hour)
pub const REFRESH_PURGE_DEFAULT_INTERVAL_SECS: u64 = 3600;

/// Password given to the demo accounts unless configured otherwise
pub const SEED_DEFAULT_PASSWORD: &str = "password123";

// ============================================================================
// HTTP SERVER CONSTANTS
// ============================================================================

/// Default HTTP server port
pub const DEFAULT_HTTP_PORT: u16 = 8000;

/// Default server host
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "TASKHUB_LOG";
