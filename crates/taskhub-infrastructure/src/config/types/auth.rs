//! Authentication configuration types

use crate::constants::*;
use serde::{Deserialize, Serialize};
use taskhub_domain::constants::{ACCESS_TOKEN_DEFAULT_TTL_SECS, REFRESH_TOKEN_DEFAULT_TTL_SECS};

/// Password hashing algorithms
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordAlgorithm {
    /// Argon2id (recommended)
    #[default]
    Argon2,
    /// bcrypt
    Bcrypt,
}

/// JWT configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct JwtConfig {
    /// HS256 signing secret
    ///
    /// **REQUIRED**. Configure via `TASKHUB__AUTH__JWT__SECRET` or
    /// `auth.jwt.secret` in the config file. Must be at least 32 characters.
    pub secret: String,

    /// Value of the `iss` claim, checked on every verification
    pub issuer: String,

    /// Access token lifetime in seconds
    pub expiration_secs: u64,

    /// Refresh token lifetime in seconds
    pub refresh_expiration_secs: u64,
}

/// Returns default JWT configuration with:
/// - Empty secret (MUST be configured)
/// - 60 minute access tokens and 14 day refresh tokens
impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            issuer: JWT_DEFAULT_ISSUER.to_string(),
            expiration_secs: ACCESS_TOKEN_DEFAULT_TTL_SECS,
            refresh_expiration_secs: REFRESH_TOKEN_DEFAULT_TTL_SECS,
        }
    }
}

// Secret stays out of logs
impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("issuer", &self.issuer)
            .field("expiration_secs", &self.expiration_secs)
            .field("refresh_expiration_secs", &self.refresh_expiration_secs)
            .finish()
    }
}

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Algorithm for new password hashes; both are accepted on verification
    pub password_algorithm: PasswordAlgorithm,

    /// bcrypt work factor
    pub bcrypt_cost: u32,

    /// Whether logout also deletes the user's refresh tokens
    pub logout_revokes_refresh_tokens: bool,

    /// Seconds between expired refresh token purges; 0 disables the task
    pub refresh_purge_interval_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            password_algorithm: PasswordAlgorithm::Argon2,
            bcrypt_cost: BCRYPT_DEFAULT_COST,
            logout_revokes_refresh_tokens: true,
            refresh_purge_interval_secs: REFRESH_PURGE_DEFAULT_INTERVAL_SECS,
        }
    }
}
