//! Password hashing service
//!
//! New hashes use the configured algorithm. Verification detects the
//! algorithm from the hash prefix, so accounts hashed under the other
//! algorithm keep working after a configuration change.

use crate::config::{AuthConfig, PasswordAlgorithm};
use crate::constants::BCRYPT_DEFAULT_COST;
use crate::error_ext::ErrorContext;
use argon2::{
    Argon2, PasswordHasher as _, PasswordVerifier,
    password_hash::{PasswordHash, SaltString, rand_core::OsRng as ArgonOsRng},
};
use taskhub_domain::error::{Error, Result};
use taskhub_domain::ports::PasswordHasher;

const ARGON2_PREFIX: &str = "$argon2";
const BCRYPT_PREFIX: &str = "$2";

/// Password hashing service using Argon2 or bcrypt
#[derive(Clone)]
pub struct PasswordService {
    /// Algorithm for new hashes
    algorithm: PasswordAlgorithm,
    /// Argon2 configuration
    argon2: Argon2<'static>,
    /// bcrypt work factor
    bcrypt_cost: u32,
}

impl PasswordService {
    /// Create a new password service hashing with Argon2id
    pub fn new() -> Self {
        Self::with_algorithm(PasswordAlgorithm::Argon2, BCRYPT_DEFAULT_COST)
    }

    /// Create a password service for a specific algorithm
    pub fn with_algorithm(algorithm: PasswordAlgorithm, bcrypt_cost: u32) -> Self {
        Self {
            algorithm,
            argon2: Argon2::default(),
            bcrypt_cost,
        }
    }

    /// Create a password service from the auth configuration
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::with_algorithm(config.password_algorithm, config.bcrypt_cost)
    }

    /// Algorithm used for new hashes
    pub fn algorithm(&self) -> PasswordAlgorithm {
        self.algorithm
    }

    fn hash_argon2(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut ArgonOsRng);

        let password_hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| Error::infrastructure(format!("Password hashing failed: {}", e)))?;

        Ok(password_hash.to_string())
    }

    fn verify_argon2(&self, password: &str, hash: &str) -> Result<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| Error::infrastructure(format!("Invalid password hash format: {}", e)))?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

impl Default for PasswordService {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for PasswordService {
    fn hash_password(&self, password: &str) -> Result<String> {
        match self.algorithm {
            PasswordAlgorithm::Argon2 => self.hash_argon2(password),
            PasswordAlgorithm::Bcrypt => {
                bcrypt::hash(password, self.bcrypt_cost).context("Password hashing failed")
            }
        }
    }

    fn verify_password(&self, password: &str, hash: &str) -> Result<bool> {
        if hash.starts_with(ARGON2_PREFIX) {
            self.verify_argon2(password, hash)
        } else if hash.starts_with(BCRYPT_PREFIX) {
            bcrypt::verify(password, hash).context("Invalid bcrypt hash")
        } else {
            Err(Error::infrastructure("Unrecognized password hash format"))
        }
    }
}
