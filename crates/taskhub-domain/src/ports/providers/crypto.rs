//! Crypto Provider Ports
//!
//! Hashing, signing and random generation are kept behind traits so the
//! application layer stays free of crypto crates.

use crate::error::Result;
use crate::value_objects::AccessClaims;

/// Password hashing
pub trait PasswordHasher: Send + Sync {
    /// Hash a clear-text password
    fn hash_password(&self, password: &str) -> Result<String>;

    /// Verify a clear-text password against a stored hash
    ///
    /// Returns `Ok(false)` on mismatch; errors are reserved for unreadable hashes.
    fn verify_password(&self, password: &str, hash: &str) -> Result<bool>;
}

/// Signed access token encoding
pub trait AccessTokenCodec: Send + Sync {
    /// Sign claims into a compact token
    fn encode(&self, claims: &AccessClaims) -> Result<String>;

    /// Verify signature and expiry, returning the claims
    ///
    /// Fails with `TokenExpired` for a well-signed token past `exp`, and
    /// with `TokenInvalid` for anything that does not verify.
    fn decode(&self, token: &str) -> Result<AccessClaims>;
}

/// High-entropy opaque token source
pub trait OpaqueTokenGenerator: Send + Sync {
    /// Generate a new random token value
    fn generate(&self) -> String;
}
