//! Secure token generation

use rand::RngCore;
use taskhub_domain::constants::REFRESH_TOKEN_BYTES;
use taskhub_domain::ports::OpaqueTokenGenerator;

/// Secure token generation
///
/// Draws from the thread-local CSPRNG and hex-encodes the bytes.
#[derive(Debug, Clone)]
pub struct TokenGenerator {
    length: usize,
}

impl TokenGenerator {
    /// Generator producing refresh-token-sized values (64 bytes, 128 hex chars)
    pub fn new() -> Self {
        Self::with_length(REFRESH_TOKEN_BYTES)
    }

    /// Generator producing `length` random bytes per token
    pub fn with_length(length: usize) -> Self {
        Self { length }
    }

    /// Generate a cryptographically secure random token
    pub fn generate_secure_token(length: usize) -> String {
        let mut bytes = vec![0u8; length];
        rand::rng().fill_bytes(&mut bytes);
        hex::encode(bytes)
    }
}

impl Default for TokenGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl OpaqueTokenGenerator for TokenGenerator {
    fn generate(&self) -> String {
        Self::generate_secure_token(self.length)
    }
}
