//! Provider ports

/// Crypto provider interfaces
pub mod crypto;

pub use crypto::{AccessTokenCodec, OpaqueTokenGenerator, PasswordHasher};
