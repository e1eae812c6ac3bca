//! Cryptographic services module
//!
//! This module provides the crypto ports used by the auth core:
//! - Password hashing with Argon2id or bcrypt
//! - HS256 access token signing and verification
//! - Opaque refresh token generation

mod jwt;
mod password;
mod token;

pub use jwt::JwtCodec;
pub use password::PasswordService;
pub use token::TokenGenerator;
