//! Stand-ins for the crypto ports

#![allow(dead_code)]

use chrono::Utc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use taskhub_domain::error::{Error, Result};
use taskhub_domain::ports::{AccessTokenCodec, OpaqueTokenGenerator, PasswordHasher};
use taskhub_domain::value_objects::AccessClaims;

/// Stores passwords behind a marker prefix
pub struct PlainHasher;

impl PasswordHasher for PlainHasher {
    fn hash_password(&self, password: &str) -> Result<String> {
        Ok(format!("plain${password}"))
    }

    fn verify_password(&self, password: &str, hash: &str) -> Result<bool> {
        match hash.strip_prefix("plain$") {
            Some(stored) => Ok(stored == password),
            None => Err(Error::infrastructure("unreadable hash")),
        }
    }
}

/// [`PlainHasher`] that counts verifications
#[derive(Default)]
pub struct CountingHasher {
    verifications: AtomicUsize,
}

impl CountingHasher {
    pub fn verifications(&self) -> usize {
        self.verifications.load(Ordering::SeqCst)
    }
}

impl PasswordHasher for CountingHasher {
    fn hash_password(&self, password: &str) -> Result<String> {
        PlainHasher.hash_password(password)
    }

    fn verify_password(&self, password: &str, hash: &str) -> Result<bool> {
        self.verifications.fetch_add(1, Ordering::SeqCst);
        PlainHasher.verify_password(password, hash)
    }
}

const SIGNATURE: &str = "signed.";

/// Serializes claims as JSON behind a fixed "signature" prefix
pub struct JsonCodec;

impl AccessTokenCodec for JsonCodec {
    fn encode(&self, claims: &AccessClaims) -> Result<String> {
        Ok(format!("{SIGNATURE}{}", serde_json::to_string(claims)?))
    }

    fn decode(&self, token: &str) -> Result<AccessClaims> {
        let body = token.strip_prefix(SIGNATURE).ok_or(Error::TokenInvalid)?;
        let claims: AccessClaims = serde_json::from_str(body).map_err(|_| Error::TokenInvalid)?;
        if claims.exp <= Utc::now().timestamp() {
            return Err(Error::TokenExpired);
        }
        Ok(claims)
    }
}

/// Produces `refresh-1`, `refresh-2`, ...
#[derive(Default)]
pub struct SequentialTokens {
    next: AtomicU64,
}

impl OpaqueTokenGenerator for SequentialTokens {
    fn generate(&self) -> String {
        format!("refresh-{}", self.next.fetch_add(1, Ordering::SeqCst) + 1)
    }
}
