//! Token payloads

use crate::constants::TOKEN_TYPE_BEARER;
use crate::entities::UserId;
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Claims signed into an access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (user ID)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration (Unix timestamp)
    pub exp: i64,
    /// Token id, used by the logout revocation list
    pub jti: String,
    /// Issuer
    pub iss: String,
}

impl AccessClaims {
    /// Create claims issued now
    pub fn new(user_id: UserId, issuer: impl Into<String>, ttl_secs: u64) -> Self {
        Self::issued_at(user_id, issuer, Utc::now(), ttl_secs)
    }

    /// Create claims issued at a given instant
    pub fn issued_at(
        user_id: UserId,
        issuer: impl Into<String>,
        issued_at: DateTime<Utc>,
        ttl_secs: u64,
    ) -> Self {
        let iat = issued_at.timestamp();
        Self {
            sub: user_id.to_string(),
            iat,
            exp: iat.saturating_add(i64::try_from(ttl_secs).unwrap_or(i64::MAX)),
            jti: Uuid::new_v4().to_string(),
            iss: issuer.into(),
        }
    }

    /// Parse the subject back into a user id
    pub fn user_id(&self) -> Result<UserId> {
        self.sub.parse().map_err(|_| Error::TokenInvalid)
    }

    /// Expiry as a timestamp
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Remaining validity in seconds (0 if expired)
    pub fn remaining_secs(&self) -> u64 {
        u64::try_from(self.exp.saturating_sub(Utc::now().timestamp())).unwrap_or(0)
    }
}

/// Access + refresh token handed to a client
///
/// Serializes as the `authorization` object of auth responses.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Signed access token
    #[serde(rename = "token")]
    pub access_token: String,
    /// Opaque refresh token
    pub refresh_token: String,
    /// Always `bearer`
    #[serde(rename = "type")]
    pub token_type: String,
    /// Access token lifetime in seconds
    pub expires_in: u64,
}

impl TokenPair {
    /// Create a bearer token pair
    pub fn bearer(access_token: String, refresh_token: String, expires_in: u64) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in,
        }
    }
}

impl fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenPair")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .finish()
    }
}
