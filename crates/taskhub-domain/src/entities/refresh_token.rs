//! Refresh token entity

use super::user::UserId;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Server-stored opaque credential used solely to mint a new token pair
///
/// At most one live refresh token exists per user; the store enforces this
/// when a new one is saved.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    /// Row id
    pub id: Uuid,
    /// Owning user
    pub user_id: UserId,
    /// Opaque random value presented by the client
    pub token: String,
    /// Absolute expiry
    pub expires_at: DateTime<Utc>,
    /// When the row was created
    pub created_at: DateTime<Utc>,
}

impl RefreshToken {
    /// Create a token row expiring `ttl` from now
    pub fn new(user_id: UserId, token: impl Into<String>, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            token: token.into(),
            expires_at: now + ttl,
            created_at: now,
        }
    }

    /// Whether the token is expired at the given instant
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Whether the token is expired now
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

// Token value stays out of logs
impl fmt::Debug for RefreshToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RefreshToken")
            .field("id", &self.id)
            .field("user_id", &self.user_id)
            .field("token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .field("created_at", &self.created_at)
            .finish()
    }
}
