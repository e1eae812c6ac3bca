//! Access Token Revocation Port
//!
//! Access tokens are stateless; logout invalidates one by remembering its
//! `jti` until the token would have expired anyway.

use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Revocation list keyed by access token id
#[async_trait]
pub trait TokenRevocationList: Send + Sync {
    /// Revoke a token id until `expires_at`
    async fn revoke(&self, jti: &str, expires_at: DateTime<Utc>) -> Result<()>;

    /// Whether a token id is currently revoked
    async fn is_revoked(&self, jti: &str) -> Result<bool>;
}
