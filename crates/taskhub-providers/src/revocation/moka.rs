//! Moka revocation list
//!
//! Revoked access token ids are held in a Moka cache with per-entry expiry
//! set to the token's own `exp`, so the list never outgrows the set of
//! tokens that could still verify. There is no capacity bound: evicting a
//! live entry would make a logged-out token valid again.
//!
//! ## Example
//!
//! ```ignore
//! use taskhub_providers::revocation::MokaRevocationList;
//!
//! let list = MokaRevocationList::new();
//! list.revoke(&claims.jti, claims.expires_at()).await?;
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use moka::Expiry;
use moka::future::Cache;
use std::time::{Duration, Instant};
use taskhub_domain::error::Result;
use taskhub_domain::ports::TokenRevocationList;

struct UntilTokenExpiry;

impl Expiry<String, DateTime<Utc>> for UntilTokenExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        expires_at: &DateTime<Utc>,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some((*expires_at - Utc::now()).to_std().unwrap_or(Duration::ZERO))
    }
}

/// Moka-based revocation list
#[derive(Clone)]
pub struct MokaRevocationList {
    cache: Cache<String, DateTime<Utc>>,
}

impl Default for MokaRevocationList {
    fn default() -> Self {
        Self::new()
    }
}

impl MokaRevocationList {
    /// Create an empty revocation list
    pub fn new() -> Self {
        let cache = Cache::builder().expire_after(UntilTokenExpiry).build();
        Self { cache }
    }
}

#[async_trait]
impl TokenRevocationList for MokaRevocationList {
    async fn revoke(&self, jti: &str, expires_at: DateTime<Utc>) -> Result<()> {
        if expires_at > Utc::now() {
            self.cache.insert(jti.to_string(), expires_at).await;
        }
        Ok(())
    }

    async fn is_revoked(&self, jti: &str) -> Result<bool> {
        Ok(self
            .cache
            .get(jti)
            .await
            .is_some_and(|expires_at| expires_at > Utc::now()))
    }
}
