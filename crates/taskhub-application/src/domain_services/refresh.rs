//! Refresh Coordinator
//!
//! Exchanges a refresh token for a new pair. The swap itself is a
//! compare-and-swap in the store, so when the same token is presented twice
//! concurrently exactly one caller gets a new pair.

use super::token_issuer::TokenIssuer;
use std::sync::Arc;
use taskhub_domain::error::{Error, Result};
use taskhub_domain::repositories::{RefreshTokenRepository, UserRepository};
use taskhub_domain::value_objects::TokenPair;
use tracing::debug;

/// Exchanges refresh tokens for new token pairs
pub struct RefreshCoordinator {
    issuer: Arc<TokenIssuer>,
    refresh_tokens: Arc<dyn RefreshTokenRepository>,
    users: Arc<dyn UserRepository>,
}

impl RefreshCoordinator {
    /// Create a refresh coordinator
    pub fn new(
        issuer: Arc<TokenIssuer>,
        refresh_tokens: Arc<dyn RefreshTokenRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            issuer,
            refresh_tokens,
            users,
        }
    }

    /// Exchange `presented` for a new pair
    ///
    /// # Errors
    ///
    /// - `RefreshTokenNotFound` when the token is unknown, already rotated,
    ///   or its owner no longer exists
    /// - `RefreshTokenExpired` when the token is past its expiry; the row is
    ///   deleted on the way out
    pub async fn refresh(&self, presented: &str) -> Result<TokenPair> {
        let row = self
            .refresh_tokens
            .find_by_token(presented)
            .await?
            .ok_or(Error::RefreshTokenNotFound)?;

        if row.is_expired() {
            self.refresh_tokens.delete_by_token(presented).await?;
            return Err(Error::RefreshTokenExpired);
        }

        let Some(user) = self.users.find_by_id(&row.user_id).await? else {
            self.refresh_tokens.delete_for_user(&row.user_id).await?;
            return Err(Error::RefreshTokenNotFound);
        };

        let pair = self
            .issuer
            .rotate(presented, &user)
            .await?
            .ok_or(Error::RefreshTokenNotFound)?;
        debug!(user_id = %user.id, "Rotated refresh token");
        Ok(pair)
    }
}
