//! Refresh Token Repository Interface

use crate::entities::{RefreshToken, UserId};
use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository: Refresh Token Store
///
/// Holds at most one live refresh token per user. Both write paths that
/// insert a token (`replace_for_user` and `rotate`) delete the user's prior
/// rows and insert the new one as a single atomic step.
#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    /// Delete every token of `token.user_id`, then insert `token`
    ///
    /// Returns the number of rows removed.
    async fn replace_for_user(&self, token: RefreshToken) -> Result<usize>;

    /// Exact-match lookup of a presented token value
    async fn find_by_token(&self, token: &str) -> Result<Option<RefreshToken>>;

    /// Compare-and-swap rotation
    ///
    /// If `presented` is still stored and belongs to `replacement.user_id`,
    /// deletes all of that user's rows and inserts `replacement`, returning
    /// `true`. Returns `false` without changes when `presented` is gone,
    /// so at most one of several concurrent callers succeeds.
    async fn rotate(&self, presented: &str, replacement: RefreshToken) -> Result<bool>;

    /// Delete one token by value, returning whether it existed
    async fn delete_by_token(&self, token: &str) -> Result<bool>;

    /// Delete every token of a user, returning the number removed
    async fn delete_for_user(&self, user_id: &UserId) -> Result<usize>;

    /// Number of stored tokens for a user
    async fn count_for_user(&self, user_id: &UserId) -> Result<usize>;

    /// Delete every token expired at `now`, returning the number removed
    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize>;
}
