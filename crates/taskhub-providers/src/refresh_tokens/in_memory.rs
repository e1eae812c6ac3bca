//! In-memory refresh token repository
//!
//! One async mutex guards both the token map and the per-user index, so each
//! trait method is a single critical section. That is what makes
//! delete-then-insert and compare-and-swap rotation atomic.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};
use taskhub_domain::entities::{RefreshToken, UserId};
use taskhub_domain::error::Result;
use taskhub_domain::repositories::RefreshTokenRepository;
use tokio::sync::Mutex;
use tracing::debug;

#[derive(Default)]
struct TokenTable {
    by_token: HashMap<String, RefreshToken>,
    by_user: HashMap<UserId, HashSet<String>>,
}

impl TokenTable {
    fn remove_user(&mut self, user_id: &UserId) -> usize {
        let Some(tokens) = self.by_user.remove(user_id) else {
            return 0;
        };
        for token in &tokens {
            self.by_token.remove(token);
        }
        tokens.len()
    }

    fn remove_token(&mut self, token: &str) -> Option<RefreshToken> {
        let row = self.by_token.remove(token)?;
        if let Some(tokens) = self.by_user.get_mut(&row.user_id) {
            tokens.remove(token);
            if tokens.is_empty() {
                self.by_user.remove(&row.user_id);
            }
        }
        Some(row)
    }

    fn insert(&mut self, row: RefreshToken) {
        self.by_user
            .entry(row.user_id)
            .or_default()
            .insert(row.token.clone());
        self.by_token.insert(row.token.clone(), row);
    }
}

/// In-memory refresh token store
#[derive(Default)]
pub struct InMemoryRefreshTokenRepository {
    table: Mutex<TokenTable>,
}

impl InMemoryRefreshTokenRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored rows
    pub async fn len(&self) -> usize {
        self.table.lock().await.by_token.len()
    }

    /// Whether no rows are stored
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl RefreshTokenRepository for InMemoryRefreshTokenRepository {
    async fn replace_for_user(&self, token: RefreshToken) -> Result<usize> {
        let mut table = self.table.lock().await;
        let removed = table.remove_user(&token.user_id);
        table.insert(token);
        Ok(removed)
    }

    async fn find_by_token(&self, token: &str) -> Result<Option<RefreshToken>> {
        Ok(self.table.lock().await.by_token.get(token).cloned())
    }

    async fn rotate(&self, presented: &str, replacement: RefreshToken) -> Result<bool> {
        let mut table = self.table.lock().await;

        let owned_by_user = table
            .by_token
            .get(presented)
            .is_some_and(|row| row.user_id == replacement.user_id);
        if !owned_by_user {
            debug!(user_id = %replacement.user_id, "Rotation lost: presented token no longer stored");
            return Ok(false);
        }

        table.remove_user(&replacement.user_id);
        table.insert(replacement);
        Ok(true)
    }

    async fn delete_by_token(&self, token: &str) -> Result<bool> {
        Ok(self.table.lock().await.remove_token(token).is_some())
    }

    async fn delete_for_user(&self, user_id: &UserId) -> Result<usize> {
        Ok(self.table.lock().await.remove_user(user_id))
    }

    async fn count_for_user(&self, user_id: &UserId) -> Result<usize> {
        Ok(self
            .table
            .lock()
            .await
            .by_user
            .get(user_id)
            .map_or(0, HashSet::len))
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> Result<usize> {
        let mut table = self.table.lock().await;
        let expired: Vec<String> = table
            .by_token
            .values()
            .filter(|row| row.is_expired_at(now))
            .map(|row| row.token.clone())
            .collect();
        for token in &expired {
            table.remove_token(token);
        }
        Ok(expired.len())
    }
}
