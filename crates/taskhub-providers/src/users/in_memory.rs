//! In-memory user repository
//!
//! Users live in a single table guarded by an async `RwLock`, with a
//! lowercase email index maintained under the same lock so uniqueness checks
//! and writes cannot interleave. Data is lost on restart.

use async_trait::async_trait;
use std::collections::HashMap;
use taskhub_domain::entities::{NewUser, User, UserId};
use taskhub_domain::error::{Error, Result};
use taskhub_domain::repositories::UserRepository;
use tokio::sync::RwLock;

#[derive(Default)]
struct UserTable {
    by_id: HashMap<UserId, User>,
    email_index: HashMap<String, UserId>,
}

fn email_key(email: &str) -> String {
    email.trim().to_lowercase()
}

/// In-memory credential store
#[derive(Default)]
pub struct InMemoryUserRepository {
    table: RwLock<UserTable>,
}

impl InMemoryUserRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: NewUser) -> Result<User> {
        let key = email_key(&user.email);
        let mut table = self.table.write().await;

        if table.email_index.contains_key(&key) {
            return Err(Error::EmailTaken { email: user.email });
        }

        let user = user.into_user();
        table.email_index.insert(key, user.id);
        table.by_id.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>> {
        Ok(self.table.read().await.by_id.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let table = self.table.read().await;
        Ok(table
            .email_index
            .get(&email_key(email))
            .and_then(|id| table.by_id.get(id))
            .cloned())
    }

    async fn update(&self, user: User) -> Result<User> {
        let mut table = self.table.write().await;

        let old_key = match table.by_id.get(&user.id) {
            Some(existing) => email_key(&existing.email),
            None => return Err(Error::UserNotFound),
        };
        let new_key = email_key(&user.email);

        if new_key != old_key {
            if table.email_index.contains_key(&new_key) {
                return Err(Error::EmailTaken { email: user.email });
            }
            table.email_index.remove(&old_key);
            table.email_index.insert(new_key, user.id);
        }

        table.by_id.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: &UserId) -> Result<bool> {
        let mut table = self.table.write().await;
        match table.by_id.remove(id) {
            Some(user) => {
                table.email_index.remove(&email_key(&user.email));
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list(&self) -> Result<Vec<User>> {
        let mut users: Vec<User> = self.table.read().await.by_id.values().cloned().collect();
        users.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.email.cmp(&b.email)));
        Ok(users)
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.table.read().await.by_id.len())
    }
}
