//! User Repository Interface

use crate::entities::{NewUser, User, UserId};
use crate::error::Result;
use async_trait::async_trait;

/// Repository: Credential Store
///
/// Email uniqueness is enforced by the store itself (case-insensitive), so
/// a check-then-insert race between two registrations cannot produce
/// duplicates.
///
/// # Example
///
/// ```ignore
/// use taskhub_domain::repositories::UserRepository;
///
/// let user = repo.create(NewUser::with_role("Ann", "ann@x.com", hash, "Team Member")).await?;
/// let same = repo.find_by_email("ANN@x.com").await?;
/// assert_eq!(same.map(|u| u.id), Some(user.id));
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user; fails with `EmailTaken` if the email is in use
    async fn create(&self, user: NewUser) -> Result<User>;

    /// Find a user by id
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>>;

    /// Find a user by email (case-insensitive)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Replace a stored user; fails with `UserNotFound` or `EmailTaken`
    async fn update(&self, user: User) -> Result<User>;

    /// Delete a user, returning whether it existed
    async fn delete(&self, id: &UserId) -> Result<bool>;

    /// All users ordered by creation time
    async fn list(&self) -> Result<Vec<User>>;

    /// Number of stored users
    async fn count(&self) -> Result<usize>;
}
