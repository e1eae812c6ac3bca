//! User Administration Use Case
//!
//! Every operation checks `manage users` before it reads input or touches
//! storage.

use super::auth_service::EMAIL_TAKEN_MESSAGE;
use super::hashing;
use crate::domain_services::{AuthorizationGate, TokenIssuer};
use crate::dto::{CreateUserRequest, UpdateUserRequest, validate_request};
use std::collections::BTreeSet;
use std::sync::Arc;
use taskhub_domain::constants::PERMISSION_MANAGE_USERS;
use taskhub_domain::entities::{NewUser, User, UserId};
use taskhub_domain::error::{Error, Result};
use taskhub_domain::ports::PasswordHasher;
use taskhub_domain::repositories::UserRepository;
use taskhub_domain::value_objects::Identity;
use tracing::info;

const INVALID_ROLE_MESSAGE: &str = "The selected role is invalid.";

/// User management gated by `manage users`
pub struct UserAdminService {
    gate: AuthorizationGate,
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    issuer: Arc<TokenIssuer>,
}

impl UserAdminService {
    /// Create the user administration service
    pub fn new(
        gate: AuthorizationGate,
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        issuer: Arc<TokenIssuer>,
    ) -> Self {
        Self {
            gate,
            users,
            hasher,
            issuer,
        }
    }

    /// All users with their roles
    pub async fn list(&self, identity: &Identity) -> Result<Vec<User>> {
        self.gate.require(identity, PERMISSION_MANAGE_USERS)?;
        self.users.list().await
    }

    /// Create an account holding exactly the requested role
    pub async fn create(&self, identity: &Identity, request: CreateUserRequest) -> Result<User> {
        self.gate.require(identity, PERMISSION_MANAGE_USERS)?;
        validate_request(&request)?;
        self.check_role(&request.role)?;

        if self.users.find_by_email(&request.email).await?.is_some() {
            return Err(Error::validation_field("email", EMAIL_TAKEN_MESSAGE));
        }

        let password_hash = hashing::hash(&self.hasher, request.password).await?;
        let user = self
            .users
            .create(NewUser::with_role(
                request.name.trim(),
                request.email.trim(),
                password_hash,
                request.role.trim(),
            ))
            .await
            .map_err(email_conflict)?;

        info!(admin_id = %identity.user_id, user_id = %user.id, "User created");
        Ok(user)
    }

    /// Apply the present fields of `request` to an account
    ///
    /// An empty password counts as absent and keeps the current one.
    pub async fn update(
        &self,
        identity: &Identity,
        id: &UserId,
        mut request: UpdateUserRequest,
    ) -> Result<User> {
        self.gate.require(identity, PERMISSION_MANAGE_USERS)?;
        request.password = request.password.filter(|password| !password.is_empty());
        validate_request(&request)?;
        if let Some(role) = &request.role {
            self.check_role(role)?;
        }

        let mut user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or(Error::UserNotFound)?;

        if let Some(email) = &request.email {
            let taken_by_other = self
                .users
                .find_by_email(email)
                .await?
                .is_some_and(|existing| existing.id != user.id);
            if taken_by_other {
                return Err(Error::validation_field("email", EMAIL_TAKEN_MESSAGE));
            }
            user.email = email.trim().to_string();
        }
        if let Some(name) = request.name {
            user.name = name.trim().to_string();
        }
        if let Some(password) = request.password {
            user.password_hash = hashing::hash(&self.hasher, password).await?;
        }
        if let Some(photo) = request.profile_photo {
            user.profile_photo = Some(photo);
        }
        if let Some(role) = request.role {
            user.roles = BTreeSet::from([role.trim().to_string()]);
        }
        user.touch();

        let user = self.users.update(user).await.map_err(email_conflict)?;
        info!(admin_id = %identity.user_id, user_id = %user.id, "User updated");
        Ok(user)
    }

    /// Delete an account and its refresh tokens
    pub async fn delete(&self, identity: &Identity, id: &UserId) -> Result<()> {
        self.gate.require(identity, PERMISSION_MANAGE_USERS)?;

        if !self.users.delete(id).await? {
            return Err(Error::UserNotFound);
        }
        self.issuer.revoke_refresh_tokens(id).await?;

        info!(admin_id = %identity.user_id, user_id = %id, "User deleted");
        Ok(())
    }

    fn check_role(&self, role: &str) -> Result<()> {
        if self.gate.table().contains_role(role.trim()) {
            Ok(())
        } else {
            Err(Error::validation_field("role", INVALID_ROLE_MESSAGE))
        }
    }
}

fn email_conflict(error: Error) -> Error {
    match error {
        Error::EmailTaken { .. } => Error::validation_field("email", EMAIL_TAKEN_MESSAGE),
        other => other,
    }
}
