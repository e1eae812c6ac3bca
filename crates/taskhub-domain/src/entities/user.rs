//! User account entity

use crate::value_objects::Identity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Stable user identifier, carried as the `sub` claim of access tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Generate a fresh random identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// User account
///
/// The password hash never leaves the process: it is skipped on
/// serialization so a `User` can be rendered straight into a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID
    pub id: UserId,
    /// Display name
    pub name: String,
    /// Login email, unique across users
    pub email: String,
    /// Password hash (Argon2id or bcrypt)
    #[serde(skip)]
    pub password_hash: String,
    /// Names of the roles held by this user
    pub roles: BTreeSet<String>,
    /// Optional profile photo reference
    pub profile_photo: Option<String>,
    /// When the user was created
    pub created_at: DateTime<Utc>,
    /// When the user was last modified
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Identity value threaded through authorization checks
    pub fn identity(&self) -> Identity {
        Identity::new(self.id, self.roles.clone())
    }

    /// Check whether the user holds the named role
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    /// Update the modification timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Data required to create a user; the store assigns id and timestamps
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Display name
    pub name: String,
    /// Login email
    pub email: String,
    /// Already-hashed password
    pub password_hash: String,
    /// Initial role names
    pub roles: BTreeSet<String>,
    /// Optional profile photo reference
    pub profile_photo: Option<String>,
}

impl NewUser {
    /// Create a new user record holding a single role
    pub fn with_role(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
            roles: BTreeSet::from([role.into()]),
            profile_photo: None,
        }
    }

    /// Materialize the record with a fresh id and timestamps
    pub fn into_user(self) -> User {
        let now = Utc::now();
        User {
            id: UserId::new(),
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
            roles: self.roles,
            profile_photo: self.profile_photo,
            created_at: now,
            updated_at: now,
        }
    }
}
