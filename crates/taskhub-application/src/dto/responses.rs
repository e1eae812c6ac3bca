//! Response payloads

use serde::Serialize;
use std::collections::BTreeSet;
use taskhub_domain::entities::{PermissionTable, User};
use taskhub_domain::value_objects::TokenPair;

/// User plus a freshly issued token pair
#[derive(Debug, Clone, Serialize)]
pub struct AuthOutcome {
    /// Authenticated user
    pub user: User,
    /// Token pair
    pub authorization: TokenPair,
}

/// Current user with roles and effective permissions
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    /// User record (roles included)
    #[serde(flatten)]
    pub user: User,
    /// Union of the permissions granted by the user's roles
    pub permissions: BTreeSet<String>,
}

impl UserProfile {
    /// Build a profile, resolving permissions against `table`
    pub fn resolve(user: User, table: &PermissionTable) -> Self {
        let permissions = table
            .effective_permissions(&user.roles)
            .into_iter()
            .map(str::to_string)
            .collect();
        Self { user, permissions }
    }
}
