//! Authorization Gate
//!
//! A plain function of the identity's role set and the permission table.
//! Callers must run [`AuthorizationGate::require`] before any side effect of
//! the gated action.

use std::sync::Arc;
use taskhub_domain::entities::PermissionTable;
use taskhub_domain::error::{Error, Result};
use taskhub_domain::value_objects::{AuthorizationDecision, Identity};
use tracing::warn;

/// Allow iff some role held by `identity` grants `permission`
pub fn authorize(
    table: &PermissionTable,
    identity: &Identity,
    permission: &str,
) -> AuthorizationDecision {
    table.grants(&identity.roles, permission).into()
}

/// Allow iff any of `permissions` is granted; stops at the first match
pub fn authorize_any(
    table: &PermissionTable,
    identity: &Identity,
    permissions: &[&str],
) -> AuthorizationDecision {
    permissions
        .iter()
        .any(|permission| authorize(table, identity, permission).is_allowed())
        .into()
}

/// Authorization gate over a shared permission table
#[derive(Debug, Clone)]
pub struct AuthorizationGate {
    table: Arc<PermissionTable>,
}

impl AuthorizationGate {
    /// Create a gate over `table`
    pub fn new(table: Arc<PermissionTable>) -> Self {
        Self { table }
    }

    /// Permission table in use
    pub fn table(&self) -> &PermissionTable {
        &self.table
    }

    /// Decide a single permission
    pub fn authorize(&self, identity: &Identity, permission: &str) -> AuthorizationDecision {
        authorize(&self.table, identity, permission)
    }

    /// Decide a set of alternative permissions
    pub fn authorize_any(&self, identity: &Identity, permissions: &[&str]) -> AuthorizationDecision {
        authorize_any(&self.table, identity, permissions)
    }

    /// Fail with `InsufficientPermission` unless `permission` is granted
    pub fn require(&self, identity: &Identity, permission: &str) -> Result<()> {
        self.require_any(identity, &[permission])
    }

    /// Fail with `InsufficientPermission` unless one of `permissions` is granted
    pub fn require_any(&self, identity: &Identity, permissions: &[&str]) -> Result<()> {
        if self.authorize_any(identity, permissions).is_allowed() {
            return Ok(());
        }
        let required = permissions.join("|");
        warn!(user_id = %identity.user_id, permission = %required, "Permission denied");
        Err(Error::insufficient_permission(required))
    }
}
