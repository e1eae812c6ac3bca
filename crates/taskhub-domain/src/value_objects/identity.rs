//! Request identity

use crate::entities::UserId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Identity resolved for one request
///
/// Built from the credential store at validation time, so role changes take
/// effect on the next request even while an access token is still valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Authenticated user
    pub user_id: UserId,
    /// Role names held at resolution time
    pub roles: BTreeSet<String>,
}

impl Identity {
    /// Create an identity
    pub fn new(user_id: UserId, roles: BTreeSet<String>) -> Self {
        Self { user_id, roles }
    }

    /// Check whether the identity holds the named role
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }
}

/// Outcome of an authorization check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationDecision {
    /// The identity holds the required permission
    Allow,
    /// The identity lacks the required permission
    Deny,
}

impl AuthorizationDecision {
    /// Whether the action may proceed
    pub fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }
}

impl From<bool> for AuthorizationDecision {
    fn from(allowed: bool) -> Self {
        if allowed { Self::Allow } else { Self::Deny }
    }
}
