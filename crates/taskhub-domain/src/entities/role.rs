//! Roles and the permission table
//!
//! The table is seeded once and read on every authorization check. A user's
//! effective permissions are the union of the permission sets of every role
//! they hold; role names unknown to the table grant nothing.

use crate::constants::*;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Named permission bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Role name
    pub name: String,
    /// Permissions granted by the role
    pub permissions: BTreeSet<String>,
}

impl Role {
    /// Create a role from a name and its permission strings
    pub fn new<I, S>(name: impl Into<String>, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            permissions: permissions.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether this role grants the permission
    pub fn grants(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }
}

/// Static role → permission mapping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionTable {
    roles: BTreeMap<String, Role>,
}

impl PermissionTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// The table seeded for Admin, Project Manager and Team Member
    pub fn seeded() -> Self {
        Self::new()
            .with_role(Role::new(
                ROLE_ADMIN,
                [
                    PERMISSION_MANAGE_USERS,
                    PERMISSION_CREATE_PROJECT,
                    PERMISSION_UPDATE_PROJECT,
                    PERMISSION_DELETE_PROJECT,
                    PERMISSION_COMMENT_TASKS,
                    PERMISSION_VIEW_DASHBOARD,
                ],
            ))
            .with_role(Role::new(
                ROLE_PROJECT_MANAGER,
                [
                    PERMISSION_CREATE_PROJECT,
                    PERMISSION_UPDATE_PROJECT,
                    PERMISSION_ASSIGN_TASKS,
                    PERMISSION_UPDATE_TASKS,
                    PERMISSION_COMMENT_TASKS,
                    PERMISSION_VIEW_DASHBOARD,
                ],
            ))
            .with_role(Role::new(
                ROLE_TEAM_MEMBER,
                [
                    PERMISSION_UPDATE_TASKS,
                    PERMISSION_COMMENT_TASKS,
                    PERMISSION_VIEW_DASHBOARD,
                ],
            ))
    }

    /// Add (or replace) a role
    pub fn with_role(mut self, role: Role) -> Self {
        self.roles.insert(role.name.clone(), role);
        self
    }

    /// Look up a role by name
    pub fn role(&self, name: &str) -> Option<&Role> {
        self.roles.get(name)
    }

    /// Whether the named role exists
    pub fn contains_role(&self, name: &str) -> bool {
        self.roles.contains_key(name)
    }

    /// Iterate over all roles in name order
    pub fn roles(&self) -> impl Iterator<Item = &Role> {
        self.roles.values()
    }

    /// Every permission granted by at least one role
    pub fn permissions(&self) -> BTreeSet<&str> {
        self.roles
            .values()
            .flat_map(|role| role.permissions.iter().map(String::as_str))
            .collect()
    }

    /// Union of the permissions of the given roles
    pub fn effective_permissions<'a, I>(&'a self, roles: I) -> BTreeSet<&'a str>
    where
        I: IntoIterator<Item = &'a String>,
    {
        roles
            .into_iter()
            .filter_map(|name| self.role(name))
            .flat_map(|role| role.permissions.iter().map(String::as_str))
            .collect()
    }

    /// Whether any of the given roles grants the permission
    pub fn grants<'a, I>(&self, roles: I, permission: &str) -> bool
    where
        I: IntoIterator<Item = &'a String>,
    {
        roles
            .into_iter()
            .filter_map(|name| self.role(name))
            .any(|role| role.grants(permission))
    }
}
