//! Authorization gate tests over the seeded permission table

use std::collections::BTreeSet;
use std::sync::Arc;
use taskhub_application::{AuthorizationGate, authorize, authorize_any};
use taskhub_domain::constants::*;
use taskhub_domain::error::Error;
use taskhub_domain::value_objects::{AuthorizationDecision, Identity};
use taskhub_domain::{PermissionTable, UserId};

fn identity(roles: &[&str]) -> Identity {
    Identity::new(
        UserId::new(),
        roles.iter().map(|r| r.to_string()).collect::<BTreeSet<_>>(),
    )
}

/// Expected grants, row by row from the seeded mapping
fn expected(role: &str, permission: &str) -> bool {
    let granted: &[&str] = match role {
        ROLE_ADMIN => &[
            PERMISSION_MANAGE_USERS,
            PERMISSION_CREATE_PROJECT,
            PERMISSION_UPDATE_PROJECT,
            PERMISSION_DELETE_PROJECT,
            PERMISSION_COMMENT_TASKS,
            PERMISSION_VIEW_DASHBOARD,
        ],
        ROLE_PROJECT_MANAGER => &[
            PERMISSION_CREATE_PROJECT,
            PERMISSION_UPDATE_PROJECT,
            PERMISSION_ASSIGN_TASKS,
            PERMISSION_UPDATE_TASKS,
            PERMISSION_COMMENT_TASKS,
            PERMISSION_VIEW_DASHBOARD,
        ],
        ROLE_TEAM_MEMBER => &[
            PERMISSION_UPDATE_TASKS,
            PERMISSION_COMMENT_TASKS,
            PERMISSION_VIEW_DASHBOARD,
        ],
        _ => &[],
    };
    granted.contains(&permission)
}

#[test]
fn test_every_role_permission_pair() {
    let table = PermissionTable::seeded();
    for role in [ROLE_ADMIN, ROLE_PROJECT_MANAGER, ROLE_TEAM_MEMBER] {
        let who = identity(&[role]);
        for permission in ALL_PERMISSIONS {
            let decision = authorize(&table, &who, permission);
            assert_eq!(
                decision.is_allowed(),
                expected(role, permission),
                "{role} / {permission}"
            );
        }
    }
}

#[test]
fn test_multiple_roles_union() {
    let table = PermissionTable::seeded();
    let who = identity(&[ROLE_ADMIN, ROLE_TEAM_MEMBER]);

    assert_eq!(
        authorize(&table, &who, PERMISSION_UPDATE_TASKS),
        AuthorizationDecision::Allow
    );
    assert_eq!(
        authorize(&table, &who, PERMISSION_ASSIGN_TASKS),
        AuthorizationDecision::Deny
    );
}

#[test]
fn test_no_roles_denies_everything() {
    let table = PermissionTable::seeded();
    let who = identity(&[]);
    for permission in ALL_PERMISSIONS {
        assert!(!authorize(&table, &who, permission).is_allowed());
    }
}

#[test]
fn test_authorize_any_is_or() {
    let table = PermissionTable::seeded();
    let who = identity(&[ROLE_TEAM_MEMBER]);

    assert!(
        authorize_any(
            &table,
            &who,
            &[PERMISSION_MANAGE_USERS, PERMISSION_COMMENT_TASKS]
        )
        .is_allowed()
    );
    assert!(
        !authorize_any(
            &table,
            &who,
            &[PERMISSION_MANAGE_USERS, PERMISSION_DELETE_PROJECT]
        )
        .is_allowed()
    );
    assert!(!authorize_any(&table, &who, &[]).is_allowed());
}

#[test]
fn test_require_reports_missing_permission() {
    let gate = AuthorizationGate::new(Arc::new(PermissionTable::seeded()));
    let who = identity(&[ROLE_PROJECT_MANAGER]);

    assert!(gate.require(&who, PERMISSION_ASSIGN_TASKS).is_ok());

    let err = gate.require(&who, PERMISSION_MANAGE_USERS).unwrap_err();
    match err {
        Error::InsufficientPermission { permission } => {
            assert_eq!(permission, PERMISSION_MANAGE_USERS)
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_require_any_joins_alternatives() {
    let gate = AuthorizationGate::new(Arc::new(PermissionTable::seeded()));
    let who = identity(&[ROLE_TEAM_MEMBER]);

    let err = gate
        .require_any(&who, &[PERMISSION_MANAGE_USERS, PERMISSION_DELETE_PROJECT])
        .unwrap_err();
    assert!(err.to_string().contains("manage users|delete project"));
}
