//! Startup seeding
//!
//! Builds the role/permission table and, when enabled, creates the three
//! demo accounts. Seeding is idempotent: accounts whose email already exists
//! are left untouched.

use std::sync::Arc;
use taskhub_domain::constants::{ROLE_ADMIN, ROLE_PROJECT_MANAGER, ROLE_TEAM_MEMBER};
use taskhub_domain::entities::{NewUser, PermissionTable};
use taskhub_domain::error::Result;
use taskhub_domain::ports::PasswordHasher;
use taskhub_domain::repositories::UserRepository;
use tracing::{debug, info};

/// Demo accounts as (name, email, role)
pub const DEMO_USERS: [(&str, &str, &str); 3] = [
    ("Admin User", "admin@example.com", ROLE_ADMIN),
    ("Project Manager", "pm@example.com", ROLE_PROJECT_MANAGER),
    ("Team Member", "team@example.com", ROLE_TEAM_MEMBER),
];

/// The permission table loaded at startup
pub fn permission_table() -> PermissionTable {
    let table = PermissionTable::seeded();
    debug!(
        roles = table.roles().count(),
        permissions = table.permissions().len(),
        "Permission table seeded"
    );
    table
}

/// Create any missing demo account, returning how many were created
pub async fn seed_demo_users(
    users: &Arc<dyn UserRepository>,
    hasher: &Arc<dyn PasswordHasher>,
    password: &str,
) -> Result<usize> {
    let mut created = 0;
    for (name, email, role) in DEMO_USERS {
        if users.find_by_email(email).await?.is_some() {
            debug!(email, "Demo account already present");
            continue;
        }
        let hash = hasher.hash_password(password)?;
        users
            .create(NewUser::with_role(name, email, hash, role))
            .await?;
        created += 1;
    }
    info!(created, "Demo accounts seeded");
    Ok(created)
}
