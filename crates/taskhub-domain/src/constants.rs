//! Domain layer constants
//!
//! Role and permission names are part of the public contract: external
//! collaborators gate their actions on these exact strings.

// ============================================================================
// ROLE NAMES
// ============================================================================

/// Full administrative role
pub const ROLE_ADMIN: &str = "Admin";

/// Project management role
pub const ROLE_PROJECT_MANAGER: &str = "Project Manager";

/// Default role assigned at registration
pub const ROLE_TEAM_MEMBER: &str = "Team Member";

// ============================================================================
// PERMISSION NAMES
// ============================================================================

/// Create, update and delete user accounts
pub const PERMISSION_MANAGE_USERS: &str = "manage users";

/// Create projects
pub const PERMISSION_CREATE_PROJECT: &str = "create project";

/// Update projects
pub const PERMISSION_UPDATE_PROJECT: &str = "update project";

/// Delete projects
pub const PERMISSION_DELETE_PROJECT: &str = "delete project";

/// Assign tasks to team members
pub const PERMISSION_ASSIGN_TASKS: &str = "assign tasks";

/// Update tasks
pub const PERMISSION_UPDATE_TASKS: &str = "update tasks";

/// Comment on tasks
pub const PERMISSION_COMMENT_TASKS: &str = "comment tasks";

/// View the dashboard summary
pub const PERMISSION_VIEW_DASHBOARD: &str = "view dashboard";

/// Every seeded permission, in seeding order
pub const ALL_PERMISSIONS: [&str; 8] = [
    PERMISSION_MANAGE_USERS,
    PERMISSION_CREATE_PROJECT,
    PERMISSION_UPDATE_PROJECT,
    PERMISSION_DELETE_PROJECT,
    PERMISSION_ASSIGN_TASKS,
    PERMISSION_UPDATE_TASKS,
    PERMISSION_COMMENT_TASKS,
    PERMISSION_VIEW_DASHBOARD,
];

// ============================================================================
// TOKEN DEFAULTS
// ============================================================================

/// Token type reported to clients alongside the access token
pub const TOKEN_TYPE_BEARER: &str = "bearer";

/// Default access token lifetime (60 minutes)
pub const ACCESS_TOKEN_DEFAULT_TTL_SECS: u64 = 60 * 60;

/// Default refresh token lifetime (14 days)
pub const REFRESH_TOKEN_DEFAULT_TTL_SECS: u64 = 14 * 24 * 60 * 60;

/// Random bytes behind each opaque refresh token value
pub const REFRESH_TOKEN_BYTES: usize = 64;
