//! Domain Entities
//!
//! | Entity | Description |
//! |--------|-------------|
//! | [`User`] | Account with credentials and assigned role names |
//! | [`Role`] / [`PermissionTable`] | Static role → permission mapping |
//! | [`RefreshToken`] | Server-stored opaque credential bound to one user |

/// Refresh token entity
pub mod refresh_token;
/// Roles and the permission table
pub mod role;
/// User account entity
pub mod user;

pub use refresh_token::RefreshToken;
pub use role::{PermissionTable, Role};
pub use user::{NewUser, User, UserId};
