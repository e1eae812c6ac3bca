//! Use cases consumed by the HTTP surface

/// Register, login, logout, me, refresh
pub mod auth_service;
/// Dashboard summary
pub mod dashboard_service;
/// Password hashing off the async executor
mod hashing;
/// User administration
pub mod user_admin_service;

pub use auth_service::AuthService;
pub use dashboard_service::DashboardService;
pub use user_admin_service::UserAdminService;
