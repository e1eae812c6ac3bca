//! Infrastructure service ports

/// Dashboard aggregation source
pub mod dashboard;
/// Access token revocation list
pub mod revocation;

pub use dashboard::{DashboardSource, DashboardSummary};
pub use revocation::TokenRevocationList;
