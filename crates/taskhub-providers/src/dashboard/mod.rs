//! Dashboard source implementations

/// Null dashboard source
pub mod null;

pub use null::NullDashboardSource;
