//! Null dashboard source
//!
//! Projects and tasks are owned by another service; until one is wired in the
//! dashboard reports zero counts and empty lists.

use async_trait::async_trait;
use taskhub_domain::error::Result;
use taskhub_domain::ports::{DashboardSource, DashboardSummary};

/// Dashboard source that reports an empty summary
///
/// # Example
///
/// ```ignore
/// use taskhub_providers::dashboard::NullDashboardSource;
///
/// let summary = NullDashboardSource::new().summary().await?;
/// assert_eq!(summary.total_projects, 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct NullDashboardSource;

impl NullDashboardSource {
    /// Create a new null dashboard source
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DashboardSource for NullDashboardSource {
    async fn summary(&self) -> Result<DashboardSummary> {
        Ok(DashboardSummary::default())
    }
}
