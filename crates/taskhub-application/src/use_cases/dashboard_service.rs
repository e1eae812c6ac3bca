//! Dashboard Use Case

use std::sync::Arc;
use taskhub_domain::error::Result;
use taskhub_domain::ports::{DashboardSource, DashboardSummary};
use taskhub_domain::value_objects::Identity;
use tracing::debug;

/// Aggregate counts for authenticated users
pub struct DashboardService {
    source: Arc<dyn DashboardSource>,
}

impl DashboardService {
    /// Create a dashboard service over `source`
    pub fn new(source: Arc<dyn DashboardSource>) -> Self {
        Self { source }
    }

    /// Current summary
    pub async fn summary(&self, identity: &Identity) -> Result<DashboardSummary> {
        debug!(user_id = %identity.user_id, "Dashboard requested");
        self.source.summary().await
    }
}
