//! Dashboard Source Port
//!
//! Project and task aggregation lives outside the auth core; the dashboard
//! route only forwards whatever the source reports.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Aggregate counts shown on the dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Number of projects
    pub total_projects: u64,
    /// Tasks not yet completed
    pub active_tasks: u64,
    /// Completed tasks
    pub completed_tasks: u64,
    /// Titles of the most recent tasks
    pub recent_activities: Vec<String>,
    /// Per-member performance entries
    pub team_performance: Vec<serde_json::Value>,
}

/// Source of dashboard aggregates
#[async_trait]
pub trait DashboardSource: Send + Sync {
    /// Compute the current summary
    async fn summary(&self) -> Result<DashboardSummary>;
}
