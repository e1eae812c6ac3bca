//! Dashboard endpoint

use crate::guards::Authenticated;
use crate::response::{ApiResponse, ApiResult};
use rocket::{State, get};
use serde::Serialize;
use taskhub_domain::ports::DashboardSummary;
use taskhub_infrastructure::AppContext;

/// `{ data }` payload
#[derive(Debug, Serialize)]
pub struct SummaryBody {
    /// Aggregate counts
    pub data: DashboardSummary,
}

/// Aggregate counts for any authenticated user
#[get("/dashboard")]
pub async fn summary(ctx: &State<AppContext>, auth: Authenticated) -> ApiResult<SummaryBody> {
    let data = ctx.dashboard().summary(&auth.session().identity).await?;
    Ok(ApiResponse::ok(SummaryBody { data }))
}
