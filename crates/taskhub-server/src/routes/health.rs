//! Liveness endpoint

use crate::response::{ApiResponse, ApiResult};
use rocket::get;
use serde::Serialize;

/// `{ status }` payload
#[derive(Debug, Serialize)]
pub struct HealthBody {
    /// Always `"ok"` while the process serves requests
    pub status: &'static str,
}

/// Liveness probe
#[get("/health")]
pub fn health() -> ApiResult<HealthBody> {
    Ok(ApiResponse::ok(HealthBody { status: "ok" }))
}
