//! Current user endpoint

use super::auth::UserBody;
use crate::guards::Authenticated;
use crate::response::{ApiResponse, ApiResult};
use rocket::get;
use taskhub_domain::entities::User;

/// The authenticated user with roles
#[get("/user")]
pub fn current_user(auth: Authenticated) -> ApiResult<UserBody<User>> {
    let Authenticated(session) = auth;
    Ok(ApiResponse::ok(UserBody { user: session.user }))
}
