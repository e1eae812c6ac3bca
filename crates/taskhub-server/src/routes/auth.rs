//! Authentication endpoints

use crate::constants::*;
use crate::guards::Authenticated;
use crate::response::{ApiError, ApiResponse, ApiResult, Empty, JsonBody, payload};
use rocket::{State, get, post};
use serde::Serialize;
use taskhub_application::{
    AuthOutcome, LoginRequest, RefreshRequest, RegisterRequest, UserProfile,
};
use taskhub_domain::value_objects::TokenPair;
use taskhub_infrastructure::AppContext;

/// `{ user }` payload
#[derive(Debug, Serialize)]
pub struct UserBody<T> {
    /// User record
    pub user: T,
}

/// `{ authorization }` payload
#[derive(Debug, Serialize)]
pub struct AuthorizationBody {
    /// New token pair
    pub authorization: TokenPair,
}

/// Create a `Team Member` account and return its first token pair
#[post("/register", data = "<request>")]
pub async fn register(
    ctx: &State<AppContext>,
    request: JsonBody<'_, RegisterRequest>,
) -> ApiResult<AuthOutcome> {
    let outcome = ctx
        .auth()
        .register(payload(request)?)
        .await
        .map_err(ApiError::or_fail(MSG_REGISTRATION_FAILED))?;
    Ok(ApiResponse::created(outcome).with_message(MSG_USER_REGISTERED))
}

/// Exchange credentials for a token pair
#[post("/login", data = "<request>")]
pub async fn login(
    ctx: &State<AppContext>,
    request: JsonBody<'_, LoginRequest>,
) -> ApiResult<AuthOutcome> {
    let outcome = ctx
        .auth()
        .login(payload(request)?)
        .await
        .map_err(ApiError::or_fail(MSG_TOKEN_NOT_CREATED))?;
    Ok(ApiResponse::ok(outcome).with_message(MSG_LOGIN_SUCCESSFUL))
}

/// Revoke the presented access token
#[post("/logout")]
pub async fn logout(ctx: &State<AppContext>, auth: Authenticated) -> ApiResult<Empty> {
    ctx.auth()
        .logout(auth.session())
        .await
        .map_err(ApiError::or_fail(MSG_LOGOUT_FAILED))?;
    Ok(ApiResponse::message(MSG_LOGGED_OUT))
}

/// Current user with roles and effective permissions
#[get("/me")]
pub fn me(ctx: &State<AppContext>, auth: Authenticated) -> ApiResult<UserBody<UserProfile>> {
    Ok(ApiResponse::ok(UserBody {
        user: ctx.auth().me(auth.session()),
    }))
}

/// Exchange a refresh token for a new pair
///
/// Every rejection other than a validation failure is reported as
/// "Token cannot be refreshed".
#[post("/refresh", data = "<request>")]
pub async fn refresh(
    ctx: &State<AppContext>,
    request: JsonBody<'_, RefreshRequest>,
) -> ApiResult<AuthorizationBody> {
    let authorization = ctx
        .auth()
        .refresh(payload(request)?)
        .await
        .map_err(ApiError::from)?;
    Ok(ApiResponse::ok(AuthorizationBody { authorization }).with_message(MSG_TOKEN_REFRESHED))
}
