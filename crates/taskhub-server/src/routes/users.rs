//! User administration endpoints
//!
//! All routes require `manage users`; the check runs in the service before
//! any side effect.

use super::auth::UserBody;
use crate::constants::*;
use crate::guards::Authenticated;
use crate::response::{ApiError, ApiResponse, ApiResult, Empty, JsonBody, payload};
use rocket::http::Status;
use rocket::{State, delete, get, post, put};
use serde::Serialize;
use taskhub_application::{CreateUserRequest, UpdateUserRequest};
use taskhub_domain::constants::PERMISSION_MANAGE_USERS;
use taskhub_domain::entities::{User, UserId};
use taskhub_domain::value_objects::Identity;
use taskhub_infrastructure::AppContext;

/// `{ users }` payload
#[derive(Debug, Serialize)]
pub struct UsersBody {
    /// Every user with roles
    pub users: Vec<User>,
}

// A malformed id names no user, but callers without the permission still get 403
fn parse_id(ctx: &AppContext, identity: &Identity, id: &str) -> Result<UserId, ApiError> {
    match id.parse() {
        Ok(id) => Ok(id),
        Err(_) => {
            ctx.gate().require(identity, PERMISSION_MANAGE_USERS)?;
            Err(ApiError::new(Status::NotFound, MSG_USER_NOT_FOUND))
        }
    }
}

// Same ordering for an undecodable body: 403 before 422
fn gated_payload<T>(
    ctx: &AppContext,
    identity: &Identity,
    body: JsonBody<'_, T>,
) -> Result<T, ApiError> {
    if body.is_err() {
        ctx.gate().require(identity, PERMISSION_MANAGE_USERS)?;
    }
    payload(body)
}

/// List users
#[get("/users")]
pub async fn list(ctx: &State<AppContext>, auth: Authenticated) -> ApiResult<UsersBody> {
    let users = ctx.user_admin().list(&auth.session().identity).await?;
    Ok(ApiResponse::ok(UsersBody { users }))
}

/// Create a user with a single role
#[post("/users", data = "<request>")]
pub async fn create(
    ctx: &State<AppContext>,
    auth: Authenticated,
    request: JsonBody<'_, CreateUserRequest>,
) -> ApiResult<UserBody<User>> {
    let request = gated_payload(ctx, &auth.session().identity, request)?;
    let user = ctx
        .user_admin()
        .create(&auth.session().identity, request)
        .await?;
    Ok(ApiResponse::created(UserBody { user }).with_message(MSG_USER_CREATED))
}

/// Update a user; absent fields are left unchanged
#[put("/users/<id>", data = "<request>")]
pub async fn update(
    ctx: &State<AppContext>,
    auth: Authenticated,
    id: &str,
    request: JsonBody<'_, UpdateUserRequest>,
) -> ApiResult<UserBody<User>> {
    let id = parse_id(ctx, &auth.session().identity, id)?;
    let request = gated_payload(ctx, &auth.session().identity, request)?;
    let user = ctx
        .user_admin()
        .update(&auth.session().identity, &id, request)
        .await?;
    Ok(ApiResponse::ok(UserBody { user }).with_message(MSG_USER_UPDATED))
}

/// Delete a user and its refresh tokens
#[delete("/users/<id>")]
pub async fn delete(ctx: &State<AppContext>, auth: Authenticated, id: &str) -> ApiResult<Empty> {
    let id = parse_id(ctx, &auth.session().identity, id)?;
    ctx.user_admin().delete(&auth.session().identity, &id).await?;
    Ok(ApiResponse::message(MSG_USER_DELETED))
}
