//! JSON error catchers

use crate::constants::*;
use crate::guards::GuardFailure;
use crate::response::ErrorBody;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{Catcher, Request, catch, catchers};

fn body(request: &Request<'_>, fallback: &'static str) -> Json<ErrorBody> {
    let GuardFailure(message) = *request.local_cache(GuardFailure::default);
    Json(ErrorBody::new(message.unwrap_or(fallback)))
}

#[catch(400)]
fn bad_request(request: &Request<'_>) -> Json<ErrorBody> {
    body(request, MSG_BAD_REQUEST)
}

#[catch(401)]
fn unauthorized(request: &Request<'_>) -> Json<ErrorBody> {
    body(request, MSG_UNAUTHORIZED)
}

#[catch(403)]
fn forbidden(request: &Request<'_>) -> Json<ErrorBody> {
    body(request, MSG_INSUFFICIENT_PERMISSIONS)
}

#[catch(404)]
fn not_found(request: &Request<'_>) -> Json<ErrorBody> {
    body(request, MSG_NOT_FOUND)
}

// Handlers decode bodies themselves; this covers 422s raised elsewhere
#[catch(422)]
fn unprocessable(request: &Request<'_>) -> Json<ErrorBody> {
    body(request, MSG_VALIDATION_ERROR)
}

#[catch(500)]
fn internal_error(request: &Request<'_>) -> Json<ErrorBody> {
    body(request, MSG_INTERNAL_ERROR)
}

#[catch(default)]
fn default_catcher(status: Status, _request: &Request<'_>) -> (Status, Json<ErrorBody>) {
    (status, Json(ErrorBody::new(status.reason_lossy())))
}

/// Every catcher, for registration at `/`
pub fn all() -> Vec<Catcher> {
    catchers![
        bad_request,
        unauthorized,
        forbidden,
        not_found,
        unprocessable,
        internal_error,
        default_catcher
    ]
}
