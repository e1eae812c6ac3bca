//! JSON envelope and error mapping
//!
//! Successful handlers return [`ApiResponse`]; failures return
//! [`ApiError`]. Both render `{ "success": ..., "message"?: ... }` with the
//! payload fields merged into the top-level object.

use crate::constants::*;
use rocket::http::Status;
use rocket::request::Request;
use rocket::response::{self, Responder};
use rocket::serde::json::{self, Json};
use serde::Serialize;
use taskhub_domain::error::{Error, FieldErrors};
use tracing::{debug, error};

/// Handler result
pub type ApiResult<T> = Result<ApiResponse<T>, ApiError>;

/// JSON request body as decoded by Rocket's data guard
pub type JsonBody<'r, T> = Result<Json<T>, json::Error<'r>>;

/// Payload with no fields beyond the envelope
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Empty {}

/// Successful response
#[derive(Debug)]
pub struct ApiResponse<T> {
    status: Status,
    message: Option<&'static str>,
    data: T,
}

#[derive(Serialize)]
struct SuccessBody<'a, T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
    #[serde(flatten)]
    data: &'a T,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 response
    pub fn ok(data: T) -> Self {
        Self {
            status: Status::Ok,
            message: None,
            data,
        }
    }

    /// 201 response
    pub fn created(data: T) -> Self {
        Self {
            status: Status::Created,
            message: None,
            data,
        }
    }

    /// Attach a human-readable message
    pub fn with_message(mut self, message: &'static str) -> Self {
        self.message = Some(message);
        self
    }

    /// Response status
    pub fn status(&self) -> Status {
        self.status
    }
}

impl ApiResponse<Empty> {
    /// 200 response carrying only a message
    pub fn message(message: &'static str) -> Self {
        Self::ok(Empty {}).with_message(message)
    }
}

impl<'r, T: Serialize> Responder<'r, 'static> for ApiResponse<T> {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let body = SuccessBody {
            success: true,
            message: self.message,
            data: &self.data,
        };
        (self.status, Json(body)).respond_to(request)
    }
}

/// Failure body shared by handlers and catchers
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    /// Always `false`
    pub success: bool,
    /// Human-readable reason
    pub message: String,
    /// Per-field validation messages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl ErrorBody {
    /// Body with a message only
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors: None,
        }
    }
}

/// Failed response
#[derive(Debug)]
pub struct ApiError {
    status: Status,
    body: ErrorBody,
}

impl ApiError {
    /// Error with an explicit status and message
    pub fn new(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody::new(message),
        }
    }

    /// Map a domain error, using `fallback` as the message for server faults
    pub fn from_error(err: Error, fallback: &'static str) -> Self {
        let (status, message) = status_for(&err);
        if status == Status::InternalServerError {
            error!(error = %err, "Request failed");
            return Self::new(status, fallback);
        }

        let errors = match err {
            Error::Validation { errors, .. } => Some(errors),
            Error::EmailTaken { .. } => Some(FieldErrors::from([(
                "email".to_string(),
                vec![MSG_EMAIL_TAKEN.to_string()],
            )])),
            _ => None,
        };
        Self {
            status,
            body: ErrorBody {
                success: false,
                message: message.to_string(),
                errors,
            },
        }
    }

    /// Closure mapping domain errors with a route-specific fault message
    pub fn or_fail(fallback: &'static str) -> impl FnOnce(Error) -> Self {
        move |err| Self::from_error(err, fallback)
    }

    /// Response status
    pub fn status(&self) -> Status {
        self.status
    }

    /// Response body
    pub fn body(&self) -> &ErrorBody {
        &self.body
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self::from_error(err, MSG_INTERNAL_ERROR)
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        (self.status, Json(self.body)).respond_to(request)
    }
}

/// Unwrap a decoded request body
///
/// Malformed or mistyped JSON becomes a validation error keyed under
/// `body`, so it renders like any other 422.
pub fn payload<T>(body: JsonBody<'_, T>) -> Result<T, ApiError> {
    match body {
        Ok(json) => Ok(json.into_inner()),
        Err(json::Error::Parse(_, e)) => {
            Err(Error::validation_field(BODY_FIELD, e.to_string()).into())
        }
        Err(e) => {
            debug!(error = %e, "Request body unreadable");
            Err(ApiError::new(Status::BadRequest, MSG_BAD_REQUEST))
        }
    }
}

/// HTTP status and client message for a domain error
pub fn status_for(err: &Error) -> (Status, &'static str) {
    match err {
        Error::Validation { .. } | Error::EmailTaken { .. } => {
            (Status::UnprocessableEntity, MSG_VALIDATION_ERROR)
        }
        Error::InvalidCredentials => (Status::Unauthorized, MSG_INVALID_CREDENTIALS),
        Error::TokenExpired => (Status::Unauthorized, MSG_TOKEN_EXPIRED),
        Error::TokenInvalid => (Status::Unauthorized, MSG_TOKEN_INVALID),
        Error::TokenMissing => (Status::Unauthorized, MSG_TOKEN_ABSENT),
        Error::RefreshTokenNotFound | Error::RefreshTokenExpired => {
            (Status::Unauthorized, MSG_TOKEN_NOT_REFRESHABLE)
        }
        Error::InsufficientPermission { .. } => (Status::Forbidden, MSG_INSUFFICIENT_PERMISSIONS),
        Error::UserNotFound => (Status::NotFound, MSG_USER_NOT_FOUND),
        Error::Json { .. }
        | Error::Configuration { .. }
        | Error::Database { .. }
        | Error::Infrastructure { .. }
        | Error::Internal { .. } => (Status::InternalServerError, MSG_INTERNAL_ERROR),
    }
}
