//! Request guards
//!
//! [`Authenticated`] resolves the bearer token into a live session. On
//! failure the client message is cached on the request so the status
//! catcher can render it.

use crate::constants::BEARER_SCHEME;
use crate::response::status_for;
use rocket::http::Status;
use rocket::outcome::Outcome;
use rocket::request::{self, FromRequest, Request};
use taskhub_application::Session;
use taskhub_domain::error::Error;
use taskhub_infrastructure::AppContext;
use tracing::debug;

/// Message left on the request by a failed guard
#[derive(Debug, Clone, Copy, Default)]
pub struct GuardFailure(pub Option<&'static str>);

/// Authenticated caller
///
/// ```rust,ignore
/// #[get("/me")]
/// async fn me(auth: Authenticated) -> ApiResult<UserBody> { ... }
/// ```
#[derive(Debug)]
pub struct Authenticated(pub Session);

impl Authenticated {
    /// The resolved session
    pub fn session(&self) -> &Session {
        &self.0
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header value
pub fn bearer_token(header: Option<&str>) -> Option<&str> {
    let (scheme, token) = header?.trim().split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case(BEARER_SCHEME) && !token.is_empty()).then_some(token)
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Authenticated {
    type Error = Error;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let Some(context) = request.rocket().state::<AppContext>() else {
            return Outcome::Error((
                Status::InternalServerError,
                Error::internal("Application context is not managed"),
            ));
        };

        let token = bearer_token(request.headers().get_one("Authorization"));
        match context.auth().authenticate(token).await {
            Ok(session) => Outcome::Success(Self(session)),
            Err(err) => {
                let (status, message) = status_for(&err);
                debug!(reason = %err, path = %request.uri().path(), "Bearer authentication failed");
                request.local_cache(|| GuardFailure(Some(message)));
                Outcome::Error((status, err))
            }
        }
    }
}
