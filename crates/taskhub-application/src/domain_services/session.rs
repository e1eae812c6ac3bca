//! Session Validator
//!
//! Turns a presented access token into a [`Session`]. The user and role set
//! are re-read from the credential store on every call, so a role change or
//! a deleted account takes effect on the next request even while the token
//! itself is still valid.

use std::sync::Arc;
use taskhub_domain::entities::User;
use taskhub_domain::error::{Error, Result};
use taskhub_domain::ports::{AccessTokenCodec, TokenRevocationList};
use taskhub_domain::repositories::UserRepository;
use taskhub_domain::value_objects::{AccessClaims, Identity};
use tracing::debug;

/// Authenticated request context
#[derive(Debug, Clone)]
pub struct Session {
    /// Live user record
    pub user: User,
    /// Identity threaded into authorization checks
    pub identity: Identity,
    /// Verified claims of the presented token
    pub claims: AccessClaims,
}

/// Verifies access tokens and resolves the live identity
pub struct SessionValidator {
    codec: Arc<dyn AccessTokenCodec>,
    users: Arc<dyn UserRepository>,
    revocations: Arc<dyn TokenRevocationList>,
}

impl SessionValidator {
    /// Create a session validator
    pub fn new(
        codec: Arc<dyn AccessTokenCodec>,
        users: Arc<dyn UserRepository>,
        revocations: Arc<dyn TokenRevocationList>,
    ) -> Self {
        Self {
            codec,
            users,
            revocations,
        }
    }

    /// Authenticate a presented access token
    ///
    /// # Errors
    ///
    /// - `TokenMissing` when no (or an empty) token is presented
    /// - `TokenExpired` for a well-signed token past its `exp`
    /// - `TokenInvalid` for a bad signature, malformed token or revoked `jti`
    /// - `UserNotFound` when the subject no longer exists
    pub async fn authenticate(&self, token: Option<&str>) -> Result<Session> {
        let token = token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(Error::TokenMissing)?;

        let claims = self.codec.decode(token)?;

        if self.revocations.is_revoked(&claims.jti).await? {
            debug!(jti = %claims.jti, "Rejected revoked access token");
            return Err(Error::TokenInvalid);
        }

        let user_id = claims.user_id()?;
        let user = self
            .users
            .find_by_id(&user_id)
            .await?
            .ok_or(Error::UserNotFound)?;

        Ok(Session {
            identity: user.identity(),
            user,
            claims,
        })
    }
}
