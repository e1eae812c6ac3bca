//! Auth Service Use Case
//!
//! Composes the issuer, validator and refresh coordinator into the
//! operations exposed under `/auth`.

use super::hashing;
use crate::domain_services::{RefreshCoordinator, Session, SessionValidator, TokenIssuer};
use crate::dto::{
    AuthOutcome, LoginRequest, RefreshRequest, RegisterRequest, UserProfile, validate_request,
};
use std::sync::Arc;
use taskhub_domain::constants::ROLE_TEAM_MEMBER;
use taskhub_domain::entities::{NewUser, PermissionTable};
use taskhub_domain::error::{Error, Result};
use taskhub_domain::ports::{PasswordHasher, TokenRevocationList};
use taskhub_domain::repositories::UserRepository;
use taskhub_domain::value_objects::TokenPair;
use tokio::sync::OnceCell;
use tracing::{info, warn};

/// Message stored against `email` when it is already registered
pub const EMAIL_TAKEN_MESSAGE: &str = "The email has already been taken.";

/// Hashed once and verified against on unknown-email logins
const DECOY_PASSWORD: &str = "taskhub-decoy-password";

/// Authentication use cases
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    issuer: Arc<TokenIssuer>,
    sessions: Arc<SessionValidator>,
    refresher: Arc<RefreshCoordinator>,
    revocations: Arc<dyn TokenRevocationList>,
    permissions: Arc<PermissionTable>,
    logout_revokes_refresh_tokens: bool,
    decoy_hash: OnceCell<String>,
}

impl AuthService {
    /// Create the auth service
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        issuer: Arc<TokenIssuer>,
        sessions: Arc<SessionValidator>,
        refresher: Arc<RefreshCoordinator>,
        revocations: Arc<dyn TokenRevocationList>,
    ) -> Self {
        Self {
            users,
            hasher,
            issuer,
            sessions,
            refresher,
            revocations,
            permissions: Arc::new(PermissionTable::seeded()),
            logout_revokes_refresh_tokens: true,
            decoy_hash: OnceCell::new(),
        }
    }

    /// Resolve effective permissions against `table`
    pub fn with_permission_table(mut self, table: Arc<PermissionTable>) -> Self {
        self.permissions = table;
        self
    }

    /// Whether logout also deletes the user's refresh tokens
    pub fn with_logout_revokes_refresh_tokens(mut self, enabled: bool) -> Self {
        self.logout_revokes_refresh_tokens = enabled;
        self
    }

    /// Create a `Team Member` account and issue its first token pair
    pub async fn register(&self, request: RegisterRequest) -> Result<AuthOutcome> {
        validate_request(&request)?;

        if self.users.find_by_email(&request.email).await?.is_some() {
            return Err(Error::validation_field("email", EMAIL_TAKEN_MESSAGE));
        }

        let password_hash = hashing::hash(&self.hasher, request.password).await?;
        let user = self
            .users
            .create(NewUser::with_role(
                request.name.trim(),
                request.email.trim(),
                password_hash,
                ROLE_TEAM_MEMBER,
            ))
            .await
            .map_err(|e| match e {
                Error::EmailTaken { .. } => Error::validation_field("email", EMAIL_TAKEN_MESSAGE),
                other => other,
            })?;

        let authorization = self.issuer.issue(&user).await?;
        info!(user_id = %user.id, "User registered");
        Ok(AuthOutcome {
            user,
            authorization,
        })
    }

    /// Exchange credentials for a token pair
    ///
    /// Unknown email and wrong password fail identically, and neither path
    /// touches the refresh token store. An unknown email still pays for one
    /// password verification so response time does not reveal which emails
    /// are registered.
    pub async fn login(&self, request: LoginRequest) -> Result<AuthOutcome> {
        validate_request(&request)?;

        let Some(user) = self.users.find_by_email(&request.email).await? else {
            let decoy = self
                .decoy_hash
                .get_or_try_init(|| hashing::hash(&self.hasher, DECOY_PASSWORD.to_string()))
                .await?;
            hashing::verify(&self.hasher, request.password, decoy.clone()).await?;
            warn!("Login failed: unknown email");
            return Err(Error::InvalidCredentials);
        };

        let verified =
            hashing::verify(&self.hasher, request.password, user.password_hash.clone()).await?;
        if !verified {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(Error::InvalidCredentials);
        }

        let authorization = self.issuer.issue(&user).await?;
        info!(user_id = %user.id, "User logged in");
        Ok(AuthOutcome {
            user,
            authorization,
        })
    }

    /// Revoke the presented access token and, if configured, the refresh token
    pub async fn logout(&self, session: &Session) -> Result<()> {
        self.revocations
            .revoke(&session.claims.jti, session.claims.expires_at())
            .await?;

        let mut removed = 0;
        if self.logout_revokes_refresh_tokens {
            removed = self.issuer.revoke_refresh_tokens(&session.user.id).await?;
        }
        info!(user_id = %session.user.id, refresh_tokens_removed = removed, "User logged out");
        Ok(())
    }

    /// Current user with roles and effective permissions
    pub fn me(&self, session: &Session) -> UserProfile {
        UserProfile::resolve(session.user.clone(), &self.permissions)
    }

    /// Exchange a refresh token for a new pair
    ///
    /// The specific failure reason is logged here; callers surface every
    /// refresh failure the same way.
    pub async fn refresh(&self, request: RefreshRequest) -> Result<TokenPair> {
        validate_request(&request)?;

        match self.refresher.refresh(request.refresh_token.trim()).await {
            Ok(pair) => Ok(pair),
            Err(e) => {
                warn!(reason = %e, "Refresh rejected");
                Err(e)
            }
        }
    }

    /// Authenticate a presented access token
    pub async fn authenticate(&self, token: Option<&str>) -> Result<Session> {
        self.sessions.authenticate(token).await
    }
}
