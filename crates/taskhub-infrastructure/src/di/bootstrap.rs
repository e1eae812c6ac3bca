//! Application bootstrap
//!
//! ```text
//! AppConfig → crypto adapters ─┐
//!             providers ───────┼→ TokenIssuer / SessionValidator / RefreshCoordinator
//!             PermissionTable ─┘        ↓
//!                               AuthService / UserAdminService / DashboardService
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_app(config).await?;
//! let outcome = context.auth().login(request).await?;
//! let session = context.auth().authenticate(Some(&outcome.authorization.access_token)).await?;
//! ```

use crate::config::{AppConfig, loader::validate_app_config};
use crate::crypto::{JwtCodec, PasswordService, TokenGenerator};
use crate::seed::{permission_table, seed_demo_users};
use std::sync::Arc;
use taskhub_application::{
    AuthService, AuthorizationGate, DashboardService, RefreshCoordinator, SessionValidator,
    TokenIssuer, TokenSettings, UserAdminService,
};
use taskhub_domain::entities::PermissionTable;
use taskhub_domain::error::Result;
use taskhub_domain::ports::{
    AccessTokenCodec, DashboardSource, OpaqueTokenGenerator, PasswordHasher, TokenRevocationList,
};
use taskhub_domain::repositories::{RefreshTokenRepository, UserRepository};
use taskhub_providers::dashboard::NullDashboardSource;
use taskhub_providers::refresh_tokens::InMemoryRefreshTokenRepository;
use taskhub_providers::revocation::MokaRevocationList;
use taskhub_providers::users::InMemoryUserRepository;
use tracing::info;

/// Application context holding every wired service
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ========================================================================
    // Stores
    // ========================================================================
    users: Arc<dyn UserRepository>,
    refresh_tokens: Arc<dyn RefreshTokenRepository>,
    revocations: Arc<dyn TokenRevocationList>,
    permissions: Arc<PermissionTable>,

    // ========================================================================
    // Auth core
    // ========================================================================
    hasher: Arc<dyn PasswordHasher>,
    issuer: Arc<TokenIssuer>,
    gate: AuthorizationGate,

    // ========================================================================
    // Use cases
    // ========================================================================
    auth: Arc<AuthService>,
    user_admin: Arc<UserAdminService>,
    dashboard: Arc<DashboardService>,
}

impl AppContext {
    /// Get the auth service
    pub fn auth(&self) -> Arc<AuthService> {
        self.auth.clone()
    }

    /// Get the user administration service
    pub fn user_admin(&self) -> Arc<UserAdminService> {
        self.user_admin.clone()
    }

    /// Get the dashboard service
    pub fn dashboard(&self) -> Arc<DashboardService> {
        self.dashboard.clone()
    }

    /// Get the authorization gate
    pub fn gate(&self) -> &AuthorizationGate {
        &self.gate
    }

    /// Get the token issuer
    pub fn issuer(&self) -> Arc<TokenIssuer> {
        self.issuer.clone()
    }

    /// Get the credential store
    pub fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    /// Get the refresh token store
    pub fn refresh_tokens(&self) -> Arc<dyn RefreshTokenRepository> {
        self.refresh_tokens.clone()
    }

    /// Get the access token revocation list
    pub fn revocations(&self) -> Arc<dyn TokenRevocationList> {
        self.revocations.clone()
    }

    /// Get the password hasher
    pub fn hasher(&self) -> Arc<dyn PasswordHasher> {
        self.hasher.clone()
    }

    /// Get the permission table
    pub fn permissions(&self) -> Arc<PermissionTable> {
        self.permissions.clone()
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("config", &self.config)
            .field("permissions", &self.permissions)
            .finish_non_exhaustive()
    }
}

/// Initialize the application context
///
/// Validates the configuration, builds the crypto adapters and in-memory
/// stores, wires the auth core and seeds demo accounts when enabled.
pub async fn init_app(config: AppConfig) -> Result<AppContext> {
    info!("Initializing application context");

    validate_app_config(&config)?;
    let config = Arc::new(config);

    // ========================================================================
    // Crypto adapters
    // ========================================================================

    let hasher: Arc<dyn PasswordHasher> = Arc::new(PasswordService::from_config(&config.auth));
    let codec: Arc<dyn AccessTokenCodec> = Arc::new(JwtCodec::from_config(&config.auth.jwt));
    let generator: Arc<dyn OpaqueTokenGenerator> = Arc::new(TokenGenerator::new());

    info!(
        "Created crypto adapters: password_algorithm={:?}",
        config.auth.password_algorithm
    );

    // ========================================================================
    // Stores
    // ========================================================================

    let users: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
    let refresh_tokens: Arc<dyn RefreshTokenRepository> =
        Arc::new(InMemoryRefreshTokenRepository::new());
    let revocations: Arc<dyn TokenRevocationList> = Arc::new(MokaRevocationList::new());
    let dashboard_source: Arc<dyn DashboardSource> = Arc::new(NullDashboardSource::new());
    let permissions = Arc::new(permission_table());

    info!("Created stores");

    // ========================================================================
    // Auth core
    // ========================================================================

    let settings = TokenSettings {
        issuer: config.auth.jwt.issuer.clone(),
        access_ttl_secs: config.auth.jwt.expiration_secs,
        refresh_ttl_secs: config.auth.jwt.refresh_expiration_secs,
    };
    let issuer = Arc::new(TokenIssuer::new(
        Arc::clone(&codec),
        generator,
        Arc::clone(&refresh_tokens),
        settings,
    ));
    let sessions = Arc::new(SessionValidator::new(
        codec,
        Arc::clone(&users),
        Arc::clone(&revocations),
    ));
    let refresher = Arc::new(RefreshCoordinator::new(
        Arc::clone(&issuer),
        Arc::clone(&refresh_tokens),
        Arc::clone(&users),
    ));
    let gate = AuthorizationGate::new(Arc::clone(&permissions));

    info!("Created auth core");

    // ========================================================================
    // Use cases
    // ========================================================================

    let auth = Arc::new(
        AuthService::new(
            Arc::clone(&users),
            Arc::clone(&hasher),
            Arc::clone(&issuer),
            sessions,
            refresher,
            Arc::clone(&revocations),
        )
        .with_permission_table(Arc::clone(&permissions))
        .with_logout_revokes_refresh_tokens(config.auth.logout_revokes_refresh_tokens),
    );
    let user_admin = Arc::new(UserAdminService::new(
        gate.clone(),
        Arc::clone(&users),
        Arc::clone(&hasher),
        Arc::clone(&issuer),
    ));
    let dashboard = Arc::new(DashboardService::new(dashboard_source));

    info!("Created use cases");

    if config.seed.demo_users {
        seed_demo_users(&users, &hasher, &config.seed.password).await?;
    }

    Ok(AppContext {
        config,
        users,
        refresh_tokens,
        revocations,
        permissions,
        hasher,
        issuer,
        gate,
        auth,
        user_admin,
        dashboard,
    })
}
