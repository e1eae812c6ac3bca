//! Token Issuer
//!
//! Mints a short-lived signed access token and a long-lived opaque refresh
//! token. The refresh token is the only persisted half of the pair, and the
//! store holds at most one per user.

use chrono::Duration;
use std::sync::Arc;
use taskhub_domain::constants::{ACCESS_TOKEN_DEFAULT_TTL_SECS, REFRESH_TOKEN_DEFAULT_TTL_SECS};
use taskhub_domain::entities::{RefreshToken, User, UserId};
use taskhub_domain::error::Result;
use taskhub_domain::ports::{AccessTokenCodec, OpaqueTokenGenerator};
use taskhub_domain::repositories::RefreshTokenRepository;
use taskhub_domain::value_objects::{AccessClaims, TokenPair};
use tracing::debug;

/// Lifetimes and issuer name applied to every token pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSettings {
    /// Value of the `iss` claim
    pub issuer: String,
    /// Access token lifetime in seconds
    pub access_ttl_secs: u64,
    /// Refresh token lifetime in seconds
    pub refresh_ttl_secs: u64,
}

impl Default for TokenSettings {
    fn default() -> Self {
        Self {
            issuer: "taskhub".to_string(),
            access_ttl_secs: ACCESS_TOKEN_DEFAULT_TTL_SECS,
            refresh_ttl_secs: REFRESH_TOKEN_DEFAULT_TTL_SECS,
        }
    }
}

/// Issues token pairs
pub struct TokenIssuer {
    codec: Arc<dyn AccessTokenCodec>,
    generator: Arc<dyn OpaqueTokenGenerator>,
    refresh_tokens: Arc<dyn RefreshTokenRepository>,
    settings: TokenSettings,
}

impl TokenIssuer {
    /// Create a token issuer
    pub fn new(
        codec: Arc<dyn AccessTokenCodec>,
        generator: Arc<dyn OpaqueTokenGenerator>,
        refresh_tokens: Arc<dyn RefreshTokenRepository>,
        settings: TokenSettings,
    ) -> Self {
        Self {
            codec,
            generator,
            refresh_tokens,
            settings,
        }
    }

    /// Mint a signed access token without touching the refresh store
    pub fn access_token(&self, user_id: UserId) -> Result<String> {
        let claims = AccessClaims::new(
            user_id,
            self.settings.issuer.clone(),
            self.settings.access_ttl_secs,
        );
        self.codec.encode(&claims)
    }

    /// Issue a fresh pair, replacing every earlier refresh token of the user
    pub async fn issue(&self, user: &User) -> Result<TokenPair> {
        let access_token = self.access_token(user.id)?;
        let row = self.refresh_row(user.id);
        let refresh_token = row.token.clone();

        let replaced = self.refresh_tokens.replace_for_user(row).await?;
        debug!(user_id = %user.id, replaced, "Issued token pair");

        Ok(self.pair(access_token, refresh_token))
    }

    /// Issue a pair in exchange for `presented`
    ///
    /// Returns `None` when `presented` was consumed by someone else first.
    pub async fn rotate(&self, presented: &str, user: &User) -> Result<Option<TokenPair>> {
        let access_token = self.access_token(user.id)?;
        let row = self.refresh_row(user.id);
        let refresh_token = row.token.clone();

        if !self.refresh_tokens.rotate(presented, row).await? {
            return Ok(None);
        }
        Ok(Some(self.pair(access_token, refresh_token)))
    }

    /// Delete every refresh token of a user
    pub async fn revoke_refresh_tokens(&self, user_id: &UserId) -> Result<usize> {
        self.refresh_tokens.delete_for_user(user_id).await
    }

    fn refresh_row(&self, user_id: UserId) -> RefreshToken {
        let ttl = Duration::seconds(i64::try_from(self.settings.refresh_ttl_secs).unwrap_or(i64::MAX));
        RefreshToken::new(user_id, self.generator.generate(), ttl)
    }

    fn pair(&self, access_token: String, refresh_token: String) -> TokenPair {
        TokenPair::bearer(access_token, refresh_token, self.settings.access_ttl_secs)
    }
}
