//! HS256 access token codec

use crate::config::JwtConfig;
use crate::error_ext::ErrorContext;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use taskhub_domain::error::{Error, Result};
use taskhub_domain::ports::AccessTokenCodec;
use taskhub_domain::value_objects::AccessClaims;
use tracing::debug;

/// Signs and verifies access tokens with a shared secret
///
/// Verification uses zero leeway and requires the configured issuer. The
/// signature is checked before any claim, so a token only reports
/// `TokenExpired` when it was genuinely issued by this service.
#[derive(Clone)]
pub struct JwtCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl JwtCodec {
    /// Create a codec from a secret and issuer
    pub fn new(secret: &str, issuer: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_issuer(&[issuer]);
        validation.set_required_spec_claims(&["exp", "sub", "iss"]);

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Create a codec from the JWT configuration
    pub fn from_config(config: &JwtConfig) -> Self {
        Self::new(&config.secret, &config.issuer)
    }
}

impl AccessTokenCodec for JwtCodec {
    fn encode(&self, claims: &AccessClaims) -> Result<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .context("Token signing failed")
    }

    fn decode(&self, token: &str) -> Result<AccessClaims> {
        decode::<AccessClaims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => Error::TokenExpired,
                kind => {
                    debug!(reason = ?kind, "Access token rejected");
                    Error::TokenInvalid
                }
            })
    }
}
