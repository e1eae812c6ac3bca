//! Access token codec tests

use crate::test_utils::TEST_SECRET;
use chrono::{Duration, Utc};
use taskhub_domain::entities::UserId;
use taskhub_domain::error::Error;
use taskhub_domain::ports::AccessTokenCodec;
use taskhub_domain::value_objects::AccessClaims;
use taskhub_infrastructure::crypto::JwtCodec;

const ISSUER: &str = "taskhub";

fn codec() -> JwtCodec {
    JwtCodec::new(TEST_SECRET, ISSUER)
}

#[test]
fn test_encode_then_decode_preserves_claims() {
    let user_id = UserId::new();
    let claims = AccessClaims::new(user_id, ISSUER, 60);

    let token = codec().encode(&claims).unwrap();
    let decoded = codec().decode(&token).unwrap();

    assert_eq!(decoded, claims);
    assert_eq!(decoded.user_id().unwrap(), user_id);
}

#[test]
fn test_expired_token_reports_expired() {
    let issued = Utc::now() - Duration::seconds(120);
    let claims = AccessClaims::issued_at(UserId::new(), ISSUER, issued, 60);

    let token = codec().encode(&claims).unwrap();

    assert!(matches!(codec().decode(&token), Err(Error::TokenExpired)));
}

#[test]
fn test_wrong_secret_is_invalid() {
    let claims = AccessClaims::new(UserId::new(), ISSUER, 60);
    let token = JwtCodec::new("another-secret-that-is-also-32-bytes!!", ISSUER)
        .encode(&claims)
        .unwrap();

    assert!(matches!(codec().decode(&token), Err(Error::TokenInvalid)));
}

#[test]
fn test_expired_token_with_wrong_secret_is_invalid_not_expired() {
    let issued = Utc::now() - Duration::seconds(120);
    let claims = AccessClaims::issued_at(UserId::new(), ISSUER, issued, 60);
    let token = JwtCodec::new("another-secret-that-is-also-32-bytes!!", ISSUER)
        .encode(&claims)
        .unwrap();

    assert!(matches!(codec().decode(&token), Err(Error::TokenInvalid)));
}

#[test]
fn test_wrong_issuer_is_invalid() {
    let claims = AccessClaims::new(UserId::new(), "someone-else", 60);
    let token = codec().encode(&claims).unwrap();

    assert!(matches!(codec().decode(&token), Err(Error::TokenInvalid)));
}

#[test]
fn test_tampered_payload_is_invalid() {
    let claims = AccessClaims::new(UserId::new(), ISSUER, 60);
    let token = codec().encode(&claims).unwrap();

    let mut parts: Vec<String> = token.split('.').map(str::to_string).collect();
    let forged = AccessClaims::new(UserId::new(), ISSUER, 60);
    let forged_token = codec().encode(&forged).unwrap();
    parts[1] = forged_token.split('.').nth(1).unwrap().to_string();
    // signature no longer matches the swapped payload
    let tampered = parts.join(".");

    assert!(matches!(codec().decode(&tampered), Err(Error::TokenInvalid)));
}

#[test]
fn test_garbage_is_invalid() {
    for token in ["", "not-a-jwt", "a.b.c"] {
        assert!(matches!(codec().decode(token), Err(Error::TokenInvalid)));
    }
}
