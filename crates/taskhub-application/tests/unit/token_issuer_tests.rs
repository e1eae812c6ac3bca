//! Token issuer tests

use crate::test_utils::TestContext;
use taskhub_domain::constants::{ROLE_TEAM_MEMBER, TOKEN_TYPE_BEARER};
use taskhub_domain::error::Error;
use taskhub_domain::repositories::RefreshTokenRepository;

#[tokio::test]
async fn test_issue_returns_bearer_pair() {
    let ctx = TestContext::new();
    let user = ctx.seed_user("ann@example.com", ROLE_TEAM_MEMBER).await;

    let pair = ctx.issuer.issue(&user).await.unwrap();

    assert_eq!(pair.token_type, TOKEN_TYPE_BEARER);
    assert_eq!(pair.expires_in, 3600);
    assert!(!pair.access_token.is_empty());
    assert_eq!(ctx.refresh_tokens.count_for_user(&user.id).await.unwrap(), 1);
}

#[tokio::test]
async fn test_second_issue_invalidates_first_refresh_token() {
    let ctx = TestContext::new();
    let user = ctx.seed_user("ann@example.com", ROLE_TEAM_MEMBER).await;

    let first = ctx.issuer.issue(&user).await.unwrap();
    let second = ctx.issuer.issue(&user).await.unwrap();
    assert_ne!(first.refresh_token, second.refresh_token);
    assert_eq!(ctx.refresh_tokens.count_for_user(&user.id).await.unwrap(), 1);

    let err = ctx.refresher.refresh(&first.refresh_token).await.unwrap_err();
    assert!(matches!(err, Error::RefreshTokenNotFound));
}

#[tokio::test]
async fn test_issued_access_token_authenticates() {
    let ctx = TestContext::new();
    let user = ctx.seed_user("ann@example.com", ROLE_TEAM_MEMBER).await;

    let pair = ctx.issuer.issue(&user).await.unwrap();
    let session = ctx
        .sessions
        .authenticate(Some(&pair.access_token))
        .await
        .unwrap();

    assert_eq!(session.user.id, user.id);
    assert_eq!(session.claims.iss, "taskhub");
}

#[tokio::test]
async fn test_revoke_refresh_tokens() {
    let ctx = TestContext::new();
    let user = ctx.seed_user("ann@example.com", ROLE_TEAM_MEMBER).await;
    ctx.issuer.issue(&user).await.unwrap();

    assert_eq!(ctx.issuer.revoke_refresh_tokens(&user.id).await.unwrap(), 1);
    assert_eq!(ctx.refresh_tokens.count_for_user(&user.id).await.unwrap(), 0);
}
