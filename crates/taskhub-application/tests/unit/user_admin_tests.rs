//! User administration tests

use crate::test_utils::TestContext;
use taskhub_application::{CreateUserRequest, UpdateUserRequest};
use taskhub_domain::constants::{ROLE_ADMIN, ROLE_PROJECT_MANAGER, ROLE_TEAM_MEMBER};
use taskhub_domain::error::Error;
use taskhub_domain::repositories::{RefreshTokenRepository, UserRepository};
use taskhub_domain::UserId;

fn create_request(email: &str, role: &str) -> CreateUserRequest {
    CreateUserRequest {
        name: "New Person".to_string(),
        email: email.to_string(),
        password: "secret1".to_string(),
        role: role.to_string(),
    }
}

#[tokio::test]
async fn test_team_member_cannot_delete_users() {
    let ctx = TestContext::new();
    let member = ctx.seed_user("team@x.com", ROLE_TEAM_MEMBER).await;
    let victim = ctx.seed_user("victim@x.com", ROLE_TEAM_MEMBER).await;

    let err = ctx
        .admin
        .delete(&member.identity(), &victim.id)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InsufficientPermission { .. }));
    assert!(ctx.users.find_by_id(&victim.id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_permission_checked_before_validation() {
    let ctx = TestContext::new();
    let member = ctx.seed_user("team@x.com", ROLE_TEAM_MEMBER).await;

    let err = ctx
        .admin
        .create(&member.identity(), CreateUserRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InsufficientPermission { .. }));
}

#[tokio::test]
async fn test_admin_creates_user_with_role() {
    let ctx = TestContext::new();
    let admin = ctx.seed_user("admin@x.com", ROLE_ADMIN).await;

    let user = ctx
        .admin
        .create(&admin.identity(), create_request("pm@x.com", ROLE_PROJECT_MANAGER))
        .await
        .unwrap();

    assert!(user.has_role(ROLE_PROJECT_MANAGER));
    assert_eq!(ctx.admin.list(&admin.identity()).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_create_rejects_unknown_role() {
    let ctx = TestContext::new();
    let admin = ctx.seed_user("admin@x.com", ROLE_ADMIN).await;

    let err = ctx
        .admin
        .create(&admin.identity(), create_request("x@x.com", "Overlord"))
        .await
        .unwrap_err();
    match err {
        Error::Validation { errors, .. } => assert!(errors.contains_key("role")),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(ctx.users.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_update_syncs_role_and_fields() {
    let ctx = TestContext::new();
    let admin = ctx.seed_user("admin@x.com", ROLE_ADMIN).await;
    let target = ctx.seed_user("team@x.com", ROLE_TEAM_MEMBER).await;

    let updated = ctx
        .admin
        .update(
            &admin.identity(),
            &target.id,
            UpdateUserRequest {
                name: Some("Promoted".to_string()),
                role: Some(ROLE_PROJECT_MANAGER.to_string()),
                ..UpdateUserRequest::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Promoted");
    assert!(updated.has_role(ROLE_PROJECT_MANAGER));
    assert!(!updated.has_role(ROLE_TEAM_MEMBER));
    assert_eq!(updated.email, "team@x.com");
}

#[tokio::test]
async fn test_update_with_empty_password_keeps_current_one() {
    let ctx = TestContext::new();
    let admin = ctx.seed_user("admin@x.com", ROLE_ADMIN).await;
    let target = ctx.seed_user("team@x.com", ROLE_TEAM_MEMBER).await;

    let updated = ctx
        .admin
        .update(
            &admin.identity(),
            &target.id,
            UpdateUserRequest {
                name: Some("Renamed".to_string()),
                password: Some(String::new()),
                ..UpdateUserRequest::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.password_hash, target.password_hash);
}

#[tokio::test]
async fn test_update_with_short_password_is_rejected() {
    let ctx = TestContext::new();
    let admin = ctx.seed_user("admin@x.com", ROLE_ADMIN).await;
    let target = ctx.seed_user("team@x.com", ROLE_TEAM_MEMBER).await;

    let err = ctx
        .admin
        .update(
            &admin.identity(),
            &target.id,
            UpdateUserRequest {
                password: Some("abc".to_string()),
                ..UpdateUserRequest::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Validation { ref errors, .. } if errors.contains_key("password")));
}

#[tokio::test]
async fn test_update_rejects_email_of_another_user() {
    let ctx = TestContext::new();
    let admin = ctx.seed_user("admin@x.com", ROLE_ADMIN).await;
    let target = ctx.seed_user("team@x.com", ROLE_TEAM_MEMBER).await;

    let err = ctx
        .admin
        .update(
            &admin.identity(),
            &target.id,
            UpdateUserRequest {
                email: Some("admin@x.com".to_string()),
                ..UpdateUserRequest::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
}

#[tokio::test]
async fn test_update_unknown_user() {
    let ctx = TestContext::new();
    let admin = ctx.seed_user("admin@x.com", ROLE_ADMIN).await;

    let err = ctx
        .admin
        .update(&admin.identity(), &UserId::new(), UpdateUserRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::UserNotFound));
}

#[tokio::test]
async fn test_delete_removes_user_and_refresh_tokens() {
    let ctx = TestContext::new();
    let admin = ctx.seed_user("admin@x.com", ROLE_ADMIN).await;
    let target = ctx.seed_user("team@x.com", ROLE_TEAM_MEMBER).await;
    ctx.issuer.issue(&target).await.unwrap();

    ctx.admin.delete(&admin.identity(), &target.id).await.unwrap();

    assert!(ctx.users.find_by_id(&target.id).await.unwrap().is_none());
    assert_eq!(ctx.refresh_tokens.count_for_user(&target.id).await.unwrap(), 0);

    let err = ctx
        .admin
        .delete(&admin.identity(), &target.id)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::UserNotFound));
}
