//! Tests for the in-memory refresh token store

use chrono::{Duration, Utc};
use std::sync::Arc;
use taskhub_domain::repositories::RefreshTokenRepository;
use taskhub_domain::{RefreshToken, UserId};
use taskhub_providers::refresh_tokens::InMemoryRefreshTokenRepository;

fn row(user_id: UserId, value: &str) -> RefreshToken {
    RefreshToken::new(user_id, value, Duration::days(14))
}

#[tokio::test]
async fn test_replace_keeps_single_row_per_user() {
    let repo = InMemoryRefreshTokenRepository::new();
    let user = UserId::new();

    assert_eq!(repo.replace_for_user(row(user, "r1")).await.unwrap(), 0);
    assert_eq!(repo.replace_for_user(row(user, "r2")).await.unwrap(), 1);

    assert_eq!(repo.count_for_user(&user).await.unwrap(), 1);
    assert!(repo.find_by_token("r1").await.unwrap().is_none());
    assert!(repo.find_by_token("r2").await.unwrap().is_some());
}

#[tokio::test]
async fn test_replace_does_not_touch_other_users() {
    let repo = InMemoryRefreshTokenRepository::new();
    let ann = UserId::new();
    let bob = UserId::new();

    repo.replace_for_user(row(ann, "ann-1")).await.unwrap();
    repo.replace_for_user(row(bob, "bob-1")).await.unwrap();
    repo.replace_for_user(row(ann, "ann-2")).await.unwrap();

    assert!(repo.find_by_token("bob-1").await.unwrap().is_some());
    assert_eq!(repo.len().await, 2);
}

#[tokio::test]
async fn test_rotate_swaps_presented_token() {
    let repo = InMemoryRefreshTokenRepository::new();
    let user = UserId::new();
    repo.replace_for_user(row(user, "r1")).await.unwrap();

    assert!(repo.rotate("r1", row(user, "r2")).await.unwrap());
    assert!(repo.find_by_token("r1").await.unwrap().is_none());
    assert_eq!(repo.find_by_token("r2").await.unwrap().unwrap().user_id, user);

    // r1 is spent
    assert!(!repo.rotate("r1", row(user, "r3")).await.unwrap());
    assert!(repo.find_by_token("r3").await.unwrap().is_none());
}

#[tokio::test]
async fn test_rotate_rejects_token_of_another_user() {
    let repo = InMemoryRefreshTokenRepository::new();
    let ann = UserId::new();
    let bob = UserId::new();
    repo.replace_for_user(row(ann, "ann-1")).await.unwrap();

    assert!(!repo.rotate("ann-1", row(bob, "bob-1")).await.unwrap());
    assert!(repo.find_by_token("ann-1").await.unwrap().is_some());
}

#[tokio::test]
async fn test_concurrent_rotation_has_single_winner() {
    let repo = Arc::new(InMemoryRefreshTokenRepository::new());
    let user = UserId::new();
    repo.replace_for_user(row(user, "r1")).await.unwrap();

    let attempts = (0..8).map(|i| {
        let repo = repo.clone();
        tokio::spawn(async move { repo.rotate("r1", row(user, &format!("next-{i}"))).await })
    });
    let results = futures::future::join_all(attempts).await;
    let winners = results
        .into_iter()
        .map(|r| r.unwrap().unwrap())
        .filter(|won| *won)
        .count();

    assert_eq!(winners, 1);
    assert_eq!(repo.count_for_user(&user).await.unwrap(), 1);
}

#[tokio::test]
async fn test_delete_by_token_and_for_user() {
    let repo = InMemoryRefreshTokenRepository::new();
    let user = UserId::new();
    repo.replace_for_user(row(user, "r1")).await.unwrap();

    assert!(repo.delete_by_token("r1").await.unwrap());
    assert!(!repo.delete_by_token("r1").await.unwrap());
    assert_eq!(repo.count_for_user(&user).await.unwrap(), 0);

    repo.replace_for_user(row(user, "r2")).await.unwrap();
    assert_eq!(repo.delete_for_user(&user).await.unwrap(), 1);
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn test_purge_expired_removes_only_expired_rows() {
    let repo = InMemoryRefreshTokenRepository::new();
    let stale = UserId::new();
    let live = UserId::new();

    repo.replace_for_user(RefreshToken::new(stale, "old", Duration::seconds(-1)))
        .await
        .unwrap();
    repo.replace_for_user(row(live, "fresh")).await.unwrap();

    assert_eq!(repo.purge_expired(Utc::now()).await.unwrap(), 1);
    assert!(repo.find_by_token("old").await.unwrap().is_none());
    assert!(repo.find_by_token("fresh").await.unwrap().is_some());
    assert_eq!(repo.count_for_user(&stale).await.unwrap(), 0);
}
