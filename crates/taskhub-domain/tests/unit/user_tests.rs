//! Unit tests for the user entity

use taskhub_domain::constants::ROLE_TEAM_MEMBER;
use taskhub_domain::{NewUser, UserId};

#[test]
fn test_new_user_materializes_with_role() {
    let user = NewUser::with_role("Ann", "a@x.com", "hash", ROLE_TEAM_MEMBER).into_user();

    assert_eq!(user.name, "Ann");
    assert!(user.has_role(ROLE_TEAM_MEMBER));
    assert_eq!(user.created_at, user.updated_at);
}

#[test]
fn test_password_hash_is_never_serialized() {
    let user = NewUser::with_role("Ann", "a@x.com", "$argon2id$secret", ROLE_TEAM_MEMBER)
        .into_user();
    let json = serde_json::to_string(&user).unwrap();

    assert!(!json.contains("argon2id"));
    assert!(!json.contains("password_hash"));
}

#[test]
fn test_identity_carries_roles() {
    let user = NewUser::with_role("Ann", "a@x.com", "hash", ROLE_TEAM_MEMBER).into_user();
    let identity = user.identity();

    assert_eq!(identity.user_id, user.id);
    assert!(identity.has_role(ROLE_TEAM_MEMBER));
}

#[test]
fn test_user_id_round_trips_through_string() {
    let id = UserId::new();
    let parsed: UserId = id.to_string().parse().unwrap();
    assert_eq!(parsed, id);
}
