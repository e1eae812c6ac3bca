//! Seeding tests

use crate::test_utils::TEST_PASSWORD;
use std::sync::Arc;
use taskhub_domain::constants::*;
use taskhub_domain::ports::PasswordHasher;
use taskhub_domain::repositories::UserRepository;
use taskhub_infrastructure::config::PasswordAlgorithm;
use taskhub_infrastructure::crypto::PasswordService;
use taskhub_infrastructure::seed::{permission_table, seed_demo_users};
use taskhub_providers::users::InMemoryUserRepository;

fn stores() -> (Arc<dyn UserRepository>, Arc<dyn PasswordHasher>) {
    (
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(PasswordService::with_algorithm(PasswordAlgorithm::Bcrypt, 4)),
    )
}

#[test]
fn test_permission_table_has_three_roles() {
    let table = permission_table();
    let names: Vec<&str> = table.roles().map(|r| r.name.as_str()).collect();

    assert_eq!(names.len(), 3);
    assert!(table.contains_role(ROLE_ADMIN));
    assert!(table.contains_role(ROLE_PROJECT_MANAGER));
    assert!(table.contains_role(ROLE_TEAM_MEMBER));
    assert_eq!(table.permissions().len(), ALL_PERMISSIONS.len());
}

#[tokio::test]
async fn test_seed_creates_demo_accounts_with_roles() {
    let (users, hasher) = stores();

    let created = seed_demo_users(&users, &hasher, TEST_PASSWORD).await.unwrap();
    assert_eq!(created, 3);

    let admin = users.find_by_email("admin@example.com").await.unwrap().unwrap();
    assert!(admin.has_role(ROLE_ADMIN));
    assert!(hasher.verify_password(TEST_PASSWORD, &admin.password_hash).unwrap());

    let pm = users.find_by_email("pm@example.com").await.unwrap().unwrap();
    assert!(pm.has_role(ROLE_PROJECT_MANAGER));

    let team = users.find_by_email("team@example.com").await.unwrap().unwrap();
    assert!(team.has_role(ROLE_TEAM_MEMBER));
}

#[tokio::test]
async fn test_seed_is_idempotent() {
    let (users, hasher) = stores();

    seed_demo_users(&users, &hasher, TEST_PASSWORD).await.unwrap();
    let second = seed_demo_users(&users, &hasher, TEST_PASSWORD).await.unwrap();

    assert_eq!(second, 0);
    assert_eq!(users.count().await.unwrap(), 3);
}
