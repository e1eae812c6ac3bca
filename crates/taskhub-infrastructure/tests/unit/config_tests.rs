//! Configuration loading and validation tests

use crate::test_utils::{TEST_SECRET, test_config};
use std::io::Write;
use taskhub_domain::error::Error;
use taskhub_infrastructure::config::loader::validate_app_config;
use taskhub_infrastructure::config::{AppConfig, ConfigBuilder, ConfigLoader, PasswordAlgorithm};
use tempfile::NamedTempFile;

fn write_toml(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn assert_config_error(config: &AppConfig) {
    match validate_app_config(config) {
        Err(Error::Configuration { .. }) => {}
        other => panic!("expected configuration error, got {other:?}"),
    }
}

#[test]
fn test_defaults_match_documented_values() {
    let config = AppConfig::default();

    assert_eq!(config.server.port, 8000);
    assert_eq!(config.auth.jwt.issuer, "taskhub");
    assert_eq!(config.auth.jwt.expiration_secs, 3600);
    assert_eq!(config.auth.jwt.refresh_expiration_secs, 14 * 24 * 3600);
    assert_eq!(config.auth.password_algorithm, PasswordAlgorithm::Argon2);
    assert!(config.auth.logout_revokes_refresh_tokens);
    assert!(!config.seed.demo_users);
}

#[test]
fn test_default_config_is_rejected_without_secret() {
    assert_config_error(&AppConfig::default());
}

#[test]
fn test_valid_config_passes() {
    assert!(validate_app_config(&test_config()).is_ok());
}

#[test]
fn test_short_secret_is_rejected() {
    let config = ConfigBuilder::new().with_jwt_secret("too-short").build();
    assert_config_error(&config);
}

#[test]
fn test_zero_ttl_is_rejected() {
    let config = ConfigBuilder::new()
        .with_jwt_secret(TEST_SECRET)
        .with_token_ttls(0, 60)
        .build();
    assert_config_error(&config);

    let config = ConfigBuilder::new()
        .with_jwt_secret(TEST_SECRET)
        .with_token_ttls(60, 0)
        .build();
    assert_config_error(&config);
}

#[test]
fn test_bcrypt_cost_out_of_range_is_rejected() {
    let config = ConfigBuilder::new()
        .with_jwt_secret(TEST_SECRET)
        .with_password_algorithm(PasswordAlgorithm::Bcrypt, 3)
        .build();
    assert_config_error(&config);
}

#[test]
fn test_unknown_log_level_is_rejected() {
    let mut config = test_config();
    config.logging.level = "loud".to_string();
    assert_config_error(&config);
}

#[test]
fn test_port_zero_is_rejected() {
    let mut config = test_config();
    config.server.port = 0;
    assert_config_error(&config);
}

#[test]
fn test_load_from_toml_file() {
    let file = write_toml(&format!(
        r#"
[server]
port = 9100

[auth]
password_algorithm = "bcrypt"
bcrypt_cost = 10

[auth.jwt]
secret = "{TEST_SECRET}"
expiration_secs = 120
"#
    ));

    let config = ConfigLoader::new()
        .with_config_path(file.path())
        .with_env_prefix("TASKHUB_TEST_FILE_ONLY")
        .load()
        .unwrap();

    assert_eq!(config.server.port, 9100);
    assert_eq!(config.auth.password_algorithm, PasswordAlgorithm::Bcrypt);
    assert_eq!(config.auth.bcrypt_cost, 10);
    assert_eq!(config.auth.jwt.expiration_secs, 120);
    // untouched keys keep their defaults
    assert_eq!(config.auth.jwt.issuer, "taskhub");
    assert_eq!(config.auth.jwt.refresh_expiration_secs, 14 * 24 * 3600);
}

#[test]
fn test_load_missing_file_falls_back_to_defaults_and_fails_validation() {
    let result = ConfigLoader::new()
        .with_config_path("/nonexistent/taskhub.toml")
        .with_env_prefix("TASKHUB_TEST_MISSING")
        .load();

    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_malformed_toml_is_configuration_error() {
    let file = write_toml("[auth.jwt\nsecret = ");

    let result = ConfigLoader::new()
        .with_config_path(file.path())
        .with_env_prefix("TASKHUB_TEST_MALFORMED")
        .load();

    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
#[ignore = "mutates process environment"]
fn test_env_overrides_file() {
    let file = write_toml(&format!(
        "[auth.jwt]\nsecret = \"{TEST_SECRET}\"\nexpiration_secs = 120\n"
    ));

    // SAFETY: ignored by default; run single-threaded
    unsafe {
        std::env::set_var("TASKHUB_ENVTEST__AUTH__JWT__EXPIRATION_SECS", "300");
        std::env::set_var("TASKHUB_ENVTEST__SERVER__PORT", "9200");
    }

    let config = ConfigLoader::new()
        .with_config_path(file.path())
        .with_env_prefix("TASKHUB_ENVTEST")
        .load();

    unsafe {
        std::env::remove_var("TASKHUB_ENVTEST__AUTH__JWT__EXPIRATION_SECS");
        std::env::remove_var("TASKHUB_ENVTEST__SERVER__PORT");
    }

    let config = config.unwrap();
    assert_eq!(config.auth.jwt.expiration_secs, 300);
    assert_eq!(config.server.port, 9200);
}

#[test]
fn test_save_and_reload_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("taskhub.toml");
    let loader = ConfigLoader::new()
        .with_config_path(&path)
        .with_env_prefix("TASKHUB_TEST_SAVE");

    let mut original = test_config();
    original.server.port = 8123;
    loader.save_to_file(&original, &path).unwrap();

    let reloaded = loader.load().unwrap();
    assert_eq!(reloaded.server.port, 8123);
    assert_eq!(reloaded.auth.jwt.secret, TEST_SECRET);
}

#[test]
fn test_debug_output_redacts_secrets() {
    let config = test_config();
    let rendered = format!("{:?}", config);

    assert!(!rendered.contains(TEST_SECRET));
    assert!(rendered.contains("<redacted>"));
}
