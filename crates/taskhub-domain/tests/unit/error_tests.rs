//! Unit tests for domain error types

use taskhub_domain::Error;

#[test]
fn test_validation_field_error() {
    let error = Error::validation_field("email", "The email has already been taken.");
    match error {
        Error::Validation { message, errors } => {
            assert_eq!(message, "Validation error");
            assert_eq!(
                errors.get("email"),
                Some(&vec!["The email has already been taken.".to_string()])
            );
        }
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn test_insufficient_permission_error() {
    let error = Error::insufficient_permission("manage users");
    assert_eq!(error.to_string(), "Insufficient permissions: manage users");
    assert!(error.is_client_error());
}

#[test]
fn test_token_error_display() {
    assert_eq!(Error::TokenExpired.to_string(), "Token expired");
    assert_eq!(Error::TokenInvalid.to_string(), "Token invalid");
    assert_eq!(Error::TokenMissing.to_string(), "Token absent");
}

#[test]
fn test_infrastructure_errors_are_not_client_errors() {
    assert!(!Error::internal("boom").is_client_error());
    assert!(!Error::database("locked").is_client_error());
    assert!(!Error::configuration("bad").is_client_error());
}

#[test]
fn test_infrastructure_error_with_source() {
    let io = std::io::Error::other("disk full");
    let error = Error::infrastructure_with_source("write failed", io);
    match error {
        Error::Infrastructure { message, source } => {
            assert_eq!(message, "write failed");
            assert!(source.is_some());
        }
        _ => panic!("Expected Infrastructure error"),
    }
}
