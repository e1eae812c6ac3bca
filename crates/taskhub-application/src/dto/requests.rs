//! Request payloads
//!
//! Required fields default to an empty string when absent so that a missing
//! field and a blank one produce the same field message.

use serde::Deserialize;
use std::borrow::Cow;
use validator::{Validate, ValidateEmail, ValidationError};

/// Maximum length of names and emails
pub const MAX_FIELD_LENGTH: usize = 255;

/// Minimum password length at self-registration
pub const MIN_REGISTER_PASSWORD_LENGTH: usize = 8;

/// Minimum password length for administrator-created accounts
pub const MIN_ADMIN_PASSWORD_LENGTH: usize = 6;

/// Self-registration payload
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name
    #[serde(default)]
    #[validate(custom(function = "validate_name"))]
    pub name: String,
    /// Login email
    #[serde(default)]
    #[validate(custom(function = "validate_email_field"))]
    pub email: String,
    /// Clear-text password
    #[serde(default)]
    #[validate(
        custom(function = "validate_register_password"),
        must_match(
            other = "password_confirmation",
            message = "The password field confirmation does not match."
        )
    )]
    pub password: String,
    /// Must equal `password`
    #[serde(default)]
    pub password_confirmation: String,
}

/// Login payload
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login email
    #[serde(default)]
    #[validate(custom(function = "validate_email_field"))]
    pub email: String,
    /// Clear-text password
    #[serde(default)]
    #[validate(custom(function = "validate_password_present"))]
    pub password: String,
}

/// Refresh payload
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RefreshRequest {
    /// Refresh token previously issued
    #[serde(default)]
    #[validate(custom(function = "validate_refresh_token_present"))]
    pub refresh_token: String,
}

/// Administrator-created account
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// Display name
    #[serde(default)]
    #[validate(custom(function = "validate_name"))]
    pub name: String,
    /// Login email
    #[serde(default)]
    #[validate(custom(function = "validate_email_field"))]
    pub email: String,
    /// Clear-text password
    #[serde(default)]
    #[validate(custom(function = "validate_admin_password"))]
    pub password: String,
    /// Role name; must exist in the permission table
    #[serde(default)]
    #[validate(custom(function = "validate_role_present"))]
    pub role: String,
}

/// Partial account update; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    /// New display name
    #[validate(custom(function = "validate_name"))]
    pub name: Option<String>,
    /// New login email
    #[validate(custom(function = "validate_email_field"))]
    pub email: Option<String>,
    /// New clear-text password; empty leaves the current one
    #[validate(custom(function = "validate_admin_password"))]
    pub password: Option<String>,
    /// New profile photo reference
    pub profile_photo: Option<String>,
    /// Replacement role; the user's role set becomes exactly this role
    #[validate(custom(function = "validate_role_present"))]
    pub role: Option<String>,
}

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(field_error("required", "The name field is required."));
    }
    if name.chars().count() > MAX_FIELD_LENGTH {
        return Err(field_error(
            "max",
            "The name field must not be greater than 255 characters.",
        ));
    }
    Ok(())
}

fn validate_email_field(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(field_error("required", "The email field is required."));
    }
    if email.chars().count() > MAX_FIELD_LENGTH {
        return Err(field_error(
            "max",
            "The email field must not be greater than 255 characters.",
        ));
    }
    if !email.validate_email() {
        return Err(field_error(
            "email",
            "The email field must be a valid email address.",
        ));
    }
    Ok(())
}

fn validate_register_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(field_error("required", "The password field is required."));
    }
    if password.chars().count() < MIN_REGISTER_PASSWORD_LENGTH {
        return Err(field_error(
            "min",
            "The password field must be at least 8 characters.",
        ));
    }
    Ok(())
}

fn validate_admin_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(field_error("required", "The password field is required."));
    }
    if password.chars().count() < MIN_ADMIN_PASSWORD_LENGTH {
        return Err(field_error(
            "min",
            "The password field must be at least 6 characters.",
        ));
    }
    Ok(())
}

fn validate_password_present(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(field_error("required", "The password field is required."));
    }
    Ok(())
}

fn validate_refresh_token_present(token: &str) -> Result<(), ValidationError> {
    if token.trim().is_empty() {
        return Err(field_error(
            "required",
            "The refresh token field is required.",
        ));
    }
    Ok(())
}

fn validate_role_present(role: &str) -> Result<(), ValidationError> {
    if role.trim().is_empty() {
        return Err(field_error("required", "The role field is required."));
    }
    Ok(())
}
