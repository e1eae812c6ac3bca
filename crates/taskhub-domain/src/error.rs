//! Error handling types

use std::collections::BTreeMap;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Field-keyed validation messages, e.g. `{"email": ["The email has already been taken."]}`
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Main error type for TaskHub
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed or missing input, rejected before any state change
    #[error("Validation error: {message}")]
    Validation {
        /// Summary message
        message: String,
        /// Per-field messages
        errors: FieldErrors,
    },

    /// Unknown email or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Access token presented after its expiry
    #[error("Token expired")]
    TokenExpired,

    /// Access token failed signature or format verification, or was revoked
    #[error("Token invalid")]
    TokenInvalid,

    /// No access token presented
    #[error("Token absent")]
    TokenMissing,

    /// Refresh token unknown, already rotated or revoked
    #[error("Refresh token not found")]
    RefreshTokenNotFound,

    /// Refresh token past its stored expiry
    #[error("Refresh token expired")]
    RefreshTokenExpired,

    /// Identity lacks the permission required by the action
    #[error("Insufficient permissions: {permission}")]
    InsufficientPermission {
        /// Permission (or `|`-joined alternatives) that was required
        permission: String,
    },

    /// Resolved identity no longer exists in the credential store
    #[error("User not found")]
    UserNotFound,

    /// Email already belongs to another user
    #[error("Email already registered: {email}")]
    EmailTaken {
        /// Conflicting email
        email: String,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Storage-related error
    #[error("Database error: {message}")]
    Database {
        /// Description of the database error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure operation error (hashing, signing, I/O)
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Request and auth error creation methods
impl Error {
    /// Create a validation error with a single field message
    pub fn validation_field<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.into(), vec![message.into()]);
        Self::Validation {
            message: "Validation error".to_string(),
            errors,
        }
    }

    /// Create a validation error from collected field messages
    pub fn validation(errors: FieldErrors) -> Self {
        Self::Validation {
            message: "Validation error".to_string(),
            errors,
        }
    }

    /// Create an insufficient permission error
    pub fn insufficient_permission<S: Into<String>>(permission: S) -> Self {
        Self::InsufficientPermission {
            permission: permission.into(),
        }
    }

    /// Whether this error is a client-side auth/validation outcome rather than a fault
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. }
                | Self::InvalidCredentials
                | Self::TokenExpired
                | Self::TokenInvalid
                | Self::TokenMissing
                | Self::RefreshTokenNotFound
                | Self::RefreshTokenExpired
                | Self::InsufficientPermission { .. }
                | Self::UserNotFound
                | Self::EmailTaken { .. }
        )
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Database error creation methods
impl Error {
    /// Create a database error
    pub fn database<S: Into<String>>(message: S) -> Self {
        Self::Database {
            message: message.into(),
            source: None,
        }
    }

    /// Create a database error with source
    pub fn database_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Database {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Internal and infrastructure error creation methods
impl Error {
    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }

    /// Create an infrastructure error with source
    pub fn infrastructure_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
