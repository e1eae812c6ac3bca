//! Request and response payloads of the auth use cases

/// Validated request payloads
pub mod requests;
/// Response payloads
pub mod responses;
/// Validation error conversion
pub mod validation;

pub use requests::{
    CreateUserRequest, LoginRequest, RefreshRequest, RegisterRequest, UpdateUserRequest,
};
pub use responses::{AuthOutcome, UserProfile};
pub use validation::{field_errors, validate_request};
