//! Response messages returned by the HTTP surface

// ============================================================================
// SUCCESS
// ============================================================================

/// Registration succeeded
pub const MSG_USER_REGISTERED: &str = "User registered successfully";

/// Login succeeded
pub const MSG_LOGIN_SUCCESSFUL: &str = "Login successful";

/// Logout succeeded
pub const MSG_LOGGED_OUT: &str = "Successfully logged out";

/// Refresh succeeded
pub const MSG_TOKEN_REFRESHED: &str = "Token refreshed successfully";

/// Administrator created a user
pub const MSG_USER_CREATED: &str = "User created";

/// Administrator updated a user
pub const MSG_USER_UPDATED: &str = "User updated";

/// Administrator deleted a user
pub const MSG_USER_DELETED: &str = "User deleted";

// ============================================================================
// FAILURE
// ============================================================================

/// Request body failed validation
pub const MSG_VALIDATION_ERROR: &str = "Validation error";

/// Unknown email or wrong password
pub const MSG_INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Access token past its expiry
pub const MSG_TOKEN_EXPIRED: &str = "Token expired";

/// Access token failed verification or was revoked
pub const MSG_TOKEN_INVALID: &str = "Token invalid";

/// No bearer token presented
pub const MSG_TOKEN_ABSENT: &str = "Token absent";

/// Any refresh failure, whatever the internal reason
pub const MSG_TOKEN_NOT_REFRESHABLE: &str = "Token cannot be refreshed";

/// Permission check denied
pub const MSG_INSUFFICIENT_PERMISSIONS: &str = "Insufficient permissions";

/// Resolved user is gone
pub const MSG_USER_NOT_FOUND: &str = "User not found";

/// Registration failed on the server side
pub const MSG_REGISTRATION_FAILED: &str = "Registration failed";

/// Login failed on the server side
pub const MSG_TOKEN_NOT_CREATED: &str = "Could not create token";

/// Logout failed on the server side
pub const MSG_LOGOUT_FAILED: &str = "Failed to logout";

/// Generic server failure
pub const MSG_INTERNAL_ERROR: &str = "Internal server error";

/// 401 without a more specific reason
pub const MSG_UNAUTHORIZED: &str = "Unauthorized";

/// Malformed request
pub const MSG_BAD_REQUEST: &str = "Bad request";

/// Unknown route
pub const MSG_NOT_FOUND: &str = "Not found";

/// Key under which an undecodable request body is reported
pub const BODY_FIELD: &str = "body";

/// Message stored against `email` when it is already registered
pub const MSG_EMAIL_TAKEN: &str = "The email has already been taken.";

// ============================================================================
// HEADERS
// ============================================================================

/// Authentication scheme expected in the `Authorization` header
pub const BEARER_SCHEME: &str = "bearer";
