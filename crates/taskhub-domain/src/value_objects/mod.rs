//! Domain Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Identity`] | Resolved user id and live role set for one request |
//! | [`AuthorizationDecision`] | Allow / Deny outcome of the authorization gate |
//! | [`AccessClaims`] | Payload signed into an access token |
//! | [`TokenPair`] | Access + refresh token handed to a client |

/// Request identity and authorization outcome
pub mod identity;
/// Token payloads
pub mod token;

pub use identity::{AuthorizationDecision, Identity};
pub use token::{AccessClaims, TokenPair};
