//! # TaskHub Domain
//!
//! Core types and contracts for the TaskHub authentication and authorization
//! core. This crate has no knowledge of HTTP, storage engines or crypto
//! libraries; it only defines what the other layers exchange.
//!
//! ## Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`entities`] | [`User`], [`PermissionTable`], [`RefreshToken`] |
//! | [`value_objects`] | [`Identity`], [`AccessClaims`], [`TokenPair`] |
//! | [`repositories`] | Credential store and refresh token store contracts |
//! | [`ports`] | Crypto, revocation and dashboard contracts |
//! | [`error`] | Domain [`Error`] taxonomy |

/// Domain constants (role names, permission names, token defaults)
pub mod constants;
/// Domain entities with identity
pub mod entities;
/// Error handling types
pub mod error;
/// Port interfaces implemented by outer layers
pub mod ports;
/// Repository interfaces
pub mod repositories;
/// Immutable value objects
pub mod value_objects;

pub use entities::{NewUser, PermissionTable, RefreshToken, Role, User, UserId};
pub use error::{Error, FieldErrors, Result};
pub use value_objects::{AccessClaims, AuthorizationDecision, Identity, TokenPair};
