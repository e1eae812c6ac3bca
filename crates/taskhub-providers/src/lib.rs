//! # TaskHub - Provider Implementations
//!
//! Implementations of the storage and runtime ports defined in
//! `taskhub-domain`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Credential store | `UserRepository` | InMemory |
//! | Refresh tokens | `RefreshTokenRepository` | InMemory |
//! | Revocation list | `TokenRevocationList` | Moka |
//! | Dashboard | `DashboardSource` | Null |
//!
//! ## Usage
//!
//! ```ignore
//! use taskhub_providers::users::InMemoryUserRepository;
//! use taskhub_providers::refresh_tokens::InMemoryRefreshTokenRepository;
//! ```

pub use taskhub_domain::error::{Error, Result};

/// Dashboard source implementations
pub mod dashboard;

/// Refresh token store implementations
pub mod refresh_tokens;

/// Access token revocation list implementations
#[cfg(feature = "revocation-moka")]
pub mod revocation;

/// Credential store implementations
pub mod users;
