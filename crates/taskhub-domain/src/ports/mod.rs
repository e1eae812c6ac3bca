//! Domain Port Interfaces
//!
//! Contracts the outer layers implement. High-level services in
//! `taskhub-application` depend only on these traits.
//!
//! ## Organization
//!
//! - **providers/** - Crypto primitives (password hashing, token codec, random tokens)
//! - **infrastructure/** - Runtime services (access token revocation, dashboard source)

/// Infrastructure service ports
pub mod infrastructure;
/// Provider ports
pub mod providers;

pub use infrastructure::{DashboardSource, DashboardSummary, TokenRevocationList};
pub use providers::{AccessTokenCodec, OpaqueTokenGenerator, PasswordHasher};
