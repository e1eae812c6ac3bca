//! Repository Interfaces
//!
//! Storage contracts for the two persisted entities. Implementations must
//! make every method atomic with respect to the others.
//!
//! | Repository | Description |
//! |------------|-------------|
//! | [`UserRepository`] | Credential store: users, password hashes, role names |
//! | [`RefreshTokenRepository`] | Refresh token rows with single-live-token rotation |

/// Refresh token repository interface
pub mod refresh_token_repository;
/// User repository interface
pub mod user_repository;

pub use refresh_token_repository::RefreshTokenRepository;
pub use user_repository::UserRepository;
