//! Refresh token store implementations

/// In-memory refresh token repository
pub mod in_memory;

pub use in_memory::InMemoryRefreshTokenRepository;
