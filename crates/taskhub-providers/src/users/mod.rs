//! Credential store implementations

/// In-memory user repository
pub mod in_memory;

pub use in_memory::InMemoryUserRepository;
