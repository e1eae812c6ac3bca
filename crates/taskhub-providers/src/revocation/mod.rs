//! Access token revocation list implementations

/// Moka-backed revocation list
pub mod moka;

pub use self::moka::MokaRevocationList;
