//! Composition root
//!
//! Wires configuration, crypto adapters and in-memory providers into the
//! application services. The HTTP layer only ever sees [`AppContext`].

pub mod bootstrap;

pub use bootstrap::*;
