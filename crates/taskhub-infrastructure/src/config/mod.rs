//! Configuration
//!
//! Sources are layered with Figment: compiled defaults, then a TOML file,
//! then `TASKHUB__`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::*;
