//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the application and domain
//! layers.
//!
//! ## Module Categories
//!
//! ### Security & Authentication
//! | Module | Description |
//! |--------|-------------|
//! | [`crypto`] | Argon2/bcrypt password hashing, HS256 JWT codec, opaque tokens |
//! | [`seed`] | Permission table and demo accounts |
//!
//! ### Configuration & Composition
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-layered TOML + environment configuration |
//! | [`di`] | Composition root wiring providers into use cases |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Runtime
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`maintenance`] | Background purge of expired refresh tokens |

pub mod config;
pub mod constants;
pub mod crypto;
pub mod di;
pub mod error_ext;
pub mod logging;
pub mod maintenance;
pub mod seed;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader};
pub use di::{AppContext, init_app};
pub use error_ext::ErrorContext;
