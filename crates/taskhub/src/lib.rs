//! # TaskHub
//!
//! Authentication and authorization core for a task management backend:
//! JWT access tokens, single-use refresh token rotation and a live
//! role/permission gate, served over a small JSON HTTP API.
//!
//! ## Example
//!
//! ```ignore
//! use taskhub::infrastructure::{config::ConfigBuilder, init_app};
//!
//! let config = ConfigBuilder::new().with_jwt_secret(secret).build();
//! let context = init_app(config).await?;
//! let outcome = context.auth().login(request).await?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - entities, value objects, errors and port traits
//! - `application` - token issuer, session validator, refresh coordinator,
//!   authorization gate and the use cases built on them
//! - `infrastructure` - configuration, logging, crypto, seeding, DI
//! - `server` - Rocket routes, guards and catchers

/// Domain layer - core types and contracts
pub mod domain {
    pub use taskhub_domain::*;
}

/// Application layer - auth core and use cases
pub mod application {
    pub use taskhub_application::*;
}

/// Infrastructure layer - configuration, crypto and DI
pub mod infrastructure {
    pub use taskhub_infrastructure::*;
}

/// Server layer - HTTP surface
pub mod server {
    pub use taskhub_server::*;
}

pub use taskhub_server::run;
