//! Configuration types module

pub mod app;
pub mod auth;
pub mod logging;
pub mod seed;
pub mod server;

// Re-export main types
pub use app::AppConfig;
pub use auth::{AuthConfig, JwtConfig, PasswordAlgorithm};
pub use logging::LoggingConfig;
pub use seed::SeedConfig;
pub use server::ServerConfig;
