//! # TaskHub Server
//!
//! Rocket HTTP surface over the TaskHub auth core.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use taskhub_server::run;
//!
//! #[rocket::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     run(None).await
//! }
//! ```
//!
//! ## Endpoints
//!
//! | Path | Method | Guard |
//! |------|--------|-------|
//! | `/auth/register`, `/auth/login`, `/auth/refresh` | POST | – |
//! | `/auth/logout` | POST | bearer |
//! | `/auth/me`, `/user`, `/dashboard` | GET | bearer |
//! | `/users`, `/users/<id>` | GET, POST, PUT, DELETE | bearer + `manage users` |
//! | `/health` | GET | – |
//!
//! Every body is JSON with a `success` flag; failures also carry `message`
//! and, for validation failures, field-keyed `errors`.

pub mod catchers;
pub mod constants;
pub mod guards;
pub mod init;
pub mod response;
pub mod routes;

pub use init::{build_rocket, rocket_config, run};
