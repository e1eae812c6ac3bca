//! Application Layer - TaskHub
//!
//! Orchestrates the authentication and authorization session lifecycle on
//! top of the domain contracts.
//!
//! ## Architecture
//!
//! The application layer:
//! - Implements the auth core components (issuer, validator, refresh
//!   coordinator, authorization gate)
//! - Composes them into use cases consumed by the HTTP surface
//! - Validates request payloads before any state change
//! - Has no dependencies on infrastructure or web frameworks
//!
//! ## Components
//!
//! | Component | Responsibility |
//! |-----------|----------------|
//! | [`TokenIssuer`] | Mints access tokens and stores the single live refresh token |
//! | [`SessionValidator`] | Verifies access tokens and resolves the live identity |
//! | [`RefreshCoordinator`] | Exchanges a refresh token for a new pair, rotating atomically |
//! | [`AuthorizationGate`] | Allow/Deny over role set and permission table |
//!
//! ## Use Cases
//!
//! - [`AuthService`]: register, login, logout, me, refresh
//! - [`UserAdminService`]: user management gated by `manage users`
//! - [`DashboardService`]: aggregate counts for authenticated users

pub mod domain_services;
pub mod dto;
pub mod use_cases;

pub use domain_services::*;
pub use dto::*;
pub use use_cases::*;
