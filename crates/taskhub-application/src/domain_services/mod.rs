//! Auth core components
//!
//! Each component depends only on domain ports, so the same code runs
//! against the in-memory providers in tests and whatever the infrastructure
//! layer wires in production.

/// Role/permission authorization
pub mod authorization;
/// Refresh token exchange
pub mod refresh;
/// Access token verification
pub mod session;
/// Token pair issuance
pub mod token_issuer;

pub use authorization::{AuthorizationGate, authorize, authorize_any};
pub use refresh::RefreshCoordinator;
pub use session::{Session, SessionValidator};
pub use token_issuer::{TokenIssuer, TokenSettings};
