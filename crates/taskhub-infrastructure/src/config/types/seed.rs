//! Seeding configuration types

use crate::constants::SEED_DEFAULT_PASSWORD;
use serde::{Deserialize, Serialize};

/// Startup seeding
#[derive(Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Create the admin/pm/team demo accounts when absent
    pub demo_users: bool,

    /// Password for the demo accounts
    pub password: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            demo_users: false,
            password: SEED_DEFAULT_PASSWORD.to_string(),
        }
    }
}

impl std::fmt::Debug for SeedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedConfig")
            .field("demo_users", &self.demo_users)
            .field("password", &"<redacted>")
            .finish()
    }
}
