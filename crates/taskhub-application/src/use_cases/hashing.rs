//! Password hashing is CPU-bound; run it on the blocking pool.

use std::sync::Arc;
use taskhub_domain::error::{Error, Result};
use taskhub_domain::ports::PasswordHasher;

pub(crate) async fn hash(hasher: &Arc<dyn PasswordHasher>, password: String) -> Result<String> {
    let hasher = Arc::clone(hasher);
    tokio::task::spawn_blocking(move || hasher.hash_password(&password))
        .await
        .map_err(|e| Error::internal(format!("Password hashing task failed: {e}")))?
}

pub(crate) async fn verify(
    hasher: &Arc<dyn PasswordHasher>,
    password: String,
    hash: String,
) -> Result<bool> {
    let hasher = Arc::clone(hasher);
    tokio::task::spawn_blocking(move || hasher.verify_password(&password, &hash))
        .await
        .map_err(|e| Error::internal(format!("Password verification task failed: {e}")))?
}
