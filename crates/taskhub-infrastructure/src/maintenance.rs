//! Background maintenance tasks

use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use taskhub_domain::repositories::RefreshTokenRepository;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Periodically delete expired refresh tokens
///
/// Returns `None` when `interval_secs` is 0. The first purge runs one full
/// interval after the call.
pub fn spawn_refresh_purge(
    refresh_tokens: Arc<dyn RefreshTokenRepository>,
    interval_secs: u64,
) -> Option<JoinHandle<()>> {
    if interval_secs == 0 {
        info!("Refresh token purge disabled");
        return None;
    }

    let period = Duration::from_secs(interval_secs);
    Some(tokio::spawn(async move {
        let mut ticker = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
        loop {
            ticker.tick().await;
            match refresh_tokens.purge_expired(Utc::now()).await {
                Ok(0) => debug!("No expired refresh tokens"),
                Ok(purged) => info!(purged, "Purged expired refresh tokens"),
                Err(e) => warn!(error = %e, "Refresh token purge failed"),
            }
        }
    }))
}
