use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info};
use crate::state::AppState;

const PURGE_INTERVAL_SECS: u64 = 3600;

/// Periodically drops expired admin sessions so the table does not grow
/// unbounded. Stale rows are also rejected at validation time; this loop is
/// only housekeeping.
pub async fn start_session_purge(state: Arc<AppState>) {
    info!("Starting expired-session purge worker...");

    loop {
        match state.session_repo.delete_expired().await {
            Ok(0) => {}
            Ok(purged) => info!("Purged {} expired admin sessions", purged),
            Err(e) => error!("Failed to purge expired sessions: {:?}", e),
        }
        sleep(Duration::from_secs(PURGE_INTERVAL_SECS)).await;
    }
}
